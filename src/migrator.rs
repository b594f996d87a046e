use sea_orm_migration::prelude::*;

/// Builds the deterministic name of a foreign-key constraint:
/// `fk_<table>_<column>_<referenced_table>`.
pub fn foreign_key_name(table: &str, column: &str, referenced_table: &str) -> String {
    format!("fk_{}_{}_{}", table, column, referenced_table)
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_review_tables::Migration)]
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    Price,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    Comment,
    CustomerId,
    ItemId,
}

fn customers_table() -> TableCreateStatement {
    Table::create()
        .table(Customers::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Customers::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Customers::Name).string().null())
        .to_owned()
}

fn items_table() -> TableCreateStatement {
    Table::create()
        .table(Items::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Items::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Items::Name).string().null())
        .col(ColumnDef::new(Items::Price).double().null())
        .to_owned()
}

fn reviews_table() -> TableCreateStatement {
    Table::create()
        .table(Reviews::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Reviews::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Reviews::Comment).string().not_null())
        .col(ColumnDef::new(Reviews::CustomerId).integer().not_null())
        .col(ColumnDef::new(Reviews::ItemId).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name(foreign_key_name("reviews", "customer_id", "customers"))
                .from(Reviews::Table, Reviews::CustomerId)
                .to(Customers::Table, Customers::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name(foreign_key_name("reviews", "item_id", "items"))
                .from(Reviews::Table, Reviews::ItemId)
                .to(Items::Table, Items::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

mod m20240101_000001_create_review_tables {

    use super::{customers_table, items_table, reviews_table, Customers, Items, Reviews};
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_review_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager.create_table(customers_table()).await?;
            manager.create_table(items_table()).await?;
            manager.create_table(reviews_table()).await?;

            // Relationship traversal is always by foreign key
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_reviews_customer_id")
                        .table(Reviews::Table)
                        .col(Reviews::CustomerId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_reviews_item_id")
                        .table(Reviews::Table)
                        .col(Reviews::ItemId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Reviews::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Items::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Customers::Table).to_owned())
                .await
        }
    }
}
