use std::sync::Arc;

use customer_reviews::{
    db::{self, DbConfig, DbPool},
    dto::{CreateCustomerRequest, CreateItemRequest, CreateReviewRequest},
    entities::{customer, item, review},
    AppServices,
};

/// Helper harness backed by a private in-memory SQLite database.
pub struct TestApp {
    pub db: Arc<DbPool>,
    pub services: AppServices,
}

#[allow(dead_code)]
impl TestApp {
    /// Construct a new test application with a freshly migrated schema.
    pub async fn new() -> Self {
        // One connection keeps every query on the same in-memory database.
        let config = DbConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };

        let pool = db::establish_connection_with_config(&config)
            .await
            .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db = Arc::new(pool);
        let services = AppServices::new(db.clone());

        Self { db, services }
    }

    pub async fn customer(&self, name: &str) -> customer::Model {
        self.services
            .customers
            .create_customer(CreateCustomerRequest {
                name: Some(name.to_string()),
            })
            .await
            .expect("create customer")
    }

    pub async fn item(&self, name: &str, price: f64) -> item::Model {
        self.services
            .items
            .create_item(CreateItemRequest {
                name: Some(name.to_string()),
                price: Some(price),
            })
            .await
            .expect("create item")
    }

    pub async fn review(&self, comment: &str, customer_id: i32, item_id: i32) -> review::Model {
        self.services
            .reviews
            .create_review(CreateReviewRequest {
                comment: Some(comment.to_string()),
                customer_id,
                item_id,
            })
            .await
            .expect("create review")
    }

    /// Ada reviews the Widget: "Great".
    pub async fn seed_scenario(&self) -> (customer::Model, item::Model, review::Model) {
        let ada = self.customer("Ada").await;
        let widget = self.item("Widget", 9.99).await;
        let great = self.review("Great", ada.id, widget.id).await;
        (ada, widget, great)
    }
}
