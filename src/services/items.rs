use crate::{
    aggregates::ItemReviews,
    db::DbPool,
    dto::{CreateItemRequest, UpdateItemRequest},
    entities::{customer, item, review},
    errors::ServiceError,
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder, Set};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Service for managing reviewable items
#[derive(Clone)]
pub struct ItemService {
    db_pool: Arc<DbPool>,
}

impl ItemService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn create_item(
        &self,
        request: CreateItemRequest,
    ) -> Result<item::Model, ServiceError> {
        request.validate()?;
        let db = &*self.db_pool;

        let model = item::ActiveModel {
            name: Set(request.name),
            price: Set(request.price),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(item_id = model.id, "Item created");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, item_id: i32) -> Result<Option<item::Model>, ServiceError> {
        let db = &*self.db_pool;
        Ok(item::Entity::find_by_id(item_id).one(db).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<item::Model>, ServiceError> {
        let db = &*self.db_pool;
        Ok(item::Entity::find()
            .order_by_asc(item::Column::Id)
            .all(db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        item_id: i32,
        request: UpdateItemRequest,
    ) -> Result<item::Model, ServiceError> {
        request.validate()?;
        let db = &*self.db_pool;

        let existing = item::Entity::find_by_id(item_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Item", item_id))?;

        let mut active = existing.clone().into_active_model();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(price) = request.price {
            active.price = Set(price);
        }
        if !active.is_changed() {
            return Ok(existing);
        }
        let updated = active.update(db).await?;

        info!(item_id, "Item updated");
        Ok(updated)
    }

    /// Deletes an item. Fails while any review still references it.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, item_id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;

        let result = item::Entity::delete_by_id(item_id)
            .exec(db)
            .await
            .map_err(|e| {
                let err = ServiceError::from(e);
                if err.is_referential() {
                    warn!(item_id, "Item still has reviews; delete refused");
                }
                err
            })?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Item", item_id));
        }

        info!(item_id, "Item deleted");
        Ok(())
    }

    /// Loads an item with its reviews and each review's customer
    #[instrument(skip(self))]
    pub async fn load_item(&self, item_id: i32) -> Result<ItemReviews, ServiceError> {
        let db = &*self.db_pool;

        let item = item::Entity::find_by_id(item_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Item", item_id))?;

        let rows = item
            .find_related(review::Entity)
            .order_by_asc(review::Column::Id)
            .find_also_related(customer::Entity)
            .all(db)
            .await?;

        let mut reviews = Vec::with_capacity(rows.len());
        for (review, customer) in rows {
            match customer {
                Some(customer) => reviews.push((review, customer)),
                None => {
                    return Err(ServiceError::ReferentialIntegrity(format!(
                        "review {} references missing customer {}",
                        review.id, review.customer_id
                    )))
                }
            }
        }

        Ok(ItemReviews { item, reviews })
    }

    /// Serializes an item as `{ id, name, price, reviews }`
    #[instrument(skip(self))]
    pub async fn serialize_item(&self, item_id: i32) -> Result<Value, ServiceError> {
        let graph = self.load_item(item_id).await?;
        Ok(serde_json::to_value(graph.view())?)
    }
}
