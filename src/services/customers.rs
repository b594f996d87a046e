use crate::{
    aggregates::CustomerReviews,
    db::DbPool,
    dto::{CreateCustomerRequest, UpdateCustomerRequest},
    entities::{customer, item, review},
    errors::ServiceError,
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder, Set};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Service for managing customers
#[derive(Clone)]
pub struct CustomerService {
    db_pool: Arc<DbPool>,
}

impl CustomerService {
    /// Creates a new customer service instance
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Creates a new customer
    #[instrument(skip(self))]
    pub async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<customer::Model, ServiceError> {
        request.validate()?;
        let db = &*self.db_pool;

        let model = customer::ActiveModel {
            name: Set(request.name),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(customer_id = model.id, "Customer created");
        Ok(model)
    }

    /// Gets a customer by ID
    #[instrument(skip(self))]
    pub async fn get_customer(
        &self,
        customer_id: i32,
    ) -> Result<Option<customer::Model>, ServiceError> {
        let db = &*self.db_pool;
        Ok(customer::Entity::find_by_id(customer_id).one(db).await?)
    }

    /// Lists all customers in ID order
    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<customer::Model>, ServiceError> {
        let db = &*self.db_pool;
        Ok(customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(db)
            .await?)
    }

    /// Updates an existing customer
    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        customer_id: i32,
        request: UpdateCustomerRequest,
    ) -> Result<customer::Model, ServiceError> {
        request.validate()?;
        let db = &*self.db_pool;

        let existing = customer::Entity::find_by_id(customer_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Customer", customer_id))?;

        let mut active = existing.clone().into_active_model();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if !active.is_changed() {
            return Ok(existing);
        }
        let updated = active.update(db).await?;

        info!(customer_id, "Customer updated");
        Ok(updated)
    }

    /// Deletes a customer. Fails while any review still references it.
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, customer_id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;

        let result = customer::Entity::delete_by_id(customer_id)
            .exec(db)
            .await
            .map_err(|e| {
                let err = ServiceError::from(e);
                if err.is_referential() {
                    warn!(customer_id, "Customer still has reviews; delete refused");
                }
                err
            })?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Customer", customer_id));
        }

        info!(customer_id, "Customer deleted");
        Ok(())
    }

    /// Loads a customer with its reviews and each review's item
    #[instrument(skip(self))]
    pub async fn load_customer(&self, customer_id: i32) -> Result<CustomerReviews, ServiceError> {
        let db = &*self.db_pool;

        let customer = customer::Entity::find_by_id(customer_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Customer", customer_id))?;

        let rows = customer
            .find_related(review::Entity)
            .order_by_asc(review::Column::Id)
            .find_also_related(item::Entity)
            .all(db)
            .await?;

        let mut reviews = Vec::with_capacity(rows.len());
        for (review, item) in rows {
            match item {
                Some(item) => reviews.push((review, item)),
                None => {
                    return Err(ServiceError::ReferentialIntegrity(format!(
                        "review {} references missing item {}",
                        review.id, review.item_id
                    )))
                }
            }
        }

        Ok(CustomerReviews { customer, reviews })
    }

    /// Items reached through the customer's reviews, one per review
    #[instrument(skip(self))]
    pub async fn customer_items(&self, customer_id: i32) -> Result<Vec<item::Model>, ServiceError> {
        let graph = self.load_customer(customer_id).await?;
        Ok(graph.items().into_iter().cloned().collect())
    }

    /// Serializes a customer as `{ id, name, reviews }`
    #[instrument(skip(self))]
    pub async fn serialize_customer(&self, customer_id: i32) -> Result<Value, ServiceError> {
        let graph = self.load_customer(customer_id).await?;
        Ok(serde_json::to_value(graph.view())?)
    }
}
