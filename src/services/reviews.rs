use crate::{
    aggregates::ReviewDetail,
    db::DbPool,
    dto::{CreateReviewRequest, UpdateReviewRequest},
    entities::{customer, item, review},
    errors::ServiceError,
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder, Set};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Service for managing reviews
///
/// Foreign keys are checked by the database itself: a review naming a
/// customer or item that does not exist is rejected on insert and reported
/// as [`ServiceError::ReferentialIntegrity`].
#[derive(Clone)]
pub struct ReviewService {
    db_pool: Arc<DbPool>,
}

impl ReviewService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn create_review(
        &self,
        request: CreateReviewRequest,
    ) -> Result<review::Model, ServiceError> {
        request.validate()?;
        let Some(comment) = request.comment else {
            return Err(ServiceError::ValidationError("comment is required".to_string()));
        };
        let db = &*self.db_pool;

        let model = review::ActiveModel {
            comment: Set(comment),
            customer_id: Set(request.customer_id),
            item_id: Set(request.item_id),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| {
            let err = ServiceError::from(e);
            if err.is_referential() {
                warn!(
                    customer_id = request.customer_id,
                    item_id = request.item_id,
                    "Review references a missing customer or item"
                );
            }
            err
        })?;

        info!(
            review_id = model.id,
            customer_id = model.customer_id,
            item_id = model.item_id,
            "Review created"
        );
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn get_review(&self, review_id: i32) -> Result<Option<review::Model>, ServiceError> {
        let db = &*self.db_pool;
        Ok(review::Entity::find_by_id(review_id).one(db).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_reviews(&self) -> Result<Vec<review::Model>, ServiceError> {
        let db = &*self.db_pool;
        Ok(review::Entity::find()
            .order_by_asc(review::Column::Id)
            .all(db)
            .await?)
    }

    /// Replaces the comment of an existing review
    #[instrument(skip(self))]
    pub async fn update_review(
        &self,
        review_id: i32,
        request: UpdateReviewRequest,
    ) -> Result<review::Model, ServiceError> {
        request.validate()?;
        let Some(comment) = request.comment else {
            return Err(ServiceError::ValidationError("comment is required".to_string()));
        };
        let db = &*self.db_pool;

        let existing = review::Entity::find_by_id(review_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review", review_id))?;

        let mut active = existing.clone().into_active_model();
        active.comment = Set(comment);
        if !active.is_changed() {
            return Ok(existing);
        }
        let updated = active.update(db).await?;

        info!(review_id, "Review updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_review(&self, review_id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;

        let result = review::Entity::delete_by_id(review_id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Review", review_id));
        }

        info!(review_id, "Review deleted");
        Ok(())
    }

    /// Loads a review with its customer and item
    #[instrument(skip(self))]
    pub async fn load_review(&self, review_id: i32) -> Result<ReviewDetail, ServiceError> {
        let db = &*self.db_pool;

        let review = review::Entity::find_by_id(review_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review", review_id))?;

        let customer = review
            .find_related(customer::Entity)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::ReferentialIntegrity(format!(
                    "review {} references missing customer {}",
                    review.id, review.customer_id
                ))
            })?;

        let item = review
            .find_related(item::Entity)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::ReferentialIntegrity(format!(
                    "review {} references missing item {}",
                    review.id, review.item_id
                ))
            })?;

        Ok(ReviewDetail {
            review,
            customer,
            item,
        })
    }

    /// Serializes a review as `{ id, comment, customer, item }`
    #[instrument(skip(self))]
    pub async fn serialize_review(&self, review_id: i32) -> Result<Value, ServiceError> {
        let detail = self.load_review(review_id).await?;
        Ok(serde_json::to_value(detail.view())?)
    }
}
