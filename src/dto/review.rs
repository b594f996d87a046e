use serde::{Deserialize, Serialize};
use validator::Validate;

/// A new review. `comment` is optional on the wire so that a missing
/// comment is reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Deserialize, Validate, Serialize)]
pub struct CreateReviewRequest {
    #[validate(required)]
    pub comment: Option<String>,
    pub customer_id: i32,
    pub item_id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, Serialize)]
pub struct UpdateReviewRequest {
    #[validate(required)]
    pub comment: Option<String>,
}
