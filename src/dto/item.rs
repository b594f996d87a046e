use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Default, Deserialize, Validate, Serialize)]
#[validate(schema(function = "validate_create_price"))]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// An absent field keeps its stored value; `Some(None)` clears the column.
#[derive(Debug, Clone, Default, Deserialize, Validate, Serialize)]
#[validate(schema(function = "validate_update_price"))]
pub struct UpdateItemRequest {
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Option<f64>>,
}

fn validate_create_price(request: &CreateItemRequest) -> Result<(), ValidationError> {
    validate_finite_price(request.price)
}

fn validate_update_price(request: &UpdateItemRequest) -> Result<(), ValidationError> {
    validate_finite_price(request.price.flatten())
}

/// NaN and infinities have no column or JSON representation
fn validate_finite_price(price: Option<f64>) -> Result<(), ValidationError> {
    match price {
        Some(price) if !price.is_finite() => {
            let mut err = ValidationError::new("price");
            err.message = Some("price must be a finite number".into());
            Err(err)
        }
        _ => Ok(()),
    }
}
