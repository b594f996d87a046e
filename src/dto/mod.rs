//! Input payloads accepted by the persistence services.

pub mod customer;
pub mod item;
pub mod review;

pub use customer::{CreateCustomerRequest, UpdateCustomerRequest};
pub use item::{CreateItemRequest, UpdateItemRequest};
pub use review::{CreateReviewRequest, UpdateReviewRequest};

use serde::{Deserialize, Deserializer};

/// Keeps an explicit `null` apart from an absent field: absent stays `None`
/// (via `#[serde(default)]`), `null` becomes `Some(None)`.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
