//! Exchange-format projections of the review graph.
//!
//! Each entry entity has its own view type, and each nested relationship has
//! a reduced type that omits the link back to the entry entity. The output
//! shape is therefore fixed at compile time and always ends one hop past the
//! entry entity:
//!
//! ```text
//! Customer -> { id, name, reviews: [{ id, comment, item }] }
//! Item     -> { id, name, price, reviews: [{ id, comment, customer }] }
//! Review   -> { id, comment, customer, item }
//! ```
//!
//! Nested customers and items never carry their `reviews`.

use crate::aggregates::{CustomerReviews, ItemReviews, ReviewDetail};
use crate::entities::{customer, item, review};
use serde::{Deserialize, Serialize};

/// A customer without its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: i32,
    pub name: Option<String>,
}

/// An item without its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerView {
    pub id: i32,
    pub name: Option<String>,
    pub reviews: Vec<CustomerReviewView>,
}

/// A review nested under its customer: the `customer` back-link is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerReviewView {
    pub id: i32,
    pub comment: String,
    pub item: ItemSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub reviews: Vec<ItemReviewView>,
}

/// A review nested under its item: the `item` back-link is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReviewView {
    pub id: i32,
    pub comment: String,
    pub customer: CustomerSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewView {
    pub id: i32,
    pub comment: String,
    pub customer: CustomerSummary,
    pub item: ItemSummary,
}

impl From<&customer::Model> for CustomerSummary {
    fn from(model: &customer::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
        }
    }
}

impl From<&item::Model> for ItemSummary {
    fn from(model: &item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            price: model.price,
        }
    }
}

impl From<(&review::Model, &item::Model)> for CustomerReviewView {
    fn from((review, item): (&review::Model, &item::Model)) -> Self {
        Self {
            id: review.id,
            comment: review.comment.clone(),
            item: item.into(),
        }
    }
}

impl From<(&review::Model, &customer::Model)> for ItemReviewView {
    fn from((review, customer): (&review::Model, &customer::Model)) -> Self {
        Self {
            id: review.id,
            comment: review.comment.clone(),
            customer: customer.into(),
        }
    }
}

impl From<&CustomerReviews> for CustomerView {
    fn from(graph: &CustomerReviews) -> Self {
        Self {
            id: graph.customer.id,
            name: graph.customer.name.clone(),
            reviews: graph
                .reviews
                .iter()
                .map(|(review, item)| CustomerReviewView::from((review, item)))
                .collect(),
        }
    }
}

impl From<&ItemReviews> for ItemView {
    fn from(graph: &ItemReviews) -> Self {
        Self {
            id: graph.item.id,
            name: graph.item.name.clone(),
            price: graph.item.price,
            reviews: graph
                .reviews
                .iter()
                .map(|(review, customer)| ItemReviewView::from((review, customer)))
                .collect(),
        }
    }
}

impl From<&ReviewDetail> for ReviewView {
    fn from(detail: &ReviewDetail) -> Self {
        Self {
            id: detail.review.id,
            comment: detail.review.comment.clone(),
            customer: (&detail.customer).into(),
            item: (&detail.item).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ada() -> customer::Model {
        customer::Model {
            id: 1,
            name: Some("Ada".into()),
        }
    }

    fn widget() -> item::Model {
        item::Model {
            id: 1,
            name: Some("Widget".into()),
            price: Some(9.99),
        }
    }

    fn great() -> review::Model {
        review::Model {
            id: 1,
            comment: "Great".into(),
            customer_id: 1,
            item_id: 1,
        }
    }

    #[test]
    fn review_view_drops_nested_reviews() {
        let detail = ReviewDetail {
            review: great(),
            customer: ada(),
            item: widget(),
        };

        let value = serde_json::to_value(detail.view()).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": 1,
                "comment": "Great",
                "customer": {"id": 1, "name": "Ada"},
                "item": {"id": 1, "name": "Widget", "price": 9.99}
            })
        );
    }

    #[test]
    fn null_columns_serialize_as_null() {
        let graph = ItemReviews {
            item: item::Model {
                id: 4,
                name: None,
                price: None,
            },
            reviews: Vec::new(),
        };

        let value = serde_json::to_value(graph.view()).expect("serialize");
        assert_eq!(
            value,
            json!({"id": 4, "name": null, "price": null, "reviews": []})
        );
    }
}
