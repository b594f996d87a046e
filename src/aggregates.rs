//! Loaded slices of the object graph, one hop deep from an entry entity.

use crate::entities::{customer, item, review};
use crate::serialization::{CustomerView, ItemView, ReviewView};
use std::fmt;

/// A customer together with its reviews, each paired with the reviewed item.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerReviews {
    pub customer: customer::Model,
    pub reviews: Vec<(review::Model, item::Model)>,
}

impl CustomerReviews {
    /// Items reached through the customer's reviews, one entry per review.
    pub fn items(&self) -> Vec<&item::Model> {
        self.reviews.iter().map(|(_, item)| item).collect()
    }

    pub fn view(&self) -> CustomerView {
        CustomerView::from(self)
    }
}

/// An item together with its reviews, each paired with the reviewing customer.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReviews {
    pub item: item::Model,
    pub reviews: Vec<(review::Model, customer::Model)>,
}

impl ItemReviews {
    pub fn view(&self) -> ItemView {
        ItemView::from(self)
    }
}

/// A review with both of its owners resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDetail {
    pub review: review::Model,
    pub customer: customer::Model,
    pub item: item::Model,
}

impl ReviewDetail {
    pub fn view(&self) -> ReviewView {
        ReviewView::from(self)
    }
}

impl fmt::Display for CustomerReviews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.customer, f)
    }
}

impl fmt::Display for ItemReviews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.item, f)
    }
}

impl fmt::Display for ReviewDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.review, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(id: i32) -> item::Model {
        item::Model {
            id,
            name: Some(format!("Widget {}", id)),
            price: Some(9.99),
        }
    }

    fn review(id: i32, item_id: i32) -> review::Model {
        review::Model {
            id,
            comment: "Great".into(),
            customer_id: 1,
            item_id,
        }
    }

    #[test]
    fn items_follow_review_order_and_keep_duplicates() {
        let graph = CustomerReviews {
            customer: customer::Model {
                id: 1,
                name: Some("Ada".into()),
            },
            reviews: vec![
                (review(1, 2), widget(2)),
                (review(2, 1), widget(1)),
                (review(3, 2), widget(2)),
            ],
        };

        let ids: Vec<i32> = graph.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1, 2]);
    }

    #[test]
    fn customer_without_reviews_has_no_items() {
        let graph = CustomerReviews {
            customer: customer::Model { id: 1, name: None },
            reviews: Vec::new(),
        };
        assert!(graph.items().is_empty());
    }

    #[test]
    fn display_matches_model_repr() {
        let detail = ReviewDetail {
            review: review(1, 1),
            customer: customer::Model {
                id: 1,
                name: Some("Ada".into()),
            },
            item: widget(1),
        };

        assert_eq!(detail.to_string(), "<Review 1, Great, Customer 1, Item 1>");
        assert_eq!(detail.customer.to_string(), "<Customer 1, Ada>");
        assert_eq!(detail.item.to_string(), "<Item 1, Widget 1, 9.99>");
    }
}
