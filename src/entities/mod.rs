//! SeaORM entities for the review schema.
//!
//! `Customer` and `Item` each have many `Review`s; a `Review` belongs to
//! exactly one of each.

pub mod customer;
pub mod item;
pub mod review;

pub mod prelude {
    pub use super::customer::Entity as Customer;
    pub use super::item::Entity as Item;
    pub use super::review::Entity as Review;
}
