//! Customer / Item / Review data model
//!
//! SeaORM entities with bidirectional foreign-key relationships, the schema
//! migration that creates them, and cycle-free JSON projections of the
//! resulting object graph.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod aggregates;
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod migrator;
pub mod serialization;
pub mod services;

pub use aggregates::{CustomerReviews, ItemReviews, ReviewDetail};
pub use errors::ServiceError;
pub use services::AppServices;
