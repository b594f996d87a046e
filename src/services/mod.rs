pub mod customers;
pub mod items;
pub mod reviews;

use crate::db::DbPool;
use std::sync::Arc;

/// The three entity services sharing one connection pool.
#[derive(Clone)]
pub struct AppServices {
    pub customers: customers::CustomerService,
    pub items: items::ItemService,
    pub reviews: reviews::ReviewService,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            customers: customers::CustomerService::new(db_pool.clone()),
            items: items::ItemService::new(db_pool.clone()),
            reviews: reviews::ReviewService::new(db_pool),
        }
    }
}
