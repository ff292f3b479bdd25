//! Shared application state for all routes.

use crate::pool::Database;

#[derive(Clone)]
pub struct AppState {
    /// Pool handle; per-request connections are taken from it by the dependency resolver.
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
