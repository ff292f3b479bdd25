//! Expense tracker: layered REST service over PostgreSQL.
//! Router -> validation -> service -> data access -> pooled connection.

pub mod config;
pub mod crud;
pub mod dependencies;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod pool;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::{PoolSettings, Settings};
pub use error::{AppError, ConfigError, ServiceError, ValidationErrors};
pub use migration::apply_schema;
pub use models::{Expense, ExpenseCreate, ExpenseUpdate};
pub use pool::{ensure_database_exists, Database};
pub use routes::{build_router, common_routes, expense_routes};
pub use service::ExpenseService;
pub use state::AppState;
