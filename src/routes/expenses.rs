//! Expense CRUD routes.

use crate::handlers::expenses::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn expense_routes(state: AppState) -> Router {
    Router::new()
        .route("/expenses", get(list).post(create))
        .route("/expenses/", get(list).post(create))
        .route("/expenses/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
