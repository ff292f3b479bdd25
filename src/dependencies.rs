//! Per-request dependency resolution: one pooled connection, one `ExpenseService`.
//! The connection returns to the pool when the service is dropped, on every exit path.

use crate::error::{AppError, ServiceError};
use crate::service::ExpenseService;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Acquire a connection (waiting while the pool is exhausted) and bind a service to it.
pub async fn expense_service(state: &AppState) -> Result<ExpenseService, AppError> {
    let conn = state.db.acquire().await.map_err(ServiceError::from)?;
    Ok(ExpenseService::new(conn))
}

#[async_trait]
impl FromRequestParts<AppState> for ExpenseService {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        expense_service(state).await
    }
}
