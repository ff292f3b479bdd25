//! Expense handlers: map service outcomes to status codes and JSON rows.

use crate::dependencies::expense_service;
use crate::error::AppError;
use crate::extractors::{ExpenseId, ValidatedJson};
use crate::models::{Expense, ExpenseCreate, ExpenseUpdate};
use crate::service::ExpenseService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// POST /expenses/ -> 201 with the created row.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ExpenseCreate>,
) -> Result<impl IntoResponse, AppError> {
    let mut service = expense_service(&state).await?;
    let row = service.create(&body).await?;
    tracing::info!(id = row.id, "expense created");
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn list(mut service: ExpenseService) -> Result<Json<Vec<Expense>>, AppError> {
    Ok(Json(service.get_all().await?))
}

pub async fn read(ExpenseId(id): ExpenseId, mut service: ExpenseService) -> Result<Json<Expense>, AppError> {
    Ok(Json(service.get_by_id(id).await?))
}

/// PUT /expenses/:id -> 200 with the full row. Only supplied fields change.
pub async fn update(
    State(state): State<AppState>,
    ExpenseId(id): ExpenseId,
    ValidatedJson(body): ValidatedJson<ExpenseUpdate>,
) -> Result<Json<Expense>, AppError> {
    let mut service = expense_service(&state).await?;
    Ok(Json(service.update(id, &body).await?))
}

pub async fn delete(ExpenseId(id): ExpenseId, mut service: ExpenseService) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    tracing::info!(id, "expense deleted");
    Ok(StatusCode::NO_CONTENT)
}
