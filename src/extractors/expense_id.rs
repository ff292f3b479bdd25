//! Extract the integer expense id from the `/:id` path segment.

use crate::error::{AppError, ValidationErrors};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpenseId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ExpenseId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(ValidationErrors::single("id", rejection.body_text())))?;
        raw.trim()
            .parse::<i64>()
            .map(ExpenseId)
            .map_err(|_| AppError::Validation(ValidationErrors::single("id", "must be an integer")))
    }
}
