//! JSON body extractor that runs the input shape's field rules.

use crate::error::{AppError, ValidationErrors};
use crate::models::Validate;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

/// Body parsed as JSON and validated into `T`. Malformed bodies are validation errors.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(ValidationErrors::single("body", rejection.body_text())))?;
        let today = chrono::Local::now().date_naive();
        Ok(ValidatedJson(T::from_json(value, today)?))
    }
}
