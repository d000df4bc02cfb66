//! Request extractors whose rejections use the JSON error body.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use wayfarer_core::error::CoreError;

use crate::error::AppError;

/// Drop-in for [`axum::Json`] on request bodies.
///
/// Malformed JSON, a wrong field type or a missing `Content-Type` become a
/// 400 `VALIDATION_ERROR` instead of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}
