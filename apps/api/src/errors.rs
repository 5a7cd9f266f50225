use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::docgen::DocError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Document error: {0}")]
    Document(#[from] DocError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Document(err) => match err {
                DocError::Validation { .. } => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
                }
                DocError::UnknownTemplate(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNKNOWN_TEMPLATE",
                    err.to_string(),
                ),
                DocError::UnknownStyle(_) => {
                    tracing::error!("Style registry gap: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UNKNOWN_STYLE",
                        "A document styling error occurred".to_string(),
                    )
                }
                DocError::Build(_) => {
                    tracing::error!("Document build failed: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "BUILD_ERROR",
                        "Document assembly failed".to_string(),
                    )
                }
            },
            AppError::Llm(err) => {
                tracing::error!("LLM error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
