//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

/// Request-time errors.
///
/// Only two kinds exist: the model never loaded (server-side), or the
/// submitted record could not be scored (client-side).
#[derive(Debug)]
pub enum AppError {
    /// The model store failed to load at startup or was never loaded.
    ModelUnavailable,

    /// Alignment or prediction failed for the submitted record.
    Inference(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ModelUnavailable => {
                tracing::error!("Prediction requested but no model is loaded");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Model is not loaded.".to_string(),
                )
            }
            AppError::Inference(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Prediction error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
