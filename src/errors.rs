use axum::response::IntoResponse;
use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Upstream(#[from] ModelError),
}

/// Failures of the hosted model call. These are always surfaced to the
/// caller; the proxy never turns one into an empty success.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Model request timed out")]
    Timeout,
    #[error("Rate limited by model provider")]
    RateLimited,
    #[error("Model API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },
    #[error("Invalid model response: {0}")]
    InvalidResponse(String),
    #[error("Prompt blocked by model provider: {0}")]
    Blocked(String),
    #[error("Model returned no text")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

// Every failure renders as 400 `{ message }`; clients of the existing
// endpoint only look at that shape.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = MessageBody {
            message: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::BadRequest(format!("Invalid JSON body: {}", value))
    }
}
