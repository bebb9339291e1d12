//! Domain-specific error types for roadmapper

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the roadmap service
#[derive(Error, Debug)]
pub enum RoadmapError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The generation capability was never initialized (missing or bad
    /// credential at startup). Permanent until restart.
    #[error("Generative AI model not initialized. Check your API key.")]
    Unavailable,

    /// Any failure during the outbound generation call, or while decoding
    /// its output in the structured variant. Network errors, API-level
    /// rejections, and malformed output all collapse here.
    #[error("An error occurred with the AI service: {message}")]
    Generation { message: String },
}

impl From<anyhow::Error> for RoadmapError {
    fn from(err: anyhow::Error) -> Self {
        RoadmapError::Generation {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for RoadmapError {
    fn from(err: reqwest::Error) -> Self {
        RoadmapError::Generation {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RoadmapError {
    fn from(err: serde_json::Error) -> Self {
        RoadmapError::Generation {
            message: err.to_string(),
        }
    }
}

/// Render errors as `{"detail": "<message>"}` JSON bodies.
impl IntoResponse for RoadmapError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = axum::Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

/// Result type alias for roadmap operations
pub type Result<T> = std::result::Result<T, RoadmapError>;
