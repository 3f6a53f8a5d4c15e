//! Error handling and custom error types
//!
//! Provides unified error handling across the service using thiserror.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::GenerationResult;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Client-caused request problem. Displays as the bare message.
    #[error("{0}")]
    Validation(String),

    /// Provider failed or produced nothing. Displays as the bare message.
    #[error("{0}")]
    Generation(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(GenerationResult::failure(self.to_string()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = Error::Validation("No data provided".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No data provided");
    }

    #[test]
    fn test_generation_maps_to_internal_error() {
        let err = Error::Generation("AI failed to generate content".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "AI failed to generate content");
    }

    #[test]
    fn test_provider_error_display_keeps_detail() {
        let err = Error::AiProvider("Gemini API error (status 403): forbidden".to_string());
        assert!(err.to_string().contains("403"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
