//! Error types
//!
//! `ApiError` is what handlers return; it maps to an HTTP response.
//! `ConfigError` covers startup configuration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not a valid dry measure
    #[error("invalid dry measure payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// No record has the requested id
    #[error("no dry measure with id '{0}'")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Unknown ids answer with an empty body
            ApiError::NotFound(_) => self.status().into_response(),
            ApiError::InvalidPayload(_) => {
                let body = Json(json!({ "error": self.to_string() }));
                (self.status(), body).into_response()
            }
        }
    }
}

/// Errors raised while reading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidVar { var: &'static str, value: String },
}
