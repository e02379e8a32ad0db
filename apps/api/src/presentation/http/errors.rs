//! HTTP error handling and response conversion.
//!
//! Errors are mapped to status codes and a JSON body carrying a user-safe
//! message. The full error is logged at a level matching the status.

use crate::domain::recognition::errors::DomainError;
use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request is malformed or names an unknown service (400).
    BadRequest(String),

    /// Uploaded image failed local checks (400).
    ValidationError(String),

    /// Upload exceeds the image or body limit (413).
    PayloadTooLarge(String),

    /// The recognition service failed or answered with an unusable payload (502).
    ExternalService(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            Self::ExternalService(msg) => write!(f, "External service error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ExternalService(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::ValidationError(msg) => msg.clone(),
            Self::PayloadTooLarge(_) => "Image is too large".into(),
            Self::ExternalService(_) => "Recognition service failed".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::BAD_GATEWAY => {
                tracing::error!("error={}", self);
            }
            _ => {
                tracing::warn!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidService(service) => {
                AppError::BadRequest(format!("Unknown recognition service '{}'", service))
            }
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            err @ DomainError::ImageTooLarge(_) => AppError::PayloadTooLarge(err.to_string()),
            DomainError::RemoteService(msg) => AppError::ExternalService(msg),
            DomainError::MalformedResponse(msg) => {
                tracing::error!(malformed_response = %msg);
                AppError::ExternalService(msg)
            }
        }
    }
}

// === Multipart Error Conversion ===

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
        }
    }
}
