//! Shared HTTP response types
//!
//! Error bodies are `{"message": "..."}`. Internal failures may add an
//! `error` field with the underlying cause, but only in development mode.

mod validated_json;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message body used for errors and confirmations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiMessage {
    pub message: String,
    /// Internal error detail (development mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }
}

/// Error returned by handlers; renders as `(status, Json<ApiMessage>)`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiMessage,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiMessage::new(message),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Generic 500; `detail` is attached only when `expose_detail` is set.
    pub fn internal(detail: impl ToString, expose_detail: bool) -> Self {
        let mut err = Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE);
        if expose_detail {
            err.body.error = Some(detail.to_string());
        }
        err
    }

    /// Map a domain error to its HTTP status.
    pub fn from_domain(e: DomainError, expose_detail: bool) -> Self {
        match e {
            DomainError::Validation(msg) => Self::bad_request(msg),
            DomainError::NotFound { entity, .. } => Self::not_found(format!("{} not found", entity)),
            DomainError::Conflict(msg) => Self::conflict(msg),
            other => Self::internal(other, expose_detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
