use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::ResourceKind;
use crate::validation::{ValidationErrors, ValidationFailure};

fn current_request_id() -> Option<String> {
    crate::tracing::current_request_id().map(|rid| rid.as_str().to_string())
}

/// Error body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// HTTP status category (e.g., "Not Found", "Conflict")
    pub error: String,
    /// Machine-readable error kind
    pub code: &'static str,
    /// Human-readable error description
    pub message: String,
    /// Field-level failures, in declaration order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationFailure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// Primary-key lookup miss.
    #[error("{kind} not found with id {id}")]
    ResourceNotFound { kind: ResourceKind, id: i64 },

    /// Foreign-key reference miss during create or update.
    #[error("{kind} not found with id {id}")]
    DependentResourceNotFound { kind: ResourceKind, id: i64 },

    #[error("{kind} already exists with {field} {value}")]
    ResourceAlreadyExists {
        kind: ResourceKind,
        field: &'static str,
        value: String,
    },

    #[error("field '{field}' must match the format {expected}")]
    InvalidFormat {
        field: &'static str,
        expected: &'static str,
    },

    /// A path parameter that does not parse, such as a non-numeric id.
    #[error("invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("request body exceeds the configured size limit")]
    PayloadTooLarge,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServiceError {
    /// Returns the HTTP status code for this error.
    /// This is the single source of truth for error-to-status mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(errors) => errors.status().status_code(),
            Self::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            Self::DependentResourceNotFound { .. } | Self::ResourceAlreadyExists { .. } => {
                StatusCode::CONFLICT
            }
            Self::InvalidFormat { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::ResourceNotFound { .. } => "resource_not_found",
            Self::DependentResourceNotFound { .. } => "dependent_resource_not_found",
            Self::ResourceAlreadyExists { .. } => "resource_already_exists",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::InvalidPath(_) => "invalid_path",
            Self::PayloadTooLarge => "payload_too_large",
            Self::InternalError(_) => "internal_error",
        }
    }

    /// Internal errors return a generic message to avoid leaking details.
    pub fn response_message(&self) -> String {
        match self {
            Self::InternalError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let message = self.response_message();
        let code = self.code();
        let errors = match self {
            Self::Validation(errors) => Some(errors.into_failures()),
            _ => None,
        };

        let body = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            code,
            message,
            errors,
            request_id: current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}
