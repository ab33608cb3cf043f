use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use tracing::{error, warn};

use crate::api::middleware::tracing::record_error;
use crate::application::services::{PreviewError, SubscribeError};
use crate::domain::clients::ThreadsError;

/// HTTP-facing error.
///
/// Rendered as a flat JSON object: `{"error": <message>, ...details}`.
/// `details` must be a JSON object; its fields are merged next to `error`.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Forbidden { message: String, details: Value },
    NotFound { message: String, details: Value },
    Timeout { message: String, details: Value },
    Internal { message: String, details: Value },
    BadGateway { message: String, details: Value },
    /// Status forwarded verbatim from an upstream API.
    Upstream {
        status: StatusCode,
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn timeout(message: impl Into<String>, details: Value) -> Self {
        Self::Timeout {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
    pub fn bad_gateway(message: impl Into<String>, details: Value) -> Self {
        Self::BadGateway {
            message: message.into(),
            details,
        }
    }

    /// Forwards an upstream status. Statuses that are not valid HTTP codes
    /// become `502 Bad Gateway`.
    pub fn upstream(status: u16, message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Upstream { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::Forbidden { message, details }
            | AppError::NotFound { message, details }
            | AppError::Timeout { message, details }
            | AppError::Internal { message, details }
            | AppError::BadGateway { message, details }
            | AppError::Upstream {
                message, details, ..
            } => (message, details),
        };

        record_error(&message);

        if status.is_server_error() {
            error!(status = status.as_u16(), message = %message, details = %details, "Request failed");
        }

        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(message));
        match details {
            Value::Object(fields) => body.extend(fields),
            Value::Null => {}
            other => {
                body.insert("details".to_string(), other);
            }
        }

        (status, Json(Value::Object(body))).into_response()
    }
}

impl From<PreviewError> for AppError {
    fn from(e: PreviewError) -> Self {
        match e {
            PreviewError::InvalidUrl {
                original_url,
                reason,
            } => AppError::bad_request(
                "Invalid URL",
                json!({ "originalUrl": original_url, "details": reason }),
            ),
            PreviewError::ResolutionFailed {
                original_url,
                details,
            } => AppError::bad_request(
                "Failed to resolve shortened URL",
                json!({ "originalUrl": original_url, "details": details }),
            ),
            PreviewError::Timeout { original_url } => AppError::timeout(
                "Preview request timed out",
                json!({ "originalUrl": original_url }),
            ),
            PreviewError::CorsBlocked { original_url } => AppError::forbidden(
                "CORS policy blocks preview",
                json!({ "originalUrl": original_url }),
            ),
            PreviewError::InvalidMetadata {
                original_url,
                final_url,
                details,
            } => AppError::internal(
                "Invalid preview data received",
                json!({ "originalUrl": original_url, "finalUrl": final_url, "details": details }),
            ),
            PreviewError::Upstream {
                original_url,
                details,
            } => AppError::internal(
                "Failed to fetch preview",
                json!({ "originalUrl": original_url, "details": details }),
            ),
        }
    }
}

impl From<SubscribeError> for AppError {
    fn from(e: SubscribeError) -> Self {
        match e {
            SubscribeError::InvalidEmail => AppError::bad_request("Invalid email address", json!({})),
            SubscribeError::NotConfigured => {
                AppError::internal("Server configuration error", json!({}))
            }
            SubscribeError::Upstream { status, message } => {
                AppError::upstream(status, message, json!({}))
            }
            SubscribeError::Transport(_) => AppError::internal("Internal server error", json!({})),
        }
    }
}

impl From<ThreadsError> for AppError {
    fn from(e: ThreadsError) -> Self {
        match e {
            ThreadsError::InvalidPage => AppError::bad_request(
                "Invalid page number",
                json!({ "details": "page must be a positive integer" }),
            ),
            ThreadsError::NotFound(id) => {
                AppError::not_found("Thread not found", json!({ "id": id }))
            }
            ThreadsError::Upstream(details) => {
                warn!(details = %details, "Thread API failure");
                AppError::bad_gateway("Failed to fetch posts", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Validation failed".to_string());

        AppError::bad_request(message, json!({}))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "details": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "details": rejection.body_text() }),
        )
    }
}
