pub mod events;
pub mod health;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eventra_core::{EventraError, FieldError};
use serde::Serialize;

static INVALID_EVENT_DATA: &str = "Invalid event data";
static INTERNAL_ERROR: &str = "Internal server error";

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Errors a handler can return, each mapped to one status code.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with per-field detail
    Validation(Vec<FieldError>),
    /// 404
    NotFound(&'static str),
    /// 500. Only `message` reaches the client; `source` is logged.
    Internal {
        message: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    /// Map a storage error, using `message` as the client-facing text for
    /// anything that is not a validation failure.
    pub fn context(message: &'static str) -> impl FnOnce(EventraError) -> ApiError {
        move |err| match err {
            EventraError::Validation(errors) => ApiError::Validation(errors),
            other => ApiError::Internal {
                message,
                source: other.into(),
            },
        }
    }
}

impl From<EventraError> for ApiError {
    fn from(err: EventraError) -> Self {
        ApiError::context(INTERNAL_ERROR)(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(vec![FieldError::new("query", rejection.body_text())])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: INVALID_EVENT_DATA.to_string(),
                    errors: Some(errors),
                },
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    message: message.to_string(),
                    errors: None,
                },
            ),
            ApiError::Internal { message, source } => {
                tracing::error!(error = %format!("{source:#}"), "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: message.to_string(),
                        errors: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
