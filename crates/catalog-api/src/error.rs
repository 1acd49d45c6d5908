//! API error types and handling

use async_graphql::ErrorExtensions;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use catalog_application::ApplicationError;

/// API error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// Body or entity validation failures, one message per broken rule
    #[error("{}", .0.join(", "))]
    Unprocessable(Vec<String>),

    /// A path parameter failed to parse
    #[error("{0}")]
    InvalidParam(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) | ApiError::InvalidParam(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine readable code carried in GraphQL error extensions
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Unprocessable(_) | ApiError::InvalidParam(_) => "UNPROCESSABLE_ENTITY",
            ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            ApplicationError::ValidationFailed(_) | ApplicationError::EntityValidation(_) => {
                ApiError::Unprocessable(err.messages())
            }
            ApplicationError::RepositoryError(message) => ApiError::Internal(message),
        }
    }
}

/// Malformed bodies and wrong content types share the validation envelope
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(vec![rejection.body_text()])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = status.canonical_reason().unwrap_or("Error");

        let message = match &self {
            ApiError::Unprocessable(messages) => json!(messages),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                json!("Internal server error")
            }
            other => json!(other.to_string()),
        };

        let body = Json(json!({
            "statusCode": status.as_u16(),
            "error": error,
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        let messages = match self {
            ApiError::Unprocessable(messages) => messages.clone(),
            other => vec![other.to_string()],
        };
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", code);
            ext.set("messages", messages);
        })
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
