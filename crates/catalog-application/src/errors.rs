//! Application layer error types
//!
//! These errors represent application-level failures that are suitable
//! for API/UI consumption. They wrap domain errors with additional context.

use catalog_domain::errors::DomainError;
use catalog_domain::validation::{flatten_messages, FieldsErrors};
use thiserror::Error;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    // === Validation Errors ===

    /// Input validation failed
    #[error("Validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    /// The aggregate rejected the change
    #[error("Entity Validation Error")]
    EntityValidation(FieldsErrors),

    // === Not Found Errors ===

    #[error("{entity} Not Found using ID {}", .ids.join(", "))]
    NotFound { entity: String, ids: Vec<String> },

    // === Infrastructure Errors ===

    /// Repository operation failed
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed(vec![message.into()])
    }

    /// Messages suitable for a response body
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed(messages) => messages.clone(),
            Self::EntityValidation(errors) => flatten_messages(errors),
            other => vec![other.to_string()],
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity, ids } => ApplicationError::NotFound { entity, ids },
            DomainError::EntityValidation(errors) => ApplicationError::EntityValidation(errors),
            DomainError::InvalidArgument(message) => {
                ApplicationError::ValidationFailed(vec![message])
            }
            err @ DomainError::InvalidUuid(_) => ApplicationError::validation(err.to_string()),
            err @ DomainError::LoadEntity(_) => ApplicationError::RepositoryError(format!(
                "{}: {}",
                err,
                err.messages().join(", ")
            )),
            DomainError::Infrastructure(message) => ApplicationError::RepositoryError(message),
        }
    }
}
