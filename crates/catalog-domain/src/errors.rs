//! Domain errors for Catalog

use thiserror::Error;

use crate::validation::{flatten_messages, FieldsErrors};

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{entity} Not Found using ID {}", .ids.join(", "))]
    NotFound { entity: String, ids: Vec<String> },

    #[error("Entity Validation Error")]
    EntityValidation(FieldsErrors),

    #[error("LoadEntityError")]
    LoadEntity(FieldsErrors),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("ID must be valid uuid: {0}")]
    InvalidUuid(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Not-found error for a single identifier
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            ids: vec![id.to_string()],
        }
    }

    /// Field errors carried by the validation variants, if any
    pub fn fields_errors(&self) -> Option<&FieldsErrors> {
        match self {
            Self::EntityValidation(errors) | Self::LoadEntity(errors) => Some(errors),
            _ => None,
        }
    }

    /// Flat list of human readable messages for the validation variants
    pub fn messages(&self) -> Vec<String> {
        match self.fields_errors() {
            Some(errors) => flatten_messages(errors),
            None => vec![self.to_string()],
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
