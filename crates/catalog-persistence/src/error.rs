//! Persistence Layer Error Types
//!
//! Error mapping to domain types

use catalog_domain::errors::DomainError;
use thiserror::Error;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Collection or repository wired with an inconsistent configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Stored data could not be mapped back to an entity
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Schema migration failed or the schema is newer than this binary
    #[error("Migration error: {0}")]
    Migration(String),

    /// Database error
    #[cfg(feature = "sqlite")]
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl PersistenceError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convert persistence errors to domain errors
impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        DomainError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error() {
        let err = PersistenceError::configuration("unknown sort field: age");
        assert!(err.to_string().contains("unknown sort field: age"));
    }

    #[test]
    fn test_error_conversion() {
        let err = PersistenceError::Mapping("bad row".into());
        let domain_err: DomainError = err.into();
        assert!(matches!(domain_err, DomainError::Infrastructure(msg) if msg.contains("bad row")));
    }
}
