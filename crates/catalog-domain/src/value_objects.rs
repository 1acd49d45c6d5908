//! Value objects representing immutable domain concepts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Category identifier - a UUID v4 based identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(uuid::Uuid);

impl CategoryId {
    /// Generate a new random category ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::InvalidUuid(s.to_string()))
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CategoryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<uuid::Uuid> for CategoryId {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(CategoryId::new(), CategoryId::new());
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = CategoryId::new();
        let parsed = CategoryId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_invalid_uuid() {
        let err = CategoryId::parse("fake id").unwrap_err();
        assert!(matches!(err, DomainError::InvalidUuid(ref value) if value == "fake id"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = CategoryId::parse("9366b7dc-2d71-4799-b91c-c64adb205104").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"9366b7dc-2d71-4799-b91c-c64adb205104\"");
    }
}
