//! Entity validation via the notification pattern
//!
//! Validators never fail fast. They record every broken rule into a
//! [`Notification`], keyed by field, and the caller decides whether the
//! accumulated errors abort the operation.

use serde::{Deserialize, Serialize};

/// Error messages attached to a single field, or to the entity as a whole
/// when `field` is `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Option<String>,
    pub messages: Vec<String>,
}

impl FieldError {
    /// Create a field-scoped error
    pub fn new(field: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            field: Some(field.into()),
            messages,
        }
    }

    /// Create an error that is not bound to a field
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            field: None,
            messages: vec![message.into()],
        }
    }
}

/// Ordered collection of field errors
pub type FieldsErrors = Vec<FieldError>;

/// Flatten field errors into their messages, preserving insertion order
pub fn flatten_messages(errors: &[FieldError]) -> Vec<String> {
    errors
        .iter()
        .flat_map(|error| error.messages.iter().cloned())
        .collect()
}

/// Accumulates validation errors in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<FieldError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error message. Duplicate messages for the same field are
    /// recorded once.
    pub fn add_error(&mut self, message: impl Into<String>, field: Option<&str>) {
        let message = message.into();
        match self.position(field) {
            Some(index) => {
                let messages = &mut self.errors[index].messages;
                if !messages.contains(&message) {
                    messages.push(message);
                }
            }
            None => self.errors.push(FieldError {
                field: field.map(str::to_string),
                messages: vec![message],
            }),
        }
    }

    /// Replace every message recorded for `field`
    pub fn set_error(&mut self, messages: Vec<String>, field: Option<&str>) {
        match self.position(field) {
            Some(index) => self.errors[index].messages = messages,
            None => self.errors.push(FieldError {
                field: field.map(str::to_string),
                messages,
            }),
        }
    }

    /// Merge errors produced elsewhere (e.g. by a nested value object)
    pub fn copy_errors(&mut self, other: &Notification) {
        for error in &other.errors {
            for message in &error.messages {
                self.add_error(message.clone(), error.field.as_deref());
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Messages recorded for one field
    pub fn field_messages(&self, field: &str) -> &[String] {
        self.position(Some(field))
            .map(|index| self.errors[index].messages.as_slice())
            .unwrap_or(&[])
    }

    /// All messages, flattened in insertion order
    pub fn messages(&self) -> Vec<String> {
        flatten_messages(&self.errors)
    }

    pub fn to_fields_errors(&self) -> FieldsErrors {
        self.errors.clone()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    fn position(&self, field: Option<&str>) -> Option<usize> {
        self.errors
            .iter()
            .position(|error| error.field.as_deref() == field)
    }
}

/// Rule checks shared by entity validators
pub mod rules {
    /// Character-count upper bound, phrased like class-validator's `MaxLength`
    pub fn max_length(field: &str, value: &str, max: usize) -> Option<String> {
        (value.chars().count() > max)
            .then(|| format!("{field} must be shorter than or equal to {max} characters"))
    }

    pub fn not_empty(field: &str, value: &str) -> Option<String> {
        value
            .is_empty()
            .then(|| format!("{field} should not be empty"))
    }
}
