//! Category aggregate and its validation rules

mod aggregate;
mod validator;

pub use aggregate::{Category, CategoryCreateCommand, CategoryProps, CategoryRestoreCommand};
pub use validator::{CategoryValidator, NAME_MAX_LENGTH};

/// Categories are filtered by a free-text term matched against the name
pub type CategoryFilter = String;

/// Fields a category search may sort by
pub const CATEGORY_SORTABLE_FIELDS: &[&str] = &["name", "createdAt"];
