//! Catalog Domain Layer
//!
//! Entities, validation and repository contracts for the catalog. This crate
//! has no I/O; persistence adapters live in `catalog-persistence` and
//! implement the traits in [`repositories`].
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Domain Layer                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  entity          Entity trait (identity + notification)       │
//! │  validation      Notification, FieldError, rule helpers       │
//! │  category        Category aggregate, CategoryValidator        │
//! │  search          SearchParams, SearchResult, SortDirection    │
//! │  repositories    Repository, SearchableRepository contracts   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use catalog_domain::category::{Category, CategoryCreateCommand};
//!
//! let category = Category::create(CategoryCreateCommand {
//!     name: "Movie".into(),
//!     ..Default::default()
//! });
//! assert!(!category.notification().has_errors());
//! ```

pub mod category;
pub mod entity;
pub mod errors;
pub mod repositories;
pub mod search;
pub mod validation;
pub mod value_objects;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use category::{Category, CategoryFilter};
pub use entity::Entity;
pub use errors::{DomainError, DomainResult};
pub use repositories::{CategoryRepository, ExistsResult, Repository, SearchableRepository};
pub use search::{parse_page_number, SearchParams, SearchParamsInput, SearchResult, SortDirection};
pub use validation::{FieldError, FieldsErrors, Notification};
pub use value_objects::CategoryId;
