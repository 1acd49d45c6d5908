//! Catalog Application Layer
//!
//! The Application Layer implements use cases by orchestrating the category
//! aggregate and its repository. Use cases are stateless; all mutable state
//! is persisted via the injected repository.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Application Layer                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Use cases                     │ DTOs                                    │
//! │  ─────────                     │ ────                                    │
//! │  CreateCategoryUseCase         │ CreateCategoryInput                     │
//! │  GetCategoryUseCase            │ UpdateCategoryInput                     │
//! │  ListCategoriesUseCase         │ ListCategoriesInput                     │
//! │  UpdateCategoryUseCase         │ CategoryOutput                          │
//! │  DeleteCategoryUseCase         │ PaginationOutput                        │
//! │  (De)ActivateCategoryUseCase   │                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ depends on
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Layer                                     │
//! │  Category aggregate, Notification, CategoryRepository                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Responsibilities
//!
//! - **Use Case Orchestration**: load, mutate and persist aggregates
//! - **DTO Mapping**: Convert domain objects to/from presentation-safe DTOs
//! - **Error Mapping**: Translate domain errors to application-level errors
//!
//! # Non-Goals
//!
//! - Domain logic (belongs in Domain Layer)
//! - Direct I/O operations (belongs in Infrastructure Layer)
//! - HTTP/GraphQL handling (belongs in Presentation Layer)

pub mod dto;
pub mod errors;
pub mod use_cases;

// Re-export commonly used types
pub use dto::*;
pub use errors::{ApplicationError, ApplicationResult};
pub use use_cases::*;
