//! Catalog Persistence Layer
//!
//! Infrastructure layer providing repository implementations for domain aggregates.
//! This crate implements the repository interfaces defined in `catalog-domain`.
//!
//! ## Features
//!
//! - **In-Memory Repositories**: Thread-safe repositories over a shared store, with
//!   filter / sort / paginate done by [`memory::SearchableCollection`]
//! - **SQLite Repositories**: Durable persistence with the same search semantics in SQL
//!
//! ## Architecture
//!
//! Infrastructure implements domain interfaces
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Infrastructure Layer                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  memory/                          │  sqlite/                     │
//! │  ─────────                        │  ────────                    │
//! │  InMemoryStore                    │  open_database, migrations   │
//! │  InMemoryRepository               │  CategoryModel               │
//! │  SearchableCollection             │  SqliteCategoryRepository    │
//! │  InMemorySearchableRepository     │                              │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ implements
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Domain Layer                               │
//! │  Repository, SearchableRepository, CategoryRepository            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### In-Memory (Testing/Development)
//!
//! ```ignore
//! use catalog_persistence::memory::{category_in_memory_repository, InMemoryStore};
//! use catalog_domain::repositories::CategoryRepository;
//! use std::sync::Arc;
//!
//! let repo: Arc<dyn CategoryRepository> =
//!     Arc::new(category_in_memory_repository(InMemoryStore::new())?);
//! ```
//!
//! ### SQLite
//!
//! ```ignore
//! use catalog_persistence::sqlite::{open_database, SqliteCategoryRepository};
//!
//! let conn = open_database("./catalog.db")?;
//! let repo: Arc<dyn CategoryRepository> = Arc::new(SqliteCategoryRepository::new(conn));
//! ```

pub mod error;
pub mod memory;

// SQLite backend for durable persistence
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use error::{PersistenceError, PersistenceResult};

// Re-export commonly used types
pub use memory::{
    category_in_memory_repository, InMemoryCategoryRepository, InMemoryRepository,
    InMemorySearchableRepository, InMemoryStore, SearchableCollection,
};

#[cfg(feature = "sqlite")]
pub use sqlite::{open_database, open_in_memory, SqliteCategoryRepository};
