//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of domain repository interfaces.
//! Suitable for testing and development.

mod category;
mod repository;
mod searchable;
mod store;

pub use category::{category_collection, category_in_memory_repository, InMemoryCategoryRepository};
pub use repository::InMemoryRepository;
pub use searchable::{
    Comparator, InMemorySearchableRepository, Matcher, SearchableCollection,
    SearchableCollectionBuilder,
};
pub use store::InMemoryStore;
