//! SQLite Repository Implementations
//!
//! Durable storage through `rusqlite`. Connections are opened and migrated
//! by [`open_database`] / [`open_in_memory`] and then handed to a repository.

mod category_model;
mod category_repository;
mod connection;
pub mod migrations;

pub use category_model::CategoryModel;
pub use category_repository::SqliteCategoryRepository;
pub use connection::{open_database, open_in_memory};
