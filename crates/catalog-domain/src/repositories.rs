//! Repository interfaces for data persistence
//!
//! The domain layer defines only the contracts; implementations live in
//! `catalog-persistence`.

use async_trait::async_trait;

use crate::{
    category::{Category, CategoryFilter},
    entity::Entity,
    errors::DomainResult,
    search::{SearchParams, SearchResult},
};

/// Partition of requested ids into present and missing ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistsResult<Id> {
    pub exists: Vec<Id>,
    pub not_exists: Vec<Id>,
}

/// Generic repository for an aggregate
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Insert a new entity
    async fn insert(&self, entity: &E) -> DomainResult<()>;

    /// Insert several entities, keeping their order
    async fn bulk_insert(&self, entities: &[E]) -> DomainResult<()>;

    /// Replace a stored entity. Fails with `NotFound` when it is absent.
    async fn update(&self, entity: &E) -> DomainResult<()>;

    /// Remove an entity. Fails with `NotFound` when it is absent.
    async fn delete(&self, id: &E::Id) -> DomainResult<()>;

    /// Find by ID
    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>>;

    /// Find all entities
    async fn find_all(&self) -> DomainResult<Vec<E>>;

    /// Find every entity whose id is listed
    async fn find_by_ids(&self, ids: &[E::Id]) -> DomainResult<Vec<E>>;

    /// Split `ids` into stored and unknown ones. An empty list is an
    /// `InvalidArgument` error.
    async fn exists_by_id(&self, ids: &[E::Id]) -> DomainResult<ExistsResult<E::Id>>;
}

/// Repository that can filter, sort and paginate
#[async_trait]
pub trait SearchableRepository<E: Entity, F: Send + Sync + 'static = String>: Repository<E> {
    /// Field names accepted as `sort`
    fn sortable_fields(&self) -> Vec<String>;

    async fn search(&self, params: &SearchParams<F>) -> DomainResult<SearchResult<E>>;
}

/// Repository for category aggregates
pub trait CategoryRepository: SearchableRepository<Category, CategoryFilter> {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category, CategoryFilter> {}
