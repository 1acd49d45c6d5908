//! Generic in-memory repository
//!
//! Memory backend for tests and local development

use async_trait::async_trait;
use tracing::debug;

use catalog_domain::{
    entity::Entity,
    errors::{DomainError, DomainResult},
    repositories::{ExistsResult, Repository},
};

use super::store::InMemoryStore;

/// Thread-safe in-memory implementation of [`Repository`]
///
/// Items keep insertion order. Reads and writes go through the shared
/// [`InMemoryStore`] handle given at construction.
///
/// # Example
///
/// ```ignore
/// use catalog_persistence::memory::{InMemoryRepository, InMemoryStore};
///
/// let store = InMemoryStore::new();
/// let repo = InMemoryRepository::<Category>::new(store.clone());
/// ```
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    store: InMemoryStore<E>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new(store: InMemoryStore<E>) -> Self {
        Self { store }
    }

    /// The store this repository reads and writes
    pub fn store(&self) -> &InMemoryStore<E> {
        &self.store
    }

    fn position(items: &[E], id: &E::Id) -> Option<usize> {
        items.iter().position(|item| item.entity_id() == id)
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new(InMemoryStore::new())
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn insert(&self, entity: &E) -> DomainResult<()> {
        debug!(entity = E::NAME, id = %entity.entity_id(), "Inserting entity");
        self.store.write().push(entity.clone());
        Ok(())
    }

    async fn bulk_insert(&self, entities: &[E]) -> DomainResult<()> {
        debug!(entity = E::NAME, count = entities.len(), "Bulk inserting entities");
        self.store.write().extend_from_slice(entities);
        Ok(())
    }

    async fn update(&self, entity: &E) -> DomainResult<()> {
        let mut items = self.store.write();
        match Self::position(&items, entity.entity_id()) {
            Some(index) => {
                items[index] = entity.clone();
                debug!(entity = E::NAME, id = %entity.entity_id(), "Updated entity");
                Ok(())
            }
            None => Err(DomainError::not_found(E::NAME, entity.entity_id())),
        }
    }

    async fn delete(&self, id: &E::Id) -> DomainResult<()> {
        let mut items = self.store.write();
        match Self::position(&items, id) {
            Some(index) => {
                items.remove(index);
                debug!(entity = E::NAME, id = %id, "Deleted entity");
                Ok(())
            }
            None => Err(DomainError::not_found(E::NAME, id)),
        }
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        let items = self.store.read();
        Ok(items.iter().find(|item| item.entity_id() == id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        Ok(self.store.snapshot())
    }

    async fn find_by_ids(&self, ids: &[E::Id]) -> DomainResult<Vec<E>> {
        let items = self.store.read();
        Ok(items
            .iter()
            .filter(|item| ids.contains(item.entity_id()))
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, ids: &[E::Id]) -> DomainResult<ExistsResult<E::Id>> {
        if ids.is_empty() {
            return Err(DomainError::InvalidArgument(
                "ids must be an array with at least one element".to_string(),
            ));
        }

        let items = self.store.read();
        let (exists, not_exists) = ids
            .iter()
            .cloned()
            .partition(|id| Self::position(&items, id).is_some());
        Ok(ExistsResult { exists, not_exists })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_domain::category::Category;
    use catalog_domain::testing::CategoryFakeBuilder;
    use catalog_domain::value_objects::CategoryId;

    fn repo() -> InMemoryRepository<Category> {
        InMemoryRepository::default()
    }

    #[tokio::test]
    async fn test_insert_and_find_by_id() {
        let repo = repo();
        let category = CategoryFakeBuilder::a_category().build_one();

        repo.insert(&category).await.unwrap();

        let found = repo.find_by_id(category.category_id()).await.unwrap();
        assert_eq!(found, Some(category));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = repo();
        let found = repo.find_by_id(&CategoryId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_bulk_insert_keeps_order() {
        let repo = repo();
        let categories = CategoryFakeBuilder::the_categories(3).build();

        repo.bulk_insert(&categories).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), categories);
    }

    #[tokio::test]
    async fn test_update() {
        let repo = repo();
        let mut category = CategoryFakeBuilder::a_category().build_one();
        repo.insert(&category).await.unwrap();

        category.change_name("updated");
        repo.update(&category).await.unwrap();

        let found = repo.find_by_id(category.category_id()).await.unwrap().unwrap();
        assert_eq!(found.name(), "updated");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = repo();
        let category = CategoryFakeBuilder::a_category().build_one();

        let err = repo.update(&category).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Category Not Found using ID {}", category.category_id())
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo();
        let category = CategoryFakeBuilder::a_category().build_one();
        repo.insert(&category).await.unwrap();

        repo.delete(category.category_id()).await.unwrap();
        assert!(repo.store().is_empty());

        let err = repo.delete(category.category_id()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_by_ids() {
        let repo = repo();
        let categories = CategoryFakeBuilder::the_categories(3).build();
        repo.bulk_insert(&categories).await.unwrap();

        let ids = vec![*categories[2].category_id(), CategoryId::new()];
        let found = repo.find_by_ids(&ids).await.unwrap();
        assert_eq!(found, vec![categories[2].clone()]);
    }

    #[tokio::test]
    async fn test_exists_by_id() {
        let repo = repo();
        let category = CategoryFakeBuilder::a_category().build_one();
        repo.insert(&category).await.unwrap();
        let missing = CategoryId::new();

        let result = repo
            .exists_by_id(&[*category.category_id(), missing])
            .await
            .unwrap();
        assert_eq!(result.exists, vec![*category.category_id()]);
        assert_eq!(result.not_exists, vec![missing]);
    }

    #[tokio::test]
    async fn test_exists_by_id_rejects_empty_list() {
        let repo = repo();
        let err = repo.exists_by_id(&[]).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidArgument("ids must be an array with at least one element".into())
        );
    }

    #[tokio::test]
    async fn test_shared_store() {
        let store = InMemoryStore::new();
        let repo = InMemoryRepository::<Category>::new(store.clone());
        repo.insert(&CategoryFakeBuilder::a_category().build_one())
            .await
            .unwrap();
        assert_eq!(store.len(), 1);
    }
}
