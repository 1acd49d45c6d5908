//! Filter → sort → paginate over an in-memory collection
//!
//! ```text
//!   all items ──► apply_filter ──► apply_sort ──► apply_paginate ──► SearchResult
//!                     │                │
//!                 blank term       unknown field
//!                 = borrowed       = borrowed
//! ```
//!
//! Sorting is resolved through a comparator map registered when the
//! collection is built, so a field name never reaches the entity at search
//! time. Fields missing from the map are not sortable.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use catalog_domain::{
    entity::Entity,
    errors::DomainResult,
    repositories::{ExistsResult, Repository, SearchableRepository},
    search::{FilterTerm, SearchParams, SearchResult, SortDirection},
};

use super::repository::InMemoryRepository;
use super::store::InMemoryStore;
use crate::error::{PersistenceError, PersistenceResult};

/// Three-way comparison of two items on one field
pub type Comparator<E> = Arc<dyn Fn(&E, &E) -> Ordering + Send + Sync>;

/// Filter predicate: does the item match the term
pub type Matcher<E, F> = Arc<dyn Fn(&E, &F) -> bool + Send + Sync>;

/// Searchable view over a slice of entities
pub struct SearchableCollection<E, F = String> {
    comparators: Vec<(String, Comparator<E>)>,
    matcher: Matcher<E, F>,
    default_sort: Option<(String, SortDirection)>,
}

impl<E, F> fmt::Debug for SearchableCollection<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchableCollection")
            .field(
                "sortable_fields",
                &self.comparators.iter().map(|(field, _)| field).collect::<Vec<_>>(),
            )
            .field("default_sort", &self.default_sort)
            .finish()
    }
}

impl<E, F> Clone for SearchableCollection<E, F> {
    fn clone(&self) -> Self {
        Self {
            comparators: self.comparators.clone(),
            matcher: Arc::clone(&self.matcher),
            default_sort: self.default_sort.clone(),
        }
    }
}

impl<E: Clone + 'static, F: FilterTerm + 'static> SearchableCollection<E, F> {
    /// Start configuring a collection around its filter predicate
    pub fn builder(
        matcher: impl Fn(&E, &F) -> bool + Send + Sync + 'static,
    ) -> SearchableCollectionBuilder<E, F> {
        SearchableCollectionBuilder {
            comparators: Vec::new(),
            matcher: Arc::new(matcher),
            default_sort: None,
        }
    }

    /// Field names with a registered comparator, in registration order
    pub fn sortable_fields(&self) -> Vec<String> {
        self.comparators.iter().map(|(field, _)| field.clone()).collect()
    }

    /// Sort applied when a search names no field
    pub fn default_sort(&self) -> Option<(&str, SortDirection)> {
        self.default_sort
            .as_ref()
            .map(|(field, direction)| (field.as_str(), *direction))
    }

    /// Keep the items matching `term`. A missing or blank term returns the
    /// input borrowed without calling the matcher.
    pub fn apply_filter<'a>(&self, items: &'a [E], term: Option<&F>) -> Cow<'a, [E]> {
        match term {
            Some(term) if !term.is_blank() => Cow::Owned(
                items
                    .iter()
                    .filter(|item| (self.matcher)(*item, term))
                    .cloned()
                    .collect(),
            ),
            _ => Cow::Borrowed(items),
        }
    }

    /// Stable sort on `field`. A missing or unknown field returns the input
    /// untouched.
    pub fn apply_sort<'a>(
        &self,
        items: Cow<'a, [E]>,
        field: Option<&str>,
        direction: Option<SortDirection>,
    ) -> Cow<'a, [E]> {
        let Some(compare) = field.and_then(|field| self.comparator(field)) else {
            return items;
        };

        let mut sorted = items.into_owned();
        match direction.unwrap_or_default() {
            SortDirection::Asc => sorted.sort_by(|a, b| compare(a, b)),
            SortDirection::Desc => sorted.sort_by(|a, b| compare(b, a)),
        }
        Cow::Owned(sorted)
    }

    /// Items of the 1-based `page`. Out-of-range pages, `page == 0` and
    /// `per_page == 0` all give an empty page.
    pub fn apply_paginate(&self, items: &[E], page: usize, per_page: usize) -> Vec<E> {
        if page == 0 || per_page == 0 {
            return Vec::new();
        }
        let start = (page - 1).saturating_mul(per_page);
        if start >= items.len() {
            return Vec::new();
        }
        let end = start.saturating_add(per_page).min(items.len());
        items[start..end].to_vec()
    }

    /// Filter, then sort (by the requested field or the default), then
    /// paginate. `total` counts the filtered items.
    pub fn search(&self, items: &[E], params: &SearchParams<F>) -> SearchResult<E> {
        let filtered = self.apply_filter(items, params.filter());
        let total = filtered.len();

        let (field, direction) = match params.sort() {
            Some(field) => (Some(field), params.sort_dir()),
            None => match self.default_sort() {
                Some((field, direction)) => (Some(field), Some(direction)),
                None => (None, None),
            },
        };
        let sorted = self.apply_sort(filtered, field, direction);
        let page_items = self.apply_paginate(&sorted, params.page(), params.per_page());

        SearchResult::new(page_items, total, params.page(), params.per_page())
    }

    fn comparator(&self, field: &str) -> Option<&Comparator<E>> {
        self.comparators
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, compare)| compare)
    }
}

/// Builder for [`SearchableCollection`]
pub struct SearchableCollectionBuilder<E, F> {
    comparators: Vec<(String, Comparator<E>)>,
    matcher: Matcher<E, F>,
    default_sort: Option<(String, SortDirection)>,
}

impl<E: 'static, F: 'static> SearchableCollectionBuilder<E, F> {
    /// Make `field` sortable by the natural order of an extracted key
    pub fn sort_by_key<K: Ord + 'static>(
        self,
        field: impl Into<String>,
        key: impl Fn(&E) -> K + Send + Sync + 'static,
    ) -> Self {
        self.sort_by(field, move |a, b| key(a).cmp(&key(b)))
    }

    /// Make `field` sortable with an explicit comparator. Registering a
    /// field again replaces its comparator.
    pub fn sort_by(
        mut self,
        field: impl Into<String>,
        compare: impl Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        let field = field.into();
        let compare: Comparator<E> = Arc::new(compare);
        match self.comparators.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = compare,
            None => self.comparators.push((field, compare)),
        }
        self
    }

    /// Sort used when a search names no field
    pub fn default_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.default_sort = Some((field.into(), direction));
        self
    }

    /// Fails when the default sort names a field without a comparator
    pub fn build(self) -> PersistenceResult<SearchableCollection<E, F>> {
        if let Some((field, _)) = &self.default_sort {
            if !self.comparators.iter().any(|(name, _)| name == field) {
                return Err(PersistenceError::configuration(format!(
                    "default sort field '{field}' is not sortable"
                )));
            }
        }

        Ok(SearchableCollection {
            comparators: self.comparators,
            matcher: self.matcher,
            default_sort: self.default_sort,
        })
    }
}

/// In-memory repository that also answers searches
#[derive(Debug)]
pub struct InMemorySearchableRepository<E, F = String> {
    repository: InMemoryRepository<E>,
    collection: SearchableCollection<E, F>,
}

impl<E: Entity, F> InMemorySearchableRepository<E, F> {
    pub fn new(store: InMemoryStore<E>, collection: SearchableCollection<E, F>) -> Self {
        Self {
            repository: InMemoryRepository::new(store),
            collection,
        }
    }

    pub fn store(&self) -> &InMemoryStore<E> {
        self.repository.store()
    }

    pub fn collection(&self) -> &SearchableCollection<E, F> {
        &self.collection
    }
}

#[async_trait]
impl<E, F> Repository<E> for InMemorySearchableRepository<E, F>
where
    E: Entity,
    F: Send + Sync + 'static,
{
    async fn insert(&self, entity: &E) -> DomainResult<()> {
        self.repository.insert(entity).await
    }

    async fn bulk_insert(&self, entities: &[E]) -> DomainResult<()> {
        self.repository.bulk_insert(entities).await
    }

    async fn update(&self, entity: &E) -> DomainResult<()> {
        self.repository.update(entity).await
    }

    async fn delete(&self, id: &E::Id) -> DomainResult<()> {
        self.repository.delete(id).await
    }

    async fn find_by_id(&self, id: &E::Id) -> DomainResult<Option<E>> {
        self.repository.find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<E>> {
        self.repository.find_all().await
    }

    async fn find_by_ids(&self, ids: &[E::Id]) -> DomainResult<Vec<E>> {
        self.repository.find_by_ids(ids).await
    }

    async fn exists_by_id(&self, ids: &[E::Id]) -> DomainResult<ExistsResult<E::Id>> {
        self.repository.exists_by_id(ids).await
    }
}

#[async_trait]
impl<E, F> SearchableRepository<E, F> for InMemorySearchableRepository<E, F>
where
    E: Entity,
    F: FilterTerm + Send + Sync + 'static,
{
    fn sortable_fields(&self) -> Vec<String> {
        self.collection.sortable_fields()
    }

    async fn search(&self, params: &SearchParams<F>) -> DomainResult<SearchResult<E>> {
        debug!(
            entity = E::NAME,
            page = params.page(),
            per_page = params.per_page(),
            sort = ?params.sort(),
            "Searching in memory"
        );
        let items = self.store().read();
        Ok(self.collection.search(&items, params))
    }
}
