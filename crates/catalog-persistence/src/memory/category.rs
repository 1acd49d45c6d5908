//! In-memory category repository

use catalog_domain::{
    category::{Category, CategoryFilter},
    search::SortDirection,
};

use super::searchable::{InMemorySearchableRepository, SearchableCollection};
use super::store::InMemoryStore;
use crate::error::PersistenceResult;

pub type InMemoryCategoryRepository = InMemorySearchableRepository<Category, CategoryFilter>;

/// Collection settings for categories: case-insensitive name filter, byte
/// order on `name`, newest first by default
pub fn category_collection() -> PersistenceResult<SearchableCollection<Category, CategoryFilter>> {
    SearchableCollection::builder(|category: &Category, term: &CategoryFilter| {
        category
            .name()
            .to_lowercase()
            .contains(&term.to_lowercase())
    })
    .sort_by("name", |a: &Category, b: &Category| {
        a.name().as_bytes().cmp(b.name().as_bytes())
    })
    .sort_by_key("createdAt", |category: &Category| category.created_at())
    .default_sort("createdAt", SortDirection::Desc)
    .build()
}

/// Category repository over `store`
pub fn category_in_memory_repository(
    store: InMemoryStore<Category>,
) -> PersistenceResult<InMemoryCategoryRepository> {
    Ok(InMemorySearchableRepository::new(store, category_collection()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_domain::repositories::{Repository, SearchableRepository};
    use catalog_domain::search::{SearchParams, SearchParamsInput};
    use catalog_domain::testing::CategoryFakeBuilder;
    use chrono::{Duration, Utc};

    fn repo() -> InMemoryCategoryRepository {
        category_in_memory_repository(InMemoryStore::new()).unwrap()
    }

    fn names(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(Category::name).collect()
    }

    #[test]
    fn test_sortable_fields() {
        assert_eq!(repo().sortable_fields(), vec!["name", "createdAt"]);
    }

    #[tokio::test]
    async fn test_search_without_params_orders_by_created_at_desc() {
        let repo = repo();
        let now = Utc::now();
        let categories = CategoryFakeBuilder::the_categories(4)
            .with_name_fn(|i| format!("test {i}"))
            .with_created_at_fn(move |i| now + Duration::milliseconds(i as i64 * 100))
            .build();
        repo.bulk_insert(&categories).await.unwrap();

        let result = repo.search(&SearchParams::default()).await.unwrap();

        assert_eq!(names(&result.items), vec!["test 3", "test 2", "test 1", "test 0"]);
        assert_eq!(result.total, 4);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.per_page, 15);
        assert_eq!(result.last_page, 1);
    }

    #[tokio::test]
    async fn test_search_sixteen_records_without_params() {
        let repo = repo();
        let categories = CategoryFakeBuilder::the_categories(16).build();
        repo.bulk_insert(&categories).await.unwrap();

        let result = repo.search(&SearchParams::default()).await.unwrap();

        assert_eq!(result.items.len(), 15);
        assert_eq!(result.total, 16);
        assert_eq!(result.last_page, 2);
    }

    #[tokio::test]
    async fn test_search_filter_sort_and_paginate_by_name() {
        let repo = repo();
        let created_at = Utc::now();
        let names_in = ["a", "AAA", "AaA", "b", "c"];
        let categories = CategoryFakeBuilder::the_categories(names_in.len())
            .with_name_fn(move |i| names_in[i].to_string())
            .with_created_at(created_at)
            .build();
        repo.bulk_insert(&categories).await.unwrap();

        let page = |page: i64| {
            SearchParams::new(SearchParamsInput {
                page: Some(page),
                per_page: Some(2),
                sort: Some("name".into()),
                sort_dir: None,
                filter: Some("a".to_string()),
            })
        };

        let first = repo.search(&page(1)).await.unwrap();
        assert_eq!(names(&first.items), vec!["AAA", "AaA"]);
        assert_eq!(first.total, 3);
        assert_eq!(first.last_page, 2);

        let second = repo.search(&page(2)).await.unwrap();
        assert_eq!(names(&second.items), vec!["a"]);
        assert_eq!(second.total, 3);
    }

    #[tokio::test]
    async fn test_search_sort_name_desc() {
        let repo = repo();
        let names_in = ["b", "a", "d", "e", "c"];
        let categories = CategoryFakeBuilder::the_categories(names_in.len())
            .with_name_fn(move |i| names_in[i].to_string())
            .build();
        repo.bulk_insert(&categories).await.unwrap();

        let params = SearchParams::new(SearchParamsInput {
            per_page: Some(2),
            sort: Some("name".into()),
            sort_dir: Some("desc".into()),
            ..Default::default()
        });
        let result = repo.search(&params).await.unwrap();

        assert_eq!(names(&result.items), vec!["e", "d"]);
        assert_eq!(result.last_page, 3);
    }

    #[tokio::test]
    async fn test_search_filter_is_case_insensitive() {
        let repo = repo();
        let names_in = ["test", "a", "TEST", "TeSt"];
        let categories = CategoryFakeBuilder::the_categories(names_in.len())
            .with_name_fn(move |i| names_in[i].to_string())
            .build();
        repo.bulk_insert(&categories).await.unwrap();

        let params = SearchParams::new(SearchParamsInput {
            per_page: Some(2),
            filter: Some("TEST".to_string()),
            sort: Some("name".into()),
            ..Default::default()
        });
        let result = repo.search(&params).await.unwrap();

        assert_eq!(names(&result.items), vec!["TEST", "TeSt"]);
        assert_eq!(result.total, 3);
        assert_eq!(result.last_page, 2);
    }
}
