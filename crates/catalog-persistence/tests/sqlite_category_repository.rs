//! SQLite category repository against a real database file

use catalog_domain::category::Category;
use catalog_domain::errors::DomainError;
use catalog_domain::repositories::{Repository, SearchableRepository};
use catalog_domain::search::{SearchParams, SearchParamsInput};
use catalog_domain::testing::CategoryFakeBuilder;
use catalog_domain::value_objects::CategoryId;
use catalog_persistence::sqlite::{open_database, open_in_memory, SqliteCategoryRepository};
use chrono::{Duration, Utc};

fn repo() -> SqliteCategoryRepository {
    SqliteCategoryRepository::new(open_in_memory().unwrap())
}

fn names(categories: &[Category]) -> Vec<&str> {
    categories.iter().map(Category::name).collect()
}

// ============================================================================
// CRUD
// ============================================================================

#[tokio::test]
async fn test_insert_and_find_by_id() {
    let repo = repo();
    let category = CategoryFakeBuilder::a_category().build_one();

    repo.insert(&category).await.unwrap();

    let found = repo.find_by_id(category.category_id()).await.unwrap();
    assert_eq!(found, Some(category));
    assert!(repo.find_by_id(&CategoryId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_bulk_insert_and_find_all() {
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

    category.change_name("Movie");
    category.change_description(None);
    category.deactivate();
    repo.update(&category).await.unwrap();

    let found = repo.find_by_id(category.category_id()).await.unwrap();
    assert_eq!(found, Some(category));
}

#[tokio::test]
async fn test_update_and_delete_missing_are_not_found() {
    let repo = repo();
    let category = CategoryFakeBuilder::a_category().build_one();
    let expected = format!("Category Not Found using ID {}", category.category_id());

    let err = repo.update(&category).await.unwrap_err();
    assert_eq!(err.to_string(), expected);

    let err = repo.delete(category.category_id()).await.unwrap_err();
    assert_eq!(err.to_string(), expected);
}

#[tokio::test]
async fn test_delete() {
    let repo = repo();
    let category = CategoryFakeBuilder::a_category().build_one();
    repo.insert(&category).await.unwrap();

    repo.delete(category.category_id()).await.unwrap();

    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_by_ids_and_exists_by_id() {
    let repo = repo();
    let categories = CategoryFakeBuilder::the_categories(2).build();
    repo.bulk_insert(&categories).await.unwrap();
    let missing = CategoryId::new();
    let ids = vec![*categories[0].category_id(), missing];

    let found = repo.find_by_ids(&ids).await.unwrap();
    assert_eq!(found, vec![categories[0].clone()]);

    let result = repo.exists_by_id(&ids).await.unwrap();
    assert_eq!(result.exists, vec![*categories[0].category_id()]);
    assert_eq!(result.not_exists, vec![missing]);

    let err = repo.exists_by_id(&[]).await.unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidArgument("ids must be an array with at least one element".into())
    );
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    let category = CategoryFakeBuilder::a_category().build_one();

    {
        let repo = SqliteCategoryRepository::new(open_database(&path).unwrap());
        repo.insert(&category).await.unwrap();
    }

    let repo = SqliteCategoryRepository::new(open_database(&path).unwrap());
    let found = repo.find_by_id(category.category_id()).await.unwrap();
    assert_eq!(found, Some(category));
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_without_params_orders_by_created_at_desc() {
    let repo = repo();
    let now = Utc::now();
    let categories = CategoryFakeBuilder::the_categories(16)
        .with_name_fn(|i| format!("test {i}"))
        .with_created_at_fn(move |i| now + Duration::milliseconds(i as i64))
        .build();
    repo.bulk_insert(&categories).await.unwrap();

    let result = repo.search(&SearchParams::default()).await.unwrap();

    assert_eq!(result.items.len(), 15);
    assert_eq!(result.items[0].name(), "test 15");
    assert_eq!(result.items[14].name(), "test 1");
    assert_eq!(result.total, 16);
    assert_eq!(result.last_page, 2);
}

#[tokio::test]
async fn test_search_filter_sort_and_paginate_by_name() {
    let repo = repo();
    let names_in = ["a", "AAA", "AaA", "b", "c"];
    let categories = CategoryFakeBuilder::the_categories(names_in.len())
        .with_name_fn(move |i| names_in[i].to_string())
        .build();
    repo.bulk_insert(&categories).await.unwrap();

    let page = |page: i64| {
        SearchParams::new(SearchParamsInput {
            page: Some(page),
            per_page: Some(2),
            sort: Some("name".into()),
            sort_dir: Some("asc".into()),
            filter: Some("a".to_string()),
        })
    };

    let first = repo.search(&page(1)).await.unwrap();
    assert_eq!(names(&first.items), vec!["AAA", "AaA"]);
    assert_eq!(first.total, 3);
    assert_eq!(first.last_page, 2);

    let second = repo.search(&page(2)).await.unwrap();
    assert_eq!(names(&second.items), vec!["a"]);

    let third = repo.search(&page(3)).await.unwrap();
    assert!(third.items.is_empty());
    assert_eq!(third.total, 3);
}

#[tokio::test]
async fn test_search_filter_treats_wildcards_literally() {
    let repo = repo();
    let names_in = ["50% off", "5000 off", "snake_case", "snakeXcase"];
    let categories = CategoryFakeBuilder::the_categories(names_in.len())
        .with_name_fn(move |i| names_in[i].to_string())
        .build();
    repo.bulk_insert(&categories).await.unwrap();

    let search = |term: &str| {
        SearchParams::new(SearchParamsInput {
            sort: Some("name".into()),
            filter: Some(term.to_string()),
            ..Default::default()
        })
    };

    let result = repo.search(&search("0%")).await.unwrap();
    assert_eq!(names(&result.items), vec!["50% off"]);

    let result = repo.search(&search("e_c")).await.unwrap();
    assert_eq!(names(&result.items), vec!["snake_case"]);
}

#[tokio::test]
async fn test_search_filter_folds_unicode_case() {
    let repo = repo();
    let names_in = ["ÉCOLE", "école", "Ärger", "ECOLE"];
    let categories = CategoryFakeBuilder::the_categories(names_in.len())
        .with_name_fn(move |i| names_in[i].to_string())
        .build();
    repo.bulk_insert(&categories).await.unwrap();

    let search = |term: &str| {
        SearchParams::new(SearchParamsInput {
            sort: Some("name".into()),
            filter: Some(term.to_string()),
            ..Default::default()
        })
    };

    for term in ["éco", "ÉCO", "ÉcO"] {
        let result = repo.search(&search(term)).await.unwrap();
        assert_eq!(result.total, 2, "term {term}");
        let mut found = names(&result.items);
        found.sort_unstable();
        assert_eq!(found, vec!["ÉCOLE", "école"], "term {term}");
    }

    let result = repo.search(&search("ärg")).await.unwrap();
    assert_eq!(names(&result.items), vec!["Ärger"]);
}

#[tokio::test]
async fn test_search_unknown_sort_falls_back_to_newest_first() {
    let repo = repo();
    let now = Utc::now();
    let categories = CategoryFakeBuilder::the_categories(3)
        .with_name_fn(|i| format!("test {i}"))
        .with_created_at_fn(move |i| now + Duration::seconds(i as i64))
        .build();
    repo.bulk_insert(&categories).await.unwrap();

    let params = SearchParams::new(SearchParamsInput {
        sort: Some("fake".into()),
        ..Default::default()
    });
    let result = repo.search(&params).await.unwrap();

    assert_eq!(names(&result.items), vec!["test 2", "test 1", "test 0"]);
}

#[test]
fn test_sortable_fields() {
    assert_eq!(repo().sortable_fields(), vec!["name", "createdAt"]);
}
