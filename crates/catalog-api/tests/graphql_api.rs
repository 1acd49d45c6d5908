//! GraphQL schema tests executed directly against the schema

use std::sync::Arc;

use async_graphql::{Request, Response, Variables};
use serde_json::{json, Value};

use catalog_api::graphql::{build_schema, CategorySchema};
use catalog_api::AppState;
use catalog_domain::category::Category;
use catalog_domain::repositories::{CategoryRepository, Repository};
use catalog_domain::testing::CategoryFakeBuilder;
use catalog_domain::value_objects::CategoryId;
use catalog_persistence::{category_in_memory_repository, InMemoryStore};

const CATEGORY_FIELDS: &str = "id name description isActive createdAt";

fn setup() -> (CategorySchema, Arc<dyn CategoryRepository>) {
    let store: InMemoryStore<Category> = InMemoryStore::new();
    let repository: Arc<dyn CategoryRepository> =
        Arc::new(category_in_memory_repository(store).unwrap());
    (build_schema(AppState::new(Arc::clone(&repository))), repository)
}

async fn execute(schema: &CategorySchema, query: &str, variables: Value) -> Response {
    schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await
}

fn data(response: Response) -> Value {
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

fn error_code(response: &Response) -> Value {
    let extensions = response.errors[0].extensions.as_ref().unwrap();
    extensions.get("code").cloned().unwrap().into_json().unwrap()
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_get_category() {
    let (schema, repository) = setup();
    let category = CategoryFakeBuilder::a_category()
        .with_name("Movie")
        .build_one();
    repository.insert(&category).await.unwrap();

    let response = execute(
        &schema,
        &format!("query($id: String!) {{ getCategory(id: $id) {{ {CATEGORY_FIELDS} }} }}"),
        json!({ "id": category.category_id().to_string() }),
    )
    .await;

    let data = data(response);
    assert_eq!(data["getCategory"]["id"], category.category_id().to_string());
    assert_eq!(data["getCategory"]["name"], "Movie");
    assert_eq!(data["getCategory"]["isActive"], true);
}

#[tokio::test]
async fn test_get_category_not_found() {
    let (schema, _) = setup();
    let id = CategoryId::new().to_string();

    let response = execute(
        &schema,
        "query($id: String!) { getCategory(id: $id) { id } }",
        json!({ "id": id }),
    )
    .await;

    assert_eq!(
        response.errors[0].message,
        format!("Category Not Found using ID {id}")
    );
    assert_eq!(error_code(&response), json!("NOT_FOUND"));
}

#[tokio::test]
async fn test_search_categories() {
    let (schema, repository) = setup();
    let names = ["a", "AAA", "AaA", "b", "c"];
    let categories = CategoryFakeBuilder::the_categories(names.len())
        .with_name_fn(move |i| names[i].to_string())
        .build();
    repository.bulk_insert(&categories).await.unwrap();

    let response = execute(
        &schema,
        "query($params: SearchCategories) {
            searchCategories(searchParams: $params) {
                data { name }
                meta { total currentPage lastPage perPage }
            }
        }",
        json!({ "params": { "page": 1, "perPage": 2, "sort": "name", "filter": "a" } }),
    )
    .await;

    let data = data(response);
    assert_eq!(
        data["searchCategories"],
        json!({
            "data": [{ "name": "AAA" }, { "name": "AaA" }],
            "meta": { "total": 3, "currentPage": 1, "lastPage": 2, "perPage": 2 },
        })
    );
}

#[tokio::test]
async fn test_search_categories_without_params() {
    let (schema, _) = setup();
    let response = execute(
        &schema,
        "{ searchCategories { data { id } meta { total lastPage perPage } } }",
        json!({}),
    )
    .await;

    let data = data(response);
    assert_eq!(
        data["searchCategories"]["meta"],
        json!({ "total": 0, "lastPage": 1, "perPage": 15 })
    );
}

#[tokio::test]
async fn test_admin_system_info() {
    let (schema, _) = setup();
    let data = data(execute(&schema, "{ adminSystemInfo { name version } }", json!({})).await);

    assert_eq!(data["adminSystemInfo"]["name"], "catalog-api");
    assert_eq!(data["adminSystemInfo"]["version"], env!("CARGO_PKG_VERSION"));
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_create_category() {
    let (schema, repository) = setup();
    let response = execute(
        &schema,
        &format!(
            "mutation($input: CreateCategoryPayload!) {{
                createCategory(input: $input) {{ {CATEGORY_FIELDS} }}
            }}"
        ),
        json!({
            "input": { "name": "Movie", "description": "description test", "isActive": false }
        }),
    )
    .await;

    let created = data(response)["createCategory"].clone();
    assert_eq!(created["name"], "Movie");
    assert_eq!(created["description"], "description test");
    assert_eq!(created["isActive"], false);

    let id = CategoryId::parse(created["id"].as_str().unwrap()).unwrap();
    assert!(repository.find_by_id(&id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_create_category_validation_error() {
    let (schema, _) = setup();
    let response = execute(
        &schema,
        "mutation($input: CreateCategoryPayload!) { createCategory(input: $input) { id } }",
        json!({ "input": { "name": "a".repeat(256) } }),
    )
    .await;

    assert_eq!(error_code(&response), json!("UNPROCESSABLE_ENTITY"));
    assert_eq!(
        response.errors[0].message,
        "name must be shorter than or equal to 255 characters"
    );
}

#[tokio::test]
async fn test_update_category() {
    let (schema, repository) = setup();
    let category = CategoryFakeBuilder::a_category()
        .with_name("Movie")
        .with_description(Some("description test"))
        .build_one();
    repository.insert(&category).await.unwrap();
    let id = category.category_id().to_string();
    let query = "mutation($id: String!, $input: UpdateCategoryPayload!) {
        updateCategory(id: $id, input: $input) { name description isActive }
    }";

    let vars = json!({ "id": id, "input": { "name": "Documentary" } });
    let data_a = data(execute(&schema, query, vars).await);
    assert_eq!(
        data_a["updateCategory"],
        json!({ "name": "Documentary", "description": "description test", "isActive": true })
    );

    let data_b = data(
        execute(&schema, query, json!({ "id": id, "input": { "description": null } })).await,
    );
    assert_eq!(data_b["updateCategory"]["description"], Value::Null);
    assert_eq!(data_b["updateCategory"]["name"], "Documentary");
}

#[tokio::test]
async fn test_delete_and_toggle_category() {
    let (schema, repository) = setup();
    let category = CategoryFakeBuilder::a_category().build_one();
    repository.insert(&category).await.unwrap();
    let vars = json!({ "id": category.category_id().to_string() });

    let data_a = data(
        execute(
            &schema,
            "mutation($id: String!) { deactivateCategory(id: $id) { isActive } }",
            vars.clone(),
        )
        .await,
    );
    assert_eq!(data_a["deactivateCategory"]["isActive"], false);

    let data_b = data(
        execute(
            &schema,
            "mutation($id: String!) { activateCategory(id: $id) { isActive } }",
            vars.clone(),
        )
        .await,
    );
    assert_eq!(data_b["activateCategory"]["isActive"], true);

    let data_c = data(
        execute(
            &schema,
            "mutation($id: String!) { deleteCategory(id: $id) }",
            vars.clone(),
        )
        .await,
    );
    assert_eq!(data_c["deleteCategory"], true);

    let response = execute(
        &schema,
        "mutation($id: String!) { deleteCategory(id: $id) }",
        vars,
    )
    .await;
    assert_eq!(error_code(&response), json!("NOT_FOUND"));
}

#[tokio::test]
async fn test_malformed_id_is_unprocessable() {
    let (schema, _) = setup();
    let response = execute(
        &schema,
        "query { getCategory(id: \"fake id\") { id } }",
        json!({}),
    )
    .await;

    assert_eq!(error_code(&response), json!("UNPROCESSABLE_ENTITY"));
    assert_eq!(response.errors[0].message, "ID must be valid uuid: fake id");
}
