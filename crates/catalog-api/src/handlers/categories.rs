//! Category REST handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use catalog_application::{CategoryIdInput, ListCategoriesInput, UseCase};
use catalog_domain::parse_page_number;

use crate::{
    error::ApiResult,
    presenters::{CategoryCollectionPresenter, CategoryPresenter},
    state::AppState,
    validation,
};

/// Query parameters for category listing
///
/// Paging values stay raw text here; anything that is not a positive
/// integer falls back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchCategoriesQuery {
    /// 1-based page number, default 1
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Page size, default 15
    #[param(value_type = Option<i64>)]
    pub per_page: Option<String>,
    /// `name` or `createdAt`
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub sort_dir: Option<String>,
    /// Case-insensitive substring of the name
    pub filter: Option<String>,
}

impl From<SearchCategoriesQuery> for ListCategoriesInput {
    fn from(query: SearchCategoriesQuery) -> Self {
        Self {
            page: query.page.as_deref().and_then(parse_page_number),
            per_page: query.per_page.as_deref().and_then(parse_page_number),
            sort: query.sort,
            sort_dir: query.sort_dir,
            filter: query.filter,
        }
    }
}

/// Create request body
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Update request body; every field is optional
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    /// `null` clears the description
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryPresenter),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CategoryPresenter>)> {
    let Json(body) = payload?;
    let input = validation::create_category_input(&body)?;
    let output = state.create_category.execute(input).await?;
    Ok((StatusCode::CREATED, Json(output.into())))
}

/// Search categories
#[utoipa::path(
    get,
    path = "/categories",
    params(SearchCategoriesQuery),
    responses(
        (status = 200, description = "One page of categories", body = CategoryCollectionPresenter)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<SearchCategoriesQuery>,
) -> ApiResult<Json<CategoryCollectionPresenter>> {
    let output = state
        .list_categories
        .execute(ListCategoriesInput::from(query))
        .await?;
    Ok(Json(output.into()))
}

/// Get a category
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = String, Path, description = "Category UUID")),
    responses(
        (status = 200, description = "Category found", body = CategoryPresenter),
        (status = 404, description = "Category not found"),
        (status = 422, description = "Malformed id")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CategoryPresenter>> {
    validation::uuid_param(&id)?;
    let output = state.get_category.execute(CategoryIdInput::new(id)).await?;
    Ok(Json(output.into()))
}

/// Update a category
#[utoipa::path(
    patch,
    path = "/categories/{id}",
    params(("id" = String, Path, description = "Category UUID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryPresenter),
        (status = 404, description = "Category not found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<CategoryPresenter>> {
    validation::uuid_param(&id)?;
    let Json(body) = payload?;
    let input = validation::update_category_input(&id, &body)?;
    let output = state.update_category.execute(input).await?;
    Ok(Json(output.into()))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(("id" = String, Path, description = "Category UUID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found"),
        (status = 422, description = "Malformed id")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    validation::uuid_param(&id)?;
    state
        .delete_category
        .execute(CategoryIdInput::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Activate a category
#[utoipa::path(
    post,
    path = "/categories/{id}/activate",
    params(("id" = String, Path, description = "Category UUID")),
    responses(
        (status = 200, description = "Category activated", body = CategoryPresenter),
        (status = 404, description = "Category not found")
    )
)]
pub async fn activate_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CategoryPresenter>> {
    validation::uuid_param(&id)?;
    let output = state
        .activate_category
        .execute(CategoryIdInput::new(id))
        .await?;
    Ok(Json(output.into()))
}

/// Deactivate a category
#[utoipa::path(
    post,
    path = "/categories/{id}/deactivate",
    params(("id" = String, Path, description = "Category UUID")),
    responses(
        (status = 200, description = "Category deactivated", body = CategoryPresenter),
        (status = 404, description = "Category not found")
    )
)]
pub async fn deactivate_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CategoryPresenter>> {
    validation::uuid_param(&id)?;
    let output = state
        .deactivate_category
        .execute(CategoryIdInput::new(id))
        .await?;
    Ok(Json(output.into()))
}
