//! API route definitions

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    middleware,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    graphql::build_schema,
    handlers::{categories, health},
    middleware::logging_middleware,
    state::AppState,
};

/// REST routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Categories
        .route(
            "/categories",
            post(categories::create_category).get(categories::list_categories),
        )
        .route(
            "/categories/{id}",
            get(categories::get_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/categories/{id}/activate",
            post(categories::activate_category),
        )
        .route(
            "/categories/{id}/deactivate",
            post(categories::deactivate_category),
        )
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
}

/// GraphQL endpoint plus the GraphiQL page
pub fn graphql_routes(state: &AppState) -> Router<AppState> {
    let schema = build_schema(state.clone());
    Router::new().route("/graphql", get(graphiql).post_service(GraphQL::new(schema)))
}

/// The complete application with middleware and state applied
pub fn app(state: AppState) -> Router {
    api_routes()
        .merge(graphql_routes(&state))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            logging_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::create_category,
        categories::list_categories,
        categories::get_category,
        categories::update_category,
        categories::delete_category,
        categories::activate_category,
        categories::deactivate_category,
    ),
    components(schemas(
        crate::presenters::CategoryPresenter,
        crate::presenters::CategoryCollectionPresenter,
        crate::presenters::PaginationMeta,
        categories::CreateCategoryRequest,
        categories::UpdateCategoryRequest,
        health::HealthResponse,
    )),
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = "Category management over REST and GraphQL"
    )
)]
pub struct ApiDoc;
