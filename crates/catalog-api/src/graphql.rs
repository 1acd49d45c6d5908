//! GraphQL schema over the category use cases
//!
//! Served at `POST /graphql`; `GET /graphql` returns the GraphiQL page.
//! Failures carry `extensions.code` (`NOT_FOUND`, `UNPROCESSABLE_ENTITY`)
//! and the individual messages under `extensions.messages`.

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, InputObject, MaybeUndefined, Object, Schema,
    SimpleObject,
};

use catalog_application::{
    dto::iso_millis, ApplicationError, CategoryIdInput, CategoryOutput, CreateCategoryInput,
    ListCategoriesInput, PaginationOutput, UpdateCategoryInput, UseCase,
};

use crate::{error::ApiError, state::AppState};

pub type CategorySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> CategorySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

fn graphql_error(err: ApplicationError) -> async_graphql::Error {
    ApiError::from(err).extend()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn get_category(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<GraphQLCategory> {
        let state = ctx.data::<AppState>()?;
        let output = state
            .get_category
            .execute(CategoryIdInput::new(id))
            .await
            .map_err(graphql_error)?;
        Ok(output.into())
    }

    async fn search_categories(
        &self,
        ctx: &Context<'_>,
        search_params: Option<GraphQLSearchCategories>,
    ) -> async_graphql::Result<GraphQLCategoriesPaginated> {
        let state = ctx.data::<AppState>()?;
        let input = search_params.map(ListCategoriesInput::from).unwrap_or_default();
        let output = state
            .list_categories
            .execute(input)
            .await
            .map_err(graphql_error)?;
        Ok(output.into())
    }

    async fn admin_system_info(&self) -> SystemInfo {
        SystemInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_category(
        &self,
        ctx: &Context<'_>,
        input: GraphQLCreateCategory,
    ) -> async_graphql::Result<GraphQLCategory> {
        let state = ctx.data::<AppState>()?;
        let output = state
            .create_category
            .execute(CreateCategoryInput::from(input))
            .await
            .map_err(graphql_error)?;
        Ok(output.into())
    }

    async fn update_category(
        &self,
        ctx: &Context<'_>,
        id: String,
        input: GraphQLUpdateCategory,
    ) -> async_graphql::Result<GraphQLCategory> {
        let state = ctx.data::<AppState>()?;
        let output = state
            .update_category
            .execute(input.into_input(id))
            .await
            .map_err(graphql_error)?;
        Ok(output.into())
    }

    async fn delete_category(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<bool> {
        let state = ctx.data::<AppState>()?;
        state
            .delete_category
            .execute(CategoryIdInput::new(id))
            .await
            .map_err(graphql_error)?;
        Ok(true)
    }

    async fn activate_category(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<GraphQLCategory> {
        let state = ctx.data::<AppState>()?;
        let output = state
            .activate_category
            .execute(CategoryIdInput::new(id))
            .await
            .map_err(graphql_error)?;
        Ok(output.into())
    }

    async fn deactivate_category(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<GraphQLCategory> {
        let state = ctx.data::<AppState>()?;
        let output = state
            .deactivate_category
            .execute(CategoryIdInput::new(id))
            .await
            .map_err(graphql_error)?;
        Ok(output.into())
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Category")]
pub struct GraphQLCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

impl From<CategoryOutput> for GraphQLCategory {
    fn from(output: CategoryOutput) -> Self {
        Self {
            created_at: iso_millis::format(&output.created_at),
            id: output.id,
            name: output.name,
            description: output.description,
            is_active: output.is_active,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Meta")]
pub struct GraphQLMeta {
    pub total: usize,
    pub current_page: usize,
    pub last_page: usize,
    pub per_page: usize,
}

#[derive(SimpleObject)]
#[graphql(name = "CategoriesPaginated")]
pub struct GraphQLCategoriesPaginated {
    pub data: Vec<GraphQLCategory>,
    pub meta: GraphQLMeta,
}

impl From<PaginationOutput<CategoryOutput>> for GraphQLCategoriesPaginated {
    fn from(output: PaginationOutput<CategoryOutput>) -> Self {
        Self {
            meta: GraphQLMeta {
                total: output.total,
                current_page: output.current_page,
                last_page: output.last_page,
                per_page: output.per_page,
            },
            data: output.items.into_iter().map(GraphQLCategory::from).collect(),
        }
    }
}

#[derive(SimpleObject)]
pub struct SystemInfo {
    pub version: String,
    pub name: String,
}

#[derive(InputObject, Default)]
#[graphql(name = "SearchCategories")]
pub struct GraphQLSearchCategories {
    pub page: Option<i32>,
    pub per_page: Option<i32>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<String>,
}

impl From<GraphQLSearchCategories> for ListCategoriesInput {
    fn from(params: GraphQLSearchCategories) -> Self {
        Self {
            page: params.page.map(i64::from),
            per_page: params.per_page.map(i64::from),
            sort: params.sort,
            sort_dir: params.sort_dir,
            filter: params.filter,
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "CreateCategoryPayload")]
pub struct GraphQLCreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl From<GraphQLCreateCategory> for CreateCategoryInput {
    fn from(payload: GraphQLCreateCategory) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            is_active: payload.is_active,
        }
    }
}

#[derive(InputObject, Default)]
#[graphql(name = "UpdateCategoryPayload")]
pub struct GraphQLUpdateCategory {
    pub name: Option<String>,
    /// Explicit `null` clears the description
    pub description: MaybeUndefined<String>,
    pub is_active: Option<bool>,
}

impl GraphQLUpdateCategory {
    pub fn into_input(self, id: String) -> UpdateCategoryInput {
        let description = match self.description {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(description) => Some(Some(description)),
        };
        UpdateCategoryInput {
            id,
            name: self.name,
            description,
            is_active: self.is_active,
        }
    }
}
