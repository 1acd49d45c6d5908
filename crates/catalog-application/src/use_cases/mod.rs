//! Category use cases
//!
//! Each use case holds the repository it needs and is stateless otherwise,
//! so one instance can serve every request.

use std::sync::Arc;

use async_trait::async_trait;

use catalog_domain::category::Category;
use catalog_domain::entity::Entity;
use catalog_domain::errors::DomainError;
use catalog_domain::repositories::{CategoryRepository, Repository};
use catalog_domain::value_objects::CategoryId;

use crate::errors::ApplicationResult;

mod activation;
mod create;
mod delete;
mod get;
mod list;
mod update;

pub use activation::{ActivateCategoryUseCase, DeactivateCategoryUseCase};
pub use create::CreateCategoryUseCase;
pub use delete::DeleteCategoryUseCase;
pub use get::GetCategoryUseCase;
pub use list::ListCategoriesUseCase;
pub use update::UpdateCategoryUseCase;

/// A single application operation
#[async_trait]
pub trait UseCase<I: Send + 'static, O>: Send + Sync {
    async fn execute(&self, input: I) -> ApplicationResult<O>;
}

pub(crate) fn parse_id(id: &str) -> ApplicationResult<CategoryId> {
    Ok(CategoryId::parse(id)?)
}

/// Load a category or fail with `NotFound` naming the requested id
pub(crate) async fn find_or_fail(
    repository: &Arc<dyn CategoryRepository>,
    id: &str,
) -> ApplicationResult<Category> {
    let category_id = parse_id(id)?;
    repository
        .find_by_id(&category_id)
        .await?
        .ok_or_else(|| DomainError::not_found(Category::NAME, id).into())
}
