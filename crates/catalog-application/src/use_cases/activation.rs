use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use catalog_domain::repositories::{CategoryRepository, Repository};

use super::{find_or_fail, UseCase};
use crate::dto::{ActivateCategoryInput, CategoryOutput, DeactivateCategoryInput};
use crate::errors::ApplicationResult;

async fn set_active(
    repository: &Arc<dyn CategoryRepository>,
    id: &str,
    active: bool,
) -> ApplicationResult<CategoryOutput> {
    let mut category = find_or_fail(repository, id).await?;
    if active {
        category.activate();
    } else {
        category.deactivate();
    }
    repository.update(&category).await?;
    info!(category_id = %category.category_id(), is_active = active, "Category activation changed");
    Ok(CategoryOutput::from_domain(&category))
}

pub struct ActivateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl ActivateCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<ActivateCategoryInput, CategoryOutput> for ActivateCategoryUseCase {
    async fn execute(&self, input: ActivateCategoryInput) -> ApplicationResult<CategoryOutput> {
        set_active(&self.repository, &input.id, true).await
    }
}

pub struct DeactivateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl DeactivateCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<DeactivateCategoryInput, CategoryOutput> for DeactivateCategoryUseCase {
    async fn execute(&self, input: DeactivateCategoryInput) -> ApplicationResult<CategoryOutput> {
        set_active(&self.repository, &input.id, false).await
    }
}
