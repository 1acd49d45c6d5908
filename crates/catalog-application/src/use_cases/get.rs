use std::sync::Arc;

use async_trait::async_trait;

use catalog_domain::repositories::CategoryRepository;

use super::{find_or_fail, UseCase};
use crate::dto::{CategoryOutput, GetCategoryInput};
use crate::errors::ApplicationResult;

pub struct GetCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<GetCategoryInput, CategoryOutput> for GetCategoryUseCase {
    async fn execute(&self, input: GetCategoryInput) -> ApplicationResult<CategoryOutput> {
        let category = find_or_fail(&self.repository, &input.id).await?;
        Ok(CategoryOutput::from_domain(&category))
    }
}
