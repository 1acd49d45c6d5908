use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use catalog_domain::repositories::{CategoryRepository, Repository};

use super::{parse_id, UseCase};
use crate::dto::DeleteCategoryInput;
use crate::errors::ApplicationResult;

pub struct DeleteCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl DeleteCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<DeleteCategoryInput, ()> for DeleteCategoryUseCase {
    async fn execute(&self, input: DeleteCategoryInput) -> ApplicationResult<()> {
        let category_id = parse_id(&input.id)?;
        self.repository.delete(&category_id).await?;
        info!(category_id = %category_id, "Category deleted");
        Ok(())
    }
}
