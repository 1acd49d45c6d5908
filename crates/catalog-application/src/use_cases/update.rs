use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use catalog_domain::entity::Entity;
use catalog_domain::repositories::{CategoryRepository, Repository};

use super::{find_or_fail, UseCase};
use crate::dto::{CategoryOutput, UpdateCategoryInput};
use crate::errors::{ApplicationError, ApplicationResult};

/// Apply a partial change to an existing category.
///
/// An empty `name` is ignored. `description` is applied whenever it is
/// present, so an explicit null clears it.
pub struct UpdateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl UpdateCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<UpdateCategoryInput, CategoryOutput> for UpdateCategoryUseCase {
    async fn execute(&self, input: UpdateCategoryInput) -> ApplicationResult<CategoryOutput> {
        let mut category = find_or_fail(&self.repository, &input.id).await?;

        if let Some(name) = input.name.filter(|name| !name.is_empty()) {
            category.change_name(name);
        }
        if let Some(description) = input.description {
            category.change_description(description);
        }
        match input.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        if category.notification().has_errors() {
            return Err(ApplicationError::EntityValidation(
                category.notification().to_fields_errors(),
            ));
        }

        self.repository.update(&category).await?;
        info!(category_id = %category.category_id(), "Category updated");

        Ok(CategoryOutput::from_domain(&category))
    }
}
