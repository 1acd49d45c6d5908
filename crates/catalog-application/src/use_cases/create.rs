use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use catalog_domain::category::{Category, CategoryCreateCommand};
use catalog_domain::entity::Entity;
use catalog_domain::repositories::{CategoryRepository, Repository};

use super::UseCase;
use crate::dto::{CategoryOutput, CreateCategoryInput};
use crate::errors::{ApplicationError, ApplicationResult};

/// Validate, build and insert a new category
pub struct CreateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl CreateCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<CreateCategoryInput, CategoryOutput> for CreateCategoryUseCase {
    async fn execute(&self, input: CreateCategoryInput) -> ApplicationResult<CategoryOutput> {
        input.validate()?;

        let category = Category::create(CategoryCreateCommand {
            name: input.name,
            description: input.description,
            is_active: input.is_active,
        });
        if category.notification().has_errors() {
            return Err(ApplicationError::EntityValidation(
                category.notification().to_fields_errors(),
            ));
        }

        self.repository.insert(&category).await?;
        info!(category_id = %category.category_id(), "Category created");

        Ok(CategoryOutput::from_domain(&category))
    }
}
