use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use catalog_domain::repositories::{CategoryRepository, SearchableRepository};
use catalog_domain::search::{SearchParams, SearchParamsInput};

use super::UseCase;
use crate::dto::{CategoryOutput, ListCategoriesInput, PaginationOutput};
use crate::errors::ApplicationResult;

/// Search categories and map the page to outputs
pub struct ListCategoriesUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl ListCategoriesUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<ListCategoriesInput, PaginationOutput<CategoryOutput>> for ListCategoriesUseCase {
    async fn execute(
        &self,
        input: ListCategoriesInput,
    ) -> ApplicationResult<PaginationOutput<CategoryOutput>> {
        let params = SearchParams::new(SearchParamsInput {
            page: input.page,
            per_page: input.per_page,
            sort: input.sort,
            sort_dir: input.sort_dir,
            filter: input.filter,
        });

        let result = self.repository.search(&params).await?;
        debug!(total = result.total, page = result.current_page, "Listed categories");

        Ok(PaginationOutput::from_search_result(result, |category| {
            CategoryOutput::from_domain(&category)
        }))
    }
}
