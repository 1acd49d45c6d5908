//! JSON shapes returned by the REST endpoints

use serde::Serialize;
use utoipa::ToSchema;

use catalog_application::dto::iso_millis;
use catalog_application::{CategoryOutput, PaginationOutput};

/// A single category
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPresenter {
    /// Category UUID
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// ISO-8601 with millisecond precision
    pub created_at: String,
}

impl From<CategoryOutput> for CategoryPresenter {
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

/// Pager numbers for a collection response
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: usize,
    pub current_page: usize,
    pub last_page: usize,
    pub per_page: usize,
}

/// One page of categories
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryCollectionPresenter {
    pub data: Vec<CategoryPresenter>,
    pub meta: PaginationMeta,
}

impl From<PaginationOutput<CategoryOutput>> for CategoryCollectionPresenter {
    fn from(output: PaginationOutput<CategoryOutput>) -> Self {
        Self {
            meta: PaginationMeta {
                total: output.total,
                current_page: output.current_page,
                last_page: output.last_page,
                per_page: output.per_page,
            },
            data: output
                .items
                .into_iter()
                .map(CategoryPresenter::from)
                .collect(),
        }
    }
}
