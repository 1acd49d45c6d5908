//! Category DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use catalog_domain::category::Category;
use catalog_domain::validation::rules;

use crate::errors::{ApplicationError, ApplicationResult};

/// Category as handed to presentation layers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(with = "super::iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl CategoryOutput {
    pub fn from_domain(category: &Category) -> Self {
        Self {
            id: category.category_id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

/// Input for creating a category
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Field checks the aggregate does not own
    pub fn validate(&self) -> ApplicationResult<()> {
        match rules::not_empty("name", &self.name) {
            Some(message) => Err(ApplicationError::validation(message)),
            None => Ok(()),
        }
    }
}

/// Input for updating a category.
///
/// `description` distinguishes "not sent" (`None`) from an explicit null
/// (`Some(None)`), which clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategoryInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = Some(description.map(str::to_string));
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Wraps any present value (including null) in `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Input addressing one category by id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryIdInput {
    pub id: String,
}

impl CategoryIdInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

pub type GetCategoryInput = CategoryIdInput;
pub type DeleteCategoryInput = CategoryIdInput;
pub type ActivateCategoryInput = CategoryIdInput;
pub type DeactivateCategoryInput = CategoryIdInput;

/// Loosely typed listing request, normalized into search parameters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesInput {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<String>,
}
