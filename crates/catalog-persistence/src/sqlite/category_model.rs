//! Row mapping for the `categories` table

use chrono::{DateTime, Utc};
use rusqlite::Row;

use catalog_domain::{
    category::{Category, CategoryRestoreCommand},
    entity::Entity,
    errors::{DomainError, DomainResult},
    validation::FieldError,
};

pub(crate) const CATEGORY_COLUMNS: &str = "category_id, name, description, is_active, created_at";

/// One `categories` row. `created_at` is stored as Unix milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryModel {
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
}

impl CategoryModel {
    /// Read a row selected with [`CATEGORY_COLUMNS`]
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            category_id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            is_active: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    pub fn from_entity(category: &Category) -> Self {
        Self {
            category_id: category.category_id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at().timestamp_millis(),
        }
    }

    /// Rebuild the aggregate. Rows that break entity rules are reported as
    /// `LoadEntity` instead of being handed out half valid.
    pub fn to_entity(self) -> DomainResult<Category> {
        let created_at = DateTime::<Utc>::from_timestamp_millis(self.created_at).ok_or_else(|| {
            DomainError::LoadEntity(vec![FieldError::new(
                "createdAt",
                vec![format!("invalid timestamp {}", self.created_at)],
            )])
        })?;

        let category = Category::restore(CategoryRestoreCommand {
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            created_at,
        })
        .map_err(|err| {
            DomainError::LoadEntity(vec![FieldError::new("categoryId", vec![err.to_string()])])
        })?;

        if category.notification().has_errors() {
            return Err(DomainError::LoadEntity(
                category.notification().to_fields_errors(),
            ));
        }
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_domain::testing::CategoryFakeBuilder;

    #[test]
    fn test_entity_round_trip() {
        let category = CategoryFakeBuilder::a_category().deactivate().build_one();
        let model = CategoryModel::from_entity(&category);

        assert_eq!(model.created_at, category.created_at().timestamp_millis());
        assert!(!model.is_active);
        assert_eq!(model.to_entity().unwrap(), category);
    }

    #[test]
    fn test_to_entity_rejects_invalid_name() {
        let category = CategoryFakeBuilder::a_category().build_one();
        let mut model = CategoryModel::from_entity(&category);
        model.name = "a".repeat(256);

        let err = model.to_entity().unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["name must be shorter than or equal to 255 characters".to_string()]
        );
        assert!(matches!(err, DomainError::LoadEntity(_)));
    }

    #[test]
    fn test_to_entity_rejects_invalid_id() {
        let category = CategoryFakeBuilder::a_category().build_one();
        let mut model = CategoryModel::from_entity(&category);
        model.category_id = "fake id".into();

        assert!(matches!(model.to_entity(), Err(DomainError::LoadEntity(_))));
    }
}
