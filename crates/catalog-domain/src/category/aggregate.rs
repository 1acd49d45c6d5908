//! Category aggregate root

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::errors::DomainResult;
use crate::validation::Notification;
use crate::value_objects::CategoryId;

use super::validator::CategoryValidator;

/// Everything needed to build a category in memory
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProps {
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// Input for [`Category::create`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreateCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Input for [`Category::restore`], typically a persisted row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRestoreCommand {
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Category aggregate.
///
/// Mutations that touch validated fields re-run the matching rule group and
/// record failures in [`Category::notification`] instead of returning errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    #[serde(skip)]
    notification: Notification,
}

impl Category {
    /// Build from explicit props. Timestamps are kept at millisecond
    /// precision so they survive storage round trips unchanged.
    pub fn new(props: CategoryProps) -> Self {
        let mut category = Self {
            category_id: props.category_id,
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.trunc_subsecs(3),
            notification: Notification::new(),
        };
        category.validate(&["name", "description", "isActive"]);
        category
    }

    /// Create a brand new category with a fresh id and timestamp
    pub fn create(command: CategoryCreateCommand) -> Self {
        Self::new(CategoryProps {
            category_id: CategoryId::new(),
            name: command.name,
            description: command.description,
            is_active: command.is_active,
            created_at: Utc::now(),
        })
    }

    /// Rebuild a previously persisted category. Fails only when the stored
    /// id is not a valid UUID; rule violations land in the notification.
    pub fn restore(command: CategoryRestoreCommand) -> DomainResult<Self> {
        let category_id = CategoryId::parse(&command.category_id)?;
        Ok(Self::new(CategoryProps {
            category_id,
            name: command.name,
            description: command.description,
            is_active: Some(command.is_active),
            created_at: command.created_at,
        }))
    }

    /// Run the given rule groups (all groups when empty)
    pub fn validate(&mut self, fields: &[&str]) -> bool {
        let mut notification = std::mem::take(&mut self.notification);
        let valid = CategoryValidator::new().validate(&mut notification, self, fields);
        self.notification = notification;
        valid
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.validate(&["name"]);
    }

    pub fn change_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Entity for Category {
    type Id = CategoryId;

    const NAME: &'static str = "Category";

    fn entity_id(&self) -> &CategoryId {
        &self.category_id
    }

    fn notification(&self) -> &Notification {
        &self.notification
    }
}
