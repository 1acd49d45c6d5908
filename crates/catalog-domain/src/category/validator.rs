//! Category validation rules

use crate::validation::{rules, Notification};

use super::Category;

pub const NAME_MAX_LENGTH: usize = 255;

/// Rule groups understood by [`CategoryValidator`]
const DEFAULT_GROUPS: &[&str] = &["name"];

/// Validates a category into a notification.
///
/// Rules are grouped by field; `fields` selects which groups run and
/// defaults to `name` when empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryValidator;

impl CategoryValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` when no rule failed
    pub fn validate(
        &self,
        notification: &mut Notification,
        category: &Category,
        fields: &[&str],
    ) -> bool {
        let groups = if fields.is_empty() { DEFAULT_GROUPS } else { fields };
        let mut valid = true;

        for group in groups {
            let failure = match *group {
                "name" => rules::max_length("name", category.name(), NAME_MAX_LENGTH),
                // description and isActive carry no rules yet
                _ => None,
            };
            if let Some(message) = failure {
                notification.add_error(message, Some(*group));
                valid = false;
            }
        }

        valid
    }
}
