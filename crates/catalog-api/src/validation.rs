//! Request body and path checks.
//!
//! Bodies arrive as loose JSON so every broken rule can be reported at
//! once, in the order the rules are declared, rather than stopping at the
//! first serde failure.

use serde_json::{Map, Value};

use catalog_application::{CreateCategoryInput, UpdateCategoryInput};
use catalog_domain::value_objects::CategoryId;

use crate::error::{ApiError, ApiResult};

const UUID_EXPECTED: &str = "Validation failed (uuid is expected)";

/// Reject path ids that are not UUIDs
pub fn uuid_param(id: &str) -> ApiResult<()> {
    CategoryId::parse(id)
        .map(|_| ())
        .map_err(|_| ApiError::InvalidParam(UUID_EXPECTED.to_string()))
}

/// Validate a create body and turn it into use case input
pub fn create_category_input(body: &Value) -> ApiResult<CreateCategoryInput> {
    let fields = as_object(body);
    let mut messages = Vec::new();

    let name = match fields.get("name") {
        Some(Value::String(name)) if !name.is_empty() => Some(name.clone()),
        Some(Value::String(_)) => {
            messages.push("name should not be empty".to_string());
            None
        }
        None | Some(Value::Null) => {
            messages.push("name should not be empty".to_string());
            messages.push("name must be a string".to_string());
            None
        }
        Some(_) => {
            messages.push("name must be a string".to_string());
            None
        }
    };
    let description = optional_string(&fields, "description", &mut messages);
    let is_active = optional_bool(&fields, "isActive", &mut messages);

    match name {
        Some(name) if messages.is_empty() => Ok(CreateCategoryInput {
            name,
            description: description.flatten(),
            is_active,
        }),
        _ => Err(ApiError::Unprocessable(messages)),
    }
}

/// Validate an update body; `description: null` is kept apart from absence
pub fn update_category_input(id: &str, body: &Value) -> ApiResult<UpdateCategoryInput> {
    let fields = as_object(body);
    let mut messages = Vec::new();

    let name = optional_string(&fields, "name", &mut messages).flatten();
    let description = optional_string(&fields, "description", &mut messages);
    let is_active = optional_bool(&fields, "isActive", &mut messages);

    if !messages.is_empty() {
        return Err(ApiError::Unprocessable(messages));
    }

    Ok(UpdateCategoryInput {
        id: id.to_string(),
        name,
        description,
        is_active,
    })
}

fn as_object(body: &Value) -> Map<String, Value> {
    match body {
        Value::Object(fields) => fields.clone(),
        _ => Map::new(),
    }
}

/// `None` when absent, `Some(None)` for null, `Some(Some(_))` for a string
fn optional_string(
    fields: &Map<String, Value>,
    key: &str,
    messages: &mut Vec<String>,
) -> Option<Option<String>> {
    match fields.get(key) {
        None => None,
        Some(Value::Null) => Some(None),
        Some(Value::String(value)) => Some(Some(value.clone())),
        Some(_) => {
            messages.push(format!("{key} must be a string"));
            None
        }
    }
}

fn optional_bool(
    fields: &Map<String, Value>,
    key: &str,
    messages: &mut Vec<String>,
) -> Option<bool> {
    match fields.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Bool(value)) => Some(*value),
        Some(_) => {
            messages.push(format!("{key} must be a boolean value"));
            None
        }
    }
}
