//! Content documents stored as JSON.
//!
//! An element is an object with a `fields` array and a `values` map:
//!
//! ```json
//! {
//!   "fields": [{ "handle": "body", "type": "plain_text" }],
//!   "values": { "body": "Some text" }
//! }
//! ```
//!
//! Arrays become lists, other objects are read as the list of their values.

use crate::core::{ContentElement, FieldDefinition, Result, Value};
use crate::utils::error::ReadTimeError;
use serde_json::{Map, Value as JsonValue};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct JsonElement {
    object: Map<String, JsonValue>,
}

impl JsonElement {
    pub fn new(object: Map<String, JsonValue>) -> Self {
        Self { object }
    }

    fn is_element(object: &Map<String, JsonValue>) -> bool {
        object.contains_key("fields")
    }
}

impl ContentElement for JsonElement {
    fn field_layout(&self) -> Result<Option<Vec<FieldDefinition>>> {
        match self.object.get("fields") {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::Array(entries)) => entries
                .iter()
                .map(|entry| {
                    serde_json::from_value::<FieldDefinition>(entry.clone()).map_err(|e| {
                        ReadTimeError::MalformedLayout {
                            message: format!("invalid field definition {}: {}", entry, e),
                        }
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(other) => Err(ReadTimeError::MalformedLayout {
                message: format!("`fields` must be an array, found {}", other),
            }),
        }
    }

    fn field_value(&self, handle: &str) -> Result<Value> {
        self.object
            .get("values")
            .and_then(JsonValue::as_object)
            .and_then(|values| values.get(handle))
            .map(to_value)
            .ok_or_else(|| ReadTimeError::FieldNotFound {
                handle: handle.to_string(),
            })
    }
}

pub fn to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(flag) => Value::Bool(*flag),
        JsonValue::Number(number) => number.as_f64().map(Value::Number).unwrap_or(Value::Null),
        JsonValue::String(text) => Value::Text(text.clone()),
        JsonValue::Array(items) => Value::List(items.iter().map(to_value).collect()),
        JsonValue::Object(object) if JsonElement::is_element(object) => {
            Value::Element(Arc::new(JsonElement::new(object.clone())))
        }
        JsonValue::Object(object) => Value::List(object.values().map(to_value).collect()),
    }
}

pub fn parse_document(content: &str) -> Result<Value> {
    let json: JsonValue = serde_json::from_str(content)?;
    Ok(to_value(&json))
}

pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}
