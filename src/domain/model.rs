use crate::domain::ports::ContentElement;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type ElementRef = Arc<dyn ContentElement>;

/// How the aggregator treats a field. Resolved once per field definition by
/// a [`FieldClassifier`](crate::domain::ports::FieldClassifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Scalar,
    /// One level of blocks; every field of a block is read as text.
    SimpleRepeater,
    /// Blocks whose fields may themselves be repeaters.
    NestedRepeater,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub handle: String,
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,
}

fn default_field_type() -> String {
    "plain_text".to_string()
}

impl FieldDefinition {
    pub fn new(handle: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            field_type: field_type.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<Value>),
    Element(ElementRef),
}

impl Value {
    pub fn as_element(&self) -> Option<&ElementRef> {
        match self {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        self.as_element().is_some()
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<ElementRef> for Value {
    fn from(element: ElementRef) -> Self {
        Value::Element(element)
    }
}

/// What a read-time computation runs over.
#[derive(Clone, Copy)]
pub enum Subject<'a> {
    Element(&'a dyn ContentElement),
    /// A pre-resolved collection, e.g. the targets of a relation field.
    Elements(&'a [Value]),
    Scalar(&'a Value),
}

impl<'a> From<&'a Value> for Subject<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Element(element) => Subject::Element(element.as_ref()),
            Value::List(items) => Subject::Elements(items),
            other => Subject::Scalar(other),
        }
    }
}
