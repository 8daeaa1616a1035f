use crate::domain::model::{FieldDefinition, FieldKind, Value};
use crate::utils::error::Result;
use std::fmt;

/// A node of the content tree: an entry, or a block inside a repeater.
pub trait ContentElement: fmt::Debug + Send + Sync {
    /// `Ok(None)` means the element has no layout and contributes nothing.
    fn field_layout(&self) -> Result<Option<Vec<FieldDefinition>>>;

    fn field_value(&self, handle: &str) -> Result<Value>;
}

pub trait FieldClassifier: Send + Sync {
    fn classify(&self, field: &FieldDefinition) -> FieldKind;
}

pub trait TextAnalyzer: Send + Sync {
    fn stringify(&self, handle: &str, value: &Value) -> Result<String>;
    fn count_words(&self, text: &str) -> usize;
}

pub trait ConfigProvider: Send + Sync {
    fn words_per_minute(&self) -> f64;
    fn show_seconds(&self) -> bool;
    fn max_depth(&self) -> usize;
}
