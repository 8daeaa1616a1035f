pub mod aggregator;
pub mod extension;

pub use crate::domain::duration::{Labels, ReadTime};
pub use crate::domain::model::{FieldDefinition, FieldKind, Subject, Value};
pub use crate::domain::ports::{ConfigProvider, ContentElement, FieldClassifier, TextAnalyzer};
pub use crate::utils::error::Result;
