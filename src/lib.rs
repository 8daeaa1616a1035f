pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::Settings;

pub use adapters::{classifier::TypeNameClassifier, json::JsonElement, text::WhitespaceAnalyzer};
pub use core::{aggregator::Aggregator, extension::ReadTimeExtension};
pub use domain::duration::{Labels, ReadTime};
pub use domain::model::{FieldDefinition, FieldKind, Subject, Value};
pub use domain::ports::{ConfigProvider, ContentElement, FieldClassifier, TextAnalyzer};
pub use utils::error::{ReadTimeError, Result};
