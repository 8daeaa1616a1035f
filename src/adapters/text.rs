use crate::core::{Result, TextAnalyzer, Value};
use crate::utils::error::ReadTimeError;
use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

/// Words are runs of non-whitespace characters.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceAnalyzer {
    strip_html: bool,
}

impl WhitespaceAnalyzer {
    pub fn new(strip_html: bool) -> Self {
        Self { strip_html }
    }

    fn clean(&self, text: &str) -> String {
        if self.strip_html {
            // Tags become spaces so that `a</p><p>b` stays two words.
            TAG_PATTERN.replace_all(text, " ").into_owned()
        } else {
            text.to_string()
        }
    }
}

impl TextAnalyzer for WhitespaceAnalyzer {
    fn stringify(&self, handle: &str, value: &Value) -> Result<String> {
        match value {
            Value::Null => Ok(String::new()),
            Value::Text(text) => Ok(self.clean(text)),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            Value::List(items) => {
                let parts = items
                    .iter()
                    .map(|item| self.stringify(handle, item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(parts.join(", "))
            }
            Value::Element(_) => Err(ReadTimeError::unexpected(handle, "a text value")),
        }
    }

    fn count_words(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}
