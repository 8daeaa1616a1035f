use crate::core::aggregator::DEFAULT_MAX_DEPTH;
use crate::core::{ConfigProvider, Labels};
use crate::utils::error::{ReadTimeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WORDS_PER_MINUTE: f64 = 200.0;

/// Upper bound accepted for `reading.max_depth`.
pub const MAX_DEPTH_LIMIT: usize = 64;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub reading: ReadingConfig,
    #[serde(default)]
    pub fields: FieldsConfig,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    pub words_per_minute: f64,
    pub show_seconds: bool,
    pub max_depth: usize,
    pub strip_html: bool,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            show_seconds: true,
            max_depth: DEFAULT_MAX_DEPTH,
            strip_html: false,
        }
    }
}

/// External field-type names for each repeater kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub simple_repeaters: Vec<String>,
    pub nested_repeaters: Vec<String>,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            simple_repeaters: vec!["matrix".to_string()],
            nested_repeaters: vec!["super_table".to_string()],
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReadTimeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReadTimeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReadTimeError::ProcessingError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_rate(
            "reading.words_per_minute",
            self.reading.words_per_minute,
        )?;
        validation::validate_range("reading.max_depth", self.reading.max_depth, 1, MAX_DEPTH_LIMIT)?;

        validation::validate_non_empty_string("labels.minute", &self.labels.minute)?;
        validation::validate_non_empty_string("labels.minutes", &self.labels.minutes)?;
        validation::validate_non_empty_string("labels.second", &self.labels.second)?;
        validation::validate_non_empty_string("labels.seconds", &self.labels.seconds)?;

        validation::validate_disjoint(
            "fields",
            &self.fields.simple_repeaters,
            &self.fields.nested_repeaters,
        )?;

        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn words_per_minute(&self) -> f64 {
        self.reading.words_per_minute
    }

    fn show_seconds(&self) -> bool {
        self.reading.show_seconds
    }

    fn max_depth(&self) -> usize {
        self.reading.max_depth
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_from_empty_document() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.words_per_minute(), 200.0);
        assert!(settings.show_seconds());
        assert_eq!(settings.max_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(settings.fields.simple_repeaters, vec!["matrix"]);
        assert_eq!(settings.labels, Labels::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[reading]
words_per_minute = 250
show_seconds = false
max_depth = 3
strip_html = true

[fields]
simple_repeaters = ["matrix", "neo"]
nested_repeaters = ["super_table"]

[labels]
minute = "minute"
minutes = "minutes"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.reading.words_per_minute, 250.0);
        assert!(!settings.reading.show_seconds);
        assert_eq!(settings.reading.max_depth, 3);
        assert!(settings.reading.strip_html);
        assert_eq!(settings.fields.simple_repeaters.len(), 2);
        assert_eq!(settings.labels.minutes, "minutes");
        assert_eq!(settings.labels.second, "sec");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("READ_TIME_TEST_WPM", "180");

        let toml_content = r#"
[reading]
words_per_minute = ${READ_TIME_TEST_WPM}
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.reading.words_per_minute, 180.0);

        std::env::remove_var("READ_TIME_TEST_WPM");
    }

    #[test]
    fn test_config_validation() {
        let settings = Settings::from_toml_str("[reading]\nwords_per_minute = 0\n").unwrap();
        assert!(settings.validate().is_err());

        let settings = Settings::from_toml_str("[reading]\nmax_depth = 0\n").unwrap();
        assert!(settings.validate().is_err());

        let settings = Settings::from_toml_str(
            "[fields]\nsimple_repeaters = [\"grid\"]\nnested_repeaters = [\"grid\"]\n",
        )
        .unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Settings::from_toml_str("[reading\nwords_per_minute = ").unwrap_err();
        assert!(matches!(err, ReadTimeError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[reading]\nwords_per_minute = 150.5\n")
            .unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.reading.words_per_minute, 150.5);
    }
}
