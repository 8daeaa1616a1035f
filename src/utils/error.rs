use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadTimeError {
    #[error("Field '{handle}' not found on element")]
    FieldNotFound { handle: String },

    #[error("Malformed field layout: {message}")]
    MalformedLayout { message: String },

    #[error("Unexpected value for field '{handle}': expected {expected}")]
    UnexpectedValue { handle: String, expected: String },

    #[error("Maximum nesting depth of {max_depth} exceeded at field '{handle}'")]
    DepthExceeded { handle: String, max_depth: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation error in field '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A single field in the content tree is broken; it counts as zero.
    Field,
    Configuration,
    Input,
    Internal,
}

impl ReadTimeError {
    /// Field faults are swallowed at the level of the field that raised
    /// them. Everything else reaches the caller.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Field
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ReadTimeError::FieldNotFound { .. }
            | ReadTimeError::MalformedLayout { .. }
            | ReadTimeError::UnexpectedValue { .. }
            | ReadTimeError::DepthExceeded { .. } => ErrorCategory::Field,
            ReadTimeError::ConfigValidationError { .. }
            | ReadTimeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ReadTimeError::IoError(_) | ReadTimeError::SerializationError(_) => {
                ErrorCategory::Input
            }
            ReadTimeError::ProcessingError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Could not read content: {}", self),
            ErrorCategory::Field => format!("Content field problem: {}", self),
            ErrorCategory::Internal => format!("Unexpected failure: {}", self),
        }
    }

    /// Process exit code for the CLI: `1` for configuration problems, `2`
    /// for content that cannot be read.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Input | ErrorCategory::Field => 2,
            ErrorCategory::Internal => 3,
        }
    }

    pub(crate) fn unexpected(handle: &str, expected: &str) -> Self {
        ReadTimeError::UnexpectedValue {
            handle: handle.to_string(),
            expected: expected.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadTimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_faults_are_recoverable() {
        let err = ReadTimeError::FieldNotFound {
            handle: "body".to_string(),
        };
        assert!(err.is_recoverable());

        let err = ReadTimeError::DepthExceeded {
            handle: "blocks".to_string(),
            max_depth: 8,
        };
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_config_errors_propagate() {
        let err = ReadTimeError::InvalidConfigValueError {
            field: "reading.words_per_minute".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().starts_with("Configuration problem"));
    }

    #[test]
    fn test_exit_codes() {
        let config = ReadTimeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let missing_file = ReadTimeError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(missing_file.exit_code(), 2);

        let broken_layout = ReadTimeError::MalformedLayout {
            message: "`fields` must be an array".to_string(),
        };
        assert_eq!(broken_layout.exit_code(), 2);

        let internal = ReadTimeError::ProcessingError {
            message: "unexpected".to_string(),
        };
        assert_eq!(internal.exit_code(), 3);
    }
}
