use crate::utils::error::{ReadTimeError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reading speeds must be finite and strictly positive; anything else would
/// turn every conversion into infinity or NaN.
pub fn validate_positive_rate(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ReadTimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReadTimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ReadTimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// A field type may be classified as one repeater kind only.
pub fn validate_disjoint(field_name: &str, left: &[String], right: &[String]) -> Result<()> {
    let left_set: HashSet<&str> = left.iter().map(String::as_str).collect();

    for name in right {
        if left_set.contains(name.as_str()) {
            return Err(ReadTimeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Field type is listed as both a simple and a nested repeater".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_rate() {
        assert!(validate_positive_rate("words_per_minute", 200.0).is_ok());
        assert!(validate_positive_rate("words_per_minute", 0.5).is_ok());
        assert!(validate_positive_rate("words_per_minute", 0.0).is_err());
        assert!(validate_positive_rate("words_per_minute", -10.0).is_err());
        assert!(validate_positive_rate("words_per_minute", f64::NAN).is_err());
        assert!(validate_positive_rate("words_per_minute", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("max_depth", 8, 1, 64).is_ok());
        assert!(validate_range("max_depth", 0, 1, 64).is_err());
        assert!(validate_range("max_depth", 65, 1, 64).is_err());
    }

    #[test]
    fn test_validate_disjoint() {
        let simple = vec!["matrix".to_string()];
        let nested = vec!["super_table".to_string()];
        assert!(validate_disjoint("fields", &simple, &nested).is_ok());

        let clash = vec!["matrix".to_string()];
        assert!(validate_disjoint("fields", &simple, &clash).is_err());
    }
}
