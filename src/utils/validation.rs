use crate::utils::error::{KombuchaError, Result};
use std::fmt;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 表單欄位的驗證錯誤，顯示在欄位旁邊
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Negative,
    NotANumber,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Negative => "Must be non-negative",
            FieldError::NotANumber => "Expected a number",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error(&self) -> Option<FieldError> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(e) => Some(*e),
        }
    }
}

/// Both form fields share this rule. Infinities count as non-numbers.
pub fn validate_non_negative(value: f64) -> ValidationResult {
    if !value.is_finite() {
        ValidationResult::Invalid(FieldError::NotANumber)
    } else if value < 0.0 {
        ValidationResult::Invalid(FieldError::Negative)
    } else {
        ValidationResult::Valid
    }
}

/// Starter only drives water when it is strictly positive.
pub fn drives_linked_field(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub fn validate_positive_ratio(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(KombuchaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number greater than 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_value(field_name: &str, value: f64) -> Result<()> {
    if let ValidationResult::Invalid(e) = validate_non_negative(value) {
        return Err(KombuchaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: e.message().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_negative() {
        assert_eq!(validate_non_negative(0.0), ValidationResult::Valid);
        assert_eq!(validate_non_negative(2.5), ValidationResult::Valid);
        assert_eq!(
            validate_non_negative(-0.1),
            ValidationResult::Invalid(FieldError::Negative)
        );
        assert_eq!(
            validate_non_negative(f64::NAN),
            ValidationResult::Invalid(FieldError::NotANumber)
        );
        assert_eq!(
            validate_non_negative(f64::INFINITY),
            ValidationResult::Invalid(FieldError::NotANumber)
        );
    }

    #[test]
    fn test_negative_message() {
        assert_eq!(FieldError::Negative.to_string(), "Must be non-negative");
    }

    #[test]
    fn test_drives_linked_field() {
        assert!(drives_linked_field(0.01));
        assert!(!drives_linked_field(0.0));
        assert!(!drives_linked_field(-1.0));
        assert!(!drives_linked_field(f64::NAN));
    }

    #[test]
    fn test_validate_positive_ratio() {
        assert!(validate_positive_ratio("ratios.tea_grams_per_liter", 7.0).is_ok());
        assert!(validate_positive_ratio("ratios.tea_grams_per_liter", 0.0).is_err());
        assert!(validate_positive_ratio("ratios.tea_grams_per_liter", -3.0).is_err());
        assert!(validate_positive_ratio("ratios.tea_grams_per_liter", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_negative_value() {
        assert!(validate_non_negative_value("defaults.water_liters", 0.0).is_ok());
        let err = validate_non_negative_value("defaults.water_liters", -1.0).unwrap_err();
        assert!(err.to_string().contains("Must be non-negative"));
    }
}
