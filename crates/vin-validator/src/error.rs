//! VIN Error Types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Soft validation failure recorded in a [`ValidationResult`](crate::ValidationResult)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorCode {
    /// Normalized candidate is not 17 characters long
    InvalidLength,
    /// Candidate contains characters outside the VIN alphabet
    InvalidCharacters,
    /// Position 9 does not match the computed check digit
    InvalidCheckDigit,
}

impl ValidationErrorCode {
    /// Stable code name
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorCode::InvalidLength => "INVALID_LENGTH",
            ValidationErrorCode::InvalidCharacters => "INVALID_CHARACTERS",
            ValidationErrorCode::InvalidCheckDigit => "INVALID_CHECK_DIGIT",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from computing a check digit on unvalidated input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckDigitError {
    /// Character has no transliteration value
    #[error("Character '{character}' at position {position} cannot be transliterated")]
    Untransliterable { character: char, position: usize },

    /// Input is not exactly 17 characters
    #[error("Check digit requires 17 characters, got {length}")]
    WrongLength { length: usize },
}

/// Error raised when a string is asserted to be a valid VIN and is not
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VinError {
    #[error(
        "Invalid VIN: {} (expected check digit: {})",
        join_codes(.errors),
        expected_label(.expected_check_digit)
    )]
    Invalid {
        errors: Vec<ValidationErrorCode>,
        expected_check_digit: Option<char>,
    },
}

fn join_codes(errors: &[ValidationErrorCode]) -> String {
    errors
        .iter()
        .map(ValidationErrorCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn expected_label(expected: &Option<char>) -> String {
    expected.map_or_else(|| "n/a".to_string(), |c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_names() {
        assert_eq!(ValidationErrorCode::InvalidLength.to_string(), "INVALID_LENGTH");
        assert_eq!(
            ValidationErrorCode::InvalidCharacters.to_string(),
            "INVALID_CHARACTERS"
        );
        assert_eq!(
            ValidationErrorCode::InvalidCheckDigit.to_string(),
            "INVALID_CHECK_DIGIT"
        );
    }

    #[test]
    fn test_code_serializes_as_name() {
        let json = serde_json::to_string(&ValidationErrorCode::InvalidCheckDigit).unwrap();
        assert_eq!(json, "\"INVALID_CHECK_DIGIT\"");
        let code: ValidationErrorCode = serde_json::from_str("\"INVALID_LENGTH\"").unwrap();
        assert_eq!(code, ValidationErrorCode::InvalidLength);
    }

    #[test]
    fn test_vin_error_message() {
        let err = VinError::Invalid {
            errors: vec![
                ValidationErrorCode::InvalidLength,
                ValidationErrorCode::InvalidCharacters,
            ],
            expected_check_digit: None,
        };
        assert_eq!(
            err.to_string(),
            "Invalid VIN: INVALID_LENGTH, INVALID_CHARACTERS (expected check digit: n/a)"
        );

        let err = VinError::Invalid {
            errors: vec![ValidationErrorCode::InvalidCheckDigit],
            expected_check_digit: Some('3'),
        };
        assert_eq!(
            err.to_string(),
            "Invalid VIN: INVALID_CHECK_DIGIT (expected check digit: 3)"
        );
    }

    #[test]
    fn test_check_digit_error_message() {
        let err = CheckDigitError::Untransliterable {
            character: 'I',
            position: 4,
        };
        assert_eq!(
            err.to_string(),
            "Character 'I' at position 4 cannot be transliterated"
        );
    }
}
