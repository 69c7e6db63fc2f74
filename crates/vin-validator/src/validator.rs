//! VIN Validator
//!
//! Runs the length, charset and check-digit checks over a normalized
//! candidate. Failures are accumulated as [`ValidationErrorCode`]s in the
//! result, in detection order; validation itself never fails.

use crate::check_digit::compute_check_digit;
use crate::error::{ValidationErrorCode, VinError};
use crate::normalizer::normalize;
use crate::transliteration::{is_permitted, CHECK_DIGIT_INDEX, VIN_LENGTH};
use crate::vin::Vin;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Record a mismatching check digit as an error.
    /// The check digit is mandatory in North America only; outside it
    /// position 9 may carry manufacturer data.
    pub enforce_check_digit: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl ValidationConfig {
    /// Full ISO 3779 validation including the check digit
    pub fn strict() -> Self {
        Self {
            enforce_check_digit: true,
        }
    }

    /// Length and charset only; the check digit is computed but not enforced
    pub fn lenient() -> Self {
        Self {
            enforce_check_digit: false,
        }
    }
}

/// Result of validating one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Normalized candidate
    pub normalized: String,
    /// Whether no errors were recorded
    pub is_valid: bool,
    /// Errors in detection order: length, charset, check digit
    pub errors: Vec<ValidationErrorCode>,
    /// Character found at position 9, `None` if the candidate is shorter
    pub check_digit_char: Option<char>,
    /// Computed check digit, `None` when it could not be computed
    pub expected_check_digit: Option<char>,
}

impl ValidationResult {
    /// Whether a given error was recorded
    pub fn has_error(&self, code: ValidationErrorCode) -> bool {
        self.errors.contains(&code)
    }
}

/// VIN validator
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        info!("Creating VIN validator with config: {:?}", config);
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate raw input
    pub fn validate(&self, input: &str) -> ValidationResult {
        let normalized = normalize(input);
        let chars: Vec<char> = normalized.chars().collect();
        let mut errors = Vec::new();

        let length_ok = chars.len() == VIN_LENGTH;
        if !length_ok {
            errors.push(ValidationErrorCode::InvalidLength);
        }

        // The charset rule covers the full 17-character shape
        let charset_ok = length_ok && chars.iter().all(|c| is_permitted(*c));
        if !charset_ok {
            errors.push(ValidationErrorCode::InvalidCharacters);
        }

        let check_digit_char = chars.get(CHECK_DIGIT_INDEX).copied();
        let expected_check_digit = if length_ok {
            compute_check_digit(&normalized).ok()
        } else {
            None
        };

        if charset_ok && self.config.enforce_check_digit {
            if let Some(expected) = expected_check_digit {
                if check_digit_char != Some(expected) {
                    errors.push(ValidationErrorCode::InvalidCheckDigit);
                }
            }
        }

        let is_valid = errors.is_empty();
        if !is_valid {
            debug!(
                "VIN {:?} failed validation: {:?} (expected check digit {:?})",
                normalized, errors, expected_check_digit
            );
        }

        ValidationResult {
            normalized,
            is_valid,
            errors,
            check_digit_char,
            expected_check_digit,
        }
    }

    /// Whether the input is a valid VIN under this configuration
    pub fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_valid
    }

    /// Validate and return a branded [`Vin`], or an error listing every failure
    pub fn assert_valid(&self, input: &str) -> Result<Vin, VinError> {
        let result = self.validate(input);
        if result.is_valid {
            Ok(Vin::from_validated(result.normalized))
        } else {
            Err(VinError::Invalid {
                errors: result.errors,
                expected_check_digit: result.expected_check_digit,
            })
        }
    }
}

/// Validate raw input with the default (strict) configuration
pub fn validate(input: &str) -> ValidationResult {
    Validator::default().validate(input)
}
