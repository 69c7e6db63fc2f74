//! VIN Validation
//!
//! Normalization, character checks and ISO 3779 check-digit verification for
//! 17-character Vehicle Identification Numbers.
//!
//! ```
//! use vin_validator::{assert_valid, validate, ValidationErrorCode};
//!
//! let result = validate("1hg-cm82633a004352");
//! assert!(result.is_valid);
//! assert_eq!(result.expected_check_digit, Some('3'));
//!
//! let result = validate("1HGCM82603A004352");
//! assert_eq!(result.errors, vec![ValidationErrorCode::InvalidCheckDigit]);
//!
//! let vin = assert_valid("1M8GDM9AXKP042788").unwrap();
//! assert_eq!(vin.check_digit(), 'X');
//! ```
//!
//! The check-digit building blocks are public for callers that validate the
//! charset themselves:
//!
//! ```
//! use vin_validator::{check_digit_char, compute_check_digit, CHECK_DIGIT_INDEX};
//!
//! let vin = "JHMCM56557C404453";
//! assert_eq!(compute_check_digit(vin), Ok('5'));
//! assert_eq!(vin.chars().nth(CHECK_DIGIT_INDEX), Some('5'));
//! assert_eq!(check_digit_char(10), 'X');
//! ```

mod check_digit;
mod error;
mod normalizer;
mod transliteration;
mod validator;
mod vin;

pub use check_digit::{check_digit_char, compute_check_digit};
pub use error::{CheckDigitError, ValidationErrorCode, VinError};
pub use normalizer::normalize;
pub use transliteration::{
    is_permitted, transliterate, CHECK_DIGIT_INDEX, POSITION_WEIGHTS, VIN_LENGTH,
};
pub use validator::{validate, ValidationConfig, ValidationResult, Validator};
pub use vin::{assert_valid, is_valid, Vin};
