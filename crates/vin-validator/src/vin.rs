//! Validated VIN Type and Convenience Checks

use crate::error::VinError;
use crate::transliteration::CHECK_DIGIT_INDEX;
use crate::validator::{validate, Validator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A normalized VIN that has passed full validation.
///
/// Only produced by a successful validation, so holders never need to
/// re-validate. Serializes as a plain string; deserializing validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Wrap a string that has already passed validation
    pub(crate) fn from_validated(normalized: String) -> Self {
        Self(normalized)
    }

    /// VIN as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying string
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Check digit at position 9
    pub fn check_digit(&self) -> char {
        // Validated VINs are 17 ASCII characters
        char::from(self.0.as_bytes()[CHECK_DIGIT_INDEX])
    }
}

impl Deref for Vin {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        assert_valid(s)
    }
}

impl TryFrom<&str> for Vin {
    type Error = VinError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        assert_valid(value)
    }
}

impl TryFrom<String> for Vin {
    type Error = VinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        assert_valid(&value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

/// Whether the input is a valid VIN
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid
}

/// Validate the input and return it as a [`Vin`].
///
/// The error message lists every recorded error code and the expected check
/// digit.
pub fn assert_valid(input: &str) -> Result<Vin, VinError> {
    Validator::default().assert_valid(input)
}
