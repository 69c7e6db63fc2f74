//! ISO 3779 Check Digit Calculation
//!
//! Weighted sum of transliterated characters, reduced modulo 11. A remainder
//! of 10 is written as `X`.

use crate::error::CheckDigitError;
use crate::transliteration::{transliterate, POSITION_WEIGHTS, VIN_LENGTH};
use tracing::{debug, trace};

/// Modulus of the weighted sum
const MODULUS: u32 = 11;

/// Compute the check digit of a 17-character VIN.
///
/// The input must already be normalized; it is not uppercased or stripped
/// here. Fails on the first character with no transliteration value.
pub fn compute_check_digit(vin: &str) -> Result<char, CheckDigitError> {
    let length = vin.chars().count();
    if length != VIN_LENGTH {
        return Err(CheckDigitError::WrongLength { length });
    }

    let mut sum = 0u32;
    for (index, (character, weight)) in vin.chars().zip(POSITION_WEIGHTS).enumerate() {
        let value = transliterate(character).ok_or_else(|| {
            debug!("Untransliterable character {:?} at position {}", character, index + 1);
            CheckDigitError::Untransliterable {
                character,
                position: index + 1,
            }
        })?;
        sum += value * weight;
    }

    let check = check_digit_char(sum);
    trace!("Check digit for {} is {}", vin, check);
    Ok(check)
}

/// Map a weighted sum (or its remainder) to the check digit character
pub fn check_digit_char(sum: u32) -> char {
    match sum % MODULUS {
        10 => 'X',
        r => char::from(b'0' + r as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_vins() {
        assert_eq!(compute_check_digit("1HGCM82633A004352"), Ok('3'));
        assert_eq!(compute_check_digit("1M8GDM9AXKP042788"), Ok('X'));
        assert_eq!(compute_check_digit("JHMCM56557C404453"), Ok('5'));
        assert_eq!(compute_check_digit("11111111111111111"), Ok('1'));
    }

    #[test]
    fn test_position_nine_ignored() {
        // Weight 0 at position 9: the slot's own content never changes the result
        assert_eq!(compute_check_digit("1HGCM82603A004352"), Ok('3'));
        assert_eq!(compute_check_digit("1HGCM826Z3A004352"), Ok('3'));
    }

    #[test]
    fn test_forbidden_character_fails() {
        assert_eq!(
            compute_check_digit("1HGIM82633A004352"),
            Err(CheckDigitError::Untransliterable {
                character: 'I',
                position: 4,
            })
        );
    }

    #[test]
    fn test_first_offending_character_reported() {
        let err = compute_check_digit("OHGCM82633A00435Q").unwrap_err();
        assert_eq!(
            err,
            CheckDigitError::Untransliterable {
                character: 'O',
                position: 1,
            }
        );
        assert!(err.to_string().contains("'O'"));
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_does_not_normalize() {
        assert!(matches!(
            compute_check_digit("1hgcm82633a004352"),
            Err(CheckDigitError::Untransliterable { character: 'h', position: 2 })
        ));
    }

    #[test]
    fn test_wrong_length_fails() {
        assert_eq!(
            compute_check_digit("1HGCM82633A00435"),
            Err(CheckDigitError::WrongLength { length: 16 })
        );
        assert_eq!(
            compute_check_digit(""),
            Err(CheckDigitError::WrongLength { length: 0 })
        );
    }

    #[test]
    fn test_check_digit_char() {
        assert_eq!(check_digit_char(0), '0');
        assert_eq!(check_digit_char(9), '9');
        assert_eq!(check_digit_char(10), 'X');
        assert_eq!(check_digit_char(311), '3');
    }

    proptest! {
        #[test]
        fn prop_total_over_alphabet(vin in "[0-9A-HJ-NPR-Z]{17}") {
            let check = compute_check_digit(&vin);
            prop_assert!(check.is_ok());
            let check = check.unwrap();
            prop_assert!(check.is_ascii_digit() || check == 'X');
        }
    }
}
