//! ISO 3779 Transliteration Table and Position Weights

/// Number of characters in a VIN
pub const VIN_LENGTH: usize = 17;

/// Zero-based index of the check digit (position 9)
pub const CHECK_DIGIT_INDEX: usize = 8;

/// Weight applied to each position before summing.
/// Position 9 is the check digit itself and carries weight 0.
pub const POSITION_WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Get the numeric value of a VIN character.
///
/// Returns `None` for I, O, Q, lowercase letters and anything that is not
/// an ASCII digit or uppercase letter.
pub fn transliterate(c: char) -> Option<u32> {
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => return None,
    };
    Some(value)
}

/// Whether a character belongs to the 33-character VIN alphabet
pub fn is_permitted(c: char) -> bool {
    transliterate(c).is_some()
}
