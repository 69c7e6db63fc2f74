//! VIN Input Normalization

/// Characters removed from raw input besides whitespace
const SEPARATOR: char = '-';

/// Canonicalize free-form input into a candidate VIN.
///
/// Strips whitespace and hyphens anywhere in the string and uppercases ASCII
/// letters. No length or charset checks happen here.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != SEPARATOR)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
