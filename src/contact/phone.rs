//! Phone number normalization.

/// Strips the separators users type into phone numbers: whitespace,
/// dashes, and parentheses.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// A normalized number is valid when it is exactly 10 ASCII digits.
pub fn is_valid(normalized: &str) -> bool {
    normalized.len() == 10 && normalized.bytes().all(|b| b.is_ascii_digit())
}

/// Keeps only the digits of a number displayed on the page, for building
/// contact links from clicked phone text.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}
