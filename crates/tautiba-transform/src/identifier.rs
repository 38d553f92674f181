//! Identifier construction for minted resources.
//!
//! Slugs are lowercase and consist of alphanumeric runs joined by `-`. Two
//! codes that differ only in case, whitespace or punctuation share a slug
//! (`E_RUS`, `e-rus` and `E RUS` all become `e-rus`); the concept registry
//! reports such collisions but does not disambiguate them.
//!
//! Non-ASCII letters are lowercased and kept as-is rather than transliterated.

/// Build a URI path segment from an arbitrary code.
pub fn slugify(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out
}

/// Concatenate every digit in `code` and parse the result.
///
/// Only meaningful for `LVxxxxxxx`-style territory codes, where the digits
/// are the ATVK classifier code. Returns `None` when there are no digits or
/// the number does not fit an `i64`.
pub fn extract_digits(code: &str) -> Option<i64> {
    let digits: String = code.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
