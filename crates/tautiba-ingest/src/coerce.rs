//! Lenient numeric parsing for measure, attribute and year cells.

/// Parse a cell as a number, treating anything unusable as missing.
///
/// Empty cells, malformed text and non-finite values (`inf`, `NaN`) all
/// become `None`; nothing here ever fails the row.
pub fn coerce_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
