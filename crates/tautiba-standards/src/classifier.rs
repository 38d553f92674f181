//! Official numeric-coded classifiers (ATVK 2021, TAUT 2016).
//!
//! Both exports share the layout `Kods` (code) / `Nosaukums` (name).

use std::path::Path;

use tautiba_model::ClassifierLookup;
use tracing::{debug, warn};

use crate::csv_utils::{get_field, parse_csv_rows, read_bytes};
use crate::error::StandardsError;

pub const CODE_COLUMN: &str = "Kods";
pub const NAME_COLUMN: &str = "Nosaukums";

/// Parse a free-text classifier code: trimmed, base-10 integer.
pub fn parse_classifier_code(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Load a classifier export into a code -> name lookup.
///
/// Rows with an unparseable code or a blank name are skipped. Duplicate codes
/// keep the name from the last row.
pub fn load_classifier(path: &Path) -> Result<ClassifierLookup, StandardsError> {
    let bytes = read_bytes(path)?;
    let table = parse_csv_rows(&bytes, b',', path)?;
    for column in [CODE_COLUMN, NAME_COLUMN] {
        if !table.has_column(column) {
            warn!(path = %path.display(), column, "classifier table lacks column");
        }
    }

    let mut lookup = ClassifierLookup::new();
    let mut skipped = 0usize;
    for row in &table.rows {
        let name = get_field(row, NAME_COLUMN);
        match parse_classifier_code(get_field(row, CODE_COLUMN)) {
            Some(code) if !name.is_empty() => lookup.insert(code, name),
            _ => skipped += 1,
        }
    }
    if lookup.is_empty() {
        warn!(path = %path.display(), skipped, "classifier has no usable rows");
    }
    debug!(
        path = %path.display(),
        codes = lookup.len(),
        skipped,
        "classifier loaded"
    );
    Ok(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_integers() {
        assert_eq!(parse_classifier_code(" 17 "), Some(17));
        assert_eq!(parse_classifier_code("0042"), Some(42));
        assert_eq!(parse_classifier_code(""), None);
        assert_eq!(parse_classifier_code("17.0"), None);
        assert_eq!(parse_classifier_code("E_RUS"), None);
    }
}
