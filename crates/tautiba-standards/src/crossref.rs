//! Static cross-reference from the fact table's ethnicity codes to TAUT 2016.
//!
//! Curated by hand against the classifier; it is configuration, not data, and
//! is never read from disk.

use tautiba_model::CrossReferenceTable;

pub const ETHNICITY_TO_TAUT: &[(&str, i64)] = &[
    ("E_LAT", 1),
    ("E_LIT", 2),
    ("E_EST", 3),
    ("E_AZE", 12),
    ("E_BRU", 13),
    ("E_GEO", 14),
    ("E_ARM", 15),
    ("E_RUS", 17),
    ("E_MOL", 18),
    ("E_UKR", 21),
    ("E_UZB", 22),
    ("E_POL", 45),
    ("E_JEW", 68),
    ("E_TTR", 242),
    ("E_ROM", 313),
    ("E_IND", 295),
];

pub fn default_ethnicity_cross_reference() -> CrossReferenceTable {
    ETHNICITY_TO_TAUT.iter().copied().collect()
}
