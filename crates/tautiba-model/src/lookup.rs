//! In-memory reference tables.
//!
//! Both tables are loaded once before the ingest pass and are only read
//! afterwards.

use std::collections::BTreeMap;

/// Official classifier: integer code -> canonical name.
#[derive(Debug, Clone, Default)]
pub struct ClassifierLookup {
    entries: BTreeMap<i64, String>,
}

impl ClassifierLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry; a later insert for the same code replaces the name.
    pub fn insert(&mut self, code: i64, name: impl Into<String>) {
        self.entries.insert(code, name.into());
    }

    pub fn get(&self, code: i64) -> Option<&str> {
        self.entries.get(&code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(i64, String)> for ClassifierLookup {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for (code, name) in iter {
            lookup.insert(code, name);
        }
        lookup
    }
}

/// Bilingual names of one open-data territory entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerritoryNames {
    /// Latvian name (`ValueTextL`).
    pub local: Option<String>,
    /// English name (`ValueTextL_Eng`).
    pub alternate: Option<String>,
}

/// Open-data territory list keyed by the fact table's own area code.
///
/// Keys are matched exactly; no case folding happens here.
#[derive(Debug, Clone, Default)]
pub struct TerritoryTable {
    entries: BTreeMap<String, TerritoryNames>,
}

impl TerritoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, names: TerritoryNames) {
        self.entries.insert(code.into(), names);
    }

    pub fn get(&self, code: &str) -> Option<&TerritoryNames> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hand-curated mapping from a local ethnicity code (e.g. `E_RUS`) to a
/// classifier code. Codes without an entry get no cross-link.
#[derive(Debug, Clone, Default)]
pub struct CrossReferenceTable {
    entries: BTreeMap<String, i64>,
}

impl CrossReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, local_code: &str) -> Option<i64> {
        self.entries.get(local_code).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for CrossReferenceTable {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(code, target)| (code.into(), target))
                .collect(),
        }
    }
}

/// All read-only reference data consumed by the transform.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    /// Ethnic classifier (TAUT 2016).
    pub ethnic: ClassifierLookup,
    /// Territorial classifier (ATVK 2021).
    pub territorial: ClassifierLookup,
    /// Open-data territory names keyed by the fact table's area code.
    pub territories: TerritoryTable,
    /// Local ethnicity code -> ethnic classifier code.
    pub ethnicity_xref: CrossReferenceTable,
}
