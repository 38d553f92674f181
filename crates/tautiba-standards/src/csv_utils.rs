//! Shared CSV utilities for loading reference tables.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::StandardsError;

/// Parsed reference table: normalized headers plus one map per record.
#[derive(Debug, Clone, Default)]
pub struct CsvRows {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl CsvRows {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }
}

/// Read the whole file up front so a delimiter retry never re-opens it.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, StandardsError> {
    std::fs::read(path).map_err(|source| StandardsError::io(path, source))
}

/// Parse CSV bytes into row maps keyed by header.
///
/// Handles BOM characters and trims whitespace from headers and values.
/// Records shorter than the header are padded with empty strings.
pub fn parse_csv_rows(bytes: &[u8], delimiter: u8, path: &Path) -> Result<CsvRows, StandardsError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| StandardsError::csv(path, source))?
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| StandardsError::csv(path, source))?;
        let mut row = BTreeMap::new();
        for (idx, key) in headers.iter().enumerate() {
            let value = record.get(idx).unwrap_or("");
            row.insert(key.clone(), value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(CsvRows { headers, rows })
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field<'a>(row: &'a BTreeMap<String, String>, key: &str) -> &'a str {
    row.get(key).map(String::as_str).unwrap_or("")
}

/// Get an optional field value from a row (None if empty or missing).
pub fn get_optional(row: &BTreeMap<String, String>, key: &str) -> Option<String> {
    row.get(key).filter(|v| !v.is_empty()).cloned()
}
