//! Main fact table: population by territory, year and ethnicity.
//!
//! Columns are resolved by header name; their order in the file does not
//! matter and extra columns are ignored.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info};

use tautiba_model::FactRow;

use crate::coerce::coerce_numeric;
use crate::error::IngestError;

pub const FACT_DELIMITER: u8 = b';';

pub const COL_AREA: &str = "AllAreaLV";
pub const COL_TIME: &str = "TIME";
pub const COL_ETHNICITY: &str = "ETHNICITY";
pub const COL_NUMB: &str = "NUMB";
pub const COL_PC: &str = "PC";
pub const COL_NUMB_X: &str = "NUMB_X";
pub const COL_PC_X: &str = "PC_X";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_AREA,
    COL_TIME,
    COL_ETHNICITY,
    COL_NUMB,
    COL_PC,
    COL_NUMB_X,
    COL_PC_X,
];

/// Raw cells as they appear in the file, before coercion.
#[derive(Debug, Deserialize)]
struct RawFactRow {
    #[serde(rename = "AllAreaLV")]
    area: Option<String>,
    #[serde(rename = "TIME")]
    time: Option<String>,
    #[serde(rename = "ETHNICITY")]
    ethnicity: Option<String>,
    #[serde(rename = "NUMB")]
    numb: Option<String>,
    #[serde(rename = "PC")]
    pc: Option<String>,
    #[serde(rename = "NUMB_X")]
    numb_x: Option<String>,
    #[serde(rename = "PC_X")]
    pc_x: Option<String>,
}

impl RawFactRow {
    fn into_fact_row(self, index: usize) -> FactRow {
        let numeric = |cell: Option<String>| cell.as_deref().and_then(coerce_numeric);
        FactRow {
            index,
            area: non_empty(self.area),
            ethnicity: non_empty(self.ethnicity),
            year: numeric(self.time),
            numb: numeric(self.numb),
            pc: numeric(self.pc),
            numb_x: numeric(self.numb_x),
            pc_x: numeric(self.pc_x),
        }
    }
}

fn non_empty(cell: Option<String>) -> Option<String> {
    cell.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read the fact table at `path`.
pub fn read_fact_table(path: &Path) -> Result<Vec<FactRow>, IngestError> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_fact_rows(file, path)?;
    info!(path = %path.display(), rows = rows.len(), "fact table loaded");
    Ok(rows)
}

/// Read semicolon-delimited fact rows from any reader.
///
/// `path` is only used for error context. Every record becomes a [`FactRow`]
/// indexed by its 0-based position; validity of the dimension cells is
/// decided later by the transform.
pub fn read_fact_rows<R: Read>(reader: R, path: &Path) -> Result<Vec<FactRow>, IngestError> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(FACT_DELIMITER)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    for column in REQUIRED_COLUMNS {
        let present = headers
            .iter()
            .any(|header| header.trim_matches('\u{feff}') == column);
        if !present {
            return Err(IngestError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    if headers
        .get(0)
        .is_some_and(|first| first.starts_with('\u{feff}'))
    {
        let cleaned: csv::StringRecord = headers
            .iter()
            .map(|header| header.trim_matches('\u{feff}'))
            .collect();
        reader.set_headers(cleaned);
    }

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<RawFactRow>().enumerate() {
        let raw = record.map_err(csv_error)?;
        rows.push(raw.into_fact_row(index));
    }
    debug!(path = %path.display(), rows = rows.len(), "fact rows parsed");
    Ok(rows)
}
