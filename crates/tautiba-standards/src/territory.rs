//! Open-data territory names.
//!
//! The portal export has shipped with different field separators over time,
//! so the loader tries each candidate in turn. A candidate is accepted when
//! every record parses and the header carries `ValueCode`.

use std::path::Path;

use tautiba_model::{TerritoryNames, TerritoryTable};
use tracing::{debug, trace};

use crate::csv_utils::{CsvRows, get_field, get_optional, parse_csv_rows, read_bytes};
use crate::error::StandardsError;

pub const CODE_COLUMN: &str = "ValueCode";
pub const LOCAL_NAME_COLUMN: &str = "ValueTextL";
pub const ALTERNATE_NAME_COLUMN: &str = "ValueTextL_Eng";

/// Field delimiters in the order they are tried.
pub const DELIMITER_CANDIDATES: [u8; 3] = [b',', b';', b'\t'];

/// Load the territory table, detecting the delimiter.
///
/// Returns [`StandardsError::NoDelimiter`] wrapping the last failure when no
/// candidate parses.
pub fn load_territory_table(path: &Path) -> Result<TerritoryTable, StandardsError> {
    let bytes = read_bytes(path)?;
    let mut last_error = None;
    for delimiter in DELIMITER_CANDIDATES {
        match parse_with_delimiter(&bytes, delimiter, path) {
            Ok(rows) => {
                debug!(
                    path = %path.display(),
                    delimiter = %char::from(delimiter).escape_default(),
                    "territory delimiter detected"
                );
                return Ok(build_table(&rows));
            }
            Err(error) => {
                trace!(
                    path = %path.display(),
                    delimiter = %char::from(delimiter).escape_default(),
                    %error,
                    "territory delimiter rejected"
                );
                last_error = Some(error);
            }
        }
    }
    Err(StandardsError::NoDelimiter {
        path: path.to_path_buf(),
        last: Box::new(last_error.unwrap_or_else(|| StandardsError::MissingColumn {
            path: path.to_path_buf(),
            column: CODE_COLUMN.to_string(),
        })),
    })
}

fn parse_with_delimiter(
    bytes: &[u8],
    delimiter: u8,
    path: &Path,
) -> Result<CsvRows, StandardsError> {
    let rows = parse_csv_rows(bytes, delimiter, path)?;
    if !rows.has_column(CODE_COLUMN) {
        return Err(StandardsError::MissingColumn {
            path: path.to_path_buf(),
            column: CODE_COLUMN.to_string(),
        });
    }
    Ok(rows)
}

fn build_table(rows: &CsvRows) -> TerritoryTable {
    let mut table = TerritoryTable::new();
    for row in &rows.rows {
        let code = get_field(row, CODE_COLUMN);
        if code.is_empty() {
            continue;
        }
        table.insert(
            code,
            TerritoryNames {
                local: get_optional(row, LOCAL_NAME_COLUMN),
                alternate: get_optional(row, ALTERNATE_NAME_COLUMN),
            },
        );
    }
    table
}
