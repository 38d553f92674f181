#![deny(unsafe_code)]

//! Reference data for the population Data Cube.
//!
//! - **classifier**: official numeric-coded classifiers (`Kods`, `Nosaukums`)
//! - **territory**: open-data territory names with delimiter detection
//! - **crossref**: the static ethnicity -> TAUT 2016 cross-reference table
//! - **paths**: fixed input/output locations

pub mod classifier;
pub mod crossref;
pub mod csv_utils;
pub mod error;
pub mod paths;
pub mod territory;

pub use crate::classifier::{load_classifier, parse_classifier_code};
pub use crate::crossref::{ETHNICITY_TO_TAUT, default_ethnicity_cross_reference};
pub use crate::error::StandardsError;
pub use crate::paths::{DATA_DIR_ENV_VAR, SourcePaths, data_root};
pub use crate::territory::{DELIMITER_CANDIDATES, load_territory_table};

use tautiba_model::{ReferenceData, TerritoryTable};
use tracing::{info, warn};

/// Load every reference table named in `paths`.
///
/// Fails on the first unreadable or unparseable table; nothing is returned
/// partially.
pub fn load_reference_data(paths: &SourcePaths) -> Result<ReferenceData, StandardsError> {
    let ethnic = load_classifier(&paths.ethnic_classifier)?;
    let territorial = load_classifier(&paths.territorial_classifier)?;
    let territories = match &paths.territories {
        Some(path) => {
            let table = load_territory_table(path)?;
            if table.is_empty() {
                warn!(
                    path = %path.display(),
                    "territory table has no codes; areas keep code labels"
                );
            }
            table
        }
        None => TerritoryTable::new(),
    };
    let ethnicity_xref = default_ethnicity_cross_reference();
    if ethnicity_xref.is_empty() {
        warn!("ethnicity cross-reference is empty; no ethnicity links will be emitted");
    }
    info!(
        ethnic_codes = ethnic.len(),
        territorial_codes = territorial.len(),
        territories = territories.len(),
        cross_references = ethnicity_xref.len(),
        "reference data loaded"
    );
    Ok(ReferenceData {
        ethnic,
        territorial,
        territories,
        ethnicity_xref,
    })
}
