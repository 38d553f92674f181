//! Input and output locations.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "TAUTIBA_DATA_DIR";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const FACT_TABLE_FILE: &str = "tautiba.csv";
pub const ETHNIC_CLASSIFIER_FILE: &str = "TAUT2016_11012026_015802.csv";
pub const TERRITORIAL_CLASSIFIER_FILE: &str = "ATVK2021_11012026_015924.csv";
pub const TERRITORY_TABLE_FILE: &str = "territories.csv";
pub const OUTPUT_FILE: &str = "tautiba_datacube.ttl";

/// Get the data root directory.
///
/// Resolution order:
/// 1. `TAUTIBA_DATA_DIR` environment variable
/// 2. `data/` relative to the working directory
pub fn data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Every file a run reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub fact_table: PathBuf,
    pub ethnic_classifier: PathBuf,
    pub territorial_classifier: PathBuf,
    /// `None` skips the open-data territory names; area labels fall back to codes.
    pub territories: Option<PathBuf>,
    pub output: PathBuf,
}

impl SourcePaths {
    /// Fixed file names under `root`; the output lands in the working directory.
    pub fn in_dir(root: &Path) -> Self {
        Self {
            fact_table: root.join(FACT_TABLE_FILE),
            ethnic_classifier: root.join(ETHNIC_CLASSIFIER_FILE),
            territorial_classifier: root.join(TERRITORIAL_CLASSIFIER_FILE),
            territories: Some(root.join(TERRITORY_TABLE_FILE)),
            output: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl Default for SourcePaths {
    fn default() -> Self {
        Self::in_dir(&data_root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout_under_root() {
        let paths = SourcePaths::in_dir(Path::new("/srv/data"));
        assert_eq!(paths.fact_table, PathBuf::from("/srv/data/tautiba.csv"));
        assert_eq!(
            paths.territorial_classifier,
            PathBuf::from("/srv/data/ATVK2021_11012026_015924.csv")
        );
        assert_eq!(
            paths.territories,
            Some(PathBuf::from("/srv/data/territories.csv"))
        );
        assert_eq!(paths.output, PathBuf::from("tautiba_datacube.ttl"));
    }
}
