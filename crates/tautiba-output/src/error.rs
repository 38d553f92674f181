use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("invalid prefix binding {prefix}: {source}")]
    InvalidPrefix {
        prefix: String,
        #[source]
        source: oxrdf::IriParseError,
    },

    #[error("failed to serialize graph: {0}")]
    Serialize(#[source] std::io::Error),

    #[error("failed to parse Turtle: {0}")]
    Parse(#[source] oxrdfio::RdfParseError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
