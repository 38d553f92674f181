use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid IRI {iri}: {source}")]
    InvalidIri {
        iri: String,
        #[source]
        source: oxrdf::IriParseError,
    },
}
