//! Population table -> RDF Data Cube transform.
//!
//! - **identifier**: URI-safe slugs and digit extraction for classifier keys
//! - **schema**: the fixed Data Cube structure, emitted once per graph
//! - **registry**: deduplicated SKOS concepts with classifier cross-links
//! - **observation**: one `qb:Observation` per valid row
//! - **cube**: the single-pass driver tying the above together

pub mod cube;
pub mod error;
pub mod identifier;
pub mod observation;
pub mod registry;
pub mod schema;

pub use cube::{BuildStats, build_cube};
pub use error::TransformError;
pub use identifier::{extract_digits, slugify};
pub use observation::ObservationBuilder;
pub use registry::{ConceptRegistry, RegistryCounts};
pub use schema::emit_schema;
