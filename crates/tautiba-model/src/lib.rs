//! Shared model for the population-by-ethnicity Data Cube.
//!
//! - **vocab**: namespaces and the fixed schema resources of the cube
//! - **lookup**: in-memory reference tables (classifiers, territory names)
//! - **fact**: one row of the main fact table after numeric coercion
//! - **sink**: the append-only triple interface the builders write into

pub mod error;
pub mod fact;
pub mod lookup;
pub mod sink;
pub mod vocab;

pub use error::ModelError;
pub use fact::{FactRow, RowDimensions};
pub use lookup::{
    ClassifierLookup, CrossReferenceTable, ReferenceData, TerritoryNames, TerritoryTable,
};
pub use sink::TripleSink;
pub use vocab::{CubeTerms, Namespace};
