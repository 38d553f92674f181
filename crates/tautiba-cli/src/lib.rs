//! CLI library components for the population Data Cube converter.

pub mod logging;
pub mod pipeline;
pub mod summary;
