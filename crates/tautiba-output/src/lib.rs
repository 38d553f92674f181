//! Output side of the pipeline.
//!
//! - **sink**: append-only graph accumulator
//! - **turtle**: one-shot Turtle serialization, plus the matching parser used
//!   to check that a written document reads back to the same triples

mod error;
mod sink;
mod turtle;

pub use error::OutputError;
pub use sink::GraphSink;
pub use turtle::{parse_turtle, serialize_turtle, write_turtle};
