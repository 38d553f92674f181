use oxrdf::{Graph, Triple};

use tautiba_model::TripleSink;

/// In-memory graph that the builders append to.
///
/// Statements are kept as a set, so re-adding an identical triple is a no-op
/// and [`GraphSink::len`] is the distinct triple count.
#[derive(Debug, Default)]
pub struct GraphSink {
    graph: Graph,
}

impl GraphSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl TripleSink for GraphSink {
    fn add(&mut self, triple: Triple) {
        self.graph.insert(&triple);
    }
}
