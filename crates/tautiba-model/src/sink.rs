use oxrdf::{NamedNode, Term, Triple};

/// Write-only target for emitted statements.
///
/// Builders only ever append; nothing reads the sink back until the run is
/// finished and the graph is serialized.
pub trait TripleSink {
    fn add(&mut self, triple: Triple);

    /// Append `subject predicate object` for an IRI subject.
    fn statement(&mut self, subject: &NamedNode, predicate: &NamedNode, object: impl Into<Term>)
    where
        Self: Sized,
    {
        self.add(Triple::new(subject.clone(), predicate.clone(), object));
    }
}

impl TripleSink for Vec<Triple> {
    fn add(&mut self, triple: Triple) {
        self.push(triple);
    }
}
