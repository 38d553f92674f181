use std::path::Path;

use oxrdf::{Graph, Triple, TripleRef};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use tracing::{debug, info, warn};

use tautiba_model::vocab::PREFIXES;

use crate::error::OutputError;
use crate::sink::GraphSink;

/// Serialize the whole graph to Turtle.
///
/// Triples are written sorted by subject, predicate and object so the same
/// graph always produces the same bytes.
pub fn serialize_turtle(sink: &GraphSink) -> Result<Vec<u8>, OutputError> {
    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
    for (prefix, iri) in PREFIXES {
        serializer =
            serializer
                .with_prefix(*prefix, *iri)
                .map_err(|source| OutputError::InvalidPrefix {
                    prefix: (*prefix).to_string(),
                    source,
                })?;
    }

    let mut triples: Vec<TripleRef<'_>> = sink.graph().iter().collect();
    triples.sort_by_cached_key(|triple| {
        (
            triple.subject.to_string(),
            triple.predicate.as_str().to_string(),
            triple.object.to_string(),
        )
    });

    let mut writer = serializer.for_writer(Vec::new());
    for triple in triples {
        writer
            .serialize_triple(triple)
            .map_err(OutputError::Serialize)?;
    }
    let bytes = writer.finish().map_err(OutputError::Serialize)?;
    debug!(triples = sink.len(), bytes = bytes.len(), "graph serialized");
    Ok(bytes)
}

/// Parse a Turtle document back into a graph.
pub fn parse_turtle(bytes: &[u8]) -> Result<Graph, OutputError> {
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(RdfFormat::Turtle).for_reader(bytes) {
        let quad = quad.map_err(OutputError::Parse)?;
        graph.insert(&Triple::from(quad));
    }
    Ok(graph)
}

/// Serialize and write the graph to `path`, returning the triple count.
///
/// Serialization completes in memory before the file is created, so a
/// failure never leaves a truncated document behind.
pub fn write_turtle(sink: &GraphSink, path: &Path) -> Result<usize, OutputError> {
    if sink.is_empty() {
        warn!(path = %path.display(), "writing an empty graph");
    }
    let bytes = serialize_turtle(sink)?;
    std::fs::write(path, &bytes).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        triples = sink.len(),
        bytes = bytes.len(),
        "turtle written"
    );
    Ok(sink.len())
}

#[cfg(test)]
mod tests {
    use oxrdf::vocab::xsd;
    use oxrdf::{Literal, NamedNode};
    use tautiba_model::TripleSink;

    use super::*;

    fn sample() -> GraphSink {
        let mut sink = GraphSink::new();
        let subject = NamedNode::new_unchecked("https://NiklavsPS.github.io/tautiba-rdf-datacube/obs/0");
        sink.add(Triple::new(
            subject.clone(),
            NamedNode::new_unchecked("https://NiklavsPS.github.io/tautiba-rdf-datacube/measure/numb"),
            Literal::new_typed_literal("1234", xsd::INTEGER),
        ));
        sink.add(Triple::new(
            subject,
            NamedNode::new_unchecked("http://www.w3.org/2004/02/skos/core#prefLabel"),
            Literal::new_language_tagged_literal_unchecked("Rīga", "lv"),
        ));
        sink
    }

    #[test]
    fn serialization_is_deterministic() {
        let sink = sample();
        let first = serialize_turtle(&sink).expect("serialize");
        let second = serialize_turtle(&sink).expect("serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn turtle_binds_prefixes() {
        let text = String::from_utf8(serialize_turtle(&sample()).expect("serialize"))
            .expect("utf-8");
        assert!(text.contains("@prefix qb: <http://purl.org/linked-data/cube#>"));
        assert!(text.contains("@prefix ex: <https://NiklavsPS.github.io/tautiba-rdf-datacube/>"));
    }

    #[test]
    fn serialized_graph_reads_back() {
        let sink = sample();
        let bytes = serialize_turtle(&sink).expect("serialize");
        let parsed = parse_turtle(&bytes).expect("parse");
        assert_eq!(&parsed, sink.graph());
    }
}
