use std::collections::BTreeSet;

use oxrdf::vocab::rdf;
use oxrdf::{Graph, NamedNodeRef, TermRef, TripleRef};

use tautiba_model::vocab::EX;
use tautiba_model::{
    CrossReferenceTable, FactRow, ReferenceData, TerritoryNames, TerritoryTable,
};
use tautiba_output::{GraphSink, parse_turtle, serialize_turtle};
use tautiba_transform::build_cube;

const OBSERVATION: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://purl.org/linked-data/cube#Observation");
const CONCEPT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#Concept");
const EXACT_MATCH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2004/02/skos/core#exactMatch");

fn reference() -> ReferenceData {
    let mut territories = TerritoryTable::new();
    territories.insert(
        "LV0001000",
        TerritoryNames {
            local: Some("Rīga".to_string()),
            alternate: Some("Riga".to_string()),
        },
    );
    ReferenceData {
        ethnic: [(17, "Krievi".to_string()), (1, "Latvieši".to_string())]
            .into_iter()
            .collect(),
        territorial: [(1000, "Rīga".to_string())].into_iter().collect(),
        territories,
        ethnicity_xref: [("E_RUS", 17), ("E_LAT", 1)]
            .into_iter()
            .collect::<CrossReferenceTable>(),
    }
}

fn fact(index: usize, area: &str, ethnicity: &str, year: Option<f64>) -> FactRow {
    FactRow {
        index,
        area: Some(area.to_string()),
        ethnicity: Some(ethnicity.to_string()),
        year,
        numb: Some(100.0 + index as f64),
        pc: Some(12.5),
        ..FactRow::default()
    }
}

fn rows() -> Vec<FactRow> {
    vec![
        fact(0, "LV0001000", "E_RUS", Some(2021.0)),
        fact(1, "LV0001000", "E_LAT", Some(2021.0)),
        fact(2, "lv0001000", "e_rus", Some(2022.0)),
        fact(3, "LV_TOTAL", "E_OTH", Some(2021.0)),
        fact(4, "LV0001000", "E_RUS", None),
    ]
}

fn build() -> GraphSink {
    let mut sink = GraphSink::new();
    build_cube(&reference(), &rows(), &mut sink).expect("build cube");
    sink
}

fn instances(graph: &Graph, class: NamedNodeRef<'_>) -> BTreeSet<String> {
    graph
        .subjects_for_predicate_object(rdf::TYPE, class)
        .map(|subject| subject.to_string())
        .collect()
}

#[test]
fn one_observation_per_valid_row() {
    let sink = build();
    let observations = instances(sink.graph(), OBSERVATION);

    assert_eq!(observations.len(), 4);
    let dropped = EX.iri("obs/4").expect("iri");
    assert!(!observations.contains(&dropped.to_string()));
}

#[test]
fn concepts_are_deduplicated_and_linked() {
    let sink = build();
    let graph = sink.graph();

    let area = EX.iri("concept/area/lv0001000").expect("iri");
    let atvk = EX.iri("concept/atvk2021/1000").expect("iri");
    let links: Vec<TermRef<'_>> = graph
        .objects_for_subject_predicate(area.as_ref(), EXACT_MATCH)
        .collect();
    assert_eq!(links, vec![TermRef::from(atvk.as_ref())]);

    let concepts = instances(graph, CONCEPT);
    // areas: lv0001000, lv-total; ethnicities: e-rus, e-lat, e-oth;
    // classifier concepts: atvk2021/1000, taut2016/17, taut2016/1
    assert_eq!(concepts.len(), 8, "{concepts:#?}");
}

#[test]
fn every_observation_reference_resolves() {
    let sink = build();
    let graph = sink.graph();
    let dimension_predicates = [
        EX.iri("dim/refArea").expect("iri"),
        EX.iri("dim/ethnicity").expect("iri"),
    ];

    for triple in graph.iter() {
        if !dimension_predicates
            .iter()
            .any(|predicate| predicate.as_ref() == triple.predicate)
        {
            continue;
        }
        let TermRef::NamedNode(target) = triple.object else {
            panic!("dimension value is not an IRI: {triple}");
        };
        assert!(
            graph.contains(TripleRef::new(target, rdf::TYPE, CONCEPT)),
            "dangling concept reference: {target}"
        );
    }
}

#[test]
fn turtle_round_trip_preserves_the_graph() {
    let sink = build();
    let bytes = serialize_turtle(&sink).expect("serialize");
    let parsed = parse_turtle(&bytes).expect("parse");
    assert_eq!(&parsed, sink.graph());
}

#[test]
fn repeated_builds_are_identical() {
    let first = serialize_turtle(&build()).expect("serialize");
    let second = serialize_turtle(&build()).expect("serialize");
    assert_eq!(first, second);
}
