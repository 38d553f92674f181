//! Fixed Data Cube structure.
//!
//! One dataset, one structure definition, three dimensions, two measures,
//! two attributes and a component specification for each of the seven
//! components, plus the four concept schemes concepts are filed under.
//! Nothing here depends on the data rows.

use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Literal, NamedNode};
use tracing::debug;

use tautiba_model::vocab::{LANG_ALTERNATE, LANG_LOCAL};
use tautiba_model::{CubeTerms, TripleSink};

use crate::identifier::slugify;

/// How a component is attached to the structure definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComponentKind {
    Dimension,
    Measure,
    Attribute,
}

pub(crate) fn lv(text: &str) -> Literal {
    Literal::new_language_tagged_literal_unchecked(text, LANG_LOCAL)
}

pub(crate) fn en(text: &str) -> Literal {
    Literal::new_language_tagged_literal_unchecked(text, LANG_ALTERNATE)
}

/// Emit the cube schema into `sink`.
///
/// Must run exactly once per output graph.
pub fn emit_schema<S: TripleSink>(terms: &CubeTerms, sink: &mut S) {
    let label = NamedNode::from(rdfs::LABEL);
    let rdf_type = NamedNode::from(rdf::TYPE);

    sink.statement(&terms.dataset, &rdf_type, terms.qb_dataset_class.clone());
    sink.statement(
        &terms.dataset,
        &label,
        lv("Iedzīvotāju skaits pēc tautības (RDF Data Cube)"),
    );
    sink.statement(
        &terms.dataset,
        &terms.dcterms_title,
        en("Population by ethnicity (RDF Data Cube)"),
    );
    sink.statement(&terms.dataset, &terms.qb_structure, terms.dsd.clone());
    sink.statement(&terms.dsd, &rdf_type, terms.qb_dsd_class.clone());

    let components = [
        (&terms.dim_area, ComponentKind::Dimension),
        (&terms.dim_time, ComponentKind::Dimension),
        (&terms.dim_ethnicity, ComponentKind::Dimension),
        (&terms.measure_numb, ComponentKind::Measure),
        (&terms.measure_pc, ComponentKind::Measure),
        (&terms.attr_numb_x, ComponentKind::Attribute),
        (&terms.attr_pc_x, ComponentKind::Attribute),
    ];
    for (component, kind) in components {
        add_component(terms, sink, component, kind);
    }

    let property_labels = [
        (&terms.dim_area, &terms.qb_dimension_property, vec![lv("Teritorija")]),
        (&terms.dim_time, &terms.qb_dimension_property, vec![lv("Gads")]),
        (&terms.dim_ethnicity, &terms.qb_dimension_property, vec![lv("Tautība")]),
        (
            &terms.measure_numb,
            &terms.qb_measure_property,
            vec![lv("Skaits"), en("Number")],
        ),
        (
            &terms.measure_pc,
            &terms.qb_measure_property,
            vec![lv("%"), en("per cent")],
        ),
        (
            &terms.attr_numb_x,
            &terms.qb_attribute_property,
            vec![lv("NUMB papildu/atzīmes")],
        ),
        (
            &terms.attr_pc_x,
            &terms.qb_attribute_property,
            vec![lv("PC papildu/atzīmes")],
        ),
    ];
    for (property, class, labels) in property_labels {
        sink.statement(property, &rdf_type, class.clone());
        for text in labels {
            sink.statement(property, &label, text);
        }
    }

    let schemes = [
        (&terms.scheme_area, "Teritoriju kodu saraksts (AllAreaLV)"),
        (&terms.scheme_ethnicity, "Tautību kodu saraksts (ETHNICITY)"),
        (&terms.scheme_atvk, "ATVK 2021 (klasifikators)"),
        (&terms.scheme_taut, "TAUT 2016 (klasifikators)"),
    ];
    for (scheme, text) in schemes {
        sink.statement(scheme, &rdf_type, terms.skos_concept_scheme.clone());
        sink.statement(scheme, &label, lv(text));
    }
    sink.statement(&terms.dim_area, &terms.qb_code_list, terms.scheme_area.clone());
    sink.statement(
        &terms.dim_ethnicity,
        &terms.qb_code_list,
        terms.scheme_ethnicity.clone(),
    );
    debug!(components = components.len(), "cube schema emitted");
}

/// Component specification IRI: `<dsd>/component/<slug of the local name>`.
pub(crate) fn component_iri(dsd: &NamedNode, component: &NamedNode) -> NamedNode {
    let local = component
        .as_str()
        .rsplit('/')
        .next()
        .unwrap_or(component.as_str());
    NamedNode::new_unchecked(format!("{}/component/{}", dsd.as_str(), slugify(local)))
}

fn add_component<S: TripleSink>(
    terms: &CubeTerms,
    sink: &mut S,
    component: &NamedNode,
    kind: ComponentKind,
) {
    let spec = component_iri(&terms.dsd, component);
    let predicate = match kind {
        ComponentKind::Dimension => &terms.qb_dimension,
        ComponentKind::Measure => &terms.qb_measure,
        ComponentKind::Attribute => &terms.qb_attribute,
    };
    sink.statement(&terms.dsd, &terms.qb_component, spec.clone());
    sink.statement(
        &spec,
        &NamedNode::from(rdf::TYPE),
        terms.qb_component_specification.clone(),
    );
    sink.statement(&spec, predicate, component.clone());
}
