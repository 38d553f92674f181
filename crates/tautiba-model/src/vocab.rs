//! Namespaces and fixed resources of the population Data Cube.
//!
//! Every resource the transform mints lives under [`EX`]. Time values point
//! into the UK reference-data Gregorian year namespace ([`YEAR`]).

use oxrdf::NamedNode;

use crate::error::ModelError;

/// An IRI prefix that local names are appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace(&'static str);

impl Namespace {
    pub const fn new(iri: &'static str) -> Self {
        Self(iri)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Mint an IRI from data-derived input, validating the result.
    pub fn iri(&self, local: &str) -> Result<NamedNode, ModelError> {
        let iri = format!("{}{}", self.0, local);
        NamedNode::new(iri.clone()).map_err(|source| ModelError::InvalidIri { iri, source })
    }

    /// Mint an IRI for a compile-time constant local name.
    fn fixed(&self, local: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("{}{}", self.0, local))
    }
}

pub const QB: Namespace = Namespace::new("http://purl.org/linked-data/cube#");
pub const SKOS: Namespace = Namespace::new("http://www.w3.org/2004/02/skos/core#");
pub const DCTERMS: Namespace = Namespace::new("http://purl.org/dc/terms/");
pub const EX: Namespace = Namespace::new("https://NiklavsPS.github.io/tautiba-rdf-datacube/");
pub const YEAR: Namespace = Namespace::new("http://reference.data.gov.uk/id/gregorian-year/");

/// Prefix bindings written at the top of the Turtle document.
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("qb", QB.as_str()),
    ("skos", SKOS.as_str()),
    ("dcterms", DCTERMS.as_str()),
    ("ex", EX.as_str()),
];

pub const LANG_LOCAL: &str = "lv";
pub const LANG_ALTERNATE: &str = "en";

/// Fixed vocabulary terms and schema resources, minted once per run.
#[derive(Debug, Clone)]
pub struct CubeTerms {
    // qb classes and predicates
    pub qb_dataset_class: NamedNode,
    pub qb_dsd_class: NamedNode,
    pub qb_dimension_property: NamedNode,
    pub qb_measure_property: NamedNode,
    pub qb_attribute_property: NamedNode,
    pub qb_component_specification: NamedNode,
    pub qb_observation: NamedNode,
    pub qb_structure: NamedNode,
    pub qb_component: NamedNode,
    pub qb_dimension: NamedNode,
    pub qb_measure: NamedNode,
    pub qb_attribute: NamedNode,
    pub qb_code_list: NamedNode,
    pub qb_data_set: NamedNode,

    // skos
    pub skos_concept: NamedNode,
    pub skos_concept_scheme: NamedNode,
    pub skos_in_scheme: NamedNode,
    pub skos_notation: NamedNode,
    pub skos_pref_label: NamedNode,
    pub skos_exact_match: NamedNode,

    pub dcterms_title: NamedNode,

    // dataset structure
    pub dataset: NamedNode,
    pub dsd: NamedNode,
    pub dim_area: NamedNode,
    pub dim_time: NamedNode,
    pub dim_ethnicity: NamedNode,
    pub measure_numb: NamedNode,
    pub measure_pc: NamedNode,
    pub attr_numb_x: NamedNode,
    pub attr_pc_x: NamedNode,

    // concept schemes
    pub scheme_area: NamedNode,
    pub scheme_ethnicity: NamedNode,
    pub scheme_atvk: NamedNode,
    pub scheme_taut: NamedNode,
}

impl CubeTerms {
    pub fn new() -> Self {
        Self {
            qb_dataset_class: QB.fixed("DataSet"),
            qb_dsd_class: QB.fixed("DataStructureDefinition"),
            qb_dimension_property: QB.fixed("DimensionProperty"),
            qb_measure_property: QB.fixed("MeasureProperty"),
            qb_attribute_property: QB.fixed("AttributeProperty"),
            qb_component_specification: QB.fixed("ComponentSpecification"),
            qb_observation: QB.fixed("Observation"),
            qb_structure: QB.fixed("structure"),
            qb_component: QB.fixed("component"),
            qb_dimension: QB.fixed("dimension"),
            qb_measure: QB.fixed("measure"),
            qb_attribute: QB.fixed("attribute"),
            qb_code_list: QB.fixed("codeList"),
            qb_data_set: QB.fixed("dataSet"),

            skos_concept: SKOS.fixed("Concept"),
            skos_concept_scheme: SKOS.fixed("ConceptScheme"),
            skos_in_scheme: SKOS.fixed("inScheme"),
            skos_notation: SKOS.fixed("notation"),
            skos_pref_label: SKOS.fixed("prefLabel"),
            skos_exact_match: SKOS.fixed("exactMatch"),

            dcterms_title: DCTERMS.fixed("title"),

            dataset: EX.fixed("dataset/tautiba"),
            dsd: EX.fixed("dsd/tautiba"),
            dim_area: EX.fixed("dim/refArea"),
            dim_time: EX.fixed("dim/refPeriod"),
            dim_ethnicity: EX.fixed("dim/ethnicity"),
            measure_numb: EX.fixed("measure/numb"),
            measure_pc: EX.fixed("measure/pc"),
            attr_numb_x: EX.fixed("attr/numb_x"),
            attr_pc_x: EX.fixed("attr/pc_x"),

            scheme_area: EX.fixed("codelist/area"),
            scheme_ethnicity: EX.fixed("codelist/ethnicity"),
            scheme_atvk: EX.fixed("classifier/atvk2021"),
            scheme_taut: EX.fixed("classifier/taut2016"),
        }
    }
}

impl Default for CubeTerms {
    fn default() -> Self {
        Self::new()
    }
}
