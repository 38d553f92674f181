//! Observation mapping.

use oxrdf::vocab::{rdf, xsd};
use oxrdf::{Literal, NamedNode};

use tautiba_model::vocab::{EX, YEAR};
use tautiba_model::{CubeTerms, FactRow, TripleSink};

use crate::error::TransformError;

/// Emits one `qb:Observation` per validated row.
#[derive(Debug, Clone, Copy)]
pub struct ObservationBuilder<'t> {
    terms: &'t CubeTerms,
}

impl<'t> ObservationBuilder<'t> {
    pub fn new(terms: &'t CubeTerms) -> Self {
        Self { terms }
    }

    /// Emit the observation for `row` and return its IRI.
    ///
    /// The caller resolves the dimension concepts first; measure and
    /// attribute triples are added only for cells that hold a number.
    pub fn emit<S: TripleSink>(
        &self,
        row: &FactRow,
        area: &NamedNode,
        year: i64,
        ethnicity: &NamedNode,
        sink: &mut S,
    ) -> Result<NamedNode, TransformError> {
        let terms = self.terms;
        let obs = EX.iri(&format!("obs/{}", row.index))?;
        let period = YEAR.iri(&year.to_string())?;

        sink.statement(&obs, &NamedNode::from(rdf::TYPE), terms.qb_observation.clone());
        sink.statement(&obs, &terms.qb_data_set, terms.dataset.clone());
        sink.statement(&obs, &terms.dim_area, area.clone());
        sink.statement(&obs, &terms.dim_time, period);
        sink.statement(&obs, &terms.dim_ethnicity, ethnicity.clone());

        if let Some(value) = row.numb {
            sink.statement(&obs, &terms.measure_numb, integer(value));
        }
        if let Some(value) = row.pc {
            sink.statement(&obs, &terms.measure_pc, decimal(value));
        }
        if let Some(value) = row.numb_x {
            sink.statement(&obs, &terms.attr_numb_x, integer(value));
        }
        if let Some(value) = row.pc_x {
            sink.statement(&obs, &terms.attr_pc_x, integer(value));
        }
        Ok(obs)
    }
}

/// `xsd:integer`, truncated toward zero.
///
/// Written from the float itself so magnitudes beyond `i64` keep their value.
fn integer(value: f64) -> Literal {
    let truncated = value.trunc();
    let lexical = if truncated == 0.0 {
        "0".to_string()
    } else {
        truncated.to_string()
    };
    Literal::new_typed_literal(lexical, xsd::INTEGER)
}

/// `xsd:decimal` in shortest round-trip form; whole numbers keep a `.0`.
fn decimal(value: f64) -> Literal {
    let mut lexical = value.to_string();
    if !lexical.contains('.') {
        lexical.push_str(".0");
    }
    Literal::new_typed_literal(lexical, xsd::DECIMAL)
}
