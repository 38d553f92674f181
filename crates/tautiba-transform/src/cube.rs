//! Single-pass cube construction.

use tracing::{info, info_span, trace};

use tautiba_model::{CubeTerms, FactRow, ReferenceData, TripleSink};

use crate::error::TransformError;
use crate::observation::ObservationBuilder;
use crate::registry::ConceptRegistry;
use crate::schema::emit_schema;

/// Counters collected while building one cube.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub rows_read: usize,
    pub observations: usize,
    /// Rows missing area, ethnicity or year.
    pub rows_dropped: usize,
    pub area_concepts: usize,
    pub ethnicity_concepts: usize,
    pub territorial_classifier_concepts: usize,
    pub ethnic_classifier_concepts: usize,
    pub slug_collisions: usize,
}

/// Emit the schema, then concepts and an observation for every valid row.
///
/// Rows are processed in slice order; observation identifiers come from
/// [`FactRow::index`]. Invalid rows leave no trace in the graph.
pub fn build_cube<S: TripleSink>(
    reference: &ReferenceData,
    rows: &[FactRow],
    sink: &mut S,
) -> Result<BuildStats, TransformError> {
    let span = info_span!("build_cube", rows = rows.len());
    let _guard = span.enter();

    let terms = CubeTerms::new();
    emit_schema(&terms, sink);

    let mut registry = ConceptRegistry::new(&terms, reference);
    let observations = ObservationBuilder::new(&terms);
    let mut stats = BuildStats {
        rows_read: rows.len(),
        ..BuildStats::default()
    };

    for row in rows {
        let Some(dims) = row.dimensions() else {
            trace!(row = row.index, "row missing area, ethnicity or year; skipped");
            stats.rows_dropped += 1;
            continue;
        };
        let area = registry.area(dims.area, sink)?;
        let ethnicity = registry.ethnicity(dims.ethnicity, sink)?;
        observations.emit(row, &area, dims.year, &ethnicity, sink)?;
        stats.observations += 1;
    }

    let counts = registry.counts();
    stats.area_concepts = counts.area_concepts;
    stats.ethnicity_concepts = counts.ethnicity_concepts;
    stats.territorial_classifier_concepts = counts.territorial_classifier_concepts;
    stats.ethnic_classifier_concepts = counts.ethnic_classifier_concepts;
    stats.slug_collisions = counts.slug_collisions;

    info!(
        observations = stats.observations,
        dropped = stats.rows_dropped,
        areas = stats.area_concepts,
        ethnicities = stats.ethnicity_concepts,
        "cube built"
    );
    Ok(stats)
}
