//! The conversion run: load reference data, read facts, build, write.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tautiba_ingest::read_fact_table;
use tautiba_output::{GraphSink, write_turtle};
use tautiba_standards::{SourcePaths, load_reference_data};
use tautiba_transform::{BuildStats, build_cube};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output: PathBuf,
    /// Distinct triples written.
    pub triples: usize,
    pub stats: BuildStats,
}

/// Run the whole conversion.
///
/// Every input is read and the graph is fully built before the output file is
/// touched, so a failure at any stage leaves no output behind.
pub fn run(paths: &SourcePaths) -> Result<RunOutcome> {
    let reference_span = info_span!("load_reference");
    let reference_start = Instant::now();
    let reference = reference_span
        .in_scope(|| load_reference_data(paths))
        .context("load reference data")?;
    info!(
        duration_ms = reference_start.elapsed().as_millis(),
        "reference stage complete"
    );

    let ingest_span = info_span!("ingest", path = %paths.fact_table.display());
    let ingest_start = Instant::now();
    let rows = ingest_span
        .in_scope(|| read_fact_table(&paths.fact_table))
        .with_context(|| format!("read fact table {}", paths.fact_table.display()))?;
    info!(
        rows = rows.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let build_start = Instant::now();
    let mut sink = GraphSink::new();
    let stats = build_cube(&reference, &rows, &mut sink).context("build data cube")?;
    info!(
        triples = sink.len(),
        duration_ms = build_start.elapsed().as_millis(),
        "build complete"
    );

    let serialize_span = info_span!("serialize", path = %paths.output.display());
    let triples = serialize_span
        .in_scope(|| write_turtle(&sink, &paths.output))
        .with_context(|| format!("write {}", paths.output.display()))?;

    Ok(RunOutcome {
        output: paths.output.clone(),
        triples,
        stats,
    })
}
