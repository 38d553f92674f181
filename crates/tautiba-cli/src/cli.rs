//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tautiba_standards::SourcePaths;

#[derive(Parser)]
#[command(
    name = "tautiba-cube",
    version,
    about = "Convert population-by-ethnicity data to an RDF Data Cube",
    long_about = "Convert the population-by-ethnicity table to an RDF Data Cube.\n\n\
                  Territory and ethnicity codes become SKOS concepts cross-linked to the\n\
                  ATVK 2021 and TAUT 2016 classifiers. Output is a single Turtle document.\n\n\
                  Without flags, inputs are read from data/ (or $TAUTIBA_DATA_DIR) and the\n\
                  output is written to tautiba_datacube.ttl."
)]
pub struct Cli {
    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print a table of build statistics after the summary line.
    #[arg(long = "stats")]
    pub stats: bool,

    #[command(flatten)]
    pub paths: PathArgs,
}

/// Optional overrides for the fixed input and output locations.
#[derive(Args, Default)]
pub struct PathArgs {
    /// Directory holding the input tables (default: $TAUTIBA_DATA_DIR or data/).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Main fact table (semicolon-delimited).
    #[arg(long = "fact-table", value_name = "PATH")]
    pub fact_table: Option<PathBuf>,

    /// Ethnic classifier table (TAUT 2016).
    #[arg(long = "ethnic-classifier", value_name = "PATH")]
    pub ethnic_classifier: Option<PathBuf>,

    /// Territorial classifier table (ATVK 2021).
    #[arg(long = "territorial-classifier", value_name = "PATH")]
    pub territorial_classifier: Option<PathBuf>,

    /// Open-data territory table with bilingual names.
    #[arg(long = "territories", value_name = "PATH", conflicts_with = "no_territories")]
    pub territories: Option<PathBuf>,

    /// Skip the territory table; area concepts are labelled with their codes.
    #[arg(long = "no-territories")]
    pub no_territories: bool,

    /// Output Turtle file.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl PathArgs {
    /// Resolve the run's file locations, starting from the fixed layout.
    pub fn resolve(&self) -> SourcePaths {
        let mut paths = match &self.data_dir {
            Some(dir) => SourcePaths::in_dir(dir),
            None => SourcePaths::default(),
        };
        if let Some(path) = &self.fact_table {
            paths.fact_table = path.clone();
        }
        if let Some(path) = &self.ethnic_classifier {
            paths.ethnic_classifier = path.clone();
        }
        if let Some(path) = &self.territorial_classifier {
            paths.territorial_classifier = path.clone();
        }
        if self.no_territories {
            paths.territories = None;
        } else if let Some(path) = &self.territories {
            paths.territories = Some(path.clone());
        }
        if let Some(path) = &self.output {
            paths.output = path.clone();
        }
        paths
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
