//! Shared "generate pipeline" logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! read file -> decode XML -> extract year series -> fill missing days
//!
//! The CLI front-end then focuses on presentation (report message, output
//! path) rather than on the data flow.

use chrono::Utc;

use crate::domain::{FillReport, GeneratorConfig, RateTable};
use crate::error::AppError;
use crate::io::ecb_xml::parse_ecb_xml;
use crate::series::{extract_year_series, fill_missing_days};

/// All computed outputs of a single generator run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The dense daily rate table, ready for serialization.
    pub table: RateTable,
    /// How many days were synthesized past the last observation.
    pub fill: FillReport,
    /// Observations decoded from the source document.
    pub observations_read: usize,
    /// Observations that fell inside the target year.
    pub observations_used: usize,
}

/// Execute the full pipeline: read the input file, then generate.
pub fn run_generate(config: &GeneratorConfig) -> Result<RunOutput, AppError> {
    let xml = std::fs::read_to_string(&config.input).map_err(|e| {
        AppError::input(format!(
            "Failed to read input '{}': {e}",
            config.input.display()
        ))
    })?;

    run_generate_from_xml(config, &xml)
}

/// Execute the pipeline on an already-loaded document.
///
/// This is the testable entry point: no file system, and the only clock
/// read in the whole pipeline ("today", for current-year boundary handling)
/// happens here, in UTC, before the pure core runs.
pub fn run_generate_from_xml(
    config: &GeneratorConfig,
    xml: &str,
) -> Result<RunOutput, AppError> {
    let observations = parse_ecb_xml(xml)?;
    let series = extract_year_series(&observations, config.year)?;

    let today = Utc::now().date_naive();
    let (table, fill) = fill_missing_days(&series, config.year, today);

    Ok(RunOutput {
        observations_read: observations.len(),
        observations_used: series.records.len(),
        table,
        fill,
    })
}
