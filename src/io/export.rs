//! Write the dense daily rate table to a JSON file.
//!
//! The output is a flat `"YYYY-MM-DD": rate` object, pretty-printed. The
//! table is an ordered map, so keys come out in ascending date order.

use std::fs::File;
use std::path::Path;

use crate::domain::RateTable;
use crate::error::AppError;

/// Write the rate table as pretty-printed JSON.
///
/// The file is created and written in one pass; on any earlier pipeline
/// failure this function is never reached, so no partial output exists.
pub fn write_rates_json(path: &Path, table: &RateTable) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::input(format!(
            "Failed to create output JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, table)
        .map_err(|e| AppError::input(format!("Failed to write output JSON: {e}")))?;

    Ok(())
}
