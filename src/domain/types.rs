//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while the daily table is being built
//! - exported to JSON without a separate wire representation
//! - asserted on directly in tests

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A date→rate mapping keyed by canonical `YYYY-MM-DD` strings.
///
/// An ordered map, so iteration (and JSON serialization) always runs in
/// ascending date order; for canonical keys, lexicographic order equals
/// calendar order.
pub type RateTable = BTreeMap<String, f64>;

/// A single raw observation as decoded from the source document.
///
/// Both fields are kept as strings; interpretation (year membership, rate
/// parsing) is the extractor's job, not the decoder's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    pub date: String,
    pub value: String,
}

/// A calendar year validated to the supported range [2000, 2100].
///
/// Construction is the only place year validation happens; everything
/// downstream can rely on `first_day`/`last_day` existing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    pub const MIN: i32 = 2000;
    pub const MAX: i32 = 2100;

    pub fn new(value: i32) -> Result<Self, AppError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(AppError::usage(format!(
                "Invalid year {value}: expected a year between {} and {}.",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// January 1 of this year. Cannot fail for a validated year.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 1, 1).expect("Jan 1 exists for a validated year")
    }

    /// December 31 of this year. Cannot fail for a validated year.
    pub fn last_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 12, 31).expect("Dec 31 exists for a validated year")
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved run configuration, built once from the CLI and passed by
/// reference into every consumer.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub year: Year,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Extractor output: the sparse per-year series plus carry-over context
/// needed by the gap filler.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseSeries {
    /// Observed rates within the target year, keyed by `YYYY-MM-DD`.
    pub records: RateTable,
    /// Rate carried over from the tail of the prior year, used to seed the
    /// fill when the year's first days are unobserved. 0.0 when no
    /// observation fell inside the look-back window.
    pub buffer_rate: f64,
    /// The chronologically last observed date in `records`.
    pub last_date: NaiveDate,
}

/// Why the gap filler synthesized days past the last observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillReason {
    /// Current-year run: filled up to today's date.
    ToToday,
    /// Past-year run: filled to December 31.
    ToYearEnd,
}

/// How many days the gap filler synthesized past the last observation, and
/// why. Returned to the caller instead of being printed from the core, so
/// the display decision stays in the app layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReport {
    pub days_added: usize,
    pub reason: FillReason,
}
