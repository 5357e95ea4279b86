//! Series extraction: restrict raw observations to the target year and pick
//! the buffer rate carried over from the prior year.
//!
//! Design goals:
//! - **Strict failure** on data the filler cannot work with (clear errors +
//!   exit codes) instead of propagating sentinel dates
//! - **Order independence**: buffer selection tracks the latest candidate
//!   date, so a source that is not chronologically sorted still yields the
//!   observation closest to the year boundary
//! - **Separation of concerns**: no fill logic here

use chrono::{Duration, NaiveDate};

use crate::domain::{RateTable, RawObservation, SparseSeries, Year};
use crate::error::AppError;

/// Look-back window (calendar days) before January 1 in which a prior-year
/// observation may serve as the buffer rate. Five days is enough to reach
/// past the New Year holidays plus an adjacent weekend.
pub const BUFFER_WINDOW_DAYS: i64 = 5;

/// Restrict `observations` to the target year and derive the carry-over
/// context for the gap filler.
///
/// Year membership is decided by the first four characters of the source
/// date string, so a `2023-01-01T12:00:00`-style timestamp still counts for
/// 2023. Record keys are truncated to the `YYYY-MM-DD` day part.
pub fn extract_year_series(
    observations: &[RawObservation],
    year: Year,
) -> Result<SparseSeries, AppError> {
    let year_str = year.to_string();
    let year_start = year.first_day();
    let window_start = year_start - Duration::days(BUFFER_WINDOW_DAYS);

    let mut records = RateTable::new();
    let mut buffer_rate = 0.0;
    let mut buffer_date: Option<NaiveDate> = None;

    for obs in observations {
        let Some(obs_year) = obs.date.get(..4) else {
            // Too short to carry a year prefix; cannot belong to any year.
            continue;
        };

        if obs_year == year_str {
            records.insert(day_key(&obs.date).to_string(), parse_rate(obs)?);
            continue;
        }

        // A prior-year observation close enough to January 1 seeds the fill
        // when the year's first days are unobserved (holidays, weekends).
        // The latest candidate date wins.
        if obs_year < year_str.as_str() {
            let Some(date) = parse_day(&obs.date) else {
                continue;
            };
            if date < year_start
                && date >= window_start
                && buffer_date.map_or(true, |best| date > best)
            {
                buffer_rate = parse_rate(obs)?;
                buffer_date = Some(date);
            }
        }
    }

    let Some(last_key) = records.keys().next_back() else {
        return Err(AppError::empty_series(format!(
            "No observations found for the year {year}."
        )));
    };
    let last_date = parse_day(last_key).ok_or_else(|| {
        AppError::input(format!("Malformed observation date '{last_key}'."))
    })?;

    Ok(SparseSeries {
        records,
        buffer_rate,
        last_date,
    })
}

/// The `YYYY-MM-DD` day part of a source date string.
fn day_key(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

/// Parse the day part of a source date string as a calendar date.
fn parse_day(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day_key(date), "%Y-%m-%d").ok()
}

fn parse_rate(obs: &RawObservation) -> Result<f64, AppError> {
    obs.value.parse::<f64>().map_err(|_| {
        AppError::input(format!(
            "Malformed rate value '{}' for date '{}'.",
            obs.value, obs.date
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(date: &str, value: &str) -> RawObservation {
        RawObservation {
            date: date.to_string(),
            value: value.to_string(),
        }
    }

    fn year(y: i32) -> Year {
        Year::new(y).unwrap()
    }

    #[test]
    fn keeps_only_target_year_records() {
        let observations = vec![
            obs("2022-12-30", "1.07"),
            obs("2023-01-03", "1.10"),
            obs("2023-06-15", "1.05"),
            obs("2024-01-02", "1.09"),
        ];

        let series = extract_year_series(&observations, year(2023)).unwrap();
        assert_eq!(series.records.len(), 2);
        assert_eq!(series.records["2023-01-03"], 1.10);
        assert_eq!(series.records["2023-06-15"], 1.05);
        assert_eq!(
            series.last_date,
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
        );
    }

    #[test]
    fn year_membership_is_prefix_based() {
        // A timestamp-style date still belongs to its 4-char year prefix,
        // and the record key is truncated to the day part.
        let observations = vec![
            obs("2023-01-01T12:00:00", "1.11"),
            obs("2022-12-31T09:00:00", "1.02"),
        ];

        let series = extract_year_series(&observations, year(2023)).unwrap();
        assert_eq!(series.records.len(), 1);
        assert_eq!(series.records["2023-01-01"], 1.11);
        // The adjacent 2022 timestamp lands in the buffer window instead.
        assert_eq!(series.buffer_rate, 1.02);
    }

    #[test]
    fn buffer_rate_respects_five_day_window() {
        // 2022-12-29 is 3 days before year start: inside the window.
        // 2022-12-20 is 12 days before: outside.
        let observations = vec![
            obs("2022-12-20", "1.01"),
            obs("2022-12-29", "1.08"),
            obs("2023-02-01", "1.10"),
        ];

        let series = extract_year_series(&observations, year(2023)).unwrap();
        assert_eq!(series.buffer_rate, 1.08);
    }

    #[test]
    fn buffer_rate_picks_latest_candidate_regardless_of_order() {
        // Reverse-chronological source: the 12-30 observation must still win
        // over 12-28 even though it is encountered first.
        let observations = vec![
            obs("2022-12-30", "1.09"),
            obs("2022-12-28", "1.04"),
            obs("2023-03-01", "1.10"),
        ];

        let series = extract_year_series(&observations, year(2023)).unwrap();
        assert_eq!(series.buffer_rate, 1.09);
    }

    #[test]
    fn buffer_rate_defaults_to_zero_without_candidates() {
        let observations = vec![obs("2023-04-04", "1.10")];

        let series = extract_year_series(&observations, year(2023)).unwrap();
        assert_eq!(series.buffer_rate, 0.0);
    }

    #[test]
    fn empty_year_is_an_explicit_error() {
        // Observations exist, but none in the target year: last_date cannot
        // be computed and the run must fail rather than carry a sentinel.
        let observations = vec![obs("2022-12-30", "1.07")];

        let err = extract_year_series(&observations, year(2023)).unwrap_err();
        assert_eq!(err.exit_code(), 3);

        let err = extract_year_series(&[], year(2023)).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn malformed_rate_value_is_an_input_error() {
        let observations = vec![obs("2023-01-03", "not-a-number")];

        let err = extract_year_series(&observations, year(2023)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn duplicate_dates_keep_the_last_value() {
        let observations = vec![obs("2023-01-03", "1.10"), obs("2023-01-03", "1.12")];

        let series = extract_year_series(&observations, year(2023)).unwrap();
        assert_eq!(series.records.len(), 1);
        assert_eq!(series.records["2023-01-03"], 1.12);
    }
}
