//! Gap filling: expand the sparse per-year series into a contiguous daily
//! table, carrying the last known rate across unobserved days.
//!
//! All date arithmetic is plain calendar-day math on `NaiveDate`; the caller
//! supplies "today" (derived from the UTC clock in the app layer), so the
//! core stays deterministic and free of clock reads.

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::{FillReason, FillReport, RateTable, SparseSeries, Year};

/// Build the dense daily rate table for `year`.
///
/// Every day from January 1 through the boundary (today for the current
/// year, December 31 otherwise) gets exactly one entry. Days without an
/// observation inherit the most recent prior rate; days before the first
/// observation inherit the buffer rate.
///
/// The returned [`FillReport`] counts the days synthesized past the last
/// observation; displaying it is the caller's decision.
pub fn fill_missing_days(
    series: &SparseSeries,
    year: Year,
    today: NaiveDate,
) -> (RateTable, FillReport) {
    let mut table = RateTable::new();
    let mut current_rate = series.buffer_rate;

    let mut day = year.first_day();
    while day <= series.last_date {
        let key = day.format("%Y-%m-%d").to_string();
        if let Some(rate) = series.records.get(&key) {
            current_rate = *rate;
        }
        table.insert(key, current_rate);
        day += Duration::days(1);
    }

    // Extend past the last observation: to today for the current year, or to
    // December 31 for a past year. The running rate is frozen at this point.
    let is_current_year = year.get() == today.year();
    let boundary = if is_current_year {
        today
    } else {
        year.last_day()
    };

    let mut days_added = 0;
    if series.last_date < boundary {
        let mut day = series.last_date + Duration::days(1);
        while day <= boundary {
            table.insert(day.format("%Y-%m-%d").to_string(), current_rate);
            days_added += 1;
            day += Duration::days(1);
        }
    }

    let reason = if is_current_year {
        FillReason::ToToday
    } else {
        FillReason::ToYearEnd
    };

    (table, FillReport { days_added, reason })
}
