//! Terminal wording for the fill report.
//!
//! The gap filler returns a [`FillReport`] value; this module turns it into
//! the message shown to the user. Whether and where to print it is the app
//! layer's call.

use crate::domain::{FillReason, FillReport, Year};

/// Format the fill report for display, or `None` when nothing was
/// synthesized and there is nothing worth saying.
pub fn format_fill_report(report: &FillReport, year: Year) -> Option<String> {
    if report.days_added == 0 {
        return None;
    }

    let mut lines = Vec::new();
    match report.reason {
        FillReason::ToToday => {
            lines.push(format!(
                "Added the last known rate for {} days up until the current date.",
                report.days_added
            ));
            lines.push("Consider importing a newer XML file to get the latest rates.".to_string());
        }
        FillReason::ToYearEnd => {
            lines.push(format!(
                "Added the last known rate for {} days at the end of the year {year}.",
                report.days_added
            ));
        }
    }
    lines.push("Note that weekends and some common public holidays are always".to_string());
    lines.push("filled with the last known rate.".to_string());

    Some(lines.join("\n"))
}
