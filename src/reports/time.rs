//! Most-frequent-times pass: month, weekday and start hour.

use crate::error::{Error, Result};
use crate::reports::types::{Highlight, TimeReport};
use crate::reports::utility::{is_uniform, mode};
use crate::selection::{WEEK, day_name, month_name};
use crate::trips::TripTable;

/// Computes the time-of-travel report.
///
/// Month and weekday carry a `was_uniform` flag: when a filter already
/// pinned the column to one value the report echoes it back instead of
/// claiming a popularity result. Weekday ties break Monday-first, matching
/// the smallest-value rule used everywhere else.
pub fn time_report(table: &TripTable) -> Result<TimeReport> {
    let rows = table.rows();

    let popular_month = mode(rows.iter().map(|r| r.month)).ok_or(Error::EmptyResult)?;
    let month_uniform = is_uniform(rows.iter().map(|r| r.month));

    let day_index = mode(rows.iter().map(|r| r.weekday.num_days_from_monday()))
        .ok_or(Error::EmptyResult)?;
    let day_uniform = is_uniform(rows.iter().map(|r| r.weekday));

    let popular_hour = mode(rows.iter().map(|r| r.hour)).ok_or(Error::EmptyResult)?;

    Ok(TimeReport {
        month: Highlight {
            value: month_name(popular_month).to_string(),
            was_uniform: month_uniform,
        },
        weekday: Highlight {
            value: day_name(WEEK[day_index as usize]).to_string(),
            was_uniform: day_uniform,
        },
        popular_hour,
    })
}
