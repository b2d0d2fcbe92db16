//! Trip-duration totals pass.

use crate::error::{Error, Result};
use crate::reports::types::DurationReport;
use crate::reports::utility::mean;
use crate::trips::TripTable;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Computes total and mean travel time. Seconds accumulate in f64; the
/// minute figures truncate toward zero rather than round, so 110 seconds
/// reports as 1 minute.
pub fn duration_report(table: &TripTable) -> Result<DurationReport> {
    if table.is_empty() {
        return Err(Error::EmptyResult);
    }

    let seconds: Vec<f64> = table
        .rows()
        .iter()
        .map(|r| r.trip_duration_seconds)
        .collect();
    let total_seconds: f64 = seconds.iter().sum();
    let mean_seconds = mean(&seconds);

    Ok(DurationReport {
        total_seconds,
        total_minutes: (total_seconds / SECONDS_PER_MINUTE) as i64,
        mean_seconds,
        mean_minutes: (mean_seconds / SECONDS_PER_MINUTE) as i64,
    })
}
