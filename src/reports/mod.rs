//! Aggregate statistics over a filtered trip table.
//!
//! Four independent read-only passes: times of travel, stations, trip
//! durations, and rider demographics. Each pass scans the immutable table
//! on its own and shares no state with the others.

pub mod durations;
pub mod stations;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

use crate::error::Result;
use crate::trips::TripTable;
use types::Statistics;

/// Runs all four report passes over `table`.
///
/// # Errors
///
/// Returns [`crate::error::Error::EmptyResult`] when the table has no rows.
pub fn compute_statistics(table: &TripTable) -> Result<Statistics> {
    Ok(Statistics {
        time: time::time_report(table)?,
        stations: stations::station_report(table)?,
        durations: durations::duration_report(table)?,
        users: users::user_report(table)?,
    })
}
