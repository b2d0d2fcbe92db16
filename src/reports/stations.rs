//! Station popularity pass: start, end, and directional trip pair.

use crate::error::{Error, Result};
use crate::reports::types::{StationReport, TripPair};
use crate::reports::utility::mode;
use crate::trips::TripTable;

/// Computes the station report. The trip pair keys on (start, end) in that
/// order; "A and B" is a different trip than "B and A". String ties break
/// to the lexicographically smallest value.
pub fn station_report(table: &TripTable) -> Result<StationReport> {
    let rows = table.rows();

    let popular_start = mode(rows.iter().map(|r| r.start_station.as_str()))
        .ok_or(Error::EmptyResult)?
        .to_string();
    let popular_end = mode(rows.iter().map(|r| r.end_station.as_str()))
        .ok_or(Error::EmptyResult)?
        .to_string();
    let (start, end) = mode(
        rows.iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    )
    .ok_or(Error::EmptyResult)?;

    Ok(StationReport {
        popular_start,
        popular_end,
        popular_trip: TripPair {
            start: start.to_string(),
            end: end.to_string(),
        },
    })
}
