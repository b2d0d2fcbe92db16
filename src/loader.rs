//! Dataset loader: reads a city CSV, derives calendar fields, filters.
//!
//! Loading is strict. Every `Start Time` must parse with the fixed export
//! layout and every required field must be well formed; the first bad row
//! fails the whole load. Missing `Gender` / `Birth Year` *columns* are not
//! errors, they just clear the table's capability flags.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::selection::FilterSelection;
use crate::trips::{TripRecord, TripTable};

/// Timestamp layout shared by all three city exports.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row as it appears in the source file, before parsing. Optional
/// columns deserialize to `None` both when the column is missing from the
/// schema and when a cell is empty; the loader only distinguishes the two
/// for values that must then parse.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Loads the selected city's trips and applies the month/weekday filter.
///
/// # Errors
///
/// [`Error::Configuration`] when the city's file is missing from
/// `data_dir`; [`Error::DataFormat`] for any malformed row.
pub fn load(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable> {
    let path = data_dir.join(selection.city.file_name());
    let file = File::open(&path).map_err(|source| Error::Configuration {
        city: selection.city.to_string(),
        path: path.clone(),
        source,
    })?;

    let table = read_trips(file)?;
    info!(
        city = %selection.city,
        rows = table.len(),
        month = %selection.month,
        day = %selection.day,
        "dataset loaded"
    );

    Ok(table.filtered(selection.month, selection.day))
}

/// Reads every record from `reader` into an unfiltered [`TripTable`].
///
/// The `Gender` / `Birth Year` capability flags are taken from the header
/// row, so a city without those columns degrades cleanly instead of failing.
pub fn read_trips<R: Read>(reader: R) -> Result<TripTable> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers().map_err(Error::from_csv)?.clone();
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(Error::from_csv)?;
        rows.push(parse_row(i + 1, raw)?);
    }

    Ok(TripTable::new(rows, has_gender, has_birth_year))
}

fn parse_row(row: usize, raw: RawTrip) -> Result<TripRecord> {
    let start_time = parse_timestamp(row, "Start Time", &raw.start_time)?;
    let end_time = match raw.end_time.as_deref() {
        Some(value) => Some(parse_timestamp(row, "End Time", value)?),
        None => None,
    };
    let birth_year = match raw.birth_year.as_deref() {
        Some(value) => Some(parse_birth_year(row, value)?),
        None => None,
    };

    Ok(TripRecord {
        month: start_time.month(),
        weekday: start_time.weekday(),
        hour: start_time.hour(),
        start_time,
        end_time,
        trip_duration_seconds: raw.trip_duration,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender: raw.gender,
        birth_year,
    })
}

fn parse_timestamp(row: usize, column: &str, value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| Error::DataFormat {
        row,
        detail: format!("bad {column} value {value:?}"),
    })
}

/// Birth years arrive as floats in the source exports ("1992.0"), so parse
/// through f64 and truncate.
fn parse_birth_year(row: usize, value: &str) -> Result<i32> {
    value
        .parse::<f64>()
        .map(|year| year as i32)
        .map_err(|_| Error::DataFormat {
            row,
            detail: format!("bad Birth Year value {value:?}"),
        })
}
