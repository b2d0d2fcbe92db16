//! Report structures returned by the statistics passes.
//!
//! Plain data, built fresh per invocation and serializable as JSON. The
//! renderer owns all phrasing; nothing here is print-formatted.

use std::fmt;

use serde::Serialize;

/// A modal value, plus whether the column was already uniform.
///
/// When an upstream filter pinned a column to a single value, reporting it
/// as "most popular" would be misleading; `was_uniform` lets the renderer
/// phrase it as an echo of the selection instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight<T> {
    pub value: T,
    pub was_uniform: bool,
}

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeReport {
    pub month: Highlight<String>,
    pub weekday: Highlight<String>,
    /// Mode of the start hour, 0-23. Always reported; the shell never
    /// filters by hour so the column is never uniform by construction.
    pub popular_hour: u32,
}

/// A directional station pair: (A, B) and (B, A) are distinct trips.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TripPair {
    pub start: String,
    pub end: String,
}

impl fmt::Display for TripPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.start, self.end)
    }
}

/// Most used stations and the most used start-to-end trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationReport {
    pub popular_start: String,
    pub popular_end: String,
    pub popular_trip: TripPair,
}

/// Total and mean travel time: exact seconds plus whole minutes truncated
/// toward zero for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub total_seconds: f64,
    pub total_minutes: i64,
    pub mean_seconds: f64,
    pub mean_minutes: i64,
}

/// Birth-year extremes and mode over the rows that report one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

/// Rider demographics. `None` marks a column the city's schema lacks,
/// which the renderer reports as unavailable rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub user_types: Vec<(String, u64)>,
    pub genders: Option<Vec<(String, u64)>>,
    pub birth_years: Option<BirthYearStats>,
}

/// All four reports over one filtered table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub time: TimeReport,
    pub stations: StationReport,
    pub durations: DurationReport,
    pub users: UserReport,
}
