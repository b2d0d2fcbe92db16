//! Closed-vocabulary filter selection: city, month window, weekday.
//!
//! The interactive shell re-asks until these parse, so everything past this
//! module can trust the selection and never re-validates.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use thiserror::Error;

/// Rejection produced when free text does not match a closed vocabulary.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ParseSelectionError(String);

impl ParseSelectionError {
    pub fn new(msg: impl Into<String>) -> Self {
        ParseSelectionError(msg.into())
    }
}

/// The three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of the city's export inside the data directory. The three
    /// names are fixed; existing datasets are published under exactly these.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        f.write_str(name)
    }
}

impl FromStr for City {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match norm.as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" | "new york" | "nyc" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            other => Err(ParseSelectionError::new(format!(
                "{other:?} is not one of Chicago, New York City or Washington"
            ))),
        }
    }
}

/// Calendar month names, 1-based lookup via [`month_name`].
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Months with published trip data. Filters outside this window are
/// rejected at parse time, never inside the loader.
const LAST_SUPPORTED_MONTH: usize = 6;

/// English name for a 1-based month index.
pub fn month_name(month: u32) -> &'static str {
    (month as usize)
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or("unknown")
}

/// Monday-first week, used for index lookups and deterministic ordering.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English day name for a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Month narrowing: a single month in the January-June window, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based month index, January = 1 through June = 6.
    Month(u32),
}

impl MonthFilter {
    /// The month index to keep, `None` when no month filter applies.
    pub fn index(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Month(m) => Some(m),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => f.write_str(month_name(*m)),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim();
        if norm.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        match MONTH_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(norm))
        {
            Some(i) if i < LAST_SUPPORTED_MONTH => Ok(MonthFilter::Month(i as u32 + 1)),
            Some(_) => Err(ParseSelectionError::new(format!(
                "only January through June have published data, not {norm}"
            ))),
            None => Err(ParseSelectionError::new(format!(
                "{norm:?} is not a month name or \"all\""
            ))),
        }
    }
}

/// Weekday narrowing: a single day, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(day) => f.write_str(day_name(*day)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim();
        if norm.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        WEEK.into_iter()
            .find(|day| day_name(*day).eq_ignore_ascii_case(norm))
            .map(DayFilter::Day)
            .ok_or_else(|| {
                ParseSelectionError::new(format!("{norm:?} is not a weekday name or \"all\""))
            })
    }
}

/// The (city, month, weekday) triple narrowing one analysis run. Built once
/// per session by the shell, consumed by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}
