//! In-memory trip table with calendar fields derived at load time.

use chrono::{NaiveDateTime, Weekday};

use crate::selection::{DayFilter, MonthFilter};

/// One trip row, plus the calendar fields derived from its start time.
///
/// The derived fields are pure functions of `start_time`, computed once when
/// the record is built so the report passes never touch the table again.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    /// Part of the schema; no current report reads it.
    pub end_time: Option<NaiveDateTime>,
    pub trip_duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    /// 1-based month of `start_time`.
    pub month: u32,
    /// Weekday of `start_time`.
    pub weekday: Weekday,
    /// Hour of `start_time`, 0-23.
    pub hour: u32,
}

/// The loaded (and possibly filtered) trips for one city.
///
/// Rows keep original file order; the raw-row pager depends on that.
/// Optional-column presence is a property of the city's schema, not of
/// individual rows, so it lives here as two capability flags.
#[derive(Debug, Clone)]
pub struct TripTable {
    rows: Vec<TripRecord>,
    has_gender: bool,
    has_birth_year: bool,
}

impl TripTable {
    pub fn new(rows: Vec<TripRecord>, has_gender: bool, has_birth_year: bool) -> Self {
        TripTable {
            rows,
            has_gender,
            has_birth_year,
        }
    }

    pub fn rows(&self) -> &[TripRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the source schema carries a `Gender` column.
    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    /// Whether the source schema carries a `Birth Year` column.
    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }

    /// Keeps only the rows matching `month` and `day`. The two predicates
    /// compose as a logical AND; `All` passes everything through, so an
    /// all/all filter is an identity operation and re-filtering an already
    /// filtered table by the same selection changes nothing.
    pub fn filtered(mut self, month: MonthFilter, day: DayFilter) -> Self {
        if let Some(index) = month.index() {
            self.rows.retain(|r| r.month == index);
        }
        if let DayFilter::Day(weekday) = day {
            self.rows.retain(|r| r.weekday == weekday);
        }
        self
    }

    /// One page of rows in original file order, clamped to the table end.
    pub fn page(&self, offset: usize, len: usize) -> &[TripRecord] {
        let start = offset.min(self.rows.len());
        let end = start.saturating_add(len).min(self.rows.len());
        &self.rows[start..end]
    }
}


#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::testing::{table_of, trip_at};
    use super::*;

    fn sample_table() -> TripTable {
        // Jan 2/9 2017 are Mondays, Mar 1 a Wednesday, Mar 3 a Friday.
        table_of(vec![
            trip_at("2017-01-02 08:00:00"),
            trip_at("2017-01-09 08:30:00"),
            trip_at("2017-03-01 17:15:00"),
            trip_at("2017-03-03 09:05:00"),
        ])
    }

    #[test]
    fn test_filter_all_all_is_identity() {
        let table = sample_table().filtered(MonthFilter::All, DayFilter::All);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_filter_by_month() {
        let table = sample_table().filtered(MonthFilter::Month(1), DayFilter::All);
        assert_eq!(table.len(), 2);
        assert!(table.rows().iter().all(|r| r.month == 1));
    }

    #[test]
    fn test_filter_by_day() {
        let table = sample_table().filtered(MonthFilter::All, DayFilter::Day(Weekday::Mon));
        assert_eq!(table.len(), 2);
        assert!(table.rows().iter().all(|r| r.weekday == Weekday::Mon));
    }

    #[test]
    fn test_filters_compose_as_and() {
        let table = sample_table().filtered(MonthFilter::Month(3), DayFilter::Day(Weekday::Fri));
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].month, 3);
        assert_eq!(table.rows()[0].weekday, Weekday::Fri);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = sample_table().filtered(MonthFilter::Month(1), DayFilter::Day(Weekday::Mon));
        let twice = once
            .clone()
            .filtered(MonthFilter::Month(1), DayFilter::Day(Weekday::Mon));
        assert_eq!(once.rows(), twice.rows());
    }

    #[test]
    fn test_page_preserves_original_order() {
        let table = sample_table();
        let page = table.page(0, 2);
        assert_eq!(page.len(), 2);
        assert!(page[0].start_time < page[1].start_time);
        assert_eq!(page[0], table.rows()[0]);
    }

    #[test]
    fn test_page_clamps_at_table_end() {
        let table = sample_table();
        assert_eq!(table.page(2, 5).len(), 2);
        assert!(table.page(4, 5).is_empty());
        assert!(table.page(100, 5).is_empty());
    }
}
