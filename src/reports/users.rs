//! Rider-demographics pass: user types, gender, birth years.

use crate::error::{Error, Result};
use crate::reports::types::{BirthYearStats, UserReport};
use crate::reports::utility::{mode, value_counts};
use crate::trips::TripTable;

/// Computes the demographics report.
///
/// Gender and birth-year sections follow the table's schema flags: a city
/// whose export lacks the column yields `None`, never an error. Within a
/// present column only non-missing cells count.
pub fn user_report(table: &TripTable) -> Result<UserReport> {
    if table.is_empty() {
        return Err(Error::EmptyResult);
    }
    let rows = table.rows();

    let user_types = value_counts(rows.iter().map(|r| r.user_type.as_str()));

    let genders = table
        .has_gender()
        .then(|| value_counts(rows.iter().filter_map(|r| r.gender.as_deref())));

    let birth_years = if table.has_birth_year() {
        birth_year_stats(&rows.iter().filter_map(|r| r.birth_year).collect::<Vec<_>>())
    } else {
        None
    };

    Ok(UserReport {
        user_types,
        genders,
        birth_years,
    })
}

/// Extremes and mode over the rows that report a birth year. A column that
/// is present but has no values left after filtering degrades to `None`.
fn birth_year_stats(years: &[i32]) -> Option<BirthYearStats> {
    let earliest = *years.iter().min()?;
    let latest = *years.iter().max()?;
    let most_common = mode(years.iter().copied())?;

    Some(BirthYearStats {
        earliest,
        latest,
        most_common,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::testing::trip_at;
    use crate::trips::{TripRecord, TripTable};

    fn rider(user_type: &str, gender: Option<&str>, birth_year: Option<i32>) -> TripRecord {
        let mut trip = trip_at("2017-01-02 08:00:00");
        trip.user_type = user_type.to_string();
        trip.gender = gender.map(str::to_string);
        trip.birth_year = birth_year;
        trip
    }

    #[test]
    fn test_user_type_counts_descend() {
        let table = TripTable::new(
            vec![
                rider("Subscriber", None, None),
                rider("Customer", None, None),
                rider("Subscriber", None, None),
            ],
            false,
            false,
        );

        let report = user_report(&table).unwrap();
        assert_eq!(
            report.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
    }

    #[test]
    fn test_absent_columns_are_unavailable_not_errors() {
        let table = TripTable::new(vec![rider("Subscriber", None, None)], false, false);

        let report = user_report(&table).unwrap();
        assert_eq!(report.genders, None);
        assert_eq!(report.birth_years, None);
        assert_eq!(report.user_types.len(), 1);
    }

    #[test]
    fn test_gender_counts_skip_missing_cells() {
        let table = TripTable::new(
            vec![
                rider("Subscriber", Some("Male"), None),
                rider("Subscriber", Some("Female"), None),
                rider("Customer", None, None),
                rider("Subscriber", Some("Male"), None),
            ],
            true,
            false,
        );

        let report = user_report(&table).unwrap();
        assert_eq!(
            report.genders,
            Some(vec![("Male".to_string(), 2), ("Female".to_string(), 1)])
        );
    }

    #[test]
    fn test_birth_year_stats_over_present_values() {
        let table = TripTable::new(
            vec![
                rider("Subscriber", None, Some(1992)),
                rider("Subscriber", None, Some(1987)),
                rider("Customer", None, None),
                rider("Subscriber", None, Some(1992)),
            ],
            false,
            true,
        );

        let report = user_report(&table).unwrap();
        let years = report.birth_years.unwrap();
        assert_eq!(years.earliest, 1987);
        assert_eq!(years.latest, 1992);
        assert_eq!(years.most_common, 1992);
    }

    #[test]
    fn test_birth_year_column_with_no_values_degrades() {
        let table = TripTable::new(vec![rider("Subscriber", None, None)], false, true);

        let report = user_report(&table).unwrap();
        assert_eq!(report.birth_years, None);
    }

    #[test]
    fn test_empty_table_is_empty_result() {
        let table = TripTable::new(vec![], true, true);
        assert!(matches!(user_report(&table), Err(Error::EmptyResult)));
    }
}
