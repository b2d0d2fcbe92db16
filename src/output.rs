//! Rendering for statistics reports and raw trip rows.
//!
//! Supports human-readable text and pretty JSON. All phrasing lives here;
//! the report passes only hand over data.

use std::io::Write;

use anyhow::Result;

use crate::reports::types::{DurationReport, StationReport, Statistics, TimeReport, UserReport};
use crate::selection::day_name;
use crate::trips::TripRecord;

/// Renders all four reports in the order the explorer shows them.
pub fn render_statistics<W: Write>(out: &mut W, stats: &Statistics) -> Result<()> {
    render_time(out, &stats.time)?;
    render_stations(out, &stats.stations)?;
    render_durations(out, &stats.durations)?;
    render_users(out, &stats.users)?;
    Ok(())
}

/// Writes the combined statistics as pretty-printed JSON.
pub fn print_json<W: Write>(out: &mut W, stats: &Statistics) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(stats)?)?;
    Ok(())
}

fn render_time<W: Write>(out: &mut W, report: &TimeReport) -> Result<()> {
    writeln!(out, "Most frequent times of travel")?;
    if report.month.was_uniform {
        writeln!(out, "  In the month of {}:", report.month.value)?;
    } else {
        writeln!(
            out,
            "  The most popular month to travel was {}.",
            report.month.value
        )?;
    }
    if report.weekday.was_uniform {
        writeln!(out, "  On {}s:", report.weekday.value)?;
    } else {
        writeln!(
            out,
            "  The most popular day of week to travel was {}.",
            report.weekday.value
        )?;
    }
    writeln!(
        out,
        "  The most popular start hour was {}.",
        report.popular_hour
    )?;
    Ok(())
}

fn render_stations<W: Write>(out: &mut W, report: &StationReport) -> Result<()> {
    writeln!(out, "Most popular stations and trip")?;
    writeln!(
        out,
        "  The most popular start station was {}.",
        report.popular_start
    )?;
    writeln!(
        out,
        "  The most popular end station was {}.",
        report.popular_end
    )?;
    writeln!(out, "  The most popular trip was {}.", report.popular_trip)?;
    Ok(())
}

fn render_durations<W: Write>(out: &mut W, report: &DurationReport) -> Result<()> {
    writeln!(out, "Trip duration")?;
    writeln!(
        out,
        "  The total travel time of all trips was {} minutes.",
        report.total_minutes
    )?;
    writeln!(
        out,
        "  The mean travel time per ride was {} minutes.",
        report.mean_minutes
    )?;
    Ok(())
}

fn render_users<W: Write>(out: &mut W, report: &UserReport) -> Result<()> {
    writeln!(out, "User stats")?;
    writeln!(out, "  Counts per user type:")?;
    for (user_type, count) in &report.user_types {
        writeln!(out, "    {user_type}: {count}")?;
    }

    match &report.genders {
        Some(counts) => {
            writeln!(out, "  Counts per gender:")?;
            for (gender, count) in counts {
                writeln!(out, "    {gender}: {count}")?;
            }
        }
        None => writeln!(out, "  No gender information is available for this city.")?,
    }

    match &report.birth_years {
        Some(years) => writeln!(
            out,
            "  The oldest user was born in {}, the youngest in {}, and the most common birth year was {}.",
            years.earliest, years.latest, years.most_common
        )?,
        None => writeln!(
            out,
            "  No birth year information is available for this city."
        )?,
    }
    Ok(())
}

/// Renders one page of raw rows, numbered from their position in the
/// original file.
pub fn render_rows<W: Write>(out: &mut W, offset: usize, rows: &[TripRecord]) -> Result<()> {
    for (i, row) in rows.iter().enumerate() {
        write!(
            out,
            "#{} {} ({}) | {} -> {} | {:.0}s | {}",
            offset + i + 1,
            row.start_time,
            day_name(row.weekday),
            row.start_station,
            row.end_station,
            row.trip_duration_seconds,
            row.user_type,
        )?;
        if let Some(gender) = &row.gender {
            write!(out, " | {gender}")?;
        }
        if let Some(year) = row.birth_year {
            write!(out, " | born {year}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::compute_statistics;
    use crate::trips::testing::{table_of, trip_at};

    fn rendered(stats: &Statistics) -> String {
        let mut buf = Vec::new();
        render_statistics(&mut buf, stats).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_uniform_month_phrasing_is_an_echo() {
        let table = table_of(vec![
            trip_at("2017-02-06 10:00:00"),
            trip_at("2017-02-13 11:00:00"),
        ]);
        let stats = compute_statistics(&table).unwrap();

        let text = rendered(&stats);
        assert!(text.contains("In the month of February:"));
        assert!(!text.contains("most popular month"));
    }

    #[test]
    fn test_mixed_month_phrasing_claims_popularity() {
        let table = table_of(vec![
            trip_at("2017-01-02 08:00:00"),
            trip_at("2017-03-01 17:15:00"),
        ]);
        let stats = compute_statistics(&table).unwrap();

        let text = rendered(&stats);
        assert!(text.contains("The most popular month to travel was January."));
    }

    #[test]
    fn test_unavailable_sections_render_sentinel_lines() {
        let table =
            crate::trips::TripTable::new(vec![trip_at("2017-01-02 08:00:00")], false, false);
        let stats = compute_statistics(&table).unwrap();

        let text = rendered(&stats);
        assert!(text.contains("No gender information is available"));
        assert!(text.contains("No birth year information is available"));
    }

    #[test]
    fn test_print_json_includes_all_reports() {
        let table = table_of(vec![trip_at("2017-01-02 08:00:00")]);
        let stats = compute_statistics(&table).unwrap();

        let mut buf = Vec::new();
        print_json(&mut buf, &stats).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"popular_hour\": 8"));
        assert!(text.contains("\"was_uniform\": true"));
        assert!(text.contains("\"total_minutes\": 1"));
    }

    #[test]
    fn test_render_rows_numbers_from_offset() {
        let table = table_of(vec![
            trip_at("2017-01-02 08:00:00"),
            trip_at("2017-01-09 08:30:00"),
        ]);

        let mut buf = Vec::new();
        render_rows(&mut buf, 5, table.page(0, 2)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("#6 "));
        assert!(text.contains("#7 "));
        assert!(text.contains("Adams St -> Burnham Ave"));
    }
}
