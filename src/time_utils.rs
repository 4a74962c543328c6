// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for local-calendar-day arithmetic and display formatting.
//!
//! All grouping and streak logic keys on day-key strings (`YYYY-MM-DD`).
//! Comparing day keys lexicographically is identical to comparing them
//! chronologically, so helpers here compare the stored strings directly and
//! never re-interpret a historical key through the current timezone.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::models::WorkoutRecord;

/// Format a local calendar date as a `YYYY-MM-DD` day key.
pub fn day_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse a `YYYY-MM-DD` day key back into a calendar date.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// The device-local calendar date right now.
///
/// Callers deriving several views for one display should sample this once
/// and pass it to the `*_on` functions in [`crate::services::history`] so
/// the whole computation agrees on what "today" is.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The most recent Monday on or before the given date.
///
/// A Sunday maps six days back, not forward to the next Monday.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// The first day of the given date's month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("every month has a first day")
}

/// Records whose `day_key` falls within `[day_key(start), day_key(end)]`,
/// inclusive on both ends.
///
/// The comparison is on the stored strings, not on re-parsed dates, so
/// records keep the day they were written with even if the device timezone
/// has changed since. An inverted range yields an empty list.
pub fn records_in_range(
    records: &[WorkoutRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<WorkoutRecord> {
    let start_key = day_key(start);
    let end_key = day_key(end);

    records
        .iter()
        .filter(|r| r.day_key >= start_key && r.day_key <= end_key)
        .cloned()
        .collect()
}

/// Format a duration in seconds for display ("45s", "5m", "5m 30s").
pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    if mins == 0 {
        return format!("{}s", secs);
    }
    if secs == 0 {
        return format!("{}m", mins);
    }
    format!("{}m {}s", mins, secs)
}

/// Whole minutes of a duration, for stat tiles that show bare numbers.
pub fn format_minutes(seconds: u32) -> String {
    (seconds / 60).to_string()
}
