// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! History aggregation — pure projections over a workout record list.
//!
//! Every function here is a deterministic function of its inputs: callers
//! load one snapshot from the history store, then derive whatever views the
//! current screen needs. Nothing is cached between calls; after any store
//! mutation the snapshot is reloaded and the views recomputed (there is no
//! incremental view maintenance).
//!
//! Functions that depend on the current date come in pairs: a convenience
//! wrapper that samples the local date once, and an explicit `*_on` form
//! taking the date as an argument. A single computation never re-samples
//! "now", so a date rollover mid-call cannot produce a mixed view.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{DailySummary, PeriodSummary, StreakData, WorkoutRecord};
use crate::time_utils::{
    self, day_key, parse_day_key, records_in_range, start_of_month, start_of_week,
};

/// Group records into per-day summaries, keyed by day key.
///
/// Keys iterate in ascending (chronological) order; within a day, records
/// keep their input order. Days with no records do not appear, and a record
/// without a calorie estimate contributes 0 to the day's total.
pub fn group_by_day(records: &[WorkoutRecord]) -> BTreeMap<String, DailySummary> {
    let mut grouped: BTreeMap<String, DailySummary> = BTreeMap::new();

    for record in records {
        let summary = grouped
            .entry(record.day_key.clone())
            .or_insert_with(|| DailySummary {
                day_key: record.day_key.clone(),
                total_duration_seconds: 0,
                total_calories: 0.0,
                records: Vec::new(),
            });

        summary.total_duration_seconds += u64::from(record.duration_seconds);
        summary.total_calories += record.calories.unwrap_or(0.0);
        summary.records.push(record.clone());
    }

    grouped
}

/// Aggregate totals over a record list.
///
/// An empty list yields all-zero totals and an empty record list.
pub fn summarize(records: &[WorkoutRecord]) -> PeriodSummary {
    PeriodSummary {
        total_duration_seconds: records.iter().map(|r| u64::from(r.duration_seconds)).sum(),
        total_calories: records.iter().filter_map(|r| r.calories).sum(),
        workout_count: records.len() as u32,
        records: records.to_vec(),
    }
}

/// Records logged today.
pub fn today_records(records: &[WorkoutRecord]) -> Vec<WorkoutRecord> {
    today_records_on(records, time_utils::today())
}

/// Records whose day key matches the given date.
pub fn today_records_on(records: &[WorkoutRecord], today: NaiveDate) -> Vec<WorkoutRecord> {
    let key = day_key(today);
    records
        .iter()
        .filter(|r| r.day_key == key)
        .cloned()
        .collect()
}

/// Records from the current week (Monday through today).
pub fn week_records(records: &[WorkoutRecord]) -> Vec<WorkoutRecord> {
    week_records_on(records, time_utils::today())
}

/// Records from the week containing the given date, up to that date.
pub fn week_records_on(records: &[WorkoutRecord], today: NaiveDate) -> Vec<WorkoutRecord> {
    records_in_range(records, start_of_week(today), today)
}

/// Records from the current month (the 1st through today).
pub fn month_records(records: &[WorkoutRecord]) -> Vec<WorkoutRecord> {
    month_records_on(records, time_utils::today())
}

/// Records from the month containing the given date, up to that date.
pub fn month_records_on(records: &[WorkoutRecord], today: NaiveDate) -> Vec<WorkoutRecord> {
    records_in_range(records, start_of_month(today), today)
}

/// Compute the current and best consecutive-workout-day streaks.
pub fn compute_streak(records: &[WorkoutRecord]) -> StreakData {
    compute_streak_on(records, time_utils::today())
}

/// Streak computation against an explicit "today".
///
/// The current streak is anchored at today *or* yesterday: a run that
/// reached yesterday still counts before today's workout has happened, so
/// users aren't shown a broken streak while the day is still in progress.
/// Only when the most recent workout day is older than yesterday does the
/// current streak read 0; the best streak keeps its historical value either
/// way.
pub fn compute_streak_on(records: &[WorkoutRecord], today: NaiveDate) -> StreakData {
    if records.is_empty() {
        return StreakData {
            current_streak: 0,
            best_streak: 0,
        };
    }

    let mut days: Vec<&str> = records.iter().map(|r| r.day_key.as_str()).collect();
    days.sort_unstable();
    days.dedup();

    // Forward walk: longest run of adjacent days anywhere in history.
    let mut best_streak: u32 = 1;
    let mut run: u32 = 1;

    for pair in days.windows(2) {
        if days_apart(pair[0], pair[1]) == Some(1) {
            run += 1;
            best_streak = best_streak.max(run);
        } else {
            run = 1;
        }
    }

    let today_key = day_key(today);
    let yesterday_key = day_key(today - chrono::Duration::days(1));
    let last_day = days[days.len() - 1];

    let mut current_streak = 0;
    if last_day == today_key || last_day == yesterday_key {
        // Backward walk from the anchor, counting adjacent days until the
        // chain breaks.
        current_streak = 1;
        for pair in days.windows(2).rev() {
            if days_apart(pair[0], pair[1]) == Some(1) {
                current_streak += 1;
            } else {
                break;
            }
        }
    }

    StreakData {
        current_streak,
        best_streak,
    }
}

/// Whole-day difference between two day keys, `None` if either fails to
/// parse.
///
/// Day keys are well-formed by construction (fixed at write time), but this
/// stays total: an unparseable key breaks the adjacency run instead of
/// panicking. Going through `NaiveDate` keeps the delta integral regardless
/// of DST transitions between the two days.
fn days_apart(earlier: &str, later: &str) -> Option<i64> {
    let a = parse_day_key(earlier)?;
    let b = parse_day_key(later)?;
    Some((b - a).num_days())
}
