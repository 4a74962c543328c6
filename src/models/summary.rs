//! Derived history views — recomputed on every aggregation call, never
//! persisted.

use serde::{Deserialize, Serialize};

use crate::models::WorkoutRecord;

/// All workouts for a single local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Day the records share (`YYYY-MM-DD`)
    pub day_key: String,
    /// Sum of record durations in seconds
    pub total_duration_seconds: u64,
    /// Sum of calorie estimates; records without an estimate count as 0
    pub total_calories: f64,
    /// The day's records, in input order
    pub records: Vec<WorkoutRecord>,
}

/// Aggregate totals over a bounded period (today / week / month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Sum of record durations in seconds
    pub total_duration_seconds: u64,
    /// Sum of calorie estimates; records without an estimate count as 0
    pub total_calories: f64,
    /// Number of records in the period
    pub workout_count: u32,
    /// The period's records
    pub records: Vec<WorkoutRecord>,
}

/// Consecutive-workout-day counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakData {
    /// Days in the run ending today or yesterday; 0 when the streak is
    /// broken
    pub current_streak: u32,
    /// Longest run of consecutive workout days on record
    pub best_streak: u32,
}
