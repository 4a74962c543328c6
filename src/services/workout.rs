// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout recording — the construction boundary for history records.
//!
//! All numeric sanity rules live here so aggregation can stay total: a
//! record that makes it into the store always has a well-formed day key, a
//! non-negative duration, and a calorie value that is absent or ≥ 0.

use chrono::{DateTime, Local};
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::models::{BodyArea, UserProfile, WorkoutRecord};
use crate::services::calories::estimate_calories;
use crate::storage::HistoryStore;
use crate::time_utils::day_key;

/// A finished timer session, as reported by the workout screen.
#[derive(Debug, Clone, Validate)]
pub struct CompletedSession {
    /// Exercise identifier from the catalog
    #[validate(length(min = 1))]
    pub activity_id: String,
    /// Exercise display name
    #[validate(length(min = 1))]
    pub activity_name: String,
    /// Body area / activity type tag
    pub category: BodyArea,
    /// MET intensity factor of the exercise performed
    #[validate(range(min = 0.1))]
    pub met: f64,
    /// Actual elapsed active time (may be less than the planned duration)
    pub duration_seconds: u32,
    /// Local completion time; the record's day key is fixed from this
    pub finished_at: DateTime<Local>,
}

/// Validate a finished session and build the record that would be stored,
/// without persisting it.
///
/// The day key is computed here, once, from the local calendar date of
/// `finished_at` — it is never rederived from the timestamp later, so a
/// subsequent timezone change cannot move historical workouts across days.
pub fn build_record(session: CompletedSession, profile: &UserProfile) -> Result<WorkoutRecord> {
    session.validate()?;

    let calories = estimate_calories(
        session.met,
        profile.weight,
        profile.weight_unit,
        session.duration_seconds,
    );

    Ok(WorkoutRecord {
        id: Uuid::new_v4().to_string(),
        activity_id: session.activity_id,
        activity_name: session.activity_name,
        category: session.category,
        day_key: day_key(session.finished_at.date_naive()),
        occurred_at: session.finished_at.to_rfc3339(),
        duration_seconds: session.duration_seconds,
        calories,
    })
}

/// Builds and persists workout records when timer sessions end.
pub struct WorkoutRecorder {
    store: HistoryStore,
}

impl WorkoutRecorder {
    pub fn new(store: HistoryStore) -> Self {
        Self { store }
    }

    /// Turn a finished session into a record and append it to the history.
    pub async fn record_session(
        &self,
        session: CompletedSession,
        profile: &UserProfile,
    ) -> Result<WorkoutRecord> {
        let record = build_record(session, profile)?;

        tracing::info!(
            id = %record.id,
            activity = %record.activity_name,
            day = %record.day_key,
            duration = record.duration_seconds,
            "Recording workout session"
        );

        self.store.append(&record).await?;
        Ok(record)
    }
}
