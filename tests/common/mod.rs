// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDate;
use homefit_core::models::{BodyArea, WorkoutRecord};

/// Build a workout record on the given day with defaults for everything
/// else.
#[allow(dead_code)]
pub fn record_on(day_key: &str) -> WorkoutRecord {
    record(day_key, 300, Some(25.0))
}

/// Build a workout record with explicit duration and calories.
#[allow(dead_code)]
pub fn record(day_key: &str, duration_seconds: u32, calories: Option<f64>) -> WorkoutRecord {
    WorkoutRecord {
        id: uuid::Uuid::new_v4().to_string(),
        activity_id: "plank".to_string(),
        activity_name: "Plank".to_string(),
        category: BodyArea::Core,
        day_key: day_key.to_string(),
        occurred_at: format!("{}T08:30:00+00:00", day_key),
        duration_seconds,
        calories,
    }
}

/// Parse a test date literal.
#[allow(dead_code)]
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}
