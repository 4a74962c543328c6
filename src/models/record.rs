// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout record model — one entry per completed session.

use serde::{Deserialize, Serialize};

/// Closed set of body areas / activity types used to tag workouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyArea {
    FullBody,
    LegsGlutes,
    Core,
    UpperBody,
    Cardio,
    Stretch,
}

impl BodyArea {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            BodyArea::FullBody => "Full Body",
            BodyArea::LegsGlutes => "Legs & Glutes",
            BodyArea::Core => "Core",
            BodyArea::UpperBody => "Upper Body",
            BodyArea::Cardio => "Cardio",
            BodyArea::Stretch => "Stretch",
        }
    }
}

/// Stored workout record.
///
/// Created once when a timer session ends and never mutated afterwards; the
/// user can delete individual records. All grouping and streak logic keys on
/// `day_key`, which is fixed at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique identifier (UUID v4), assigned at creation
    pub id: String,
    /// Exercise identifier (may repeat across records)
    pub activity_id: String,
    /// Exercise name at the time it was logged
    pub activity_name: String,
    /// Body area / activity type tag
    pub category: BodyArea,
    /// Local calendar day of completion (`YYYY-MM-DD`), fixed at write time.
    /// Never recomputed from `occurred_at`; the two may legitimately
    /// disagree near local midnight if the device clock or timezone changed
    /// later.
    pub day_key: String,
    /// Completion timestamp (RFC 3339), used only for intra-day
    /// ordering/display
    pub occurred_at: String,
    /// Actual elapsed active time in seconds (may be less than planned if
    /// the session ended early)
    pub duration_seconds: u32,
    /// Estimated calories burned, rounded to one decimal place; `None` when
    /// no body weight was configured
    pub calories: Option<f64>,
}
