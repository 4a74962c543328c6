// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod profile;
pub mod record;
pub mod summary;

pub use profile::{UserProfile, WeightUnit};
pub use record::{BodyArea, WorkoutRecord};
pub use summary::{DailySummary, PeriodSummary, StreakData};
