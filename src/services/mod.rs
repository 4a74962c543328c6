// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod calories;
pub mod history;
pub mod workout;

pub use workout::{CompletedSession, WorkoutRecorder};
