// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! HomeFit core: workout history, streaks, and local persistence
//!
//! This crate is the data and logic core of the HomeFit app. The UI shell
//! records finished timer sessions through [`services::WorkoutRecorder`],
//! loads record snapshots from [`storage::HistoryStore`], and derives
//! everything it displays (daily summaries, period totals, streaks) with the
//! pure functions in [`services::history`].

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;

use config::Config;
use services::WorkoutRecorder;
use storage::{HistoryStore, ProfileStore};

/// Shared core handle for the embedding application.
pub struct AppCore {
    pub config: Config,
    pub history: HistoryStore,
    pub profile: ProfileStore,
    pub recorder: WorkoutRecorder,
}

impl AppCore {
    /// Wire up stores and services for the given configuration.
    pub fn new(config: Config) -> Self {
        let history = HistoryStore::new(&config.data_dir);
        let profile = ProfileStore::new(&config.data_dir);
        let recorder = WorkoutRecorder::new(history.clone());

        Self {
            config,
            history,
            profile,
            recorder,
        }
    }
}
