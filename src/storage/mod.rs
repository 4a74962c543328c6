//! Storage layer (local JSON files).
//!
//! The embedding app points the core at a data directory; each store owns
//! one JSON file inside it. Writes land in a temp file first and are renamed
//! into place, so an interrupted write never leaves a torn payload behind.

use std::path::Path;

use crate::error::Result;

pub mod history;
pub mod profile;

pub use history::HistoryStore;
pub use profile::ProfileStore;

/// Storage file names as constants.
pub mod files {
    pub const EXERCISE_LOGS: &str = "exercise_logs.json";
    pub const USER_PROFILE: &str = "user_profile.json";
}

/// Serialize a value and replace the file at `path` atomically.
pub(crate) async fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &json).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
