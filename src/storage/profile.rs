//! User profile persistence.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::UserProfile;
use crate::storage::{files, write_json};

/// File-backed store for the single user profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Create a store rooted in the given data directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(files::USER_PROFILE),
        }
    }

    /// Load the stored profile; `None` when absent or unreadable.
    pub async fn load(&self) -> Result<Option<UserProfile>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!(error = %e, "Unreadable profile file");
                Ok(None)
            }
        }
    }

    /// Save (replace) the profile.
    pub async fn save(&self, profile: &UserProfile) -> Result<()> {
        tracing::debug!("Saving user profile");
        write_json(&self.path, profile).await
    }

    /// Remove the stored profile.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
