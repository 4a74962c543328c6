//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Core configuration, loaded once at startup by the embedding shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where the JSON storage files live
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            data_dir: env::var("HOMEFIT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
        }
    }

    /// Config rooted at an explicit directory.
    ///
    /// Used by tests and by shells that resolve the platform app-data
    /// directory themselves instead of going through the environment.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_data_dir() {
        env::remove_var("HOMEFIT_DATA_DIR");

        let config = Config::from_env();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_config_explicit_data_dir() {
        let config = Config::with_data_dir("/tmp/homefit");

        assert_eq!(config.data_dir, PathBuf::from("/tmp/homefit"));
    }
}
