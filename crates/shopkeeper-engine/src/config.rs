//! Engine configuration.

use std::path::PathBuf;

/// Where the catalog document lives.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path of the JSON catalog document.
    pub data_file: PathBuf,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATA_FILE` overrides the document path; everything else uses the
    /// defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            data_file: std::env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_file()),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/catalog.json")
}
