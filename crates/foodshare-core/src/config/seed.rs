//! CSV seed data configuration.

use serde::{Deserialize, Serialize};

/// Settings for the CSV seed loader.
///
/// The seed directory is expected to contain the four companion exports:
/// `providers.csv`, `receivers.csv`, `listings.csv`, and `claims.csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Directory containing the CSV exports.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Whether to load the seed data on startup when tables are empty.
    #[serde(default = "default_true")]
    pub on_startup: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            on_startup: default_true(),
        }
    }
}

fn default_directory() -> String {
    "./seed".to_string()
}

fn default_true() -> bool {
    true
}
