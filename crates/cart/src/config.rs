//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MICROTEK_DATA_DIR` - Directory for snapshot files (default: `data`)
//! - `MICROTEK_CART_KEY` - Snapshot key for the cart blob (default: `microtek_cart`)

use std::path::PathBuf;

use thiserror::Error;

use crate::snapshot::FileStore;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_CART_KEY: &str = "microtek_cart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart persistence configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory holding snapshot files.
    pub data_dir: PathBuf,
    /// Key the cart snapshot is stored under.
    pub snapshot_key: String,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unusable (an
    /// empty data directory, or a snapshot key that cannot name a file).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = get_env_or_default("MICROTEK_DATA_DIR", DEFAULT_DATA_DIR);
        if data_dir.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "MICROTEK_DATA_DIR".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let snapshot_key = get_env_or_default("MICROTEK_CART_KEY", DEFAULT_CART_KEY);
        validate_snapshot_key(&snapshot_key, "MICROTEK_CART_KEY")?;

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            snapshot_key,
        })
    }

    /// Open the file-backed snapshot store this configuration points at.
    #[must_use]
    pub fn open_store(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            snapshot_key: DEFAULT_CART_KEY.to_string(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a snapshot key can be used as a file name.
fn validate_snapshot_key(key: &str, var_name: &str) -> Result<(), ConfigError> {
    if key.is_empty() || key.contains(['/', '\\', '.']) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("'{key}' is not a valid snapshot key"),
        ));
    }
    Ok(())
}
