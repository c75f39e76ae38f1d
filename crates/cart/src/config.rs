//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CARTFUL_STORAGE_PATH` - Path of the JSON file backing the file store
//!   (default: `cartful-store.json`)
//! - `CARTFUL_STORAGE_KEY` - Logical key the cart collection is stored
//!   under (default: `shopping-cart`); must be non-empty

use std::path::PathBuf;

use thiserror::Error;

use crate::persist::CART_STORAGE_KEY;

/// Default path of the file-store backing file.
pub const DEFAULT_STORAGE_PATH: &str = "cartful-store.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart persistence configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the JSON file backing the file store
    pub storage_path: PathBuf,
    /// Logical key the cart collection is stored under
    pub storage_key: String,
}

impl CartConfig {
    /// Load configuration from environment variables, defaulting every
    /// unset variable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value
    /// (currently only an empty storage key).
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_path = PathBuf::from(get_env_or_default(
            "CARTFUL_STORAGE_PATH",
            DEFAULT_STORAGE_PATH,
        ));
        let storage_key = get_env_or_default("CARTFUL_STORAGE_KEY", CART_STORAGE_KEY);

        if storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CARTFUL_STORAGE_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            storage_path,
            storage_key,
        })
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_key: CART_STORAGE_KEY.to_string(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
