//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the connector
//! configuration from a JSON file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::ExportConfig;

/// Loads and provides access to the connector configuration.
///
/// # File Format
///
/// ```text
/// {
///     "input_path": "/data/numero",
///     "client_account_name": "acme",
///     "integration_login_name": "numero",
///     "password": "secret",
///     "strict": false
/// }
/// ```
///
/// # Example
///
/// ```no_run
/// use target_ispolitical::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config.json").unwrap();
/// println!("Reading records from {}", loader.config().input_path.display());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ExportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified JSON file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid JSON or a required key is missing (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use target_ispolitical::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config.json")?;
    /// # Ok::<(), target_ispolitical::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: ExportConfig =
            serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, config = ?config, "Loaded configuration");

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ExportConfig {
        self.config
    }
}
