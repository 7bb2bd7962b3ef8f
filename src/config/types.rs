//! Configuration types for the export connector.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the JSON configuration file.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// The ISPolitical endpoint every form is posted to.
pub const DEFAULT_ENDPOINT: &str = "https://app.ispolitical.com/api/PublicForms/";

/// Request timeout applied when the config does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// How the uploader treats non-success HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Log the response and move on to the next record.
    #[default]
    Lenient,
    /// Abort the run on the first non-success response.
    Strict,
}

/// The connector configuration loaded from `config.json`.
///
/// Credentials are redacted from the `Debug` representation.
#[derive(Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory holding `contributions.json`, `refunds.json` and `payouts.json`.
    pub input_path: PathBuf,
    /// ISPolitical client account name.
    pub client_account_name: String,
    /// ISPolitical integration login name.
    pub integration_login_name: String,
    /// ISPolitical integration password.
    pub password: String,
    /// PublicForms endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Fail on non-success responses instead of logging them.
    #[serde(default)]
    pub strict: bool,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ExportConfig {
    /// Returns the Basic Auth username, `"{account}|{login}"`.
    ///
    /// # Example
    ///
    /// ```
    /// use target_ispolitical::config::ExportConfig;
    ///
    /// let config: ExportConfig = serde_json::from_str(r#"{
    ///     "input_path": "/data",
    ///     "client_account_name": "acme",
    ///     "integration_login_name": "numero",
    ///     "password": "secret"
    /// }"#).unwrap();
    /// assert_eq!(config.basic_auth_username(), "acme|numero");
    /// ```
    pub fn basic_auth_username(&self) -> String {
        format!(
            "{}|{}",
            self.client_account_name, self.integration_login_name
        )
    }

    /// Returns the response handling mode selected by `strict`.
    pub fn response_mode(&self) -> ResponseMode {
        if self.strict {
            ResponseMode::Strict
        } else {
            ResponseMode::Lenient
        }
    }
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("input_path", &self.input_path)
            .field("client_account_name", &self.client_account_name)
            .field("integration_login_name", &self.integration_login_name)
            .field("password", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("strict", &self.strict)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
