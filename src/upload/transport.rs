//! Delivery of single forms to the PublicForms endpoint.
//!
//! The [`Transport`] trait is the seam between the uploader and the network;
//! [`HttpTransport`] is the real implementation and [`DryRunTransport`]
//! accepts everything without sending.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use crate::config::ExportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::PublicForm;

/// Status and raw body of a PublicForms response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl TransportResponse {
    /// Returns true for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true for `201 Created`, the status that unlocks a payout deposit.
    pub fn is_created(&self) -> bool {
        self.status == 201
    }
}

/// Sends one form and reports the response.
///
/// A returned `Err` means the request did not complete; non-success
/// statuses are returned as `Ok` responses.
pub trait Transport {
    /// Posts `form` as a JSON body.
    fn post(&self, form: &PublicForm) -> EngineResult<TransportResponse>;
}

/// Blocking HTTPS transport authenticated with HTTP Basic auth.
pub struct HttpTransport {
    endpoint: String,
    username: String,
    password: String,
    client: Client,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl HttpTransport {
    /// Creates a transport for the configured endpoint and credentials.
    pub fn new(config: &ExportConfig) -> EngineResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EngineError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            username: config.basic_auth_username(),
            password: config.password.clone(),
            client,
        })
    }

    /// Returns the endpoint forms are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn post(&self, form: &PublicForm) -> EngineResult<TransportResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .json(form)
            .send()
            .map_err(|e| EngineError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| EngineError::Transport {
            message: format!("Failed to read response body: {}", e),
        })?;

        Ok(TransportResponse { status, body })
    }
}

/// Transport that logs forms instead of sending them.
///
/// Every form is answered with `201 Created` so payout deposits are
/// exercised too.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunTransport;

impl Transport for DryRunTransport {
    fn post(&self, form: &PublicForm) -> EngineResult<TransportResponse> {
        info!(
            unique_identifier = form.unique_identifier().unwrap_or_default(),
            "Dry run: form not sent"
        );
        Ok(TransportResponse {
            status: 201,
            body: String::new(),
        })
    }
}
