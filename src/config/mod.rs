//! Configuration loading for the export connector.
//!
//! This module reads the JSON configuration file holding the ISPolitical
//! credentials, the input directory and the delivery options.
//!
//! # Example
//!
//! ```no_run
//! use target_ispolitical::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config.json").unwrap();
//! println!("Posting as {}", loader.config().basic_auth_username());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ExportConfig, ResponseMode};
