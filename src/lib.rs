//! ISPolitical export connector
//!
//! This crate reads contributions, refunds and payouts exported by Numero,
//! maps them onto the ISPolitical `PublicForms` schema and posts them to the
//! ISPolitical API with HTTP Basic authentication.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod transform;
pub mod upload;
