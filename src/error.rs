//! Error types for the ISPolitical export connector.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the connector can hit while loading configuration,
//! reading input files, transforming records, or delivering them.

use thiserror::Error;

/// The main error type for the export connector.
///
/// # Example
///
/// ```
/// use target_ispolitical::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/config.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/config.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input file exists but could not be read.
    #[error("Failed to read input file '{path}': {message}")]
    InputNotReadable {
        /// The path of the input file.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// An input file is not a JSON array.
    #[error("Input file '{path}' is not a JSON array of records: {message}")]
    InputParseError {
        /// The path of the input file.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A single record in an input file is missing fields or has bad values.
    #[error("Invalid record #{index} in '{file}': {message}")]
    InvalidRecord {
        /// The input file name.
        file: String,
        /// Zero-based position of the record in the file.
        index: usize,
        /// Field-level description of the problem.
        message: String,
    },

    /// A record of a list could not be converted.
    #[error("Record #{index} could not be converted: {source}")]
    ConversionFailed {
        /// Zero-based position of the record in the list.
        index: usize,
        /// The conversion error.
        #[source]
        source: Box<EngineError>,
    },

    /// The `entity_type` of a record is neither `Individual` nor `Organization`.
    #[error("Unrecognized entity type '{value}' (expected 'Individual' or 'Organization')")]
    UnknownEntityType {
        /// The value found in the record.
        value: String,
    },

    /// A date string did not contain a `day month year` triad.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The raw date string.
        value: String,
        /// Why the date was rejected.
        message: String,
    },

    /// A phone number could not be parsed as a North-American number.
    #[error("Invalid phone number '{value}': {message}")]
    InvalidPhone {
        /// The raw phone string.
        value: String,
        /// Why the number was rejected.
        message: String,
    },

    /// The HTTP request could not be completed.
    #[error("HTTP request failed: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },

    /// The API answered with a non-success status while running in strict mode.
    #[error("API rejected submission ({status}): {body}")]
    Rejected {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
