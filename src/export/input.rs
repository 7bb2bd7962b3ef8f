//! Input file discovery and record validation.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{EngineError, EngineResult};

/// The three optional input files, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFile {
    /// `contributions.json`
    Contributions,
    /// `refunds.json`
    Refunds,
    /// `payouts.json`
    Payouts,
}

impl InputFile {
    /// Returns the file name looked up in the input directory.
    pub fn file_name(self) -> &'static str {
        match self {
            InputFile::Contributions => "contributions.json",
            InputFile::Refunds => "refunds.json",
            InputFile::Payouts => "payouts.json",
        }
    }
}

/// Reads an input file as a list of typed records.
///
/// Returns `Ok(None)` when `dir` has no such file. Each element of the JSON
/// array is validated on its own so errors carry the record position.
pub fn read_records<T: DeserializeOwned>(
    dir: &Path,
    file: InputFile,
) -> EngineResult<Option<Vec<T>>> {
    let path = dir.join(file.file_name());
    if !path.exists() {
        return Ok(None);
    }
    let path_str = path.display().to_string();

    let content = fs::read_to_string(&path).map_err(|e| EngineError::InputNotReadable {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    let values: Vec<Value> =
        serde_json::from_str(&content).map_err(|e| EngineError::InputParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| EngineError::InvalidRecord {
                file: file.file_name().to_string(),
                index,
                message: e.to_string(),
            })
        })
        .collect::<EngineResult<Vec<T>>>()
        .map(Some)
}
