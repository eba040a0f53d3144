/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by the `Result`-returning conveniences. The core
/// entry points never fail: they return the error sentinel or NaN.
#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum UnitError {
    #[error("Unit parse error: {0}")]
    ParseError(String),
    #[error("Incompatible units: {0} <-> {1}")]
    Conversion(String, String),
    #[error("Invalid unit definition on line {line}: {reason}")]
    InvalidDefinition { line: usize, reason: String },
    #[error("I/O error: {0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for UnitError {
    fn from(err: std::io::Error) -> Self {
        UnitError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for UnitError {
    fn from(err: serde_json::Error) -> Self {
        UnitError::Json(err.to_string())
    }
}
