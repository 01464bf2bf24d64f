//! # Error Types
//!
//! Error handling for the migration pipeline.
//! Precondition failures carry the offending path so the CLI can name it.

use std::fmt;
use std::path::PathBuf;

/// Error types that can occur during a migration run.
///
/// Per-rule conversion failures and catalog resolver failures are recovered
/// locally and never surface here; see the extractor and converter modules.
#[derive(Debug)]
pub enum MigrateError {
    /// A required input file is missing, or an output file already exists
    Precondition { path: PathBuf, reason: &'static str },
    /// Internal error with custom message
    Internal(String),
    /// I/O error reading/writing files
    Io(std::io::Error),
    /// Error parsing YAML configuration
    SerdeYaml(serde_yaml::Error),
    /// Error parsing JSON data
    SerdeJson(serde_json::Error),
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrateError::Precondition { path, reason } => {
                write!(f, "{} {reason}", path.display())
            }
            MigrateError::Internal(msg) => write!(f, "Internal error: {msg}"),
            MigrateError::Io(err) => write!(f, "IO error: {err}"),
            MigrateError::SerdeYaml(err) => write!(f, "YAML parsing error: {err}"),
            MigrateError::SerdeJson(err) => write!(f, "JSON parsing error: {err}"),
        }
    }
}

impl std::error::Error for MigrateError {}

impl From<std::io::Error> for MigrateError {
    fn from(err: std::io::Error) -> Self {
        MigrateError::Io(err)
    }
}

impl From<serde_yaml::Error> for MigrateError {
    fn from(err: serde_yaml::Error) -> Self {
        MigrateError::SerdeYaml(err)
    }
}

impl From<serde_json::Error> for MigrateError {
    fn from(err: serde_json::Error) -> Self {
        MigrateError::SerdeJson(err)
    }
}
