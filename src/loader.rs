//! Configuration file loading.
//!
//! Project configs in the wild are JSON (`package.json`, `.vscode/settings.json`)
//! or YAML (`tslint.yaml` variants). The loader sniffs the format the same way
//! the legacy toolchain does: a `.json` extension or a leading `{` means JSON,
//! anything else is parsed as YAML.

use crate::errors::MigrateError;
use serde_json::{Map, Value};
use std::path::Path;

/// Parse config file content into a JSON value.
pub fn parse_config_value(path: &Path, content: &str) -> Result<Value, MigrateError> {
    let is_json = path.extension().and_then(|s| s.to_str()) == Some("json")
        || content.trim_start().starts_with('{');

    if is_json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Parse config file content into a key-value object.
///
/// An empty document yields an empty object; a non-object document is an error.
pub fn parse_config_object(path: &Path, content: &str) -> Result<Map<String, Value>, MigrateError> {
    if content.trim().is_empty() {
        return Ok(Map::new());
    }

    match parse_config_value(path, content)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(MigrateError::Internal(format!(
            "{}: expected a configuration object, got {other}",
            path.display()
        ))),
    }
}
