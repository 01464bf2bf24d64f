//! Legacy rule extraction.
//!
//! The effective TSLint rule set is whatever the tool itself would enforce
//! after walking its `extends` chain, so resolution shells out to
//! `tslint --print-config`. The resolved catalog is then restricted to the
//! rule names explicitly declared in the local `tslint.json`; names declared
//! locally but absent from the resolved chain are silently dropped.

use super::types::{LegacyRuleSet, RuleEntry};
use crate::errors::MigrateError;
use crate::loader;
use crate::workspace::Workspace;
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;
use tokio::process::Command;

pub const TSLINT_CONFIG: &str = "tslint.json";

pub struct RuleExtractor {
    workspace: Workspace,
    tslint_command: String,
}

impl RuleExtractor {
    pub fn new(workspace: Workspace, tslint_command: String) -> Self {
        Self {
            workspace,
            tslint_command,
        }
    }

    /// Extract the locally declared rules with their resolved configuration.
    ///
    /// A missing local config yields an empty set; so does any resolver
    /// failure. Neither is an error.
    pub async fn extract(&self) -> Result<LegacyRuleSet, MigrateError> {
        let Some(content) = self.workspace.read_optional(TSLINT_CONFIG).await? else {
            return Ok(LegacyRuleSet::new());
        };

        let local = loader::parse_config_object(Path::new(TSLINT_CONFIG), &content)?;
        let Some(Value::Object(declared)) = local.get("rules") else {
            return Ok(LegacyRuleSet::new());
        };

        let catalog = self.resolve_catalog().await;
        Ok(restrict_to_local(&catalog, declared))
    }

    /// Resolve the fully expanded rule catalog via `tslint --print-config`.
    ///
    /// Any failure (missing binary, non-zero exit, malformed output)
    /// degrades to an empty catalog.
    async fn resolve_catalog(&self) -> IndexMap<String, Value> {
        let config_path = self.workspace.path(TSLINT_CONFIG);
        let output = match Command::new(&self.tslint_command)
            .arg("--print-config")
            .arg(&config_path)
            .output()
            .await
        {
            Ok(output) => output,
            Err(err) => {
                tracing::debug!("failed to invoke {}: {err}", self.tslint_command);
                return IndexMap::new();
            }
        };

        if !output.status.success() {
            tracing::debug!(
                "{} --print-config exited with {}",
                self.tslint_command,
                output.status
            );
            return IndexMap::new();
        }

        let resolved: Value = match serde_json::from_slice(&output.stdout) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!("malformed --print-config output: {err}");
                return IndexMap::new();
            }
        };

        // The effective catalog is jsRules and rules combined; rules wins
        // on overlap.
        let mut catalog = IndexMap::new();
        for section in ["jsRules", "rules"] {
            if let Some(Value::Object(map)) = resolved.get(section) {
                for (name, value) in map {
                    catalog.insert(name.clone(), value.clone());
                }
            }
        }
        catalog
    }
}

/// Restrict the resolved catalog to locally declared rule names, in local
/// declaration order.
fn restrict_to_local(
    catalog: &IndexMap<String, Value>,
    declared: &serde_json::Map<String, Value>,
) -> LegacyRuleSet {
    let mut rules = LegacyRuleSet::new();
    for name in declared.keys() {
        let Some(resolved) = catalog.get(name) else {
            continue;
        };
        let arguments = resolved
            .get("ruleArguments")
            .and_then(Value::as_array)
            .cloned();
        rules.insert(
            name.clone(),
            RuleEntry {
                name: name.clone(),
                arguments,
            },
        );
    }
    rules
}
