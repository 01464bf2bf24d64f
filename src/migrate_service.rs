//! The migration pipeline.
//!
//! One sequential run per invocation: precondition checks, rule extraction,
//! rule conversion (gated when rules drop), artifact synthesis, and the
//! confirmable cleanup steps. The write sequence is non-atomic; an
//! interrupted run leaves already-written artifacts in place.

use crate::config::MigrateConfig;
use crate::errors::MigrateError;
use crate::loader;
use crate::prompt::{ConsolePrompter, InteractionGate, Prompter};
use crate::rules::catalog::CatalogConverter;
use crate::rules::converter::{RuleConverter, convert_rules};
use crate::rules::extractor::{RuleExtractor, TSLINT_CONFIG};
use crate::synthesizer::{
    self, ESLINT_CONFIG, ESLINT_IGNORE, PACKAGE_MANIFEST, TSCONFIG, TSCONFIG_ESLINT,
    VSCODE_SETTINGS,
};
use crate::workspace::Workspace;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;

/// How a migration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateOutcome {
    /// The pipeline ran to the end; individual steps may have been skipped
    Completed,
    /// The user declined to continue after seeing the unsupported rule list
    Aborted,
}

pub struct MigrateService {
    workspace: Workspace,
    gate: InteractionGate,
    extractor: RuleExtractor,
    converter: Arc<dyn RuleConverter>,
}

impl Default for MigrateService {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrateService {
    /// Service over the current directory with the built-in catalog and a
    /// terminal prompter.
    pub fn new() -> Self {
        Self::with_config(
            MigrateConfig::default(),
            Arc::new(ConsolePrompter),
            Arc::new(CatalogConverter::builtin()),
        )
    }

    pub fn with_config(
        config: MigrateConfig,
        prompter: Arc<dyn Prompter>,
        converter: Arc<dyn RuleConverter>,
    ) -> Self {
        let workspace = Workspace::new(config.cwd.clone());
        let gate = InteractionGate::new(config.assume_yes, prompter);
        let extractor = RuleExtractor::new(workspace.clone(), config.tslint_command.clone());
        Self {
            workspace,
            gate,
            extractor,
            converter,
        }
    }

    pub async fn run(&self) -> Result<MigrateOutcome, MigrateError> {
        self.check_preconditions()?;

        let legacy = self.extractor.extract().await?;
        tracing::info!(count = legacy.len(), "resolved locally declared rules");

        let outcome = convert_rules(&legacy, self.converter.as_ref());

        if !outcome.unsupported.is_empty() {
            eprintln!("\nThese rules are still not supported in typescript-eslint:\n");
            for name in &outcome.unsupported {
                eprintln!("  {name}");
            }
            eprintln!();
            if !self
                .gate
                .confirm("Continue to convert? these rules will be dropped")
                .await?
            {
                return Ok(MigrateOutcome::Aborted);
            }
        }

        self.write_json(TSCONFIG_ESLINT, &synthesizer::tsconfig_eslint())
            .await?;

        let rules = (!outcome.rules.is_empty()).then_some(&outcome.rules);
        self.write_json(ESLINT_CONFIG, &synthesizer::eslint_config(rules))
            .await?;

        let existing = self.workspace.read_optional(ESLINT_IGNORE).await?;
        self.workspace
            .write(
                ESLINT_IGNORE,
                &synthesizer::merge_ignore_file(existing.as_deref()),
            )
            .await?;

        if self.workspace.exists(TSLINT_CONFIG)
            && self.gate.confirm("Should remove tslint.json?").await?
        {
            self.workspace.remove(TSLINT_CONFIG).await?;
            tracing::info!("removed {TSLINT_CONFIG}");
        }

        if self.gate.confirm("Should update .vscode/settings?").await? {
            let settings = self.load_object(VSCODE_SETTINGS).await?;
            self.write_json(
                VSCODE_SETTINGS,
                &Value::Object(synthesizer::merge_editor_settings(settings)),
            )
            .await?;
        }

        if self.gate.confirm("Should auto update package.json?").await? {
            let manifest = self.load_object(PACKAGE_MANIFEST).await?;
            self.write_json(
                PACKAGE_MANIFEST,
                &Value::Object(synthesizer::update_manifest(manifest)),
            )
            .await?;
        }

        Ok(MigrateOutcome::Completed)
    }

    fn check_preconditions(&self) -> Result<(), MigrateError> {
        if self.workspace.exists(ESLINT_CONFIG) {
            return Err(MigrateError::Precondition {
                path: self.workspace.path(ESLINT_CONFIG),
                reason: "already exists",
            });
        }
        for required in [TSCONFIG, PACKAGE_MANIFEST] {
            if !self.workspace.exists(required) {
                return Err(MigrateError::Precondition {
                    path: self.workspace.path(required),
                    reason: "not found",
                });
            }
        }
        Ok(())
    }

    async fn load_object(&self, name: &str) -> Result<Map<String, Value>, MigrateError> {
        match self.workspace.read_optional(name).await? {
            Some(content) => loader::parse_config_object(Path::new(name), &content),
            None => Ok(Map::new()),
        }
    }

    async fn write_json(&self, name: &str, value: &Value) -> Result<(), MigrateError> {
        let content = serde_json::to_string_pretty(value)?;
        self.workspace.write(name, &content).await
    }
}
