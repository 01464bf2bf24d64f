//! User confirmation prompts.
//!
//! Every destructive or optional step of the migration goes through the
//! [`InteractionGate`]. The gate short-circuits to "yes" when the global
//! assume-yes flag is set, with no terminal I/O at all. Prompting itself
//! sits behind the [`Prompter`] trait so tests can script the answers.

use crate::errors::MigrateError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question. The empty answer defaults to yes.
    async fn confirm(&self, message: &str) -> Result<bool, MigrateError>;
}

/// Prompter backed by the terminal: prints to stderr, reads one stdin line.
pub struct ConsolePrompter;

#[async_trait]
impl Prompter for ConsolePrompter {
    async fn confirm(&self, message: &str) -> Result<bool, MigrateError> {
        eprint!("{message} (Y/n) ");

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        reader.read_line(&mut line).await?;

        let answer = line.trim();
        Ok(answer.is_empty()
            || answer.eq_ignore_ascii_case("y")
            || answer.eq_ignore_ascii_case("yes"))
    }
}

/// Gate for every confirmable decision point in the pipeline.
///
/// Decisions are independent; declining one never short-circuits another.
/// The one exception, aborting on the unsupported-rules decision, is the
/// caller's job.
#[derive(Clone)]
pub struct InteractionGate {
    assume_yes: bool,
    prompter: Arc<dyn Prompter>,
}

impl InteractionGate {
    pub fn new(assume_yes: bool, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            assume_yes,
            prompter,
        }
    }

    pub async fn confirm(&self, message: &str) -> Result<bool, MigrateError> {
        if self.assume_yes {
            return Ok(true);
        }
        self.prompter.confirm(message).await
    }
}
