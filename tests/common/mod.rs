// Common test utilities
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;
use tslint_to_eslint::errors::MigrateError;
use tslint_to_eslint::prompt::Prompter;

/// A project directory with the required inputs in place: a type-check
/// config and a manifest still wired up for TSLint.
pub fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("tsconfig.json"),
        r#"{ "compilerOptions": { "strict": true } }"#,
    )
    .unwrap();

    fs::write(
        temp_dir.path().join("package.json"),
        r#"{
  "name": "fixture-app",
  "scripts": {
    "lint": "tslint -p tsconfig.json"
  },
  "devDependencies": {
    "tslint": "^5.20.0",
    "tslint-config-egg": "^1.0.0",
    "typescript": "^3.5.0"
  }
}"#,
    )
    .unwrap();

    temp_dir
}

pub fn write_tslint_config(dir: &Path, rules: &str) {
    fs::write(
        dir.join("tslint.json"),
        format!(r#"{{ "extends": "tslint-config-egg", "rules": {rules} }}"#),
    )
    .unwrap();
}

/// Install a stand-in for `tslint --print-config` that ignores its arguments
/// and prints a canned resolved config. Returns the command to invoke.
pub fn install_fake_resolver(dir: &Path, print_config: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let script_path = dir.join("fake-tslint");
    fs::write(
        &script_path,
        format!("#!/bin/sh\ncat <<'EOF'\n{print_config}\nEOF\n"),
    )
    .unwrap();

    let mut perms = fs::metadata(&script_path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script_path, perms).unwrap();

    script_path.to_string_lossy().to_string()
}

/// Prompter that replays a fixed list of answers, then defaults to yes.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<bool>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
        }
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn confirm(&self, _message: &str) -> Result<bool, MigrateError> {
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or(true))
    }
}
