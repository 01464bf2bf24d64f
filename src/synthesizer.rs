//! Artifact synthesis.
//!
//! Pure builders for everything the migration writes: the ESLint project
//! reference, the lint config itself, the merged ignore file, the merged
//! editor settings, and the rewritten package manifest. Keeping these free
//! of I/O pins their exact output shapes in unit tests.

use crate::rules::types::ModernRuleSet;
use serde_json::{Map, Value, json};

pub const TSCONFIG: &str = "tsconfig.json";
pub const TSCONFIG_ESLINT: &str = "tsconfig.eslint.json";
pub const ESLINT_CONFIG: &str = ".eslintrc";
pub const ESLINT_IGNORE: &str = ".eslintignore";
pub const VSCODE_SETTINGS: &str = ".vscode/settings.json";
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Globs appended to the ignore file.
const IGNORE_GLOBS: &[&str] = &["node_modules/", "coverage/", "dist/", "typings/"];

/// Project reference config: the base type-check config plus include globs.
pub fn tsconfig_eslint() -> Value {
    json!({
        "extends": "./tsconfig.json",
        "include": ["**/*.ts"],
    })
}

/// The lint config: shared base profile, parser project reference, and the
/// converted rules. An empty rule set omits the `rules` field entirely.
pub fn eslint_config(rules: Option<&ModernRuleSet>) -> Value {
    let mut config = json!({
        "extends": "eslint-config-egg/typescript",
        "parserOptions": {
            "project": "./tsconfig.eslint.json",
        },
    });

    if let Some(rules) = rules {
        let map: Map<String, Value> = rules
            .iter()
            .map(|(name, value)| (name.clone(), value.to_value()))
            .collect();
        config["rules"] = Value::Object(map);
    }

    config
}

/// Append the fixed ignore block to any pre-existing ignore-file content.
/// Pre-existing lines are preserved verbatim, separated by one blank line.
pub fn merge_ignore_file(existing: Option<&str>) -> String {
    let block = IGNORE_GLOBS.join("\n");
    match existing {
        Some(current) if !current.trim().is_empty() => {
            format!("{}\n\n{block}\n", current.trim_end())
        }
        _ => format!("{block}\n"),
    }
}

/// Point the editor's lint integration at ESLint, preserving other keys.
pub fn merge_editor_settings(existing: Map<String, Value>) -> Map<String, Value> {
    let mut settings = existing;
    settings.insert(
        "eslint.validate".to_string(),
        json!([
            "javascript",
            "javascriptreact",
            { "language": "typescript", "autoFix": true },
        ]),
    );
    settings
}

/// Swap the manifest's lint tooling: ESLint script and dev dependencies in,
/// TSLint dev dependencies out. All other fields are left untouched.
pub fn update_manifest(existing: Map<String, Value>) -> Map<String, Value> {
    let mut manifest = existing;

    let scripts = ensure_object(&mut manifest, "scripts");
    scripts.insert("lint".to_string(), json!("eslint . --ext .ts"));

    let dev_deps = ensure_object(&mut manifest, "devDependencies");
    dev_deps.insert("eslint".to_string(), json!("^6.0.0"));
    dev_deps.insert("eslint-config-egg".to_string(), json!("^7.0.0"));
    dev_deps.shift_remove("tslint");
    dev_deps.shift_remove("tslint-config-egg");

    manifest
}

fn ensure_object<'a>(map: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let entry = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    match entry {
        Value::Object(object) => object,
        _ => unreachable!(),
    }
}
