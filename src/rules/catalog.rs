//! Conversion catalog backed by a lookup table.
//!
//! The catalog speaks the black-box protocol: one entry per legacy rule,
//! carrying either the modern rules it produces or an error marker meaning
//! no automated mapping exists. A built-in table covers the common TSLint
//! core rules; the authoritative table is maintained outside this crate and
//! can be supplied as a JSON file via `from_file`.

use super::converter::RuleConverter;
use super::types::{ConversionResult, RuleEntry};
use crate::errors::MigrateError;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One conversion table entry: either produced modern rules or an error.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub rules: Option<Vec<RuleEntry>>,
    #[serde(default)]
    pub error: Option<String>,
}

pub struct CatalogConverter {
    table: IndexMap<String, CatalogEntry>,
}

/// Legacy rules whose modern counterpart keeps the legacy name unchanged.
const SAME_NAME: &[&str] = &[
    "curly",
    "max-classes-per-file",
    "no-bitwise",
    "no-console",
    "no-debugger",
    "no-empty",
    "no-eval",
    "prefer-const",
    "radix",
    "use-isnan",
];

/// Legacy rules mapped to a differently named modern rule.
const RENAMED: &[(&str, &str)] = &[
    ("adjacent-overload-signatures", "@typescript-eslint/adjacent-overload-signatures"),
    ("array-type", "@typescript-eslint/array-type"),
    ("ban-types", "@typescript-eslint/ban-types"),
    ("eofline", "eol-last"),
    ("indent", "@typescript-eslint/indent"),
    ("member-ordering", "@typescript-eslint/member-ordering"),
    ("no-any", "@typescript-eslint/no-explicit-any"),
    ("no-arg", "no-caller"),
    ("no-duplicate-super", "constructor-super"),
    ("no-internal-module", "@typescript-eslint/prefer-namespace-keyword"),
    ("no-misused-new", "@typescript-eslint/no-misused-new"),
    ("no-namespace", "@typescript-eslint/no-namespace"),
    ("no-non-null-assertion", "@typescript-eslint/no-non-null-assertion"),
    ("no-reference", "@typescript-eslint/triple-slash-reference"),
    ("no-string-throw", "no-throw-literal"),
    ("no-var-keyword", "no-var"),
    ("no-var-requires", "@typescript-eslint/no-var-requires"),
    ("triple-equals", "eqeqeq"),
    ("unified-signatures", "@typescript-eslint/unified-signatures"),
];

/// Legacy rules typescript-eslint has no automated mapping for.
const NO_EQUIVALENT: &[&str] = &["interface-name", "no-unused-variable", "typedef"];

impl CatalogConverter {
    /// Built-in table for the common TSLint core rules.
    pub fn builtin() -> Self {
        let mut table = IndexMap::new();

        for name in SAME_NAME {
            table.insert(
                name.to_string(),
                CatalogEntry {
                    rules: Some(vec![RuleEntry {
                        name: name.to_string(),
                        arguments: None,
                    }]),
                    error: None,
                },
            );
        }

        for (legacy, modern) in RENAMED {
            table.insert(
                legacy.to_string(),
                CatalogEntry {
                    rules: Some(vec![RuleEntry {
                        name: modern.to_string(),
                        arguments: None,
                    }]),
                    error: None,
                },
            );
        }

        for name in NO_EQUIVALENT {
            table.insert(
                name.to_string(),
                CatalogEntry {
                    rules: None,
                    error: Some(format!("no automated conversion for {name}")),
                },
            );
        }

        Self { table }
    }

    /// Load an external conversion table: a JSON object mapping legacy rule
    /// name to a catalog entry.
    pub async fn from_file(path: &Path) -> Result<Self, MigrateError> {
        let content = tokio::fs::read_to_string(path).await?;
        let table: IndexMap<String, CatalogEntry> = serde_json::from_str(&content)?;
        Ok(Self { table })
    }
}

impl RuleConverter for CatalogConverter {
    fn convert(&self, name: &str, _arguments: Option<&[Value]>) -> ConversionResult {
        match self.table.get(name) {
            None => ConversionResult::Unsupported,
            Some(entry) if entry.error.is_some() => ConversionResult::Unsupported,
            Some(entry) => ConversionResult::Converted(entry.rules.clone().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_maps_renamed_rule() {
        let catalog = CatalogConverter::builtin();
        match catalog.convert("no-var-keyword", None) {
            ConversionResult::Converted(rules) => {
                assert_eq!(rules.len(), 1);
                assert_eq!(rules[0].name, "no-var");
            }
            other => panic!("expected conversion, got {other:?}"),
        }
    }

    #[test]
    fn test_error_marker_classifies_unsupported() {
        let catalog = CatalogConverter::builtin();
        assert_eq!(
            catalog.convert("interface-name", None),
            ConversionResult::Unsupported
        );
    }

    #[test]
    fn test_unknown_rule_is_unsupported() {
        let catalog = CatalogConverter::builtin();
        assert_eq!(
            catalog.convert("some-custom-rule", None),
            ConversionResult::Unsupported
        );
    }

    #[tokio::test]
    async fn test_from_file_parses_protocol_shape() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{
                "no-foo": { "rules": [{ "ruleName": "@ns/no-foo", "ruleArguments": ["x"] }] },
                "no-bar": { "error": "nope" }
            }"#,
        )
        .unwrap();

        let catalog = CatalogConverter::from_file(&path).await.unwrap();

        match catalog.convert("no-foo", None) {
            ConversionResult::Converted(rules) => {
                assert_eq!(rules[0].name, "@ns/no-foo");
                assert_eq!(rules[0].arguments, Some(vec![serde_json::json!("x")]));
            }
            other => panic!("expected conversion, got {other:?}"),
        }
        assert_eq!(catalog.convert("no-bar", None), ConversionResult::Unsupported);
    }
}
