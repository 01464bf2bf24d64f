use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One configured lint rule, legacy or modern.
///
/// The field names follow the wire shape shared by `tslint --print-config`
/// output and the conversion catalog protocol. `arguments: None` means the
/// rule carries no translated arguments, which is distinct from an explicit
/// empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEntry {
    #[serde(rename = "ruleName")]
    pub name: String,
    #[serde(rename = "ruleArguments", skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<Value>>,
}

/// The effective legacy rules, restricted to locally declared names.
/// Insertion order is the declaration order of the local config file.
pub type LegacyRuleSet = IndexMap<String, RuleEntry>;

/// Value stored for one modern rule in the synthesized lint config.
#[derive(Debug, Clone, PartialEq)]
pub enum ModernRuleValue {
    /// Rule acknowledged but disabled; its arguments could not be translated
    Off,
    /// Translated arguments, stored verbatim (an empty list stays a list)
    Args(Vec<Value>),
}

impl ModernRuleValue {
    pub fn to_value(&self) -> Value {
        match self {
            ModernRuleValue::Off => Value::String("off".to_string()),
            ModernRuleValue::Args(args) => Value::Array(args.clone()),
        }
    }
}

/// Modern rules keyed by name. Last write wins on collision; iteration
/// order follows the legacy set's insertion order.
pub type ModernRuleSet = IndexMap<String, ModernRuleValue>;

/// Outcome of converting one legacy rule.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionResult {
    /// Zero or more modern rules produced from the legacy rule
    Converted(Vec<RuleEntry>),
    /// No automated mapping exists
    Unsupported,
}

/// Aggregate result of converting a whole legacy rule set.
#[derive(Debug, Default)]
pub struct ConversionOutcome {
    pub rules: ModernRuleSet,
    pub unsupported: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_entry_wire_names() {
        let entry: RuleEntry =
            serde_json::from_value(json!({ "ruleName": "no-var", "ruleArguments": [true] }))
                .unwrap();
        assert_eq!(entry.name, "no-var");
        assert_eq!(entry.arguments, Some(vec![json!(true)]));
    }

    #[test]
    fn test_rule_entry_arguments_optional() {
        let entry: RuleEntry = serde_json::from_value(json!({ "ruleName": "no-var" })).unwrap();
        assert_eq!(entry.arguments, None);
    }

    #[test]
    fn test_modern_rule_value_off_serializes_as_string() {
        assert_eq!(ModernRuleValue::Off.to_value(), json!("off"));
    }

    #[test]
    fn test_modern_rule_value_empty_args_stay_a_list() {
        assert_eq!(ModernRuleValue::Args(vec![]).to_value(), json!([]));
    }
}
