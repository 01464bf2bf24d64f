//! Legacy-to-modern rule reconciliation.
//!
//! The conversion catalog itself is a black box behind [`RuleConverter`];
//! this module owns the partition/merge logic around it: classify every
//! legacy rule as converted or unsupported, then fold the converted entries
//! into one modern rule map.

use super::types::{ConversionOutcome, ConversionResult, LegacyRuleSet, ModernRuleValue};
use serde_json::Value;

/// Black-box conversion capability: one legacy rule in, zero or more modern
/// rules out. Implementations must be pure per call so the reconciliation
/// stays testable and order-independent at the set level.
pub trait RuleConverter: Send + Sync {
    fn convert(&self, name: &str, arguments: Option<&[Value]>) -> ConversionResult;
}

/// Convert a whole legacy rule set.
///
/// Iterates the legacy set in insertion order. Unsupported rules only have
/// their names recorded. Converted entries land in the modern map keyed by
/// modern name: explicit arguments are stored verbatim (an empty list is
/// still a list), absent arguments become the "off" sentinel. Collisions
/// across legacy rules resolve last-write-wins.
///
/// Per-rule conversion never fails the pipeline; classification absorbs it.
pub fn convert_rules(legacy: &LegacyRuleSet, converter: &dyn RuleConverter) -> ConversionOutcome {
    let mut outcome = ConversionOutcome::default();

    for (name, entry) in legacy {
        match converter.convert(name, entry.arguments.as_deref()) {
            ConversionResult::Unsupported => outcome.unsupported.push(name.clone()),
            ConversionResult::Converted(entries) => {
                for modern in entries {
                    let value = match modern.arguments {
                        Some(args) => ModernRuleValue::Args(args),
                        None => ModernRuleValue::Off,
                    };
                    outcome.rules.insert(modern.name, value);
                }
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::types::RuleEntry;
    use serde_json::json;
    use std::collections::HashMap;

    /// Converter over a fixed in-memory table.
    struct TableConverter {
        table: HashMap<String, Vec<RuleEntry>>,
    }

    impl TableConverter {
        fn new(entries: &[(&str, Vec<RuleEntry>)]) -> Self {
            let table = entries
                .iter()
                .map(|(name, rules)| (name.to_string(), rules.clone()))
                .collect();
            Self { table }
        }
    }

    impl RuleConverter for TableConverter {
        fn convert(&self, name: &str, _arguments: Option<&[Value]>) -> ConversionResult {
            match self.table.get(name) {
                Some(rules) => ConversionResult::Converted(rules.clone()),
                None => ConversionResult::Unsupported,
            }
        }
    }

    fn legacy_set(names: &[&str]) -> LegacyRuleSet {
        names
            .iter()
            .map(|name| {
                (
                    name.to_string(),
                    RuleEntry {
                        name: name.to_string(),
                        arguments: Some(vec![json!(true)]),
                    },
                )
            })
            .collect()
    }

    fn modern(name: &str, arguments: Option<Vec<Value>>) -> RuleEntry {
        RuleEntry {
            name: name.to_string(),
            arguments,
        }
    }

    #[test]
    fn test_converted_rule_with_translated_arguments() {
        let converter = TableConverter::new(&[(
            "no-foo",
            vec![modern("@ns/no-foo", Some(vec![json!("x")]))],
        )]);

        let outcome = convert_rules(&legacy_set(&["no-foo"]), &converter);

        assert!(outcome.unsupported.is_empty());
        assert_eq!(
            outcome.rules.get("@ns/no-foo"),
            Some(&ModernRuleValue::Args(vec![json!("x")]))
        );
    }

    #[test]
    fn test_unmapped_rule_is_unsupported_and_absent() {
        let converter = TableConverter::new(&[]);

        let outcome = convert_rules(&legacy_set(&["no-foo"]), &converter);

        assert_eq!(outcome.unsupported, vec!["no-foo".to_string()]);
        assert!(outcome.rules.is_empty());
    }

    #[test]
    fn test_absent_arguments_become_off_sentinel() {
        let converter = TableConverter::new(&[("member-ordering", vec![modern("@typescript-eslint/member-ordering", None)])]);

        let outcome = convert_rules(&legacy_set(&["member-ordering"]), &converter);

        assert_eq!(
            outcome.rules.get("@typescript-eslint/member-ordering"),
            Some(&ModernRuleValue::Off)
        );
    }

    #[test]
    fn test_empty_argument_list_is_not_off() {
        let converter =
            TableConverter::new(&[("no-bar", vec![modern("@ns/no-bar", Some(vec![]))])]);

        let outcome = convert_rules(&legacy_set(&["no-bar"]), &converter);

        assert_eq!(
            outcome.rules.get("@ns/no-bar"),
            Some(&ModernRuleValue::Args(vec![]))
        );
    }

    #[test]
    fn test_one_legacy_rule_fans_out_to_many() {
        let converter = TableConverter::new(&[(
            "ban-comma-operator",
            vec![
                modern("no-sequences", None),
                modern("@ns/extra", Some(vec![json!(1)])),
            ],
        )]);

        let outcome = convert_rules(&legacy_set(&["ban-comma-operator"]), &converter);

        assert_eq!(outcome.rules.len(), 2);
    }

    #[test]
    fn test_collision_resolves_last_write_wins_in_insertion_order() {
        // Two legacy rules map to the same modern name; the one declared
        // later in the legacy set must win.
        let converter = TableConverter::new(&[
            ("first", vec![modern("@ns/shared", Some(vec![json!("a")]))]),
            ("second", vec![modern("@ns/shared", Some(vec![json!("b")]))]),
        ]);

        let outcome = convert_rules(&legacy_set(&["first", "second"]), &converter);

        assert_eq!(
            outcome.rules.get("@ns/shared"),
            Some(&ModernRuleValue::Args(vec![json!("b")]))
        );

        let reversed = convert_rules(&legacy_set(&["second", "first"]), &converter);
        assert_eq!(
            reversed.rules.get("@ns/shared"),
            Some(&ModernRuleValue::Args(vec![json!("a")]))
        );
    }

    #[test]
    fn test_conversion_is_per_entry_at_the_set_level() {
        let converter = TableConverter::new(&[
            ("a", vec![modern("@ns/a", None)]),
            ("b", vec![modern("@ns/b", None)]),
            ("c", vec![modern("@ns/c", None)]),
        ]);

        let together = convert_rules(&legacy_set(&["a", "b", "c"]), &converter);

        let mut unioned: Vec<String> = Vec::new();
        for name in ["a", "b", "c"] {
            let single = convert_rules(&legacy_set(&[name]), &converter);
            unioned.extend(single.rules.keys().cloned());
        }

        let mut combined: Vec<String> = together.rules.keys().cloned().collect();
        combined.sort();
        unioned.sort();
        assert_eq!(combined, unioned);
    }
}
