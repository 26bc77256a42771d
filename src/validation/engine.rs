//! Applies validation rules to current values.
//!
//! The engine is deterministic: the same rules against the same value
//! always produce the same mapping, with entries in rule declaration order.

use serde_json::{Map, Value};

use crate::form::FieldGroup;

use super::rules::Rule;

/// Runs field rules against a value, producing the failure mapping.
///
/// The first failing rule of each kind wins; later rules of the same kind
/// do not overwrite its detail.
pub fn run_rules(rules: &[Rule], value: &Value) -> Map<String, Value> {
    let mut failures = Map::new();
    for rule in rules {
        if let Some((kind, detail)) = rule.check(value) {
            if !failures.contains_key(kind) {
                failures.insert(kind.to_string(), detail);
            }
        }
    }
    failures
}

/// Runs a group's cross-field rules, producing the group's own failure
/// mapping
pub fn run_group_rules(group: &FieldGroup) -> Map<String, Value> {
    let mut failures = Map::new();
    for rule in group.group_rules() {
        if let Some((kind, detail)) = rule.check(group) {
            if !failures.contains_key(kind) {
                failures.insert(kind.to_string(), detail);
            }
        }
    }
    failures
}
