//! Validation rule definitions
//!
//! Failure kinds and their detail payloads:
//! - required -> `true`
//! - minlength -> `{ "requiredLength": n, "actualLength": m }`
//! - maxlength -> `{ "requiredLength": n, "actualLength": m }`
//! - pattern -> `{ "requiredPattern": p, "actualValue": v }`
//! - mismatch -> `{ "first": a, "second": b }` (group-level)
//!
//! Length and pattern rules skip empty values; only `Required` reports
//! emptiness, so an optional field with a length rule stays valid while
//! blank.

use regex::Regex;
use serde_json::{json, Value};

use crate::form::{FieldGroup, FormError, FormResult};

/// A validation rule applied to a single value
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be present: not null, not an empty string, not an empty
    /// list
    Required,
    /// String or list must have at least this many elements
    MinLength(usize),
    /// String or list must have at most this many elements
    MaxLength(usize),
    /// String must match the regular expression
    Pattern(Regex),
}

impl Rule {
    /// Builds a pattern rule from a regular expression source
    pub fn pattern(source: &str) -> FormResult<Self> {
        let regex = Regex::new(source).map_err(|e| FormError::InvalidPattern {
            pattern: source.to_string(),
            message: e.to_string(),
        })?;
        Ok(Rule::Pattern(regex))
    }

    /// Checks a value against the rule.
    ///
    /// Returns `None` when the value passes, otherwise the failure kind and
    /// its detail payload.
    pub fn check(&self, value: &Value) -> Option<(&'static str, Value)> {
        match self {
            Rule::Required => {
                if is_empty(value) {
                    Some(("required", Value::Bool(true)))
                } else {
                    None
                }
            }
            Rule::MinLength(min) => {
                let len = length_of(value)?;
                if len == 0 || len >= *min {
                    None
                } else {
                    Some((
                        "minlength",
                        json!({ "requiredLength": min, "actualLength": len }),
                    ))
                }
            }
            Rule::MaxLength(max) => {
                let len = length_of(value)?;
                if len <= *max {
                    None
                } else {
                    Some((
                        "maxlength",
                        json!({ "requiredLength": max, "actualLength": len }),
                    ))
                }
            }
            Rule::Pattern(regex) => {
                let text = value.as_str()?;
                if text.is_empty() || regex.is_match(text) {
                    None
                } else {
                    Some((
                        "pattern",
                        json!({ "requiredPattern": regex.as_str(), "actualValue": text }),
                    ))
                }
            }
        }
    }
}

/// A cross-field rule owned by a group.
///
/// Failures land in the group's own mapping, separate from any failures on
/// the fields the rule reads.
#[derive(Debug, Clone)]
pub enum GroupRule {
    /// Two sibling fields must hold equal values (e.g. a confirmation
    /// field)
    FieldsMatch { first: String, second: String },
}

impl GroupRule {
    /// Names of the children the rule reads
    pub fn targets(&self) -> Vec<&str> {
        match self {
            GroupRule::FieldsMatch { first, second } => vec![first, second],
        }
    }

    /// Checks the rule against the group's current child values
    pub fn check(&self, group: &FieldGroup) -> Option<(&'static str, Value)> {
        match self {
            GroupRule::FieldsMatch { first, second } => {
                let a = group.child(first)?.value();
                let b = group.child(second)?.value();
                if a == b {
                    None
                } else {
                    Some(("mismatch", json!({ "first": first, "second": second })))
                }
            }
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        _ => false,
    }
}

/// Character count for strings, element count for lists; other types have
/// no length and are skipped by length rules
fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(a) => Some(a.len()),
        _ => None,
    }
}
