//! Validation failure collection
//!
//! Walks a group's subtree depth-first, in declared child order, and
//! returns every active failure as one flat list. The walk is a pure read:
//! it mutates nothing, triggers no validation, and cannot fail. Failure
//! mappings are expected to be current at call time, which the form model
//! guarantees by re-validating on every value change.

use serde::Serialize;
use serde_json::Value;

use crate::form::{FieldArray, FieldGroup, FieldNode};

/// One active validation failure on one field, group, or array
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationFailure {
    /// Names leading to the failing node. [`collect`] records only the
    /// immediate child name; [`collect_qualified`] records the full chain
    /// from the walk root.
    pub field_path: Vec<String>,
    /// Failure kind identifier, e.g. `"required"` or `"minlength"`
    pub kind: String,
    /// Rule-specific detail payload
    pub detail: Value,
}

/// Collects every active failure under `group`.
///
/// For each child, in the group's declared order, the walk first descends
/// into the child when it is a group or an array (so a container's
/// descendants are reported before the container's own failures), then
/// appends one failure per entry of the child's own mapping, in mapping
/// order. Array elements are named by their decimal index.
///
/// Each `field_path` holds the immediate child name only, so same-named
/// fields in different sub-groups are indistinguishable by path; use
/// [`collect_qualified`] when that matters. The root's own mapping is not
/// reported: a node's own failures surface when its parent visits it as a
/// child.
pub fn collect(group: &FieldGroup) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    visit_children(group_children(group), None, &mut failures);
    failures
}

/// Like [`collect`], but each `field_path` carries the full name sequence
/// from the walk root to the failing node
pub fn collect_qualified(group: &FieldGroup) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    visit_children(group_children(group), Some(&[]), &mut failures);
    failures
}

/// Recursive walk over one container's children.
///
/// `ancestors` is `None` for immediate-name paths and `Some(prefix)` for
/// qualified paths. Recursion depth equals tree depth, which is bounded by
/// construction (ownership forbids cycles).
fn visit_children<'a, I>(
    children: I,
    ancestors: Option<&[String]>,
    out: &mut Vec<ValidationFailure>,
) where
    I: Iterator<Item = (String, &'a FieldNode)>,
{
    for (name, child) in children {
        let path = match ancestors {
            Some(prefix) => {
                let mut qualified = prefix.to_vec();
                qualified.push(name);
                qualified
            }
            None => vec![name],
        };

        match child {
            FieldNode::Group(group) => {
                visit_children(group_children(group), ancestors.map(|_| path.as_slice()), out);
            }
            FieldNode::Array(array) => {
                visit_children(array_children(array), ancestors.map(|_| path.as_slice()), out);
            }
            FieldNode::Field(_) => {}
        }

        for (kind, detail) in child.failures() {
            out.push(ValidationFailure {
                field_path: path.clone(),
                kind: kind.clone(),
                detail: detail.clone(),
            });
        }
    }
}

fn group_children(group: &FieldGroup) -> impl Iterator<Item = (String, &FieldNode)> {
    group.children().map(|(name, node)| (name.to_string(), node))
}

fn array_children(array: &FieldArray) -> impl Iterator<Item = (String, &FieldNode)> {
    array
        .elements()
        .enumerate()
        .map(|(index, node)| (index.to_string(), node))
}
