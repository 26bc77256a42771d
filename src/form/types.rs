//! Field tree type definitions
//!
//! Node kinds:
//! - field: leaf holding one value and its validation rules
//! - group: named, ordered collection of nodes, with optional cross-field
//!   rules of its own
//! - array: ordered, growable list of nodes, with optional rules applied to
//!   the assembled list value

use serde_json::{Map, Value};

use crate::validation::{engine, GroupRule, Rule};

use super::errors::{FormError, FormResult};

/// A node in the field tree.
///
/// Closed variant: callers dispatch on the discriminant instead of probing
/// a child's type at runtime.
#[derive(Debug, Clone)]
pub enum FieldNode {
    /// Leaf input slot
    Field(Field),
    /// Nested named group
    Group(FieldGroup),
    /// Dynamic list of nodes
    Array(FieldArray),
}

impl FieldNode {
    /// Returns the node's own failure mapping (not its descendants')
    pub fn failures(&self) -> &Map<String, Value> {
        match self {
            FieldNode::Field(field) => field.failures(),
            FieldNode::Group(group) => group.failures(),
            FieldNode::Array(array) => array.failures(),
        }
    }

    /// Returns true when the node and every descendant currently validate
    pub fn is_valid(&self) -> bool {
        match self {
            FieldNode::Field(field) => field.is_valid(),
            FieldNode::Group(group) => group.is_valid(),
            FieldNode::Array(array) => array.is_valid(),
        }
    }

    /// Assembles the node's current value
    pub fn value(&self) -> Value {
        match self {
            FieldNode::Field(field) => field.value().clone(),
            FieldNode::Group(group) => group.value(),
            FieldNode::Array(array) => array.value(),
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            FieldNode::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&FieldGroup> {
        match self {
            FieldNode::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&FieldArray> {
        match self {
            FieldNode::Array(array) => Some(array),
            _ => None,
        }
    }
}

/// A leaf field: one value, its rules, and the failure mapping the rules
/// last produced.
///
/// The failure mapping is recomputed synchronously on every value change,
/// so reads never observe a stale mapping.
#[derive(Debug, Clone)]
pub struct Field {
    value: Value,
    rules: Vec<Rule>,
    failures: Map<String, Value>,
}

impl Field {
    /// Creates a field with no rules; always valid
    pub fn new(initial: Value) -> Self {
        Self::with_rules(initial, Vec::new())
    }

    /// Creates a field and validates the initial value immediately
    pub fn with_rules(initial: Value, rules: Vec<Rule>) -> Self {
        let failures = engine::run_rules(&rules, &initial);
        Self {
            value: initial,
            rules,
            failures,
        }
    }

    /// Sets the value and re-runs the field's rules
    pub fn set_value(&mut self, value: Value) {
        self.value = value;
        self.failures = engine::run_rules(&self.rules, &self.value);
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Failure mapping: failure kind -> detail payload, empty when valid
    pub fn failures(&self) -> &Map<String, Value> {
        &self.failures
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A named, ordered collection of nodes.
///
/// Insertion order is display order. A group may carry cross-field rules
/// whose failures land in the group's own mapping, separate from any
/// failures on its children.
#[derive(Debug, Clone, Default)]
pub struct FieldGroup {
    children: Vec<(String, FieldNode)>,
    group_rules: Vec<GroupRule>,
    failures: Map<String, Value>,
}

impl FieldGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a child node. Names must be unique within the group.
    pub fn insert(&mut self, name: impl Into<String>, node: FieldNode) -> FormResult<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(FormError::DuplicateField(name));
        }
        self.children.push((name, node));
        Ok(())
    }

    pub fn insert_field(&mut self, name: impl Into<String>, field: Field) -> FormResult<()> {
        self.insert(name, FieldNode::Field(field))
    }

    pub fn insert_group(&mut self, name: impl Into<String>, group: FieldGroup) -> FormResult<()> {
        self.insert(name, FieldNode::Group(group))
    }

    pub fn insert_array(&mut self, name: impl Into<String>, array: FieldArray) -> FormResult<()> {
        self.insert(name, FieldNode::Array(array))
    }

    /// Adds a cross-field rule. Every field the rule names must already be
    /// a child of this group, so rules are added after the children they
    /// reference.
    pub fn add_group_rule(&mut self, rule: GroupRule) -> FormResult<()> {
        for target in rule.targets() {
            if !self.contains(target) {
                return Err(FormError::UnknownRuleTarget(target.to_string()));
            }
        }
        self.group_rules.push(rule);
        self.revalidate();
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.iter().any(|(child, _)| child == name)
    }

    pub fn child(&self, name: &str) -> Option<&FieldNode> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    /// Mutable handle to a child. After mutating through this handle, call
    /// [`FieldGroup::revalidate`] if the group carries cross-field rules;
    /// `patch_value` and `set_value` do so on their own.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut FieldNode> {
        self.children
            .iter_mut()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    /// Children as `(name, node)` pairs in declared order
    pub fn children(&self) -> impl Iterator<Item = (&str, &FieldNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn group_rules(&self) -> &[GroupRule] {
        &self.group_rules
    }

    /// The group's own failure mapping (cross-field failures only)
    pub fn failures(&self) -> &Map<String, Value> {
        &self.failures
    }

    /// Returns true when the group's own mapping and every descendant's
    /// mapping are empty
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty() && self.children.iter().all(|(_, node)| node.is_valid())
    }

    /// Assembles the current values into an object, keyed in declared order
    pub fn value(&self) -> Value {
        let mut object = Map::new();
        for (name, node) in &self.children {
            object.insert(name.clone(), node.value());
        }
        Value::Object(object)
    }

    /// Applies a partial update from an object value.
    ///
    /// Keys the group does not declare are ignored; declared keys update
    /// the matching child (recursing into groups and arrays). Re-runs this
    /// group's cross-field rules afterwards.
    pub fn patch_value(&mut self, patch: &Value) -> FormResult<()> {
        let object = patch
            .as_object()
            .ok_or_else(|| FormError::NotAnObject(json_type_name(patch)))?;
        for (key, value) in object {
            match self.child_mut(key) {
                Some(FieldNode::Field(field)) => field.set_value(value.clone()),
                Some(FieldNode::Group(group)) => group.patch_value(value)?,
                Some(FieldNode::Array(array)) => array.patch_value(value)?,
                None => {}
            }
        }
        self.revalidate();
        Ok(())
    }

    /// Applies a complete update from an object value.
    ///
    /// Strict counterpart of [`FieldGroup::patch_value`]: every declared
    /// child must appear in the value and no undeclared key may appear.
    pub fn set_value(&mut self, value: &Value) -> FormResult<()> {
        let object = value
            .as_object()
            .ok_or_else(|| FormError::NotAnObject(json_type_name(value)))?;
        for key in object.keys() {
            if !self.contains(key) {
                return Err(FormError::UnknownField(key.clone()));
            }
        }
        for (name, _) in &self.children {
            if !object.contains_key(name) {
                return Err(FormError::MissingField(name.clone()));
            }
        }
        for (key, value) in object {
            match self.child_mut(key) {
                Some(FieldNode::Field(field)) => field.set_value(value.clone()),
                Some(FieldNode::Group(group)) => group.set_value(value)?,
                Some(FieldNode::Array(array)) => array.set_value(value)?,
                None => unreachable!("keys were checked against declared children"),
            }
        }
        self.revalidate();
        Ok(())
    }

    /// Re-runs the group's cross-field rules against current child values
    pub fn revalidate(&mut self) {
        let failures = engine::run_group_rules(self);
        self.failures = failures;
    }
}

/// A dynamic, ordered list of nodes.
///
/// Rules attached to the array apply to the assembled list value (e.g. a
/// minimum element count); element nodes carry their own rules.
#[derive(Debug, Clone, Default)]
pub struct FieldArray {
    elements: Vec<FieldNode>,
    rules: Vec<Rule>,
    failures: Map<String, Value>,
}

impl FieldArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array and validates the (empty) list immediately
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        let mut array = Self {
            elements: Vec::new(),
            rules,
            failures: Map::new(),
        };
        array.revalidate();
        array
    }

    /// Appends a node to the end of the list
    pub fn push(&mut self, node: FieldNode) {
        self.elements.push(node);
        self.revalidate();
    }

    pub fn push_field(&mut self, field: Field) {
        self.push(FieldNode::Field(field));
    }

    pub fn get(&self, index: usize) -> Option<&FieldNode> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut FieldNode> {
        self.elements.get_mut(index)
    }

    /// Elements in list order
    pub fn elements(&self) -> impl Iterator<Item = &FieldNode> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The array's own failure mapping (list-level failures only)
    pub fn failures(&self) -> &Map<String, Value> {
        &self.failures
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty() && self.elements.iter().all(FieldNode::is_valid)
    }

    /// Assembles the current element values into an array value
    pub fn value(&self) -> Value {
        Value::Array(self.elements.iter().map(FieldNode::value).collect())
    }

    /// Applies a partial update from an array value, pairing elements by
    /// index; surplus entries on either side are left untouched
    pub fn patch_value(&mut self, patch: &Value) -> FormResult<()> {
        let values = patch
            .as_array()
            .ok_or_else(|| FormError::NotAnArray(json_type_name(patch)))?;
        for (element, value) in self.elements.iter_mut().zip(values) {
            apply_to_node(element, value, false)?;
        }
        self.revalidate();
        Ok(())
    }

    /// Applies a complete update from an array value; the element counts
    /// must match exactly
    pub fn set_value(&mut self, value: &Value) -> FormResult<()> {
        let values = value
            .as_array()
            .ok_or_else(|| FormError::NotAnArray(json_type_name(value)))?;
        if values.len() != self.elements.len() {
            return Err(FormError::LengthMismatch {
                expected: self.elements.len(),
                actual: values.len(),
            });
        }
        for (element, value) in self.elements.iter_mut().zip(values) {
            apply_to_node(element, value, true)?;
        }
        self.revalidate();
        Ok(())
    }

    /// Re-runs the array's rules against the assembled list value
    pub fn revalidate(&mut self) {
        let value = self.value();
        self.failures = engine::run_rules(&self.rules, &value);
    }
}

fn apply_to_node(node: &mut FieldNode, value: &Value, strict: bool) -> FormResult<()> {
    match node {
        FieldNode::Field(field) => {
            field.set_value(value.clone());
            Ok(())
        }
        FieldNode::Group(group) if strict => group.set_value(value),
        FieldNode::Group(group) => group.patch_value(value),
        FieldNode::Array(array) if strict => array.set_value(value),
        FieldNode::Array(array) => array.patch_value(value),
    }
}

/// Returns the JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
