//! Form Model Tests
//!
//! Construction and mutation behavior of the field tree:
//! - Names are unique within one parent
//! - patch_value is lenient and partial; set_value is strict and complete
//! - Every value change re-validates synchronously
//! - Assembled values follow declared order

use formtree::form::{Field, FieldArray, FieldGroup, FieldNode, FormError};
use formtree::validation::{GroupRule, Rule};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn profile() -> FieldGroup {
    let mut address = FieldGroup::new();
    address
        .insert_field("street", Field::with_rules(json!(""), vec![Rule::Required]))
        .unwrap();
    address.insert_field("city", Field::new(json!(""))).unwrap();

    let mut aliases = FieldArray::new();
    aliases.push_field(Field::new(json!("")));

    let mut form = FieldGroup::new();
    form.insert_field(
        "firstName",
        Field::with_rules(json!(""), vec![Rule::Required, Rule::MinLength(2)]),
    )
    .unwrap();
    form.insert_field("lastName", Field::new(json!(""))).unwrap();
    form.insert_group("address", address).unwrap();
    form.insert_array("aliases", aliases).unwrap();
    form
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_duplicate_names_rejected_at_every_level() {
    let mut form = profile();
    assert_eq!(
        form.insert_field("firstName", Field::new(json!(""))),
        Err(FormError::DuplicateField("firstName".into()))
    );

    let address = form.child_mut("address").unwrap();
    if let FieldNode::Group(address) = address {
        assert_eq!(
            address.insert_field("city", Field::new(json!(""))),
            Err(FormError::DuplicateField("city".into()))
        );
    } else {
        panic!("address should be a group");
    }
}

#[test]
fn test_children_enumerate_in_declared_order() {
    let form = profile();
    let names: Vec<&str> = form.children().map(|(name, _)| name).collect();
    assert_eq!(names, ["firstName", "lastName", "address", "aliases"]);
}

#[test]
fn test_assembled_value_shape() {
    let form = profile();
    assert_eq!(
        form.value(),
        json!({
            "firstName": "",
            "lastName": "",
            "address": { "street": "", "city": "" },
            "aliases": [""]
        })
    );
}

// =============================================================================
// Patch Tests
// =============================================================================

#[test]
fn test_patch_updates_named_fields_only() {
    let mut form = profile();
    form.patch_value(&json!({
        "firstName": "Grace",
        "address": { "street": "1 Main St" }
    }))
    .unwrap();

    assert_eq!(form.child("firstName").unwrap().value(), json!("Grace"));
    assert_eq!(form.child("lastName").unwrap().value(), json!(""));
    let address = form.child("address").unwrap().as_group().unwrap();
    assert_eq!(address.child("street").unwrap().value(), json!("1 Main St"));
    assert_eq!(address.child("city").unwrap().value(), json!(""));
}

#[test]
fn test_patch_revalidates_touched_fields() {
    let mut form = profile();
    assert!(!form.is_valid());

    form.patch_value(&json!({
        "firstName": "Grace",
        "address": { "street": "1 Main St" }
    }))
    .unwrap();
    assert!(form.is_valid());

    form.patch_value(&json!({ "firstName": "G" })).unwrap();
    let first_name = form.child("firstName").unwrap().as_field().unwrap();
    assert!(first_name.failures().contains_key("minlength"));
}

#[test]
fn test_patch_into_array_by_index() {
    let mut form = profile();
    form.patch_value(&json!({ "aliases": ["ace"] })).unwrap();

    let aliases = form.child("aliases").unwrap().as_array().unwrap();
    assert_eq!(aliases.value(), json!(["ace"]));
}

// =============================================================================
// Strict Set Tests
// =============================================================================

#[test]
fn test_set_value_requires_complete_document() {
    let mut group = FieldGroup::new();
    group.insert_field("a", Field::new(json!(1))).unwrap();
    group.insert_field("b", Field::new(json!(2))).unwrap();

    assert_eq!(
        group.set_value(&json!({ "a": 10 })),
        Err(FormError::MissingField("b".into()))
    );
    assert_eq!(
        group.set_value(&json!({ "a": 10, "b": 20, "c": 30 })),
        Err(FormError::UnknownField("c".into()))
    );

    group.set_value(&json!({ "a": 10, "b": 20 })).unwrap();
    assert_eq!(group.value(), json!({ "a": 10, "b": 20 }));
}

#[test]
fn test_set_value_recurses_strictly() {
    let mut inner = FieldGroup::new();
    inner.insert_field("x", Field::new(json!(0))).unwrap();

    let mut outer = FieldGroup::new();
    outer.insert_group("inner", inner).unwrap();

    assert_eq!(
        outer.set_value(&json!({ "inner": {} })),
        Err(FormError::MissingField("x".into()))
    );
}

// =============================================================================
// Dynamic Array Tests
// =============================================================================

#[test]
fn test_push_grows_the_alias_list() {
    let mut form = profile();
    if let Some(FieldNode::Array(aliases)) = form.child_mut("aliases") {
        aliases.push_field(Field::new(json!("ace")));
        aliases.push_field(Field::new(json!("deuce")));
    } else {
        panic!("aliases should be an array");
    }

    let aliases = form.child("aliases").unwrap().as_array().unwrap();
    assert_eq!(aliases.len(), 3);
    assert_eq!(aliases.value(), json!(["", "ace", "deuce"]));
}

#[test]
fn test_array_rules_track_growth() {
    let mut aliases = FieldArray::with_rules(vec![Rule::MinLength(1), Rule::MaxLength(2)]);
    assert!(aliases.failures().is_empty()); // empty list skips minlength

    aliases.push_field(Field::new(json!("a")));
    aliases.push_field(Field::new(json!("b")));
    assert!(aliases.is_valid());

    aliases.push_field(Field::new(json!("c")));
    assert!(aliases.failures().contains_key("maxlength"));
}

// =============================================================================
// Cross-Field Rule Tests
// =============================================================================

#[test]
fn test_mismatch_clears_after_patch() {
    let mut group = FieldGroup::new();
    group.insert_field("next", Field::new(json!("one"))).unwrap();
    group.insert_field("confirm", Field::new(json!("two"))).unwrap();
    group
        .add_group_rule(GroupRule::FieldsMatch {
            first: "next".into(),
            second: "confirm".into(),
        })
        .unwrap();

    assert!(group.failures().contains_key("mismatch"));

    group.patch_value(&json!({ "confirm": "one" })).unwrap();
    assert!(group.failures().is_empty());
    assert!(group.is_valid());
}

#[test]
fn test_revalidate_after_direct_child_mutation() {
    let mut group = FieldGroup::new();
    group.insert_field("next", Field::new(json!("one"))).unwrap();
    group.insert_field("confirm", Field::new(json!("one"))).unwrap();
    group
        .add_group_rule(GroupRule::FieldsMatch {
            first: "next".into(),
            second: "confirm".into(),
        })
        .unwrap();
    assert!(group.is_valid());

    if let Some(FieldNode::Field(confirm)) = group.child_mut("confirm") {
        confirm.set_value(json!("other"));
    }
    group.revalidate();
    assert!(group.failures().contains_key("mismatch"));
}
