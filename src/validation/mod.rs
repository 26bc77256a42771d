//! Validation subsystem
//!
//! - rules: per-field rules and group-level cross-field rules
//! - engine: applies rules to current values, producing failure mappings
//! - collector: flattens a group subtree's active failures into one ordered
//!   list
//!
//! # Design Principles
//!
//! - Validation runs synchronously at value-change time; reads never trigger
//!   validation
//! - Failure kinds are stable string identifiers; details are arbitrary
//!   JSON payloads
//! - Collection is a pure read over the tree and cannot fail

mod collector;
pub mod engine;
mod rules;

pub use collector::{collect, collect_qualified, ValidationFailure};
pub use rules::{GroupRule, Rule};
