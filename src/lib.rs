//! formtree - a strict, deterministic form-field model
//!
//! A form is a tree of named nodes: leaf fields, nested groups, and dynamic
//! arrays. Each node carries a failure mapping (failure kind -> detail
//! payload) that is empty exactly while the node passes validation.
//! [`validation::collect`] walks a group depth-first and returns every active
//! failure in its subtree as one flat, ordered list.

pub mod cli;
pub mod form;
pub mod observability;
pub mod validation;
