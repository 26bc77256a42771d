//! Form model subsystem
//!
//! # Design Principles
//!
//! - Closed node variant: a child is a `Field`, `FieldGroup`, or
//!   `FieldArray`, dispatched by discriminant, never by runtime type probing
//! - Names are unique within one parent; insertion order is display order
//! - Exclusive ownership: a node has exactly one parent, so the tree is
//!   acyclic by construction
//! - A node's failure mapping is empty exactly when it currently validates
//! - Setting a value re-runs that node's rules synchronously; there is no
//!   deferred or observable-driven validation

mod errors;
mod types;

pub use errors::{FormError, FormResult};
pub use types::{Field, FieldArray, FieldGroup, FieldNode};
