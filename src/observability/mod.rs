//! Observability subsystem
//!
//! Structured one-line JSON logging for instrumentation around the form
//! model.
//!
//! # Principles
//!
//! 1. Logging is read-only: it never alters form state or validation
//!    results
//! 2. Synchronous, unbuffered output; no background threads
//! 3. Deterministic lines: field order is the caller's argument order

mod logger;

pub use logger::{Logger, Severity};
