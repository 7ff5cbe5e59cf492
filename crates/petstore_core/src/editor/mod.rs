//! Editor boundary between user input and the pet store.
//!
//! # Responsibility
//! - Hold caller-owned pending edits and validate them before any write.
//! - Load a target record into the form and reset the form on teardown.
//! - Turn store outcomes into user-facing messages.
//!
//! # Invariants
//! - Invalid input never reaches the store.
//! - No store error escapes a session as a panic.

pub mod form;
pub mod session;
