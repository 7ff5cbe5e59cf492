//! Pet domain model.
//!
//! # Responsibility
//! - Define the pet record shape shared by store, service and editor.
//! - Own the canonical gender encoding and the record address format.
//!
//! # Invariants
//! - Every stored record is identified by a store-assigned `PetId`.
//! - Gender is always one of three values, persisted as 0, 1 or 2.

pub mod pet;
pub mod uri;
