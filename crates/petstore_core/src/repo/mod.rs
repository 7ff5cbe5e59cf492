//! Repository layer for pet persistence.
//!
//! # Responsibility
//! - Define the record store contract used by the service layer.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Repositories only operate on connections with the current schema.

pub mod pet_repo;
