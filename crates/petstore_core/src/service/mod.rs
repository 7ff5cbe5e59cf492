//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep editor/CLI layers decoupled from storage details.

pub mod pet_service;
