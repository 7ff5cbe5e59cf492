//! Core data layer for the pet editor.
//! This crate is the single source of truth for pet record invariants.

pub mod config;
pub mod db;
pub mod editor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, EditorConfig, EditorStrings};
pub use editor::form::{PetForm, ValidationError};
pub use editor::session::{
    EditorAction, EditorMode, EditorOutcome, EditorSession, LoadState, SaveOutcome,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::pet::{Gender, NewPet, PetId, PetRecord};
pub use model::uri::{PetUri, UriError, PETS_CONTENT_URI};
pub use repo::pet_repo::{PetRepository, RepoError, RepoResult, SqlitePetRepository};
pub use service::pet_service::PetService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
