//! One editing session over a single pet record.
//!
//! # Responsibility
//! - Acquire the target record when the session opens.
//! - Submit pending edits atomically and report the outcome.
//! - Reset the form when the target is absent or the session tears down.
//!
//! # Invariants
//! - The session finishes only after a successful save or navigation.
//! - A failed save leaves pending edits untouched.

use crate::config::EditorStrings;
use crate::editor::form::{PetForm, ValidationError};
use crate::model::pet::PetRecord;
use crate::model::uri::PetUri;
use crate::repo::pet_repo::{PetRepository, RepoError, RepoResult};
use crate::service::pet_service::PetService;
use log::{info, warn};

/// Whether the session creates a new pet or shows an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Insert,
    Edit(PetUri),
}

/// Result of loading the session target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    NoTarget,
    Loaded(PetRecord),
    Missing,
    Failed(String),
}

/// Menu actions the editor screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Save,
    Delete,
    NavigateUp,
}

/// Outcome of a save attempt.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved { uri: PetUri, message: String },
    Rejected { error: ValidationError, message: String },
    Failed { error: RepoError, message: String },
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    /// Short notification text for the user.
    pub fn message(&self) -> &str {
        match self {
            Self::Saved { message, .. }
            | Self::Rejected { message, .. }
            | Self::Failed { message, .. } => message,
        }
    }
}

/// Outcome of a dispatched menu action.
#[derive(Debug)]
pub enum EditorOutcome {
    Save(SaveOutcome),
    Delete(RepoResult<()>),
    NavigateUp,
}

impl EditorOutcome {
    /// Whether the screen should close after this action.
    pub fn closes_editor(&self) -> bool {
        match self {
            Self::Save(outcome) => outcome.is_saved(),
            Self::Delete(_) => false,
            Self::NavigateUp => true,
        }
    }
}

/// Editing session bound to a service and locale strings.
pub struct EditorSession<'a, R: PetRepository> {
    service: &'a PetService<R>,
    strings: &'a EditorStrings,
    mode: EditorMode,
    form: PetForm,
    load_state: LoadState,
    finished: bool,
}

impl<'a, R: PetRepository> EditorSession<'a, R> {
    /// Opens a session, loading `target` into the form when given.
    ///
    /// A missing or unreadable target leaves the form at its defaults.
    pub fn open(
        service: &'a PetService<R>,
        strings: &'a EditorStrings,
        target: Option<PetUri>,
    ) -> Self {
        let mut session = Self {
            service,
            strings,
            mode: target.map_or(EditorMode::Insert, EditorMode::Edit),
            form: PetForm::defaults(strings),
            load_state: LoadState::NoTarget,
            finished: false,
        };
        if let Some(uri) = target {
            session.load(uri);
        }
        session
    }

    fn load(&mut self, uri: PetUri) {
        match self.service.fetch_pet(uri.id()) {
            Ok(record) => {
                self.form = PetForm::from_record(&record, self.strings);
                self.load_state = LoadState::Loaded(record);
            }
            Err(RepoError::NotFound(_)) => {
                self.reset();
                self.load_state = LoadState::Missing;
            }
            Err(err) => {
                warn!(
                    "event=editor_load module=editor status=error uri={} error={}",
                    uri, err
                );
                self.reset();
                self.load_state = LoadState::Failed(err.to_string());
            }
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Screen title for the current mode.
    pub fn title(&self) -> &str {
        match self.mode {
            EditorMode::Insert => &self.strings.title_new_pet,
            EditorMode::Edit(_) => &self.strings.title_edit_pet,
        }
    }

    pub fn form(&self) -> &PetForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PetForm {
        &mut self.form
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Validates pending edits and inserts them as a new record.
    pub fn save(&mut self) -> SaveOutcome {
        let pet = match self.form.validate(self.strings) {
            Ok(pet) => pet,
            Err(error) => {
                info!(
                    "event=editor_save module=editor status=rejected reason={:?}",
                    error
                );
                return SaveOutcome::Rejected {
                    error,
                    message: self.strings.error_saving.clone(),
                };
            }
        };

        match self.service.create_pet(&pet) {
            Ok(id) => {
                self.finished = true;
                SaveOutcome::Saved {
                    uri: PetUri::for_id(id),
                    message: self.strings.pet_saved.clone(),
                }
            }
            Err(error) => SaveOutcome::Failed {
                error,
                message: self.strings.error_saving.clone(),
            },
        }
    }

    /// Delete action. Stored records are never removed.
    pub fn delete(&self) -> RepoResult<()> {
        match self.mode {
            EditorMode::Edit(uri) => self.service.delete_pet(uri.id()),
            EditorMode::Insert => Ok(()),
        }
    }

    /// Clears every field back to its default.
    pub fn reset(&mut self) {
        self.form = PetForm::defaults(self.strings);
    }

    /// Dispatches one menu action.
    pub fn handle(&mut self, action: EditorAction) -> EditorOutcome {
        match action {
            EditorAction::Save => EditorOutcome::Save(self.save()),
            EditorAction::Delete => EditorOutcome::Delete(self.delete()),
            EditorAction::NavigateUp => {
                self.finished = true;
                EditorOutcome::NavigateUp
            }
        }
    }

    /// Ends the session, resetting the form to defaults.
    pub fn close(mut self) -> PetForm {
        self.reset();
        self.form
    }
}
