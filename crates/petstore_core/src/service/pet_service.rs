//! Pet use-case service.
//!
//! # Responsibility
//! - Provide create/fetch/delete entry points for editor callers.
//! - Emit metadata-only diagnostic events for every store call.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Log events never carry user-entered text (name, breed).

use crate::model::pet::{NewPet, PetId, PetRecord};
use crate::repo::pet_repo::{PetRepository, RepoError, RepoResult};
use log::{debug, error, info, warn};
use std::time::Instant;

/// Use-case service wrapper for pet records.
pub struct PetService<R: PetRepository> {
    repo: R,
}

impl<R: PetRepository> PetService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists one pet and returns its store-assigned id.
    ///
    /// # Contract
    /// - On error no row was created; the caller reports failure.
    pub fn create_pet(&self, pet: &NewPet) -> RepoResult<PetId> {
        let started_at = Instant::now();
        match self.repo.insert_pet(pet) {
            Ok(id) => {
                info!(
                    "event=pet_insert module=service status=ok pet_id={} gender={} duration_ms={}",
                    id,
                    pet.gender.to_db(),
                    started_at.elapsed().as_millis()
                );
                Ok(id)
            }
            Err(err) => {
                error!(
                    "event=pet_insert module=service status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Loads one pet by id.
    ///
    /// Returns `RepoError::NotFound` unchanged so callers can fall back to
    /// default display values.
    pub fn fetch_pet(&self, id: PetId) -> RepoResult<PetRecord> {
        let started_at = Instant::now();
        let result = self.repo.fetch_pet(id);
        match &result {
            Ok(_) => debug!(
                "event=pet_fetch module=service status=ok pet_id={} duration_ms={}",
                id,
                started_at.elapsed().as_millis()
            ),
            Err(RepoError::NotFound(_)) => warn!(
                "event=pet_fetch module=service status=not_found pet_id={}",
                id
            ),
            Err(err) => error!(
                "event=pet_fetch module=service status=error pet_id={} error={}",
                id, err
            ),
        }
        result
    }

    /// Delete action hook. Stored rows are left untouched.
    pub fn delete_pet(&self, id: PetId) -> RepoResult<()> {
        info!(
            "event=pet_delete module=service status=skipped pet_id={}",
            id
        );
        self.repo.delete_pet(id)
    }
}
