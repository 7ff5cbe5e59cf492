//! SQLite storage bootstrap for the pet store.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Create the `pets` schema before any record is read or written.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Callers never see a connection whose schema is behind.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Logical table holding pet records.
pub const PETS_TABLE: &str = "pets";

/// Column names of the `pets` table, the wire contract with persistence.
pub mod columns {
    pub const ID: &str = "_id";
    pub const NAME: &str = "name";
    pub const BREED: &str = "breed";
    pub const GENDER: &str = "gender";
    pub const WEIGHT: &str = "weight";

    /// Every column a usable `pets` table must carry.
    pub const ALL: &[&str] = &[ID, NAME, BREED, GENDER, WEIGHT];
}

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "pet database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
