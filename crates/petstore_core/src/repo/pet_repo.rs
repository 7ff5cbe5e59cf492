//! Pet repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert and read-one over the `pets` table.
//! - Map between `PetRecord` fields and storage columns.
//!
//! # Invariants
//! - Inserts never coerce field values; constraint failures surface as `Db`.
//! - Read paths reject persisted rows that break the gender encoding.
//! - `delete_pet` never touches stored rows.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::{columns, DbError, PETS_TABLE};
use crate::model::pet::{Gender, NewPet, PetId, PetRecord};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PET_SELECT_SQL: &str = "SELECT
    _id,
    name,
    breed,
    gender,
    weight
FROM pets";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for pet persistence and lookup.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying read or write failed.
    Db(DbError),
    NotFound(PetId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// Returns whether this error came from the storage backend.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Db(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "pet not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted pet data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for pet records.
pub trait PetRepository {
    fn insert_pet(&self, pet: &NewPet) -> RepoResult<PetId>;
    fn fetch_pet(&self, id: PetId) -> RepoResult<PetRecord>;
    /// Declared for the editor's delete action. Performs no operation.
    fn delete_pet(&self, id: PetId) -> RepoResult<()>;
}

impl<R: PetRepository + ?Sized> PetRepository for &R {
    fn insert_pet(&self, pet: &NewPet) -> RepoResult<PetId> {
        (**self).insert_pet(pet)
    }

    fn fetch_pet(&self, id: PetId) -> RepoResult<PetRecord> {
        (**self).fetch_pet(id)
    }

    fn delete_pet(&self, id: PetId) -> RepoResult<()> {
        (**self).delete_pet(id)
    }
}

/// SQLite-backed pet repository.
pub struct SqlitePetRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePetRepository<'conn> {
    /// Wraps a connection after checking its schema version and `pets` shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let present = table_columns(conn, PETS_TABLE)?;
        if present.is_empty() {
            return Err(RepoError::MissingRequiredTable(PETS_TABLE));
        }
        if let Some(column) = columns::ALL
            .iter()
            .copied()
            .find(|column| !present.iter().any(|name| name == column))
        {
            return Err(RepoError::MissingRequiredColumn {
                table: PETS_TABLE,
                column,
            });
        }

        Ok(Self { conn })
    }
}

impl PetRepository for SqlitePetRepository<'_> {
    fn insert_pet(&self, pet: &NewPet) -> RepoResult<PetId> {
        self.conn.execute(
            "INSERT INTO pets (
                name,
                breed,
                gender,
                weight
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                pet.name.as_str(),
                pet.breed.as_str(),
                pet.gender.to_db(),
                pet.weight,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn fetch_pet(&self, id: PetId) -> RepoResult<PetRecord> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PET_SELECT_SQL} WHERE _id = ?1;"))?;
        let record = stmt
            .query_row([id], |row| Ok(parse_pet_row(row)))
            .optional()?;

        match record {
            Some(parsed) => parsed,
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn delete_pet(&self, _id: PetId) -> RepoResult<()> {
        Ok(())
    }
}

fn parse_pet_row(row: &Row<'_>) -> RepoResult<PetRecord> {
    let gender_value: i64 = row.get(columns::GENDER)?;
    let gender = Gender::from_db(gender_value).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid gender `{gender_value}` in pets.gender"))
    })?;

    Ok(PetRecord {
        id: row.get(columns::ID)?,
        name: row.get(columns::NAME)?,
        breed: row
            .get::<_, Option<String>>(columns::BREED)?
            .unwrap_or_default(),
        gender,
        weight: row.get(columns::WEIGHT)?,
    })
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let names = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}
