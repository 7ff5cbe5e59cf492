//! Versioned steps that build the `pets` schema.
//!
//! # Invariants
//! - Step versions are strictly increasing.
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - A database whose pets schema is newer than this binary is never touched.

use crate::db::{DbError, DbResult, PETS_TABLE};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct SchemaStep {
    version: u32,
    summary: &'static str,
    sql: &'static str,
}

const PETS_SCHEMA: &[SchemaStep] = &[SchemaStep {
    version: 1,
    summary: "create_pets",
    sql: include_str!("0001_pets.sql"),
}];

/// Returns the pets schema version this binary writes.
pub fn latest_version() -> u32 {
    PETS_SCHEMA.last().map_or(0, |step| step.version)
}

/// Brings the pets schema on `conn` up to [`latest_version`].
///
/// Pending steps run in one transaction, so a failed step leaves the
/// database at its previous version.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from_version = current_user_version(conn)?;
    let latest = latest_version();

    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    let pending: Vec<&SchemaStep> = PETS_SCHEMA
        .iter()
        .filter(|step| step.version > from_version)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in &pending {
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
    }
    tx.commit()?;

    let applied = pending
        .iter()
        .map(|step| step.summary)
        .collect::<Vec<_>>()
        .join(",");
    info!(
        "event=db_migrate module=db status=ok table={} from_version={} to_version={} steps={}",
        PETS_TABLE, from_version, latest, applied
    );
    Ok(())
}

/// Reads `PRAGMA user_version` from the connection.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?;
    Ok(version)
}
