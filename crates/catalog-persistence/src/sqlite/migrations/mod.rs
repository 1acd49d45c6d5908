//! SQLite schema migrations
//!
//! Versions are strictly increasing; the applied version is mirrored to
//! `PRAGMA user_version`.

use rusqlite::Connection;

use crate::error::{PersistenceError, PersistenceResult};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_categories.sql"),
}];

/// Latest schema version known to this binary
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Apply every pending migration in one transaction
pub fn apply_migrations(conn: &mut Connection) -> PersistenceResult<()> {
    let current = current_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(PersistenceError::Migration(format!(
            "database schema version {current} is newer than supported version {latest}"
        )));
    }
    if current == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
        tracing::info!(version = migration.version, "Applied schema migration");
    }
    tx.commit()?;

    Ok(())
}

pub fn current_version(conn: &Connection) -> PersistenceResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?)
}
