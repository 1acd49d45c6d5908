//! Connection bootstrap for SQLite
//!
//! Returned connections have foreign keys enabled, the `lower_unicode`
//! scalar function registered and every migration applied.

use std::path::Path;
use std::time::{Duration, Instant};

use rusqlite::{functions::FunctionFlags, Connection};
use tracing::{error, info};

use super::migrations::apply_migrations;
use crate::error::{PersistenceError, PersistenceResult};

/// Open (or create) a database file and migrate it
pub fn open_database(path: impl AsRef<Path>) -> PersistenceResult<Connection> {
    let path = path.as_ref();
    bootstrap("file", || Connection::open(path))
}

/// Open a private in-memory database and migrate it
pub fn open_in_memory() -> PersistenceResult<Connection> {
    bootstrap("memory", Connection::open_in_memory)
}

fn bootstrap(
    mode: &'static str,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> PersistenceResult<Connection> {
    let started_at = Instant::now();

    let result = open().map_err(PersistenceError::from).and_then(|mut conn| {
        configure(&mut conn)?;
        Ok(conn)
    });

    match &result {
        Ok(_) => info!(
            mode,
            duration_ms = started_at.elapsed().as_millis() as u64,
            "Opened database"
        ),
        Err(err) => error!(
            mode,
            duration_ms = started_at.elapsed().as_millis() as u64,
            error = %err,
            "Failed to open database"
        ),
    }
    result
}

/// Name of the Unicode-aware lower-casing function available in queries
pub const LOWER_UNICODE: &str = "lower_unicode";

fn configure(conn: &mut Connection) -> PersistenceResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    register_functions(conn)?;
    apply_migrations(conn)
}

/// Built-in `lower()` and `LIKE` only fold ASCII
fn register_functions(conn: &Connection) -> PersistenceResult<()> {
    conn.create_scalar_function(
        LOWER_UNICODE,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|v| v.to_lowercase()))
        },
    )?;
    Ok(())
}
