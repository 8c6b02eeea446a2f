//! Schema migrations, tracked in `schema_version`.

use rusqlite::{params, Connection};

use tonefit_core::errors::{StorageError, TonefitResult};

use crate::storage::to_storage_err;

/// Latest schema version.
pub const LATEST_VERSION: u32 = 1;

/// v001: append-only feedback event log.
fn v001_feedback_events(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS feedback_events (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp         TEXT NOT NULL,
            tone              TEXT NOT NULL,
            platforms         TEXT NOT NULL DEFAULT '[]',
            rating            INTEGER NOT NULL,
            ad_text           TEXT,
            rewritten_output  TEXT,
            recorded_at       TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_feedback_tone ON feedback_events(tone);
        ",
    )
}

type Migration = fn(&Connection) -> rusqlite::Result<()>;

const MIGRATIONS: [(u32, Migration); 1] = [(1, v001_feedback_events)];

/// Current schema version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> TonefitResult<u32> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the recorded version, each in its own transaction.
pub fn run_migrations(conn: &mut Connection) -> TonefitResult<u32> {
    let mut version = current_version(conn)?;
    for (target, migrate) in MIGRATIONS {
        if target <= version {
            continue;
        }
        let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
            version: target,
            reason: e.to_string(),
        };
        let tx = conn.transaction().map_err(failed)?;
        migrate(&tx).map_err(failed)?;
        tx.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![target],
        )
        .map_err(failed)?;
        tx.commit().map_err(failed)?;
        version = target;
    }
    Ok(version)
}
