//! SQLite event log. One row per feedback entry; rows are never updated.

pub mod migrations;

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, Row};

use tonefit_core::errors::TonefitResult;
use tonefit_core::models::FeedbackEntry;
use tonefit_core::traits::IFeedbackStore;
use tonefit_observability::events;

use super::{poisoned, to_storage_err};

/// Append-only feedback log on a single mutex-guarded connection.
pub struct SqliteFeedbackStore {
    conn: Mutex<Connection>,
}

impl SqliteFeedbackStore {
    /// Open (or create) a database file and bring its schema up to date.
    pub fn open(path: &Path) -> TonefitResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA busy_timeout = 5000;
            ",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> TonefitResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    fn initialize(mut conn: Connection) -> TonefitResult<Self> {
        migrations::run_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the connection and run a closure with it.
    fn with_conn<F, T>(&self, f: F) -> TonefitResult<T>
    where
        F: FnOnce(&mut Connection) -> TonefitResult<T>,
    {
        let mut guard = self.conn.lock().map_err(|_| poisoned("sqlite store"))?;
        f(&mut guard)
    }

    pub fn schema_version(&self) -> TonefitResult<u32> {
        self.with_conn(|conn| migrations::current_version(conn))
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<(FeedbackEntry, String)> {
    let platforms: String = row.get(2)?;
    let entry = FeedbackEntry {
        timestamp: row.get(0)?,
        tone: row.get(1)?,
        platforms: Vec::new(),
        rating: row.get(3)?,
        ad_text: row.get(4)?,
        rewritten_output: row.get(5)?,
    };
    Ok((entry, platforms))
}

impl IFeedbackStore for SqliteFeedbackStore {
    fn read_all(&self) -> TonefitResult<Vec<FeedbackEntry>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT timestamp, tone, platforms, rating, ad_text, rewritten_output
                     FROM feedback_events ORDER BY id",
                )
                .map_err(|e| to_storage_err(e.to_string()))?;
            let rows = stmt
                .query_map([], entry_from_row)
                .map_err(|e| to_storage_err(e.to_string()))?;

            let mut entries = Vec::new();
            for row in rows {
                let (mut entry, platforms) = row.map_err(|e| to_storage_err(e.to_string()))?;
                entry.platforms = serde_json::from_str(&platforms)?;
                entries.push(entry);
            }
            Ok(entries)
        })
    }

    fn append(&self, entry: &FeedbackEntry) -> TonefitResult<()> {
        let platforms = serde_json::to_string(&entry.platforms)?;
        self.with_conn(|conn| {
            let tx = conn
                .transaction()
                .map_err(|e| to_storage_err(e.to_string()))?;
            tx.execute(
                "INSERT INTO feedback_events
                    (timestamp, tone, platforms, rating, ad_text, rewritten_output)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    entry.timestamp,
                    entry.tone,
                    platforms,
                    entry.rating,
                    entry.ad_text,
                    entry.rewritten_output,
                ],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            tx.commit().map_err(|e| to_storage_err(e.to_string()))
        })?;
        events::feedback_recorded(self.name(), &entry.tone, &entry.platforms, entry.rating);
        Ok(())
    }

    fn len(&self) -> TonefitResult<usize> {
        self.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM feedback_events", [], |row| row.get(0))
                .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(usize::try_from(count).unwrap_or_default())
        })
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}
