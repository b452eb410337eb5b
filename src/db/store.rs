//! The record store: a durable key/value table keyed by the natural key
//! (day token, direction, device IP), one JSON-serialized record per key.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::record::ClockRecord;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Keys this system owns. `list_all` enumerates by this prefix so
/// unrelated rows sharing the table are never picked up.
pub const KEY_PREFIX: &str = "pointage-QR-";

pub struct RecordStore<'a> {
    conn: &'a Connection,
}

impl<'a> RecordStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Store `record` under `key` unless the key is already taken.
    /// Never overwrites: the first record for a natural key wins.
    pub fn insert(&self, key: &str, record: &ClockRecord) -> AppResult<()> {
        let value = serde_json::to_string(record)
            .map_err(|e| AppError::Other(format!("record serialization: {}", e)))?;

        self.conn.execute(
            "INSERT OR IGNORE INTO records (key, value, created_at)
             VALUES (?1, ?2, ?3)",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Record stored under `key`, if any.
    pub fn get(&self, key: &str) -> AppResult<Option<ClockRecord>> {
        let value: Option<String> = self
            .conn
            .query_row("SELECT value FROM records WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match value {
            None => Ok(None),
            Some(v) => {
                let record = serde_json::from_str(&v).map_err(|e| AppError::StorageRead {
                    key: key.to_string(),
                    reason: e.to_string(),
                })?;
                Ok(Some(record))
            }
        }
    }

    /// All punch records in the store, in storage order.
    ///
    /// Rows whose value no longer parses are skipped and reported to the
    /// internal log; a corrupt entry must never take the read path down.
    pub fn list_all(&self) -> AppResult<Vec<ClockRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT key, value FROM records
             WHERE key LIKE ?1",
        )?;

        let pattern = format!("{}%", KEY_PREFIX);
        let rows = stmt.query_map([pattern], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (key, value) = row?;
            match serde_json::from_str::<ClockRecord>(&value) {
                Ok(record) => out.push(record),
                Err(e) => {
                    let _ = ttlog(self.conn, "storage_read", &key, &e.to_string());
                }
            }
        }
        Ok(out)
    }

    /// Number of skippable (corrupt) rows currently under the prefix.
    /// Used by `db --check`.
    pub fn corrupt_count(&self) -> AppResult<usize> {
        let mut stmt = self.conn.prepare(
            "SELECT value FROM records
             WHERE key LIKE ?1",
        )?;
        let pattern = format!("{}%", KEY_PREFIX);
        let rows = stmt.query_map([pattern], |row| row.get::<_, String>(0))?;

        let mut corrupt = 0;
        for row in rows {
            if serde_json::from_str::<ClockRecord>(&row?).is_err() {
                corrupt += 1;
            }
        }
        Ok(corrupt)
    }
}
