//! Schema creation and upgrades, tracked through SQLite's `user_version`.

use rusqlite::{Connection, Result};

/// Current schema version. Bump together with a new migration step.
const SCHEMA_VERSION: i32 = 1;

fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, v: i32) -> Result<()> {
    // PRAGMA does not accept bound parameters.
    conn.execute_batch(&format!("PRAGMA user_version = {}", v))?;
    Ok(())
}

/// Ensure the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `records` key/value table.
///
/// `key` carries the natural key (`pointage-<token>-<direction>-<ip>`),
/// `value` the JSON-serialized record. The PRIMARY KEY makes a duplicate
/// punch a no-op at the SQL level as well.
fn ensure_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Bring the database up to the current schema.
/// Idempotent: running it on an up-to-date database changes nothing.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_records_table(conn)?;

    if schema_version(conn)? < SCHEMA_VERSION {
        set_schema_version(conn, SCHEMA_VERSION)?;
    }

    Ok(())
}
