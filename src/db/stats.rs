use crate::db::pool::DbPool;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print database facts for `db --info`: file, size, record counts,
/// punch time range.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    println!(
        "{}• Stored punches:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM records ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM records ORDER BY created_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Punch range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}

/// `db --check`: SQLite integrity plus a scan for unparseable record rows.
pub fn check_db(pool: &mut DbPool) -> AppResult<()> {
    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if integrity == "ok" {
        println!("{}• Integrity:{} {}ok{}", CYAN, RESET, GREEN, RESET);
    } else {
        println!("{}• Integrity:{} {}{}{}", CYAN, RESET, RED, integrity, RESET);
    }

    let store = RecordStore::new(&pool.conn);
    let corrupt = store.corrupt_count()?;
    if corrupt == 0 {
        println!("{}• Record values:{} {}all parse{}", CYAN, RESET, GREEN, RESET);
    } else {
        println!(
            "{}• Record values:{} {}{} corrupt (skipped on read){}",
            CYAN, RESET, RED, corrupt, RESET
        );
    }

    Ok(())
}
