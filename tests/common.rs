#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ptg() -> Command {
    cargo_bin_cmd!("pointage")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pointage.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema and store a few punches through the library,
/// so record-reading commands can be tested without network access.
pub fn init_db_with_data(db_path: &str) {
    ptg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(db_path).expect("open db");
    pointage::db::initialize::init_db(&conn).expect("init db");

    let store = pointage::db::store::RecordStore::new(&conn);
    for (ip, direction) in [
        ("203.0.113.5", pointage::models::direction::Direction::Entree),
        ("203.0.113.5", pointage::models::direction::Direction::Sortie),
        ("198.51.100.7", pointage::models::direction::Direction::Entree),
    ] {
        let rec = pointage::models::record::ClockRecord::new(
            ip.to_string(),
            None,
            pointage::models::record::ADDRESS_UNAVAILABLE.to_string(),
            direction,
            pointage::models::day_token::DayToken::for_date(
                chrono::NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(),
            ),
        );
        store.insert(&rec.storage_key(), &rec).expect("insert punch");
    }
}
