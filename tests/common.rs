#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub fn tr() -> Command {
    cargo_bin_cmd!("trashreporter")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trashreporter.sqlite", name));
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

/// Write a bundled endpoint file for the test and return its path
pub fn write_env_file(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trashreporter.env", name));
    let p = path.to_string_lossy().to_string();
    let mut f = fs::File::create(&path).expect("create env file");
    f.write_all(content.as_bytes()).expect("write env file");
    p
}

/// Path to an endpoint file that is guaranteed not to exist
pub fn missing_env_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trashreporter_missing.env", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store schema via the CLI (uses --test init, no config
/// file is written)
pub fn init_store(db_path: &str) {
    tr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Seed the local journal directly via the library DB API
pub fn seed_journal(db_path: &str, rows: &[(f64, f64, &str, &str)]) {
    let conn = rusqlite::Connection::open(db_path).expect("open store");
    trashreporter::db::initialize::init_db(&conn).expect("init store");
    for (lat, lon, status, comment) in rows {
        let coords = trashreporter::models::report::Coordinates::new(*lat, *lon);
        let report = trashreporter::models::report::StoredReport::from_submission(
            &coords, status, comment, false,
        );
        trashreporter::db::queries::insert_report(&conn, &report).expect("insert report");
    }
}

/// Arm the submission cooldown by writing a future expiry directly
pub fn arm_cooldown(db_path: &str, millis_from_now: i64) {
    let conn = rusqlite::Connection::open(db_path).expect("open store");
    trashreporter::db::initialize::init_db(&conn).expect("init store");
    let end = trashreporter::utils::time::now_millis() + millis_from_now;
    trashreporter::db::prefs::set_millis(
        &conn,
        trashreporter::db::prefs::NS_COUNTDOWN,
        trashreporter::core::cooldown::KEY_END_TIME,
        end,
    )
    .expect("arm cooldown");
}
