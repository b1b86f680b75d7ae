#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn atl() -> Command {
    cargo_bin_cmd!("attendlog")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB and register one subject (gets id 1)
pub fn init_db_with_subject(db_path: &str, name: &str) {
    atl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    atl()
        .args(["--db", db_path, "subject", "add", name])
        .assert()
        .success();
}

/// Record a full worked day (09:00-18:00 with a one hour break at 13:00,
/// 8h net) for subject 1 on the given date
pub fn add_standard_day(db_path: &str, date: &str) {
    for (action, time) in [
        ("in", "09:00"),
        ("break-start", "13:00"),
        ("break-end", "14:00"),
        ("out", "18:00"),
    ] {
        atl()
            .args([
                "--db",
                db_path,
                "clock",
                action,
                "--subject",
                "1",
                "--at",
                &format!("{} {}", date, time),
            ])
            .assert()
            .success();
    }
}
