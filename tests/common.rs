#![allow(dead_code)]
use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN_PW: &str = "admin123";

pub fn rlg() -> Command {
    Command::cargo_bin("roomlog").expect("binary built")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roomlog.sqlite", name));
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

/// Initialize the DB and load a two-name roster, useful for many tests
pub fn init_db_with_roster(db_path: &str) {
    rlg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rlg()
        .args([
            "--db",
            db_path,
            "roster",
            "--names",
            "Sam\nLee",
            "--password",
            ADMIN_PW,
        ])
        .assert()
        .success();
}
