use predicates::str::contains;
use std::fs;

mod common;
use common::{ADMIN_PW, init_db_with_roster, rlg, setup_test_db, temp_out};

#[test]
fn test_export_csv_writes_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_roster(&db_path);

    rlg()
        .args(["--db", &db_path, "out", "Sam"])
        .assert()
        .success();

    rlg()
        .args([
            "--db", &db_path, "export", "--file", &out, "--password", ADMIN_PW,
        ])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("export file written");
    assert!(content.starts_with("Name,Status,Time"));
    assert!(content.contains("Sam,out,"));
}

#[test]
fn test_export_csv_quotes_name_with_comma() {
    let db_path = setup_test_db("export_csv_comma");
    let out = temp_out("export_csv_comma", "csv");
    init_db_with_roster(&db_path);

    rlg()
        .args(["--db", &db_path, "out", "Lee, Sam"])
        .assert()
        .success();

    rlg()
        .args([
            "--db", &db_path, "export", "--file", &out, "--password", ADMIN_PW,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("export file written");
    assert!(content.contains("\"Lee, Sam\",out,"));
}

#[test]
fn test_export_json_round_trips_entries() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_roster(&db_path);

    rlg()
        .args(["--db", &db_path, "out", "Sam"])
        .assert()
        .success();

    rlg()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--password",
            ADMIN_PW,
        ])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out).expect("export file written");
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(&content).expect("valid JSON export");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Sam");
    assert_eq!(entries[0]["status"], "out");
}

#[test]
fn test_export_requires_password() {
    let db_path = setup_test_db("export_auth");
    let out = temp_out("export_auth", "csv");
    init_db_with_roster(&db_path);

    rlg()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Admin password"));

    assert!(!std::path::Path::new(&out).exists());
}
