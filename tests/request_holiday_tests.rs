use predicates::str::contains;

mod common;
use common::{atl, init_db_with_subject, setup_test_db};

#[test]
fn test_request_lifecycle() {
    let db_path = setup_test_db("request_lifecycle");
    init_db_with_subject(&db_path, "Alice");

    atl()
        .args([
            "--db",
            &db_path,
            "request",
            "add",
            "--subject",
            "1",
            "--from",
            "2025-08-01",
            "--to",
            "2025-08-05",
            "--kind",
            "vacation",
            "--comment",
            "summer",
        ])
        .assert()
        .success()
        .stdout(contains("pending"));

    atl()
        .args(["--db", &db_path, "request", "list", "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("2025-08-01"))
        .stdout(contains("summer"));

    atl()
        .args(["--db", &db_path, "request", "approve", "1"])
        .assert()
        .success();

    atl()
        .args(["--db", &db_path, "request", "list", "--status", "approved"])
        .assert()
        .success()
        .stdout(contains("vacation"));

    // A decided request cannot be decided again.
    atl()
        .args(["--db", &db_path, "request", "reject", "1"])
        .assert()
        .failure()
        .stderr(contains("already decided"));
}

#[test]
fn test_request_rejects_inverted_range() {
    let db_path = setup_test_db("request_inverted");
    init_db_with_subject(&db_path, "Alice");

    atl()
        .args([
            "--db",
            &db_path,
            "request",
            "add",
            "--subject",
            "1",
            "--from",
            "2025-08-05",
            "--to",
            "2025-08-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_holiday_crud() {
    let db_path = setup_test_db("holiday_crud");

    atl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    atl()
        .args([
            "--db",
            &db_path,
            "holiday",
            "add",
            "2025-12-25",
            "Christmas",
        ])
        .assert()
        .success();

    atl()
        .args([
            "--db",
            &db_path,
            "holiday",
            "add",
            "2025-07-04",
            "Plant shutdown",
            "--center",
            "Plant",
        ])
        .assert()
        .success();

    atl()
        .args(["--db", &db_path, "holiday", "list", "--year", "2025"])
        .assert()
        .success()
        .stdout(contains("Christmas"))
        .stdout(contains("All centers"))
        .stdout(contains("Plant"));

    atl()
        .args(["--db", &db_path, "holiday", "del", "1"])
        .assert()
        .success();

    atl()
        .args(["--db", &db_path, "holiday", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}
