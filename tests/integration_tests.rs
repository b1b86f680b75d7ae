use predicates::str::contains;

mod common;
use common::{add_standard_day, atl, init_db_with_subject, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    atl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
}

#[test]
fn test_subject_add_and_list() {
    let db_path = setup_test_db("subject_add_list");

    atl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    atl()
        .args([
            "--db", &db_path, "subject", "add", "Alice", "--centers", "HQ,Plant",
        ])
        .assert()
        .success()
        .stdout(contains("id 1"));

    atl()
        .args(["--db", &db_path, "subject", "list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("HQ, Plant"));
}

#[test]
fn test_deactivated_subject_rejects_clock() {
    let db_path = setup_test_db("deactivated_clock");
    init_db_with_subject(&db_path, "Bob");

    atl()
        .args(["--db", &db_path, "subject", "deactivate", "1"])
        .assert()
        .success();

    atl()
        .args([
            "--db",
            &db_path,
            "clock",
            "in",
            "--subject",
            "1",
            "--at",
            "2025-06-10 09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("deactivated"));
}

#[test]
fn test_clock_flow_and_report_total() {
    let db_path = setup_test_db("clock_report");
    init_db_with_subject(&db_path, "Alice");
    add_standard_day(&db_path, "2025-06-10");

    // 09:00-13:00 plus 14:00-18:00 = 8h
    atl()
        .args([
            "--db",
            &db_path,
            "report",
            "--subject",
            "1",
            "--period",
            "2025-06-10",
            "--as-of",
            "2025-06-11 12:00",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"total_minutes\": 480"));
}

#[test]
fn test_report_open_session_extends_to_as_of() {
    let db_path = setup_test_db("report_open_session");
    init_db_with_subject(&db_path, "Alice");

    atl()
        .args([
            "--db",
            &db_path,
            "clock",
            "in",
            "--subject",
            "1",
            "--at",
            "2025-06-10 09:00",
        ])
        .assert()
        .success();

    // Same day, still on the clock: counted up to as-of.
    atl()
        .args([
            "--db",
            &db_path,
            "report",
            "--subject",
            "1",
            "--period",
            "2025-06-10",
            "--as-of",
            "2025-06-10 11:00",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"total_minutes\": 120"));

    // Next day: the unterminated session contributes nothing.
    atl()
        .args([
            "--db",
            &db_path,
            "report",
            "--subject",
            "1",
            "--period",
            "2025-06-10",
            "--as-of",
            "2025-06-11 11:00",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"total_minutes\": 0"));
}

#[test]
fn test_break_requires_clock_in() {
    let db_path = setup_test_db("guard_break");
    init_db_with_subject(&db_path, "Alice");

    atl()
        .args([
            "--db",
            &db_path,
            "clock",
            "break-start",
            "--subject",
            "1",
            "--at",
            "2025-06-10 10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("record a clock-in first"));
}

#[test]
fn test_report_spanning_days_sums_buckets() {
    let db_path = setup_test_db("report_multi_day");
    init_db_with_subject(&db_path, "Alice");
    add_standard_day(&db_path, "2025-06-10");
    add_standard_day(&db_path, "2025-06-11");

    atl()
        .args([
            "--db",
            &db_path,
            "report",
            "--subject",
            "1",
            "--period",
            "2025-06",
            "--as-of",
            "2025-07-01 00:00",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"total_minutes\": 960"))
        .stdout(contains("2025-06-10"))
        .stdout(contains("2025-06-11"));
}

#[test]
fn test_status_board_lists_subjects() {
    let db_path = setup_test_db("status_board");
    init_db_with_subject(&db_path, "Alice");

    atl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Off"));
}

#[test]
fn test_audit_log_records_operations() {
    let db_path = setup_test_db("audit_log");
    init_db_with_subject(&db_path, "Alice");

    atl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("[subject-add]"));
}

#[test]
fn test_db_check_reports_ok() {
    let db_path = setup_test_db("db_check");

    atl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    atl()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check: ok"));
}
