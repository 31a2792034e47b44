//! Integration tests for `pomade call` - the raw envelope surface

mod common;

use std::process::Command;

use tempfile::tempdir;

#[test]
fn call_get_salons_prints_data_envelope() {
    let dir = tempdir().unwrap();
    let db = common::seeded_db(&dir);

    let output = Command::new(common::bin())
        .current_dir(dir.path())
        .env("POMADE_DB_PATH", &db)
        .args(["call", "getSalons"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "call failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["data"].as_array().unwrap().len(), 3);
    assert!(envelope.get("errors").is_none());
}

#[test]
fn call_with_args_filters() {
    let dir = tempdir().unwrap();
    let db = common::seeded_db(&dir);

    let output = Command::new(common::bin())
        .current_dir(dir.path())
        .env("POMADE_DB_PATH", &db)
        .args(["call", "getStaff", r#"{"salonId":"salon-3"}"#])
        .output()
        .unwrap();

    assert!(output.status.success());
    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let staff = envelope["data"].as_array().unwrap();
    assert_eq!(staff.len(), 2);
    for member in staff {
        assert_eq!(member["salonId"], "salon-3");
    }
}

#[test]
fn call_unknown_operation_prints_error_envelope_and_exits_zero() {
    let dir = tempdir().unwrap();
    let db = common::seeded_db(&dir);

    let output = Command::new(common::bin())
        .current_dir(dir.path())
        .env("POMADE_DB_PATH", &db)
        .args(["call", "frobnicate"])
        .output()
        .unwrap();

    // The envelope carries the error; the CLI itself succeeded.
    assert!(output.status.success());
    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        envelope["errors"][0]["message"],
        "unknown operation 'frobnicate'"
    );
}

#[test]
fn call_rejects_malformed_args_json() {
    let dir = tempdir().unwrap();
    let db = common::seeded_db(&dir);

    let output = Command::new(common::bin())
        .current_dir(dir.path())
        .env("POMADE_DB_PATH", &db)
        .args(["call", "getStaff", "{not json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("arguments must be a JSON object"),
        "got: {}",
        stderr
    );
}
