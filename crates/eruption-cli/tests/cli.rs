use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eruption").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ERUPTION_DB_PATH")
        .env_remove("ERUPTION_EXPORT_DIR")
        .env_remove("ERUPTION_PERSIST_MODE")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(dir.path().join("eruption.db"));
    cmd
}

fn submit_jane(dir: &TempDir) -> Command {
    let mut cmd = cmd(dir);
    cmd.args([
        "submit",
        "--name",
        "Jane Doe",
        "--patient-id",
        "P-42",
        "--date",
        "2024-03-01",
        "--tooth",
        "11=complete",
        "--comment",
        "ok",
    ]);
    cmd
}

#[test]
fn layout_lists_quadrants() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("layout")
        .assert()
        .success()
        .stdout(contains("Quadrant 1 (Upper Right)"))
        .stdout(contains("Quadrant 4 (Lower Right)"))
        .stdout(contains("Éruption partielle"));
}

#[test]
fn submit_prints_recap_and_writes_export() {
    let dir = TempDir::new().unwrap();
    let exports = dir.path().join("exports");

    submit_jane(&dir)
        .arg("--export-dir")
        .arg(&exports)
        .assert()
        .success()
        .stdout(contains("Assessment saved successfully"))
        .stdout(contains("Patient: Jane Doe (ID: P-42)"))
        .stdout(contains("Exam date: 01/03/2024"))
        .stdout(contains("Éruption complète"))
        .stdout(contains("Comments: ok"));

    let export = exports.join("evaluation_dentaire_P-42_20240301.json");
    let contents = std::fs::read_to_string(export).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["dental_status"].as_object().unwrap().len(), 28);
    assert_eq!(value["dental_status"]["11"], "Éruption complète");
}

#[test]
fn submit_json_prints_export_only() {
    let dir = TempDir::new().unwrap();

    let output = submit_jane(&dir).arg("--json").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["patient_id"], "P-42");
    assert_eq!(value["exam_date"], "2024-03-01");
}

#[test]
fn missing_name_is_rejected_without_writing() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["submit", "--patient-id", "P-42", "--tooth", "11=complete"])
        .assert()
        .failure()
        .stderr(contains("Please fill in the patient information"))
        .stdout(contains("Assessment saved").not());

    cmd(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("No records"));
}

#[test]
fn failed_export_still_reports_saved_record() {
    let dir = TempDir::new().unwrap();
    let exports = dir.path().join("exports");

    cmd(&dir)
        .args(["submit", "--name", "Jane", "--patient-id", "A/7", "--date", "2024-03-01"])
        .arg("--export-dir")
        .arg(&exports)
        .assert()
        .failure()
        .stdout(contains("Assessment saved successfully"))
        .stdout(contains("Patient: Jane (ID: A/7)"))
        .stderr(contains("record #1 saved, export not written"))
        .stderr(contains("not a plain file name"));

    cmd(&dir)
        .args(["history", "--patient-id", "A/7"])
        .assert()
        .success()
        .stdout(contains("Jane"));
}

#[test]
fn padded_tooth_id_is_rejected() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["submit", "--name", "Jane", "--patient-id", "P-1", "--tooth", "+011=complete"])
        .assert()
        .failure()
        .stderr(contains("Invalid tooth id"));
}

#[test]
fn invalid_tooth_is_rejected() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["submit", "--name", "Jane", "--patient-id", "P-1", "--tooth", "18=complete"])
        .assert()
        .failure()
        .stderr(contains("Invalid tooth id"));
}

#[test]
fn resubmission_creates_duplicate_history() {
    let dir = TempDir::new().unwrap();

    submit_jane(&dir).assert().success();
    submit_jane(&dir).assert().success();

    let output = cmd(&dir)
        .args(["history", "--patient-id", "P-42"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Jane Doe").count(), 2);
}

#[test]
fn full_mode_from_environment() {
    let dir = TempDir::new().unwrap();

    submit_jane(&dir)
        .env("ERUPTION_PERSIST_MODE", "full")
        .assert()
        .success();

    submit_jane(&dir)
        .env("ERUPTION_PERSIST_MODE", "everything")
        .assert()
        .failure();
}
