//! End-to-end tests for the eqv binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;


const SAMPLE_CSV: &str = "\
Equipment Name,Type,Flowrate,Pressure,Temperature
Pump-1,Pump,120.0,5.2,110.0
Pump-2,Pump,130.0,5.6,115.0
Valve-1,Valve,60.0,4.1,105.0
";


fn eqv(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("eqv").unwrap();
    cmd.arg("--plain").arg("--db").arg(db_path).env_remove("RUST_LOG");
    cmd
}


fn no_escapes() -> impl Predicate<str> {
    predicate::str::contains("\x1b[").not()
}


fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("plant.csv");
    std::fs::write(&path, SAMPLE_CSV).unwrap();
    path
}


#[test]
fn test_import_list_show() {
    let tmp_dir = TempDir::new().unwrap();
    let db_path = tmp_dir.path().join("library.db");
    let csv_path = write_sample(&tmp_dir);

    eqv(&db_path)
        .arg("import")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 records"))
        .stdout(predicate::str::contains("dataset #1 (plant.csv)"))
        .stdout(no_escapes());

    eqv(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("plant.csv"))
        .stdout(predicate::str::contains("1 dataset"))
        .stdout(no_escapes());

    eqv(&db_path)
        .args(["show", "1", "--table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Equipment: 3 items"))
        .stdout(predicate::str::contains("Valve-1"))
        .stdout(predicate::str::contains("Average Parameters"))
        .stdout(predicate::str::contains("● Pump: 2 (66.7%)"))
        .stdout(predicate::str::contains("Correlation: Positive"))
        .stdout(predicate::str::contains("Average: 110.00°"))
        .stdout(no_escapes());
}


#[test]
fn test_render_without_library() {
    let tmp_dir = TempDir::new().unwrap();
    let db_path = tmp_dir.path().join("library.db");
    let csv_path = write_sample(&tmp_dir);

    eqv(&db_path)
        .arg("render")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Equipment Type Distribution"))
        .stdout(predicate::str::contains("Data Points: 3"));

    assert!(!db_path.exists());
}


#[test]
fn test_render_with_summary_file() {
    let tmp_dir = TempDir::new().unwrap();
    let db_path = tmp_dir.path().join("library.db");
    let csv_path = write_sample(&tmp_dir);
    let summary_path = tmp_dir.path().join("summary.json");
    std::fs::write(
        &summary_path,
        r#"{"total_count":3,"avg_flowrate":10.0,"avg_pressure":20.0,"avg_temperature":40.0,
            "type_distribution":{"Pump":2,"Valve":1}}"#,
    )
    .unwrap();

    eqv(&db_path)
        .arg("render")
        .arg(&csv_path)
        .arg("--summary")
        .arg(&summary_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Average Flowrate: 10.00"))
        .stdout(predicate::str::contains(format!("Temperature: {} 40.00", "█".repeat(40))));
}


#[test]
fn test_render_empty_file() {
    let tmp_dir = TempDir::new().unwrap();
    let db_path = tmp_dir.path().join("library.db");
    let csv_path = tmp_dir.path().join("empty.csv");
    std::fs::write(&csv_path, "name,type,flowrate,pressure,temperature\n").unwrap();

    eqv(&db_path)
        .arg("render")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available for visualization"));
}


#[test]
fn test_export_svg() {
    let tmp_dir = TempDir::new().unwrap();
    let db_path = tmp_dir.path().join("library.db");
    let csv_path = write_sample(&tmp_dir);
    let svg_path = tmp_dir.path().join("out.svg");

    eqv(&db_path).arg("import").arg(&csv_path).assert().success();

    eqv(&db_path)
        .args(["export", "1", "--svg", "--output"])
        .arg(&svg_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"))
        .stdout(no_escapes());

    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("Equipment Analysis: plant.csv"));
}


#[test]
fn test_remove_dataset() {
    let tmp_dir = TempDir::new().unwrap();
    let db_path = tmp_dir.path().join("library.db");
    let csv_path = write_sample(&tmp_dir);

    eqv(&db_path).arg("import").arg(&csv_path).assert().success();

    eqv(&db_path)
        .args(["remove", "dataset", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset #1 removed"))
        .stdout(no_escapes());

    eqv(&db_path)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset #1 not found"));
}


#[test]
fn test_remove_and_restore_library() {
    let tmp_dir = TempDir::new().unwrap();
    let db_path = tmp_dir.path().join("library.db");
    let csv_path = write_sample(&tmp_dir);

    eqv(&db_path).arg("import").arg(&csv_path).assert().success();
    eqv(&db_path)
        .args(["remove", "library", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Library deleted"))
        .stdout(no_escapes());
    assert!(!db_path.exists());

    eqv(&db_path)
        .args(["restore", "library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Library restored from backup"))
        .stdout(no_escapes());
    eqv(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("plant.csv"));
}


#[test]
fn test_remove_library_needs_confirmation() {
    let tmp_dir = TempDir::new().unwrap();
    let db_path = tmp_dir.path().join("library.db");
    let csv_path = write_sample(&tmp_dir);

    eqv(&db_path).arg("import").arg(&csv_path).assert().success();

    eqv(&db_path)
        .args(["remove", "library"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library left unchanged"))
        .stdout(no_escapes());
    assert!(db_path.exists());
}


#[test]
fn test_import_empty_file_is_plain() {
    let tmp_dir = TempDir::new().unwrap();
    let db_path = tmp_dir.path().join("library.db");
    let csv_path = tmp_dir.path().join("empty.csv");
    std::fs::write(&csv_path, "name,type,flowrate,pressure,temperature\n").unwrap();

    eqv(&db_path)
        .arg("import")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No valid equipment rows"))
        .stdout(no_escapes());
}


#[test]
fn test_unsupported_file() {
    let tmp_dir = TempDir::new().unwrap();
    let db_path = tmp_dir.path().join("library.db");
    let txt_path = tmp_dir.path().join("plant.txt");
    std::fs::write(&txt_path, "hello").unwrap();

    eqv(&db_path)
        .arg("import")
        .arg(&txt_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file extension"));
}
