//! End-to-end tests driving the sheetlab binary against fixture workbooks

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;

const HEADER: [&str; 3] = ["Name", "Label", "Due"];

fn write_workbook(path: &Path, sheet_name: &str, rows: &[[&str; 3]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).unwrap();

    for (col, header) in HEADER.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, *cell)
                .unwrap();
        }
    }

    workbook.save(path).unwrap();
}

fn sheetlab() -> Command {
    let mut cmd = Command::cargo_bin("sheetlab").unwrap();
    // Live-mode credentials must never leak into these tests
    cmd.env_remove("GITLAB_URL")
        .env_remove("GITLAB_API_KEY")
        .env_remove("GITLAB_PROJECT_ID");
    cmd
}

#[test]
fn dry_run_prints_the_mapped_payload() {
    let dir = tempfile::tempdir().unwrap();
    let xls = dir.path().join("tasks.xlsx");
    write_workbook(&xls, "Tasks", &[["Fix bug", "bug", "2024-01-01"]]);

    sheetlab()
        .args([
            "--xls",
            xls.to_str().unwrap(),
            "--sheet",
            "Tasks",
            "--gitlab-issue-label",
            "Name",
            "--gitlab-issue-tag",
            "Label",
            "--gitlab-issue-due",
            "Due",
            "--gitlab-dryrun",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run issue data:"))
        .stdout(predicate::str::contains(
            r#"{"title":"Fix bug","labels":"bug","due_date":"2024-01-01"}"#,
        ));
}

#[test]
fn dry_run_appends_custom_tags() {
    let dir = tempfile::tempdir().unwrap();
    let xls = dir.path().join("tasks.xlsx");
    write_workbook(&xls, "Tasks", &[["Fix bug", "x", ""]]);

    sheetlab()
        .args([
            "--xls",
            xls.to_str().unwrap(),
            "--sheet",
            "Tasks",
            "--gitlab-issue-label",
            "Name",
            "--gitlab-issue-tag",
            "Label",
            "--gitlab-tag",
            "a",
            "--gitlab-tag",
            "b",
            "--gitlab-dryrun",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""labels":"x,a,b""#));
}

#[test]
fn list_prints_every_column_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let xls = dir.path().join("tasks.xlsx");
    write_workbook(&xls, "Tasks", &[["Fix bug", "bug", "2024-01-01"]]);

    sheetlab()
        .args([
            "--xls",
            xls.to_str().unwrap(),
            "--sheet",
            "Tasks",
            "--list",
            "--gitlab-issue-label",
            "Name",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Columns in worksheet 'Tasks':"))
        .stdout(predicate::str::contains("Name\nLabel\nDue\n"));
}

#[test]
fn missing_label_column_aborts_with_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let xls = dir.path().join("tasks.xlsx");
    write_workbook(&xls, "Tasks", &[["Fix bug", "bug", ""]]);

    sheetlab()
        .args([
            "--xls",
            xls.to_str().unwrap(),
            "--sheet",
            "Tasks",
            "--gitlab-issue-label",
            "Title",
            "--gitlab-dryrun",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Dry run issue data:").not())
        .stderr(predicate::str::contains("'Title' not found"));
}

#[test]
fn missing_worksheet_aborts_with_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let xls = dir.path().join("tasks.xlsx");
    write_workbook(&xls, "Tasks", &[]);

    sheetlab()
        .args([
            "--xls",
            xls.to_str().unwrap(),
            "--sheet",
            "Nope",
            "--gitlab-issue-label",
            "Name",
            "--gitlab-dryrun",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nope"));
}

#[test]
fn missing_workbook_aborts_with_an_error() {
    sheetlab()
        .args([
            "--xls",
            "/nonexistent/tasks.xlsx",
            "--sheet",
            "Tasks",
            "--gitlab-issue-label",
            "Name",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open workbook"));
}

#[test]
fn dry_run_of_an_empty_sheet_prints_nothing_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let xls = dir.path().join("tasks.xlsx");
    write_workbook(&xls, "Tasks", &[]);

    sheetlab()
        .args([
            "--xls",
            xls.to_str().unwrap(),
            "--sheet",
            "Tasks",
            "--gitlab-issue-label",
            "Name",
            "--gitlab-dryrun",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run issue data:").not());
}

#[test]
fn live_mode_without_credentials_fails_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let xls = dir.path().join("tasks.xlsx");
    write_workbook(&xls, "Tasks", &[["Fix bug", "", ""]]);

    sheetlab()
        .current_dir(dir.path())
        .args([
            "--xls",
            xls.to_str().unwrap(),
            "--sheet",
            "Tasks",
            "--gitlab-issue-label",
            "Name",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITLAB_URL"));
}
