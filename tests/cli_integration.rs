//! Integration tests for the `rv` CLI.
//!
//! Each test runs `rv` as a subprocess against a temp data directory and
//! verifies stdout and/or the slot files it leaves behind.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Get the path to the built `rv` binary.
fn rv_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("rv");
    path
}

fn rv(dir: &Path, args: &[&str]) -> Output {
    Command::new(rv_bin())
        .arg("-C")
        .arg(dir)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run rv")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

/// Parse a slot file as JSON
fn slot(dir: &Path, name: &str) -> serde_json::Value {
    let text = std::fs::read_to_string(dir.join(name))
        .unwrap_or_else(|e| panic!("could not read slot {}: {}", name, e));
    serde_json::from_str(&text).unwrap()
}

// ============================================================================
// Exams
// ============================================================================

#[test]
fn add_persists_and_lists_the_exam() {
    let dir = TempDir::new().unwrap();
    let out = rv(dir.path(), &["add", "CS101", "2026-03-15", "--time", "09:00"]);
    assert!(out.status.success(), "add failed: {}", stderr(&out));
    assert!(stdout(&out).contains("added CS101 on 2026-03-15"));

    let out = rv(dir.path(), &["list"]);
    let text = stdout(&out);
    assert!(text.contains("CS101"));
    assert!(text.contains("2026-03-15"));
    assert!(text.contains("09:00"));

    let exams = slot(dir.path(), "exams.json");
    assert_eq!(exams.as_array().unwrap().len(), 1);
    assert_eq!(exams[0]["code"], "CS101");
}

#[test]
fn add_rejects_blank_required_fields() {
    let dir = TempDir::new().unwrap();
    let out = rv(dir.path(), &["add", "  ", "2026-03-15"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("module code is required"));

    let out = rv(dir.path(), &["add", "CS101", ""]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("exam date is required"));

    // Nothing was persisted by either attempt
    assert!(!dir.path().join("exams.json").exists());
}

#[test]
fn list_json_has_the_expected_shape() {
    let dir = TempDir::new().unwrap();
    rv(dir.path(), &["add", "CS101", "2026-03-15", "--notes", "hall A"]);
    let out = rv(dir.path(), &["list", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let exams = json["exams"].as_array().unwrap();
    assert_eq!(exams.len(), 1);
    assert_eq!(exams[0]["code"], "CS101");
    assert_eq!(exams[0]["notes"], "hall A");
    // Empty time field is omitted
    assert!(exams[0].get("time").is_none());
}

#[test]
fn day_shows_only_that_date() {
    let dir = TempDir::new().unwrap();
    rv(dir.path(), &["add", "CS101", "2026-03-15"]);
    rv(dir.path(), &["add", "MA202", "2026-05-01"]);

    let out = rv(dir.path(), &["day", "2026-03-15"]);
    let text = stdout(&out);
    assert!(text.contains("CS101"));
    assert!(!text.contains("MA202"));

    let out = rv(dir.path(), &["day", "2026-12-25"]);
    assert!(stdout(&out).contains("no exams"));
}

#[test]
fn edit_merges_flags_over_current_values() {
    let dir = TempDir::new().unwrap();
    rv(dir.path(), &["add", "CS101", "2026-03-15", "--time", "09:00"]);
    let id = slot(dir.path(), "exams.json")[0]["id"].to_string();

    let out = rv(dir.path(), &["edit", &id, "--time", "11:00"]);
    assert!(out.status.success(), "edit failed: {}", stderr(&out));

    let exams = slot(dir.path(), "exams.json");
    assert_eq!(exams[0]["code"], "CS101");
    assert_eq!(exams[0]["time"], "11:00");
    assert_eq!(exams[0]["date"], "2026-03-15");
}

#[test]
fn edit_rejects_blanking_a_required_field() {
    let dir = TempDir::new().unwrap();
    rv(dir.path(), &["add", "CS101", "2026-03-15"]);
    let id = slot(dir.path(), "exams.json")[0]["id"].to_string();

    let out = rv(dir.path(), &["edit", &id, "--date", ""]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("exam date is required"));
    assert_eq!(slot(dir.path(), "exams.json")[0]["date"], "2026-03-15");
}

#[test]
fn edit_unknown_id_is_a_visible_error() {
    let dir = TempDir::new().unwrap();
    let out = rv(dir.path(), &["edit", "12345", "--code", "CS102"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("exam not found"));
}

#[test]
fn delete_with_yes_removes_the_exam() {
    let dir = TempDir::new().unwrap();
    rv(dir.path(), &["add", "CS101", "2026-03-15"]);
    let id = slot(dir.path(), "exams.json")[0]["id"].to_string();

    let out = rv(dir.path(), &["delete", &id, "--yes"]);
    assert!(stdout(&out).contains("deleted CS101"));
    assert_eq!(slot(dir.path(), "exams.json").as_array().unwrap().len(), 0);
}

#[test]
fn delete_unknown_id_is_a_silent_no_op() {
    let dir = TempDir::new().unwrap();
    rv(dir.path(), &["add", "CS101", "2026-03-15"]);
    let out = rv(dir.path(), &["delete", "999", "--yes"]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    assert_eq!(slot(dir.path(), "exams.json").as_array().unwrap().len(), 1);
}

#[test]
fn delete_without_yes_declines_on_closed_stdin() {
    let dir = TempDir::new().unwrap();
    rv(dir.path(), &["add", "CS101", "2026-03-15"]);
    let id = slot(dir.path(), "exams.json")[0]["id"].to_string();

    // stdin is /dev/null, so the prompt reads an empty answer → declined
    let out = rv(dir.path(), &["delete", &id]);
    assert!(out.status.success());
    assert_eq!(slot(dir.path(), "exams.json").as_array().unwrap().len(), 1);
}

// ============================================================================
// Tasks
// ============================================================================

#[test]
fn task_append_and_done_round_trip() {
    let dir = TempDir::new().unwrap();
    let out = rv(dir.path(), &["task", "Finish essay"]);
    assert!(stdout(&out).contains("task 1 added"));
    rv(dir.path(), &["task", "Revise chapter 4"]);

    let out = rv(dir.path(), &["tasks"]);
    let text = stdout(&out);
    assert!(text.contains("1. Finish essay"));
    assert!(text.contains("2. Revise chapter 4"));

    let out = rv(dir.path(), &["done", "1"]);
    assert!(stdout(&out).contains("[x] Finish essay"));

    let tasks = slot(dir.path(), "tasks.json");
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0], "Revise chapter 4");
}

#[test]
fn blank_task_is_dropped_silently() {
    let dir = TempDir::new().unwrap();
    let out = rv(dir.path(), &["task", "   "]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(!dir.path().join("tasks.json").exists());
}

#[test]
fn done_out_of_range_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    rv(dir.path(), &["task", "only one"]);
    for index in ["0", "5"] {
        let out = rv(dir.path(), &["done", index]);
        assert!(out.status.success());
        assert!(stdout(&out).is_empty());
    }
    assert_eq!(slot(dir.path(), "tasks.json").as_array().unwrap().len(), 1);
}

// ============================================================================
// Calendar
// ============================================================================

#[test]
fn calendar_prints_the_current_month_grid() {
    let dir = TempDir::new().unwrap();
    let out = rv(dir.path(), &["calendar"]);
    let text = stdout(&out);

    let today = chrono::Local::now().date_naive();
    let grid = revise::ops::calendar::project_month(today, &[]);
    assert!(text.starts_with(&grid.heading()));
    assert!(text.contains("Mo Tu We Th Fr Sa Su"));
}

#[test]
fn calendar_json_matches_the_render_model() {
    let dir = TempDir::new().unwrap();
    let out = rv(dir.path(), &["calendar", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();

    let today = chrono::Local::now().date_naive();
    let grid = revise::ops::calendar::project_month(today, &[]);
    assert_eq!(json["year"], i64::from(grid.year));
    assert_eq!(json["leading_blanks"], grid.leading_blanks as i64);
    assert_eq!(json["days"].as_array().unwrap().len(), grid.days.len());
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn theme_set_show_custom_and_reset() {
    let dir = TempDir::new().unwrap();
    let out = rv(dir.path(), &["theme"]);
    assert_eq!(stdout(&out).trim(), "nord");

    rv(dir.path(), &["theme", "matrix"]);
    let out = rv(dir.path(), &["theme"]);
    assert_eq!(stdout(&out).trim(), "matrix");

    rv(
        dir.path(),
        &["theme", "custom", "--background", "#101010", "--text", "#E0E0E0"],
    );
    let out = rv(dir.path(), &["theme"]);
    assert!(stdout(&out).contains("custom (bg #101010, text #E0E0E0)"));
    assert!(dir.path().join("custom_colors.json").exists());

    rv(dir.path(), &["theme", "reset", "--yes"]);
    let out = rv(dir.path(), &["theme"]);
    assert_eq!(stdout(&out).trim(), "nord");
    assert!(!dir.path().join("custom_colors.json").exists());
}

#[test]
fn theme_rejects_unknown_names_and_bad_colors() {
    let dir = TempDir::new().unwrap();
    let out = rv(dir.path(), &["theme", "solarized"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("unknown theme"));

    let out = rv(
        dir.path(),
        &["theme", "custom", "--background", "blue", "--text", "#E0E0E0"],
    );
    assert!(!out.status.success());
    assert!(stderr(&out).contains("hex"));
}

// ============================================================================
// Backup
// ============================================================================

#[test]
fn export_then_import_restores_everything() {
    let dir = TempDir::new().unwrap();
    rv(dir.path(), &["add", "CS101", "2026-03-15", "--time", "09:00"]);
    rv(dir.path(), &["task", "Finish essay"]);
    rv(
        dir.path(),
        &["theme", "custom", "--background", "#101010", "--text", "#E0E0E0"],
    );

    let backup_path = dir.path().join("backup.json");
    let out = rv(dir.path(), &["export", backup_path.to_str().unwrap()]);
    assert!(stdout(&out).contains("exported 1 exams, 1 tasks"));

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&backup_path).unwrap()).unwrap();
    assert_eq!(doc["exams"][0]["code"], "CS101");
    assert_eq!(doc["tasks"][0], "Finish essay");
    assert_eq!(doc["theme"]["background"], "#101010");

    // Restore into a fresh data directory
    let other = TempDir::new().unwrap();
    let out = rv(other.path(), &["import", backup_path.to_str().unwrap(), "--yes"]);
    assert!(stdout(&out).contains("imported 1 exams, 1 tasks"));

    let out = rv(other.path(), &["list"]);
    assert!(stdout(&out).contains("CS101"));
    let out = rv(other.path(), &["tasks"]);
    assert!(stdout(&out).contains("Finish essay"));
    let out = rv(other.path(), &["theme"]);
    assert!(stdout(&out).contains("custom"));
}

#[test]
fn import_without_yes_declines_on_closed_stdin() {
    let dir = TempDir::new().unwrap();
    rv(dir.path(), &["add", "CS101", "2026-03-15"]);
    let backup_path = dir.path().join("backup.json");
    rv(dir.path(), &["export", backup_path.to_str().unwrap()]);

    let other = TempDir::new().unwrap();
    let out = rv(other.path(), &["import", backup_path.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(!other.path().join("exams.json").exists());
}

#[test]
fn import_rejects_files_that_are_not_backups() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("bogus.json");
    std::fs::write(&bogus, "[1, 2, 3]").unwrap();
    let out = rv(dir.path(), &["import", bogus.to_str().unwrap(), "--yes"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("not a revise backup"));
}
