//! Backup round-trip: exporting a store and importing the document into
//! another store reproduces the same persisted state.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use revise::io::backup;
use revise::io::store::{self, JsonStore, Slot, Store};
use revise::model::theme::CustomColors;
use revise::repo::{ExamRepo, TaskRepo};

fn seeded_store(dir: &TempDir) -> JsonStore {
    let store = JsonStore::open(dir.path());
    let mut exams = ExamRepo::open(store.clone());
    exams
        .create("CS101".into(), "2026-03-15".into(), "09:00".into(), "hall A".into())
        .unwrap();
    exams
        .create("MA202".into(), "2026-05-01".into(), "14:00".into(), String::new())
        .unwrap();
    let mut tasks = TaskRepo::open(store.clone());
    tasks.append("Finish essay").unwrap();
    store
}

#[test]
fn round_trip_without_custom_theme() {
    let dir = TempDir::new().unwrap();
    let source = seeded_store(&dir);

    let doc = backup::export(&source);
    assert_eq!(doc.exams.len(), 2);
    assert_eq!(doc.tasks, vec!["Finish essay".to_string()]);
    assert!(doc.theme.is_none());

    let other_dir = TempDir::new().unwrap();
    let target = JsonStore::open(other_dir.path());
    backup::import(&target, &doc).unwrap();

    assert_eq!(backup::export(&target), doc);
    // Slot files round-trip byte-comparable as parsed JSON
    let source_exams: serde_json::Value =
        serde_json::from_str(&source.read(Slot::Exams).unwrap()).unwrap();
    let target_exams: serde_json::Value =
        serde_json::from_str(&target.read(Slot::Exams).unwrap()).unwrap();
    assert_eq!(source_exams, target_exams);
}

#[test]
fn round_trip_carries_the_custom_theme() {
    let dir = TempDir::new().unwrap();
    let source = seeded_store(&dir);
    let colors = CustomColors {
        background: "#101010".into(),
        text: "#E0E0E0".into(),
    };
    store::save(&source, Slot::CustomColors, &colors).unwrap();
    store::save(&source, Slot::Theme, &"custom").unwrap();

    let doc = backup::export(&source);
    assert_eq!(doc.theme.as_ref(), Some(&colors));

    let other_dir = TempDir::new().unwrap();
    let target = JsonStore::open(other_dir.path());
    backup::import(&target, &doc).unwrap();

    let theme: String = store::load_or(&target, Slot::Theme, String::new);
    assert_eq!(theme, "custom");
    let restored: Option<CustomColors> = store::load_or(&target, Slot::CustomColors, || None);
    assert_eq!(restored, Some(colors));
}

#[test]
fn import_overwrites_existing_state_wholesale() {
    let dir = TempDir::new().unwrap();
    let source = seeded_store(&dir);
    let doc = backup::export(&source);

    // A store with unrelated prior state
    let other_dir = TempDir::new().unwrap();
    let target = JsonStore::open(other_dir.path());
    let mut old_exams = ExamRepo::open(target.clone());
    old_exams
        .create("OLD999".into(), "2025-01-01".into(), String::new(), String::new())
        .unwrap();
    let mut old_tasks = TaskRepo::open(target.clone());
    old_tasks.append("stale task").unwrap();

    backup::import(&target, &doc).unwrap();

    let exams = ExamRepo::open(target.clone());
    assert_eq!(exams.len(), 2);
    assert!(exams.all().iter().all(|e| e.code != "OLD999"));
    let tasks = TaskRepo::open(target);
    assert_eq!(tasks.list(), ["Finish essay"]);
}
