use std::io;

use serde::{Deserialize, Serialize};

use crate::io::store::{self, Slot, Store};
use crate::model::exam::Exam;
use crate::model::theme::{CUSTOM, CustomColors, DEFAULT_PRESET};

/// The single-document backup format: everything the planner persists,
/// in one JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    #[serde(default)]
    pub exams: Vec<Exam>,
    #[serde(default)]
    pub tasks: Vec<String>,
    /// Custom theme colors, if a custom theme was active
    #[serde(default)]
    pub theme: Option<CustomColors>,
}

/// Snapshot the current slots into a backup document.
pub fn export(store: &impl Store) -> Backup {
    let theme_name: String = store::load_or(store, Slot::Theme, || DEFAULT_PRESET.to_string());
    let theme = if theme_name == CUSTOM {
        store::load_or(store, Slot::CustomColors, || None)
    } else {
        None
    };
    Backup {
        exams: store::load_or(store, Slot::Exams, Vec::new),
        tasks: store::load_or(store, Slot::Tasks, Vec::new),
        theme,
    }
}

/// Overwrite the persisted slots wholesale from a backup document.
/// There is no partial merge; a running UI must be restarted to observe
/// the imported state.
pub fn import(store: &impl Store, backup: &Backup) -> io::Result<()> {
    store::save(store, Slot::Exams, &backup.exams)?;
    store::save(store, Slot::Tasks, &backup.tasks)?;
    match &backup.theme {
        Some(colors) => {
            store::save(store, Slot::CustomColors, colors)?;
            store::save(store, Slot::Theme, &CUSTOM)?;
        }
        None => {
            store.remove(Slot::CustomColors)?;
            store::save(store, Slot::Theme, &DEFAULT_PRESET)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemStore;
    use pretty_assertions::assert_eq;

    fn sample_backup() -> Backup {
        Backup {
            exams: vec![Exam::new(
                42,
                "CS101".into(),
                "2026-03-15".into(),
                "09:00".into(),
                String::new(),
            )],
            tasks: vec!["Finish essay".into()],
            theme: Some(CustomColors {
                background: "#101010".into(),
                text: "#E0E0E0".into(),
            }),
        }
    }

    #[test]
    fn import_then_export_round_trips() {
        let store = MemStore::new();
        let backup = sample_backup();
        import(&store, &backup).unwrap();
        assert_eq!(export(&store), backup);
    }

    #[test]
    fn import_with_theme_activates_custom() {
        let store = MemStore::new();
        import(&store, &sample_backup()).unwrap();
        let theme: String = store::load_or(&store, Slot::Theme, String::new);
        assert_eq!(theme, "custom");
    }

    #[test]
    fn import_without_theme_restores_default_preset() {
        let store = MemStore::new();
        // Leave stale custom colors behind, then import a theme-less backup
        import(&store, &sample_backup()).unwrap();
        let backup = Backup {
            theme: None,
            ..sample_backup()
        };
        import(&store, &backup).unwrap();
        let theme: String = store::load_or(&store, Slot::Theme, String::new);
        assert_eq!(theme, DEFAULT_PRESET);
        assert!(store.read(Slot::CustomColors).is_none());
    }

    #[test]
    fn missing_document_fields_default_to_empty() {
        let backup: Backup = serde_json::from_str("{}").unwrap();
        assert!(backup.exams.is_empty());
        assert!(backup.tasks.is_empty());
        assert!(backup.theme.is_none());
    }
}
