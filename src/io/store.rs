use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

/// Named persistence slots. Each slot holds one JSON-serialized value and
/// maps to one file in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Exams,
    Tasks,
    Theme,
    CustomColors,
    /// Which section the TUI last showed. Session-scoped: removed on
    /// clean exit.
    LastSection,
}

impl Slot {
    pub fn file_name(self) -> &'static str {
        match self {
            Slot::Exams => "exams.json",
            Slot::Tasks => "tasks.json",
            Slot::Theme => "theme.json",
            Slot::CustomColors => "custom_colors.json",
            Slot::LastSection => ".session.json",
        }
    }
}

/// Storage port for the repositories. Implementations hold no collection
/// state of their own — they only move strings in and out of slots.
pub trait Store {
    /// Raw slot contents, or None if the slot has never been written
    /// (or cannot be read).
    fn read(&self, slot: Slot) -> Option<String>;
    /// Durably overwrite the slot. No versioning, no merge.
    fn write(&self, slot: Slot, contents: &str) -> io::Result<()>;
    /// Delete the slot if present.
    fn remove(&self, slot: Slot) -> io::Result<()>;
}

/// Load and deserialize a slot, substituting the caller's default when the
/// slot is missing or its contents don't parse. Corrupt data is never
/// surfaced to the user.
pub fn load_or<T, S, F>(store: &S, slot: Slot, default: F) -> T
where
    T: DeserializeOwned,
    S: Store + ?Sized,
    F: FnOnce() -> T,
{
    store
        .read(slot)
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_else(default)
}

/// Serialize and write a slot.
pub fn save<T, S>(store: &S, slot: Slot, value: &T) -> io::Result<()>
where
    T: Serialize,
    S: Store + ?Sized,
{
    let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    store.write(slot, &text)
}

/// Resolve the data directory: explicit override first, then
/// `$REVISE_DIR`, then `~/.revise`.
pub fn resolve_data_dir(override_dir: Option<&str>) -> io::Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(dir) = std::env::var("REVISE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    match std::env::var("HOME") {
        Ok(home) => Ok(PathBuf::from(home).join(".revise")),
        Err(_) => Err(io::Error::other(
            "cannot find a home directory; set REVISE_DIR or pass --data-dir",
        )),
    }
}

/// Filesystem store: one JSON file per slot under the data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `dir`. The directory is created lazily on
    /// first write, so read-only commands never touch the filesystem.
    pub fn open(dir: &Path) -> Self {
        JsonStore {
            dir: dir.to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.dir.join(slot.file_name())
    }
}

impl Store for JsonStore {
    fn read(&self, slot: Slot) -> Option<String> {
        fs::read_to_string(self.slot_path(slot)).ok()
    }

    fn write(&self, slot: Slot, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        // Write-then-rename so a crash mid-write can't leave a torn slot
        let tmp = NamedTempFile::new_in(&self.dir)?;
        fs::write(tmp.path(), contents)?;
        tmp.persist(self.slot_path(slot)).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&self, slot: Slot) -> io::Result<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// In-memory store used as the test double for repository tests.
#[derive(Debug, Default)]
pub struct MemStore {
    slots: RefCell<HashMap<&'static str, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore::default()
    }
}

impl Store for MemStore {
    fn read(&self, slot: Slot) -> Option<String> {
        self.slots.borrow().get(slot.file_name()).cloned()
    }

    fn write(&self, slot: Slot, contents: &str) -> io::Result<()> {
        self.slots
            .borrow_mut()
            .insert(slot.file_name(), contents.to_string());
        Ok(())
    }

    fn remove(&self, slot: Slot) -> io::Result<()> {
        self.slots.borrow_mut().remove(slot.file_name());
        Ok(())
    }
}
