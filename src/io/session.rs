use crate::io::store::{Slot, Store};

/// Section identifiers persisted in the session slot
pub const SECTION_DASHBOARD: &str = "dashboard";
pub const SECTION_CALENDAR: &str = "calendar";
pub const SECTION_SETTINGS: &str = "settings";

/// Read the last-viewed section, if a session slot survives from a
/// previous run.
pub fn read_last_section(store: &impl Store) -> Option<String> {
    store
        .read(Slot::LastSection)
        .and_then(|text| serde_json::from_str(&text).ok())
}

/// Record the current section. Written on every section switch.
pub fn write_last_section(store: &impl Store, section: &str) -> std::io::Result<()> {
    crate::io::store::save(store, Slot::LastSection, &section)
}

/// Drop the session slot. Called on clean TUI exit; a crashed session
/// leaves the slot behind and restores its section next run.
pub fn clear_session(store: &impl Store) -> std::io::Result<()> {
    store.remove(Slot::LastSection)
}
