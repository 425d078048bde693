use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::store::{Slot, Store};
use crate::model::exam::ExamId;
use crate::model::theme::{DEFAULT_PRESET, ThemePreference};
use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let action = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(action) = action {
                match action {
                    ConfirmAction::DeleteExam { exam_id, code } => {
                        confirm_delete_exam(app, exam_id, &code);
                    }
                    ConfirmAction::ResetTheme => confirm_reset_theme(app),
                }
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn confirm_delete_exam(app: &mut App, exam_id: ExamId, code: &str) {
    // Snapshot for the fade-out before the record disappears
    if let Some(exam) = app.exams.find_by_id(exam_id).cloned() {
        app.start_detail_fade(exam);
    }
    match app.panel.delete_selected(&mut app.exams) {
        Ok(_) => {
            app.refresh_calendar();
            app.set_status(format!("[-] deleted {}", code));
        }
        Err(e) => app.set_error(e.to_string()),
    }
}

fn confirm_reset_theme(app: &mut App) {
    if let Err(e) = app.store.remove(Slot::CustomColors) {
        app.set_error(e.to_string());
        return;
    }
    match app.apply_theme(ThemePreference::Preset(DEFAULT_PRESET.to_string())) {
        Ok(()) => app.set_status(format!("[~] theme reset to {}", DEFAULT_PRESET)),
        Err(e) => app.set_error(e.to_string()),
    }
}
