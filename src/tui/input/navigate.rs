use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::theme::{PRESET_NAMES, ThemePreference};
use crate::tui::app::{App, ColorForm, ConfirmAction, Mode, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Section switching works everywhere in navigate mode
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
            return;
        }
        (KeyModifiers::NONE, KeyCode::Tab) => {
            app.switch_view(app.view.next());
            return;
        }
        (_, KeyCode::BackTab) => {
            app.switch_view(app.view.prev());
            return;
        }
        (KeyModifiers::NONE, KeyCode::Char('1')) => {
            app.switch_view(View::Dashboard);
            return;
        }
        (KeyModifiers::NONE, KeyCode::Char('2')) => {
            app.switch_view(View::Calendar);
            return;
        }
        (KeyModifiers::NONE, KeyCode::Char('3')) => {
            app.switch_view(View::Settings);
            return;
        }
        _ => {}
    }

    match app.view {
        View::Dashboard => handle_dashboard(app, key),
        View::Calendar => handle_calendar(app, key),
        View::Settings => handle_settings(app, key),
    }
}

// ---------------------------------------------------------------------------
// Dashboard (task list)
// ---------------------------------------------------------------------------

fn handle_dashboard(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.task_cursor + 1 < app.tasks.len() {
                app.task_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.task_cursor = app.task_cursor.saturating_sub(1);
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.task_input.clear();
            app.mode = Mode::TaskInput;
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Err(e) = app.tasks.delete_at(app.task_cursor) {
                app.set_error(e.to_string());
            }
            if app.task_cursor >= app.tasks.len() {
                app.task_cursor = app.tasks.len().saturating_sub(1);
            }
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

fn handle_calendar(app: &mut App, key: KeyEvent) {
    let last_day = app.grid.days.len() as u32;
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => move_day(app, -1),
        KeyCode::Char('l') | KeyCode::Right => move_day(app, 1),
        KeyCode::Char('j') | KeyCode::Down => move_day(app, 7),
        KeyCode::Char('k') | KeyCode::Up => move_day(app, -7),
        KeyCode::Home => {
            app.day_cursor = 1;
            app.marker_cycle = 0;
        }
        KeyCode::End => {
            app.day_cursor = last_day;
            app.marker_cycle = 0;
        }
        KeyCode::Enter => open_marker(app),
        KeyCode::Esc => close_details(app),
        KeyCode::Char('a') => {
            app.panel.open_create();
            app.mode = Mode::Form;
        }
        KeyCode::Char('e') => {
            app.panel.open_edit(&app.exams);
            if app.panel.is_editing() {
                app.mode = Mode::Form;
            } else {
                app.set_status("select an exam first (Enter on a marked day)");
            }
        }
        KeyCode::Char('d') => {
            let Some(exam_id) = app.panel.selected() else {
                app.set_status("select an exam first (Enter on a marked day)");
                return;
            };
            if let Some(exam) = app.exams.find_by_id(exam_id) {
                app.confirm = Some(ConfirmAction::DeleteExam {
                    exam_id,
                    code: exam.code.clone(),
                });
                app.mode = Mode::Confirm;
            }
        }
        _ => {}
    }
}

fn move_day(app: &mut App, delta: i64) {
    let last = app.grid.days.len() as i64;
    let next = (app.day_cursor as i64 + delta).clamp(1, last);
    if next as u32 != app.day_cursor {
        app.day_cursor = next as u32;
        app.marker_cycle = 0;
    }
}

/// Open the selected day's markers, cycling through them on repeated
/// Enter presses.
fn open_marker(app: &mut App) {
    let markers = match app.cursor_cell() {
        Some(cell) if !cell.markers.is_empty() => cell.markers.clone(),
        _ => {
            app.set_status("no exams on this day");
            return;
        }
    };
    let idx = app.marker_cycle % markers.len();
    app.marker_cycle = idx + 1;
    app.panel.open_details(markers[idx].id);
}

fn close_details(app: &mut App) {
    if let Some(id) = app.panel.selected() {
        if let Some(exam) = app.exams.find_by_id(id).cloned() {
            app.start_detail_fade(exam);
        }
        app.panel.close_details();
    }
}

// ---------------------------------------------------------------------------
// Settings (theme panel)
// ---------------------------------------------------------------------------

/// Rows: one per preset, then `custom`
pub(super) fn settings_rows() -> usize {
    PRESET_NAMES.len() + 1
}

fn handle_settings(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.settings_cursor + 1 < settings_rows() {
                app.settings_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.settings_cursor = app.settings_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(name) = PRESET_NAMES.get(app.settings_cursor) {
                match app.apply_theme(ThemePreference::Preset(name.to_string())) {
                    Ok(()) => app.set_status(format!("[~] theme set to {}", name)),
                    Err(e) => app.set_error(e.to_string()),
                }
            } else {
                open_color_form(app);
            }
        }
        KeyCode::Char('r') => {
            app.confirm = Some(ConfirmAction::ResetTheme);
            app.mode = Mode::Confirm;
        }
        _ => {}
    }
}

fn open_color_form(app: &mut App) {
    let (background, text) = match &app.theme_pref {
        ThemePreference::Custom(colors) => (colors.background.clone(), colors.text.clone()),
        // Seed from the default preset so the form never opens blank
        _ => ("#2E3440".to_string(), "#ECEFF4".to_string()),
    };
    app.color_form = ColorForm {
        background,
        text,
        editing_text: false,
    };
    app.mode = Mode::ColorInput;
}
