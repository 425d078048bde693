use crossterm::event::{KeyCode, KeyEvent};

use crate::model::theme::{self, CustomColors, ThemePreference};
use crate::ops::panel::{Panel, Submit};
use crate::tui::app::{App, Mode};

// ---------------------------------------------------------------------------
// Exam form
// ---------------------------------------------------------------------------

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.panel.cancel_edit();
            app.mode = Mode::Navigate;
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Panel::Editing { form, .. } = &mut app.panel {
                form.field = form.field.next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Panel::Editing { form, .. } = &mut app.panel {
                form.field = form.field.prev();
            }
        }
        KeyCode::Enter => match app.panel.submit(&mut app.exams) {
            Ok(Submit::Saved) => {
                app.mode = Mode::Navigate;
                app.refresh_calendar();
                app.set_status("[+] exam saved");
            }
            // Validation error stays visible inside the form
            Ok(Submit::Invalid) => {}
            Err(e) => app.set_error(e.to_string()),
        },
        KeyCode::Char(c) => {
            if let Panel::Editing { form, .. } = &mut app.panel {
                form.active_value_mut().push(c);
            }
        }
        KeyCode::Backspace => {
            if let Panel::Editing { form, .. } = &mut app.panel {
                form.active_value_mut().pop();
            }
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Task input (dashboard)
// ---------------------------------------------------------------------------

pub(super) fn handle_task_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.task_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            let text = std::mem::take(&mut app.task_input);
            // Blank text is dropped by the repository
            if let Err(e) = app.tasks.append(&text) {
                app.set_error(e.to_string());
            } else if !app.tasks.is_empty() {
                app.task_cursor = app.tasks.len() - 1;
            }
            app.mode = Mode::Navigate;
        }
        KeyCode::Char(c) => app.task_input.push(c),
        KeyCode::Backspace => {
            app.task_input.pop();
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Custom color form (settings)
// ---------------------------------------------------------------------------

pub(super) fn handle_color_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.color_form.editing_text = !app.color_form.editing_text;
        }
        KeyCode::Enter => {
            let form = &app.color_form;
            if !theme::valid_hex(&form.background) || !theme::valid_hex(&form.text) {
                app.set_error("colors must be hex like #2E3440");
                return;
            }
            let colors = CustomColors {
                background: form.background.clone(),
                text: form.text.clone(),
            };
            match app.apply_theme(ThemePreference::Custom(colors)) {
                Ok(()) => {
                    app.set_status("[~] theme set to custom");
                    app.mode = Mode::Navigate;
                }
                Err(e) => app.set_error(e.to_string()),
            }
        }
        KeyCode::Char(c) => active_color_field(app).push(c),
        KeyCode::Backspace => {
            active_color_field(app).pop();
        }
        _ => {}
    }
}

fn active_color_field(app: &mut App) -> &mut String {
    if app.color_form.editing_text {
        &mut app.color_form.text
    } else {
        &mut app.color_form.background
    }
}
