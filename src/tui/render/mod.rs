pub mod calendar_view;
pub mod dashboard;
pub mod detail_view;
pub mod exam_form;
mod helpers;
pub mod status_row;
pub mod tab_bar;
pub mod theme_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use super::app::{App, Mode, View};
use helpers::centered_rect;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.view {
        View::Dashboard => dashboard::render_dashboard(frame, app, chunks[1]),
        View::Calendar => calendar_view::render_calendar_view(frame, app, chunks[1]),
        View::Settings => theme_panel::render_theme_panel(frame, app, chunks[1]),
    }

    status_row::render_status_row(frame, app, chunks[2]);

    // Popups on top: detail panel (or its fading ghost), then the form,
    // then confirmation
    detail_view::render_detail_view(frame, app, area);
    if app.panel.is_editing() {
        exam_form::render_exam_form(frame, app, area);
    }
    if app.mode == Mode::ColorInput {
        theme_panel::render_color_form(frame, app, area);
    }
    if let Some(action) = app.confirm.clone() {
        render_confirm(frame, app, &action.prompt(), area);
    }
}

fn render_confirm(frame: &mut Frame, app: &App, prompt: &str, area: Rect) {
    let width = (prompt.len() as u16 + 6).max(28);
    let popup = centered_rect(width, 5, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_style(Style::default().fg(app.theme.error).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let bg = Style::default().bg(app.theme.background);
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", prompt),
            bg.fg(app.theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(" y confirm   n cancel", bg.fg(app.theme.dim))),
    ];
    frame.render_widget(Paragraph::new(lines).style(bg), inner);
}
