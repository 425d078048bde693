use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Mode, View};

/// Render the status row (bottom of screen): clock, transient message,
/// key hints for the current mode
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let clock = Local::now().format(" %a %d %b  %H:%M:%S ").to_string();
    let mut spans = vec![Span::styled(
        clock,
        Style::default().fg(app.theme.dim).bg(bg),
    )];

    if let Some(status) = &app.status {
        let color = if status.is_error {
            app.theme.error
        } else {
            app.theme.text
        };
        spans.push(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color).bg(bg),
        ));
    }

    let hint = hint_for(app);
    let content_width: usize = spans
        .iter()
        .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
        .sum();
    let hint_width = UnicodeWidthStr::width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn hint_for(app: &App) -> &'static str {
    match app.mode {
        Mode::Form => "Tab field  Enter save  Esc cancel",
        Mode::TaskInput => "Enter add  Esc cancel",
        Mode::ColorInput => "Tab switch field  Enter apply  Esc cancel",
        Mode::Confirm => "y confirm  n cancel",
        Mode::Navigate => match app.view {
            View::Dashboard => "a add task  d delete  Tab section  q quit",
            View::Calendar => "arrows move  Enter details  a add  e edit  d delete  q quit",
            View::Settings => "Enter apply  r reset  Tab section  q quit",
        },
    }
}
