use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

/// Render the tab bar: one tab per section, separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = Style::default().bg(app.theme.background);
    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ~ ", bg.fg(app.theme.highlight)));

    for (i, view) in View::ALL.into_iter().enumerate() {
        let style = if view == app.view {
            bg.fg(app.theme.text).add_modifier(Modifier::BOLD)
        } else {
            bg.fg(app.theme.dim)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, view.title()), style));
        spans.push(Span::styled("\u{2502}", bg.fg(app.theme.dim)));
    }
    spans.pop();

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg), chunks[0]);

    let separator = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(separator).style(bg.fg(app.theme.border)),
        chunks[1],
    );
}
