use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::truncate_to_width;

/// Render the dashboard: the task log plus the inline add-task prompt
pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let bg = Style::default().bg(app.theme.background);
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " // TASK_LOG",
        bg.fg(app.theme.text).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    if app.tasks.is_empty() && app.mode != Mode::TaskInput {
        lines.push(Line::from(Span::styled(
            "   nothing logged - press a to add a task",
            bg.fg(app.theme.dim),
        )));
    }

    for (i, task) in app.tasks.list().iter().enumerate() {
        let selected = i == app.task_cursor && app.mode == Mode::Navigate;
        let style = if selected {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
        } else {
            bg.fg(app.theme.text)
        };
        let row = format!(" - {}", truncate_to_width(task, width.saturating_sub(3)));
        lines.push(Line::from(Span::styled(row, style)));
    }

    if app.mode == Mode::TaskInput {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" > ", bg.fg(app.theme.highlight)),
            Span::styled(app.task_input.clone(), bg.fg(app.theme.text)),
            Span::styled("\u{258C}", bg.fg(app.theme.highlight)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(bg), area);
}
