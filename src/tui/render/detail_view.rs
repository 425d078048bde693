use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::model::exam::Exam;
use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the exam detail popup. Shows the viewed exam, or the dimmed
/// ghost of one that just closed while its fade timer runs.
pub fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let (exam, ghost) = match app.panel.selected() {
        Some(id) => match app.exams.find_by_id(id) {
            Some(exam) => (exam.clone(), false),
            None => return,
        },
        None => match &app.detail_ghost {
            Some(exam) => (exam.clone(), true),
            None => return,
        },
    };

    let fg = if ghost { app.theme.dim } else { app.theme.text };
    let popup = centered_rect(44, 9, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_style(Style::default().fg(app.theme.border).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let bg = Style::default().bg(app.theme.background);
    let lines = detail_lines(&exam, ghost, fg, app, bg);
    frame.render_widget(Paragraph::new(lines).style(bg), inner);
}

fn detail_lines<'a>(
    exam: &Exam,
    ghost: bool,
    fg: ratatui::style::Color,
    app: &App,
    bg: Style,
) -> Vec<Line<'a>> {
    let field = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!(" {:<7}", label), bg.fg(app.theme.dim)),
            Span::styled(value.to_string(), bg.fg(fg)),
        ])
    };

    let notes = if exam.notes.is_empty() {
        "None"
    } else {
        exam.notes.as_str()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            " // EXAM_DETAILS",
            bg.fg(fg).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        field("Module", &exam.code),
        field("Date", &exam.date),
        field("Time", &exam.time),
        field("Notes", notes),
    ];
    if !ghost {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " e edit  d delete  Esc close",
            bg.fg(app.theme.dim),
        )));
    }
    lines
}
