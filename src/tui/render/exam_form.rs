use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::ops::panel::{EditMode, FormField, Panel};
use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the create/edit form popup over whatever is behind it
pub fn render_exam_form(frame: &mut Frame, app: &App, area: Rect) {
    let Panel::Editing { mode, form, error } = &app.panel else {
        return;
    };

    let title = match mode {
        EditMode::Create => " // NEW_EXAM",
        EditMode::Update(_) => " // EDIT_EXAM",
    };

    let popup = centered_rect(46, 13, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_style(Style::default().fg(app.theme.border).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let bg = Style::default().bg(app.theme.background);
    let mut lines = vec![
        Line::from(Span::styled(
            title,
            bg.fg(app.theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for field in FormField::ALL {
        let focused = field == form.field;
        let label_style = if focused {
            bg.fg(app.theme.highlight).add_modifier(Modifier::BOLD)
        } else {
            bg.fg(app.theme.dim)
        };
        let mut spans = vec![
            Span::styled(format!(" {:<19}", field.label()), label_style),
            Span::styled(form.value(field).to_string(), bg.fg(app.theme.text)),
        ];
        if focused {
            spans.push(Span::styled("\u{258C}", bg.fg(app.theme.highlight)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    if let Some(err) = error {
        lines.push(Line::from(Span::styled(
            format!(" {}", err),
            bg.fg(app.theme.error),
        )));
    }

    frame.render_widget(Paragraph::new(lines).style(bg), inner);
}
