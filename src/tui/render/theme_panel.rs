use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::model::theme::{PRESET_NAMES, ThemePreference};
use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the settings section: theme presets plus the custom row
pub fn render_theme_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = Style::default().bg(app.theme.background);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " // THEME",
        bg.fg(app.theme.text).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    let active_custom = matches!(app.theme_pref, ThemePreference::Custom(_));
    for (i, name) in PRESET_NAMES.iter().copied().enumerate() {
        lines.push(row(app, i, name, app.theme_pref.is_preset(name)));
    }
    lines.push(row(app, PRESET_NAMES.len(), "custom", active_custom));

    frame.render_widget(Paragraph::new(lines).style(bg), area);
}

fn row<'a>(app: &App, index: usize, name: &str, active: bool) -> Line<'a> {
    let selected = index == app.settings_cursor;
    let style = if selected {
        Style::default()
            .fg(app.theme.background)
            .bg(app.theme.highlight)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    };
    let suffix = if active { "  (active)" } else { "" };
    Line::from(Span::styled(format!("   {}{}", name, suffix), style))
}

/// Render the custom color editor popup
pub fn render_color_form(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(40, 8, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_style(Style::default().fg(app.theme.border).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let bg = Style::default().bg(app.theme.background);
    let form = &app.color_form;
    let field = |label: &str, value: &str, focused: bool| {
        let label_style = if focused {
            bg.fg(app.theme.highlight).add_modifier(Modifier::BOLD)
        } else {
            bg.fg(app.theme.dim)
        };
        let mut spans = vec![
            Span::styled(format!(" {:<13}", label), label_style),
            Span::styled(value.to_string(), bg.fg(app.theme.text)),
        ];
        if focused {
            spans.push(Span::styled("\u{258C}", bg.fg(app.theme.highlight)));
        }
        Line::from(spans)
    };

    let lines = vec![
        Line::from(Span::styled(
            " // CUSTOM_COLORS",
            bg.fg(app.theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        field("Background", &form.background, !form.editing_text),
        Line::default(),
        field("Text", &form.text, form.editing_text),
    ];

    frame.render_widget(Paragraph::new(lines).style(bg), inner);
}
