use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::calendar::{DayCell, WEEKDAY_HEADER};
use crate::tui::app::App;

use super::helpers::truncate_to_width;

/// Render the month grid: heading, Monday-first weekday header, then one
/// cell per day with its exam markers
pub fn render_calendar_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = Style::default().bg(app.theme.background);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // month heading
            Constraint::Length(1), // weekday names
            Constraint::Min(1),    // day grid
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(format!(" {}", app.grid.heading()))
            .style(bg.fg(app.theme.text).add_modifier(Modifier::BOLD)),
        chunks[0],
    );

    let header_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Fill(1); 7])
        .split(chunks[1]);
    for (i, name) in WEEKDAY_HEADER.iter().enumerate() {
        frame.render_widget(
            Paragraph::new(format!(" {}", name)).style(bg.fg(app.theme.dim)),
            header_cols[i],
        );
    }

    let leading = app.grid.leading_blanks;
    let weeks = (leading + app.grid.days.len()).div_ceil(7);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Fill(1); weeks])
        .split(chunks[2]);

    for (week, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Fill(1); 7])
            .split(*row);
        for (col, cell_area) in cols.iter().enumerate() {
            let slot = week * 7 + col;
            if slot < leading {
                continue;
            }
            if let Some(cell) = app.grid.days.get(slot - leading) {
                render_day_cell(frame, app, cell, *cell_area);
            }
        }
    }
}

fn render_day_cell(frame: &mut Frame, app: &App, cell: &DayCell, area: Rect) {
    let selected = cell.day == app.day_cursor;
    let cell_bg = if selected {
        app.theme.border
    } else {
        app.theme.background
    };
    let base = Style::default().bg(cell_bg);

    let mut day_style = base.fg(app.theme.text);
    if cell.is_today {
        // The one cell matching today's date gets the inset-glow look
        day_style = day_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let mut lines = vec![Line::from(Span::styled(
        format!(" {:>2}", cell.day),
        day_style,
    ))];

    let marker_rows = area.height.saturating_sub(1) as usize;
    let width = area.width.saturating_sub(2) as usize;
    for marker in cell.markers.iter().take(marker_rows) {
        let label = if marker.time.is_empty() {
            marker.code.clone()
        } else {
            format!("{} {}", marker.code, marker.time)
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", truncate_to_width(&label, width)),
            base.fg(app.theme.highlight),
        )));
    }

    frame.render_widget(Paragraph::new(lines).style(base), area);
}
