use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Center a popup of the given size inside `area`, clamped to fit.
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Truncate to a display width, appending `…` when cut.
pub(super) fn truncate_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_to_width("CS101", 10), "CS101");
    }

    #[test]
    fn truncate_cuts_and_marks_long_text() {
        let cut = truncate_to_width("a very long task description", 10);
        assert!(cut.ends_with('…'));
        assert!(UnicodeWidthStr::width(cut.as_str()) <= 10);
    }

    #[test]
    fn centered_rect_clamps_to_the_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(40, 40, area);
        assert_eq!(rect, area);
        let small = centered_rect(10, 4, area);
        assert_eq!(small, Rect::new(5, 3, 10, 4));
    }
}
