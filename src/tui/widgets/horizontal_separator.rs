/// HorizontalSeparator widget - renders a horizontal rule between demo sections

use ratatui::{buffer::Buffer, layout::Rect};
use crate::tui::theme::Theme;

const RULE: &str = "─";

/// Renders a horizontal separator line using box-drawing characters
///
/// Returns 1 if rendered, 0 if no space available
pub fn render_horizontal_separator(
    width: usize,
    margin: u16,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    theme: &Theme,
) -> u16 {
    if y >= area.bottom() {
        return 0;
    }

    let x = area.x + margin.min(area.width);
    let available = area.right().saturating_sub(x) as usize;
    let width = width.min(available);
    buf.set_stringn(x, y, RULE.repeat(width), width, theme.hint_style());

    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_horizontal_separator_basic() {
        let theme = test_theme();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));
        let area = buf.area;

        let lines = render_horizontal_separator(10, 0, area, 1, &mut buf, &theme);

        assert_eq!(lines, 1);
        assert_eq!(buffer_line(&buf, 1), "──────────          ");
    }

    #[test]
    fn test_horizontal_separator_with_margin() {
        let theme = test_theme();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        let area = buf.area;

        render_horizontal_separator(5, 2, area, 0, &mut buf, &theme);

        assert_eq!(buffer_line(&buf, 0), "  ─────             ");
    }

    #[test]
    fn test_horizontal_separator_clipped_to_area() {
        let theme = test_theme();
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        let area = buf.area;

        render_horizontal_separator(50, 0, area, 0, &mut buf, &theme);

        assert_eq!(buffer_line(&buf, 0), "────────");
    }

    #[test]
    fn test_horizontal_separator_at_bottom() {
        let theme = test_theme();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 2));
        let area = buf.area;

        assert_eq!(render_horizontal_separator(10, 0, area, 2, &mut buf, &theme), 0);
    }
}
