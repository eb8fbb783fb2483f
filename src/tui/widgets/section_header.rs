/// SectionHeader widget - renders a demo section title with a short description
///
/// Used by the demo page above each picker so every section reads the same.

use ratatui::{buffer::Buffer, layout::Rect};
use crate::tui::theme::Theme;

/// Renders a section title and, when given, a description line beneath it
///
/// Returns the number of lines rendered (height consumed)
pub fn render_section_header(
    title: &str,
    description: Option<&str>,
    margin: u16,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    theme: &Theme,
) -> u16 {
    let x = area.x + margin.min(area.width);
    let width = area.right().saturating_sub(x) as usize;
    let lines = std::iter::once((title, theme.header_style()))
        .chain(description.map(|text| (text, theme.hint_style())));

    let mut lines_rendered = 0;
    for (text, style) in lines {
        if y + lines_rendered >= area.bottom() {
            break;
        }
        buf.set_stringn(x, y + lines_rendered, text, width, style);
        lines_rendered += 1;
    }

    lines_rendered
}
