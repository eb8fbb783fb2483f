/// NavHeader - "‹  title  ›" row shared by the day, month and year views
///
/// The chevrons page the browsed date; the title is optionally clickable
/// to drill up to a coarser view.
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};
use unicode_width::UnicodeWidthStr;

pub const PREV_GLYPH: &str = " ‹ ";
pub const NEXT_GLYPH: &str = " › ";
const GLYPH_WIDTH: u16 = 3;

/// Which part of the header was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Prev,
    Next,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavHeaderLayout {
    pub prev: Rect,
    pub title: Rect,
    pub next: Rect,
}

#[derive(Debug, Clone)]
pub struct NavHeader<'a> {
    pub title: &'a str,
    /// Whether clicking the title reports `NavHit::Title`
    pub title_clickable: bool,
}

impl<'a> NavHeader<'a> {
    pub fn new(title: &'a str, title_clickable: bool) -> Self {
        Self {
            title,
            title_clickable,
        }
    }

    /// Header geometry on the first row of `area`
    pub fn layout(&self, area: Rect) -> NavHeaderLayout {
        let row = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let glyph_width = GLYPH_WIDTH.min(row.width / 2);
        let prev = Rect::new(row.x, row.y, glyph_width, row.height);
        let next = Rect::new(row.right() - glyph_width, row.y, glyph_width, row.height);

        let free = row.width.saturating_sub(glyph_width * 2);
        let title_width = (self.title.width() as u16).min(free);
        let title_x = row.x + glyph_width + (free - title_width) / 2;
        let title = Rect::new(title_x, row.y, title_width, row.height);

        NavHeaderLayout { prev, title, next }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, nav_style: Style, title_style: Style) {
        if area.is_empty() {
            return;
        }
        let layout = self.layout(area);
        buf.set_stringn(layout.prev.x, layout.prev.y, PREV_GLYPH, layout.prev.width as usize, nav_style);
        buf.set_stringn(layout.next.x, layout.next.y, NEXT_GLYPH, layout.next.width as usize, nav_style);
        buf.set_stringn(
            layout.title.x,
            layout.title.y,
            self.title,
            layout.title.width as usize,
            title_style,
        );
    }

    pub fn hit_test(&self, area: Rect, pos: Position) -> Option<NavHit> {
        let layout = self.layout(area);
        if layout.prev.contains(pos) {
            Some(NavHit::Prev)
        } else if layout.next.contains(pos) {
            Some(NavHit::Next)
        } else if self.title_clickable && layout.title.contains(pos) {
            Some(NavHit::Title)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::assert_buffer;

    #[test]
    fn test_layout_centers_title() {
        let header = NavHeader::new("2026", true);
        let layout = header.layout(Rect::new(0, 0, 20, 3));

        assert_eq!(layout.prev, Rect::new(0, 0, 3, 1));
        assert_eq!(layout.next, Rect::new(17, 0, 3, 1));
        assert_eq!(layout.title, Rect::new(8, 0, 4, 1));
    }

    #[test]
    fn test_render() {
        let header = NavHeader::new("2026", true);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        header.render(buf.area, &mut buf, Style::default(), Style::default());

        assert_buffer(&buf, &[" ‹      2026      › "]);
    }

    #[test]
    fn test_hit_test() {
        let header = NavHeader::new("2026", true);
        let area = Rect::new(0, 0, 20, 1);

        assert_eq!(header.hit_test(area, Position::new(1, 0)), Some(NavHit::Prev));
        assert_eq!(header.hit_test(area, Position::new(18, 0)), Some(NavHit::Next));
        assert_eq!(header.hit_test(area, Position::new(9, 0)), Some(NavHit::Title));
        assert_eq!(header.hit_test(area, Position::new(5, 0)), None);
        assert_eq!(header.hit_test(area, Position::new(9, 1)), None);
    }

    #[test]
    fn test_title_not_clickable() {
        let header = NavHeader::new("2559 - 2570", false);
        let area = Rect::new(0, 0, 28, 1);
        let title = header.layout(area).title;

        assert_eq!(header.hit_test(area, Position::new(title.x, 0)), None);
    }
}
