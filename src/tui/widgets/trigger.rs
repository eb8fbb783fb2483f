/// PickerTrigger - the bordered field that opens a picker
///
/// Shows the formatted value, or the placeholder in a muted style when no
/// value has been chosen. The border takes the accent color while the
/// picker is open.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::layout_constants::TRIGGER_HEIGHT;
use crate::tui::theme::{Accent, Theme};
use super::RenderableWidget;

const OPEN_ICON: &str = "▾";

#[derive(Debug, Clone)]
pub struct PickerTrigger<'a> {
    pub label: Option<&'a str>,
    pub placeholder: &'a str,
    pub open: bool,
    pub accent: Accent,
}

impl<'a> PickerTrigger<'a> {
    pub fn new(label: Option<&'a str>, placeholder: &'a str) -> Self {
        Self {
            label,
            placeholder,
            open: false,
            accent: Accent::Primary,
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }
}

impl RenderableWidget for PickerTrigger<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(self.open, self.accent));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let icon_width = OPEN_ICON.width() as u16;
        let text_width = inner.width.saturating_sub(icon_width + 2);
        let (text, style) = match self.label {
            Some(label) => (label, theme.normal_style()),
            None => (self.placeholder, theme.placeholder_style()),
        };
        buf.set_stringn(inner.x + 1, inner.y, text, text_width as usize, style);

        if inner.width > icon_width + 1 {
            let icon_x = inner.right() - icon_width - 1;
            buf.set_stringn(icon_x, inner.y, OPEN_ICON, icon_width as usize, theme.nav_style(self.accent));
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(TRIGGER_HEIGHT)
    }
}
