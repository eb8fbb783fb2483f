/// Widget-based rendering for the Thai calendar pickers
///
/// Every calendar view is split in three parts that share one layout
/// function: a pure model (cells and their flags), `render` into a ratatui
/// `Buffer`, and `hit_test` mapping a mouse position back to a view event.
/// Sharing the layout keeps what is drawn and what is clickable in sync.

#[cfg(test)]
pub mod testing;

pub mod nav_header;
pub use nav_header::{NavHeader, NavHit};

pub mod year_view;
pub use year_view::{YearCell, YearView, YearViewEvent};

pub mod month_view;
pub use month_view::{MonthCell, MonthView, MonthViewEvent};

pub mod day_view;
pub use day_view::{DayCell, DayView, DayViewEvent};

pub mod responsive_popup;
pub use responsive_popup::{
    compute_position, PopupFrame, PopupHit, PopupLayout, PopupPosition, ResponsivePopup,
};

pub mod trigger;
pub use trigger::PickerTrigger;

pub mod section_header;
pub use section_header::render_section_header;

pub mod horizontal_separator;
pub use horizontal_separator::render_horizontal_separator;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::layout_constants::{CHOICE_GRID_COLUMNS, CHOICE_GRID_ROWS};
use super::theme::Theme;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations, and can be rendered into test buffers.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `theme` - Resolved colors
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}

/// Rows between the top of a view and its first grid row (header + spacer)
pub(crate) const GRID_TOP_OFFSET: u16 = 2;

/// Cell rects of the 3x4 month/year grid, row-major
///
/// Cells outside `area` are clipped to an empty rect.
pub(crate) fn choice_grid(area: Rect) -> Vec<Rect> {
    let cell_width = area.width / CHOICE_GRID_COLUMNS;
    (0..CHOICE_GRID_ROWS * CHOICE_GRID_COLUMNS)
        .map(|index| {
            let col = index % CHOICE_GRID_COLUMNS;
            let row = index / CHOICE_GRID_COLUMNS;
            Rect::new(
                area.x + col * cell_width,
                area.y + GRID_TOP_OFFSET + row,
                cell_width,
                1,
            )
            .intersection(area)
        })
        .collect()
}

/// Write `text` centered inside `cell`, filling the rest of the cell with `style`
pub(crate) fn render_centered(
    text: &str,
    cell: Rect,
    buf: &mut Buffer,
    style: ratatui::style::Style,
) {
    use unicode_width::UnicodeWidthStr;

    if cell.is_empty() {
        return;
    }
    buf.set_style(cell, style);
    let text_width = (text.width() as u16).min(cell.width);
    let x = cell.x + (cell.width - text_width) / 2;
    buf.set_stringn(x, cell.y, text, text_width as usize, style);
}
