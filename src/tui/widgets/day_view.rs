/// DayView - month grid of days with min/max bounds
///
/// Days are laid out Sunday-first in a 7-column grid. Cells outside the
/// `[min, max]` window are drawn muted and have no hit region, so a click on
/// them never produces a `Select` event.
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};

use crate::calendar::{is_selectable, CalendarDate, Unit};
use crate::formatting::{ThaiFormat, THAI_WEEKDAYS_SHORT};
use crate::layout_constants::{DAY_CELL_WIDTH, DAY_GRID_COLUMNS, MAX_WEEK_ROWS};
use crate::tui::theme::{Accent, Theme};
use super::nav_header::{NavHeader, NavHit};
use super::{RenderableWidget, GRID_TOP_OFFSET};

/// Rows from the top of the view to the first week (header, spacer, weekday labels)
const WEEK_TOP_OFFSET: u16 = GRID_TOP_OFFSET + 1;

/// Events emitted by the day grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayViewEvent {
    PrevMonth,
    NextMonth,
    /// Drill up to the month grid
    HeaderClick,
    /// Day of month chosen by the user
    Select(u32),
}

impl DayViewEvent {
    pub fn navigate(&self, view_date: CalendarDate) -> Option<CalendarDate> {
        match self {
            Self::PrevMonth => Some(view_date.subtract(1, Unit::Month)),
            Self::NextMonth => Some(view_date.add(1, Unit::Month)),
            Self::HeaderClick | Self::Select(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: CalendarDate,
    pub selected: bool,
    /// Real-world today, suppressed when the cell is selected or disabled
    pub today: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone)]
pub struct DayView {
    view_date: CalendarDate,
    today: CalendarDate,
    selected: Option<CalendarDate>,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
}

impl DayView {
    pub fn new(view_date: CalendarDate, today: CalendarDate) -> Self {
        Self {
            view_date,
            today,
            selected: None,
            min: None,
            max: None,
        }
    }

    pub fn selected(mut self, selected: Option<CalendarDate>) -> Self {
        self.selected = selected;
        self
    }

    pub fn bounds(mut self, min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Empty cells before day 1 (weekday of the 1st, Sunday = 0)
    pub fn leading_blanks(&self) -> u32 {
        self.view_date.first_weekday_of_month()
    }

    pub fn cells(&self) -> Vec<DayCell> {
        (1..=self.view_date.days_in_month())
            .map(|day| {
                let date = self.view_date.with_day(day);
                let selected = self.selected.is_some_and(|s| s.is_same_day(&date));
                let disabled = !is_selectable(&date, self.min.as_ref(), self.max.as_ref());
                DayCell {
                    day,
                    date,
                    selected,
                    today: !selected && !disabled && date.is_same_day(&self.today),
                    disabled,
                }
            })
            .collect()
    }

    pub fn title(&self) -> String {
        self.view_date.format_thai(ThaiFormat::MonthYear)
    }

    /// Width of one weekday column; all seven columns always fit in `area`
    pub fn cell_width(area: Rect) -> u16 {
        area.width / DAY_GRID_COLUMNS
    }

    /// Rect of a day cell; clipped to `area`
    pub fn cell_rect(&self, area: Rect, day: u32) -> Rect {
        let index = (self.leading_blanks() + day - 1) as u16;
        let col = index % DAY_GRID_COLUMNS;
        let row = index / DAY_GRID_COLUMNS;
        let width = Self::cell_width(area);
        Rect::new(
            area.x + col * width,
            area.y + WEEK_TOP_OFFSET + row,
            width,
            1,
        )
        .intersection(area)
    }

    pub fn hit_test(&self, area: Rect, pos: Position) -> Option<DayViewEvent> {
        let title = self.title();
        match NavHeader::new(&title, true).hit_test(area, pos) {
            Some(NavHit::Prev) => return Some(DayViewEvent::PrevMonth),
            Some(NavHit::Next) => return Some(DayViewEvent::NextMonth),
            Some(NavHit::Title) => return Some(DayViewEvent::HeaderClick),
            None => {}
        }

        self.cells()
            .iter()
            .filter(|cell| !cell.disabled)
            .find(|cell| self.cell_rect(area, cell.day).contains(pos))
            .map(|cell| DayViewEvent::Select(cell.day))
    }
}

impl RenderableWidget for DayView {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let title = self.title();
        NavHeader::new(&title, true).render(
            area,
            buf,
            theme.nav_style(Accent::Primary),
            theme.header_style(),
        );

        let label_y = area.y + GRID_TOP_OFFSET;
        let cell_width = Self::cell_width(area);
        if label_y < area.bottom() && cell_width > 0 {
            for (col, name) in THAI_WEEKDAYS_SHORT.iter().enumerate() {
                let x = area.x + col as u16 * cell_width;
                let label = format!("{:>3} ", name);
                buf.set_stringn(x, label_y, label, cell_width as usize, theme.weekday_style());
            }
        }

        for cell in self.cells() {
            let rect = self.cell_rect(area, cell.day);
            if rect.is_empty() {
                continue;
            }
            let style = if cell.disabled {
                theme.disabled_style()
            } else if cell.selected {
                theme.selected_style(Accent::Primary)
            } else if cell.today {
                theme.today_style()
            } else {
                theme.normal_style()
            };
            buf.set_style(rect, style);
            let label = format!("{:>3} ", cell.day);
            buf.set_stringn(rect.x, rect.y, label, rect.width as usize, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(WEEK_TOP_OFFSET + MAX_WEEK_ROWS)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(DAY_CELL_WIDTH * DAY_GRID_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::d;
    use crate::tui::widgets::testing::{buffer_line, render_widget, test_theme};

    fn area() -> Rect {
        Rect::new(0, 0, 28, 9)
    }

    #[test]
    fn test_leading_blanks_match_first_weekday() {
        // 1 Oct 2026 is a Thursday
        assert_eq!(DayView::new(d(2026, 10, 16), d(2026, 10, 16)).leading_blanks(), 4);
        // 1 Feb 2026 is a Sunday
        assert_eq!(DayView::new(d(2026, 2, 10), d(2026, 10, 16)).leading_blanks(), 0);
    }

    #[test]
    fn test_cells_cover_the_whole_month() {
        let view = DayView::new(d(2024, 2, 1), d(2024, 2, 1));
        let cells = view.cells();
        assert_eq!(cells.len(), 29);
        assert_eq!(cells[28].date, d(2024, 2, 29));
    }

    #[test]
    fn test_bounds_disable_days() {
        let view = DayView::new(d(2026, 10, 1), d(2026, 10, 16))
            .bounds(Some(d(2026, 10, 16)), Some(d(2026, 10, 20)));
        let enabled: Vec<u32> = view
            .cells()
            .iter()
            .filter(|c| !c.disabled)
            .map(|c| c.day)
            .collect();
        assert_eq!(enabled, vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_today_flag_suppressed_by_selection_and_bounds() {
        let today = d(2026, 10, 16);

        let plain = DayView::new(today, today);
        assert!(plain.cells()[15].today);

        let selected = DayView::new(today, today).selected(Some(today));
        assert!(selected.cells()[15].selected);
        assert!(!selected.cells()[15].today);

        let disabled = DayView::new(today, today).bounds(Some(d(2026, 10, 17)), None);
        assert!(disabled.cells()[15].disabled);
        assert!(!disabled.cells()[15].today);
    }

    #[test]
    fn test_selection_matches_exact_day_only() {
        let view = DayView::new(d(2026, 11, 1), d(2026, 10, 16)).selected(Some(d(2026, 10, 5)));
        assert!(view.cells().iter().all(|c| !c.selected));
    }

    #[test]
    fn test_month_navigation_clamps_day() {
        let date = d(2026, 3, 31);
        assert_eq!(DayViewEvent::PrevMonth.navigate(date), Some(d(2026, 2, 28)));
        assert_eq!(DayViewEvent::NextMonth.navigate(date), Some(d(2026, 4, 30)));
        assert_eq!(DayViewEvent::HeaderClick.navigate(date), None);
    }

    #[test]
    fn test_title_is_thai_month_and_year() {
        let view = DayView::new(d(2026, 1, 20), d(2026, 1, 20));
        assert_eq!(view.title(), "มกราคม 2569");
    }

    #[test]
    fn test_render_grid() {
        let view = DayView::new(d(2026, 10, 1), d(2026, 10, 16));
        let buf = render_widget(&view, 28, 9);

        assert!(buffer_line(&buf, 0).contains("ตุลาคม 2569"));
        assert_eq!(buffer_line(&buf, 1).trim_end(), "");
        assert_eq!(buffer_line(&buf, 2).trim_end(), " อา   จ   อ   พ  พฤ   ศ   ส");
        assert_eq!(buffer_line(&buf, 3).trim_end(), "                  1   2   3");
        assert_eq!(buffer_line(&buf, 4).trim_end(), "  4   5   6   7   8   9  10");
        assert_eq!(buffer_line(&buf, 7).trim_end(), " 25  26  27  28  29  30  31");
        assert_eq!(buffer_line(&buf, 8).trim_end(), "");
    }

    #[test]
    fn test_narrow_area_keeps_all_seven_columns() {
        let view = DayView::new(d(2026, 10, 1), d(2026, 10, 16));
        let narrow = Rect::new(0, 0, 23, 9);
        let buf = render_widget(&view, 23, 9);

        assert_eq!(DayView::cell_width(narrow), 3);
        assert_eq!(buffer_line(&buf, 2).trim_end(), " อา  จ  อ  พ พฤ  ศ  ส");
        assert_eq!(buffer_line(&buf, 3).trim_end(), "              1  2  3");
        assert_eq!(buffer_line(&buf, 7).trim_end(), " 25 26 27 28 29 30 31");

        // Saturday column stays clickable
        assert_eq!(view.cell_rect(narrow, 3), Rect::new(18, 3, 3, 1));
        assert_eq!(view.hit_test(narrow, Position::new(19, 3)), Some(DayViewEvent::Select(3)));
        assert_eq!(view.hit_test(narrow, Position::new(20, 7)), Some(DayViewEvent::Select(31)));
    }

    #[test]
    fn test_render_styles() {
        let theme = test_theme();
        let view = DayView::new(d(2026, 10, 1), d(2026, 10, 16))
            .selected(Some(d(2026, 10, 20)))
            .bounds(Some(d(2026, 10, 2)), None);
        let buf = render_widget(&view, 28, 9);

        // 20 Oct: col 2, week 3
        let selected = view.cell_rect(area(), 20);
        assert_eq!(selected, Rect::new(8, 6, 4, 1));
        assert_eq!(buf[(selected.x, selected.y)].bg, theme.primary);

        // 1 Oct is before min
        let disabled = view.cell_rect(area(), 1);
        assert_eq!(buf[(disabled.x + 3, disabled.y)].fg, theme.muted);

        let today = view.cell_rect(area(), 16);
        assert_eq!(buf[(today.x + 2, today.y)].fg, theme.today);
    }

    #[test]
    fn test_hit_test() {
        let view = DayView::new(d(2026, 10, 1), d(2026, 10, 16));

        assert_eq!(view.hit_test(area(), Position::new(1, 0)), Some(DayViewEvent::PrevMonth));
        assert_eq!(view.hit_test(area(), Position::new(26, 0)), Some(DayViewEvent::NextMonth));
        assert_eq!(view.hit_test(area(), Position::new(12, 0)), Some(DayViewEvent::HeaderClick));
        assert_eq!(view.hit_test(area(), Position::new(16, 3)), Some(DayViewEvent::Select(1)));
        assert_eq!(view.hit_test(area(), Position::new(27, 7)), Some(DayViewEvent::Select(31)));
        // Leading blank and weekday row
        assert_eq!(view.hit_test(area(), Position::new(2, 3)), None);
        assert_eq!(view.hit_test(area(), Position::new(2, 2)), None);
    }

    #[test]
    fn test_disabled_days_have_no_hit_region() {
        let view = DayView::new(d(2026, 10, 1), d(2026, 10, 16)).bounds(Some(d(2026, 10, 16)), None);
        let day15 = view.cell_rect(area(), 15);
        let day16 = view.cell_rect(area(), 16);

        assert_eq!(view.hit_test(area(), day15.as_position()), None);
        assert_eq!(view.hit_test(area(), day16.as_position()), Some(DayViewEvent::Select(16)));
    }
}
