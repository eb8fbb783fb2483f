/// YearView - 12-year page of Buddhist Era years
///
/// The page is aligned to multiples of 12 Gregorian years (`floor(year / 12) * 12`),
/// so browsing never re-centers on the selected year. Buttons show `year + 543`.
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};

use crate::calendar::{page_start, CalendarDate, Unit, YEARS_PER_PAGE};
use crate::formatting::{buddhist_year, format_year_range};
use crate::tui::theme::{Accent, Theme};
use super::nav_header::{NavHeader, NavHit};
use super::{choice_grid, render_centered, RenderableWidget};

/// Events emitted by the year grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearViewEvent {
    PrevPage,
    NextPage,
    /// Gregorian year chosen by the user
    Select(i32),
}

impl YearViewEvent {
    /// Browsed date after a paging event; `None` for selections
    pub fn navigate(&self, view_date: CalendarDate) -> Option<CalendarDate> {
        match self {
            Self::PrevPage => Some(view_date.subtract(1, Unit::Decade)),
            Self::NextPage => Some(view_date.add(1, Unit::Decade)),
            Self::Select(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCell {
    pub year: i32,
    /// Equals the browsed year
    pub selected: bool,
    /// Equals the real-world current year and is not already selected
    pub current: bool,
}

#[derive(Debug, Clone)]
pub struct YearView {
    view_date: CalendarDate,
    today: CalendarDate,
}

impl YearView {
    pub fn new(view_date: CalendarDate, today: CalendarDate) -> Self {
        Self { view_date, today }
    }

    pub fn page_start(&self) -> i32 {
        page_start(self.view_date.year())
    }

    pub fn page_end(&self) -> i32 {
        self.page_start() + YEARS_PER_PAGE - 1
    }

    pub fn cells(&self) -> Vec<YearCell> {
        let start = self.page_start();
        (start..start + YEARS_PER_PAGE)
            .map(|year| {
                let selected = year == self.view_date.year();
                YearCell {
                    year,
                    selected,
                    current: !selected && year == self.today.year(),
                }
            })
            .collect()
    }

    pub fn title(&self) -> String {
        format_year_range(self.page_start(), self.page_end())
    }

    pub fn hit_test(&self, area: Rect, pos: Position) -> Option<YearViewEvent> {
        let title = self.title();
        match NavHeader::new(&title, false).hit_test(area, pos) {
            Some(NavHit::Prev) => return Some(YearViewEvent::PrevPage),
            Some(NavHit::Next) => return Some(YearViewEvent::NextPage),
            Some(NavHit::Title) | None => {}
        }

        self.cells()
            .iter()
            .zip(choice_grid(area))
            .find(|(_, rect)| rect.contains(pos))
            .map(|(cell, _)| YearViewEvent::Select(cell.year))
    }
}

impl RenderableWidget for YearView {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let title = self.title();
        NavHeader::new(&title, false).render(
            area,
            buf,
            theme.nav_style(Accent::Secondary),
            theme.header_style(),
        );

        for (cell, rect) in self.cells().iter().zip(choice_grid(area)) {
            let style = if cell.selected {
                theme.selected_style(Accent::Secondary)
            } else if cell.current {
                theme.current_year_style()
            } else {
                theme.normal_style()
            };
            render_centered(&buddhist_year(cell.year).to_string(), rect, buf, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(super::GRID_TOP_OFFSET + crate::layout_constants::CHOICE_GRID_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, d};
    use crate::tui::widgets::testing::render_widget;

    #[test]
    fn test_page_is_aligned_to_twelve() {
        let view = YearView::new(d(2026, 5, 1), d(2026, 10, 16));
        assert_eq!(view.page_start(), 2016);
        assert_eq!(view.page_end(), 2027);

        let years: Vec<i32> = view.cells().iter().map(|c| c.year).collect();
        assert_eq!(years, (2016..=2027).collect::<Vec<_>>());
    }

    #[test]
    fn test_selected_and_current_flags() {
        let view = YearView::new(d(2024, 1, 1), d(2026, 10, 16));
        let cells = view.cells();

        let selected: Vec<i32> = cells.iter().filter(|c| c.selected).map(|c| c.year).collect();
        let current: Vec<i32> = cells.iter().filter(|c| c.current).map(|c| c.year).collect();
        assert_eq!(selected, vec![2024]);
        assert_eq!(current, vec![2026]);
    }

    #[test]
    fn test_current_suppressed_when_selected() {
        let view = YearView::new(d(2026, 1, 1), d(2026, 10, 16));
        assert!(view.cells().iter().all(|c| !c.current));
    }

    #[test]
    fn test_title_in_buddhist_era() {
        let view = YearView::new(d(2026, 1, 1), d(2026, 1, 1));
        assert_eq!(view.title(), "2559 - 2570");
    }

    #[test]
    fn test_paging_shifts_twelve_years() {
        let date = d(2026, 3, 15);
        assert_eq!(YearViewEvent::PrevPage.navigate(date), Some(d(2014, 3, 15)));
        assert_eq!(YearViewEvent::NextPage.navigate(date), Some(d(2038, 3, 15)));
        assert_eq!(YearViewEvent::Select(2020).navigate(date), None);
    }

    #[test]
    fn test_render() {
        let view = YearView::new(d(2026, 1, 1), d(2026, 10, 16));
        let buf = render_widget(&view, 27, 6);

        assert_buffer(
            &buf,
            &[
                " ‹      2559 - 2570      › ",
                "",
                "  2559     2560     2561",
                "  2562     2563     2564",
                "  2565     2566     2567",
                "  2568     2569     2570",
            ],
        );
    }

    #[test]
    fn test_hit_test() {
        let view = YearView::new(d(2026, 1, 1), d(2026, 10, 16));
        let area = Rect::new(0, 0, 27, 6);

        assert_eq!(view.hit_test(area, Position::new(1, 0)), Some(YearViewEvent::PrevPage));
        assert_eq!(view.hit_test(area, Position::new(25, 0)), Some(YearViewEvent::NextPage));
        // Title is not interactive
        assert_eq!(view.hit_test(area, Position::new(12, 0)), None);
        assert_eq!(view.hit_test(area, Position::new(0, 2)), Some(YearViewEvent::Select(2016)));
        assert_eq!(view.hit_test(area, Position::new(10, 5)), Some(YearViewEvent::Select(2026)));
        assert_eq!(view.hit_test(area, Position::new(20, 5)), Some(YearViewEvent::Select(2027)));
        assert_eq!(view.hit_test(area, Position::new(5, 1)), None);
    }
}
