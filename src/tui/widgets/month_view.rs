/// MonthView - 12 month buttons for the browsed year
///
/// Highlighting is year-scoped: a month is selected only when the committed
/// value has both the same month and the same year as the browsed date.
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};

use crate::calendar::{CalendarDate, Unit};
use crate::formatting::{month_abbrev, BUDDHIST_ERA_PREFIX};
use crate::tui::theme::{Accent, Theme};
use super::nav_header::{NavHeader, NavHit};
use super::{choice_grid, render_centered, RenderableWidget};

/// Events emitted by the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthViewEvent {
    PrevYear,
    NextYear,
    /// Drill up to the year grid
    HeaderClick,
    /// 0-based month index
    Select(u32),
}

impl MonthViewEvent {
    /// Browsed date after a paging event; `None` for everything else
    pub fn navigate(&self, view_date: CalendarDate) -> Option<CalendarDate> {
        match self {
            Self::PrevYear => Some(view_date.subtract(1, Unit::Year)),
            Self::NextYear => Some(view_date.add(1, Unit::Year)),
            Self::HeaderClick | Self::Select(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    pub month0: u32,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct MonthView {
    view_date: CalendarDate,
    selected: Option<CalendarDate>,
    accent: Accent,
}

impl MonthView {
    pub fn new(view_date: CalendarDate, selected: Option<CalendarDate>) -> Self {
        Self {
            view_date,
            selected,
            accent: Accent::Secondary,
        }
    }

    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    pub fn cells(&self) -> Vec<MonthCell> {
        (0..12)
            .map(|month0| MonthCell {
                month0,
                label: month_abbrev(month0),
                selected: self.selected.is_some_and(|selected| {
                    selected.month0() == month0 && selected.year() == self.view_date.year()
                }),
            })
            .collect()
    }

    pub fn title(&self) -> String {
        format!("{} {}", BUDDHIST_ERA_PREFIX, self.view_date.buddhist_year())
    }

    pub fn hit_test(&self, area: Rect, pos: Position) -> Option<MonthViewEvent> {
        let title = self.title();
        match NavHeader::new(&title, true).hit_test(area, pos) {
            Some(NavHit::Prev) => return Some(MonthViewEvent::PrevYear),
            Some(NavHit::Next) => return Some(MonthViewEvent::NextYear),
            Some(NavHit::Title) => return Some(MonthViewEvent::HeaderClick),
            None => {}
        }

        choice_grid(area)
            .iter()
            .position(|rect| rect.contains(pos))
            .map(|index| MonthViewEvent::Select(index as u32))
    }
}

impl RenderableWidget for MonthView {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let title = self.title();
        NavHeader::new(&title, true).render(
            area,
            buf,
            theme.nav_style(self.accent),
            theme.header_style(),
        );

        for (cell, rect) in self.cells().iter().zip(choice_grid(area)) {
            let style = if cell.selected {
                theme.selected_style(self.accent)
            } else {
                theme.normal_style()
            };
            render_centered(cell.label, rect, buf, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(super::GRID_TOP_OFFSET + crate::layout_constants::CHOICE_GRID_ROWS)
    }
}
