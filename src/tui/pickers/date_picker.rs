//! ThaiDatePicker - day/month/year drill-down date selection.
//!
//! States are `Closed` plus one open state per view mode. Opening always
//! resets the browsed date (value, else min, else today) and the mode (`Day`).
//! Header clicks drill up (Day -> Month -> Year); choosing a year returns to
//! Month and choosing a month returns to Day. Only choosing an enabled day
//! commits a value.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect, Size},
};
use tracing::debug;

use crate::calendar::{is_selectable, CalendarDate};
use crate::formatting::ThaiFormat;
use crate::layout_constants::{DATE_POPUP_CONTENT_HEIGHT, DATE_POPUP_HEIGHT, POPUP_CONTENT_WIDTH};
use crate::tui::theme::{Accent, Theme};
use crate::tui::widgets::{
    DayView, DayViewEvent, MonthView, MonthViewEvent, PickerTrigger, PopupFrame, RenderableWidget,
    YearView, YearViewEvent,
};
use super::{ChangeCallback, Picker, PickerContext, PopupShell, ShellClick};

pub const DEFAULT_DATE_PLACEHOLDER: &str = "เลือกวันที่";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateViewMode {
    Day,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerProps {
    pub value: Option<CalendarDate>,
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    pub placeholder: String,
}

impl Default for DatePickerProps {
    fn default() -> Self {
        Self {
            value: None,
            min_date: None,
            max_date: None,
            placeholder: DEFAULT_DATE_PLACEHOLDER.to_string(),
        }
    }
}

pub struct ThaiDatePicker {
    props: DatePickerProps,
    view_date: CalendarDate,
    shell: PopupShell<DateViewMode>,
    on_change: ChangeCallback,
}

impl ThaiDatePicker {
    pub fn new(
        props: DatePickerProps,
        today: CalendarDate,
        on_change: impl FnMut(CalendarDate) + 'static,
    ) -> Self {
        let view_date = Self::initial_view_date(&props, today);
        Self {
            props,
            view_date,
            shell: PopupShell::new(
                DATE_POPUP_HEIGHT,
                Size::new(POPUP_CONTENT_WIDTH, DATE_POPUP_CONTENT_HEIGHT),
                Accent::Primary,
            ),
            on_change: Box::new(on_change),
        }
    }

    fn initial_view_date(props: &DatePickerProps, today: CalendarDate) -> CalendarDate {
        props.value.or(props.min_date).unwrap_or(today)
    }

    pub fn props(&self) -> &DatePickerProps {
        &self.props
    }

    pub fn value(&self) -> Option<CalendarDate> {
        self.props.value
    }

    /// Consumer-driven value update; never fires the change callback
    pub fn set_value(&mut self, value: Option<CalendarDate>) {
        self.props.value = value;
    }

    pub fn view_date(&self) -> CalendarDate {
        self.view_date
    }

    pub fn mode(&self) -> Option<DateViewMode> {
        self.shell.mode()
    }

    pub fn is_open(&self) -> bool {
        self.shell.is_open()
    }

    pub fn shell(&self) -> &PopupShell<DateViewMode> {
        &self.shell
    }

    pub fn open(&mut self, ctx: &PickerContext) {
        self.view_date = Self::initial_view_date(&self.props, ctx.today());
        self.shell.open(DateViewMode::Day, ctx);
    }

    pub fn close(&mut self) {
        self.shell.close();
    }

    pub fn toggle(&mut self, ctx: &PickerContext) {
        if self.is_open() {
            self.close();
        } else {
            self.open(ctx);
        }
    }

    pub fn handle_outside_mouse_down(&mut self, pos: Position, ctx: &PickerContext) -> bool {
        self.shell.handle_outside_mouse_down(pos, ctx)
    }

    /// Route a click; returns whether this picker consumed it
    pub fn handle_click(&mut self, pos: Position, ctx: &PickerContext) -> bool {
        let routed = self.shell.route_click(pos, ctx);
        match routed {
            ShellClick::Trigger => self.toggle(ctx),
            ShellClick::Content(pos) => self.handle_content_click(pos, ctx),
            ShellClick::Consumed | ShellClick::Dismissed | ShellClick::Ignored => {}
        }
        routed.is_handled()
    }

    fn handle_content_click(&mut self, pos: Position, ctx: &PickerContext) {
        let Some(frame) = self.shell.frame(ctx) else {
            return;
        };
        let area = frame.content;
        match self.shell.mode() {
            Some(DateViewMode::Day) => {
                if let Some(event) = self.day_view(ctx).hit_test(area, pos) {
                    self.handle_day_event(event);
                }
            }
            Some(DateViewMode::Month) => {
                if let Some(event) = self.month_view().hit_test(area, pos) {
                    self.handle_month_event(event);
                }
            }
            Some(DateViewMode::Year) => {
                if let Some(event) = self.year_view(ctx).hit_test(area, pos) {
                    self.handle_year_event(event);
                }
            }
            None => {}
        }
    }

    pub fn handle_day_event(&mut self, event: DayViewEvent) {
        if self.shell.mode() != Some(DateViewMode::Day) {
            return;
        }
        match event {
            DayViewEvent::PrevMonth | DayViewEvent::NextMonth => {
                if let Some(date) = event.navigate(self.view_date) {
                    self.view_date = date;
                }
            }
            DayViewEvent::HeaderClick => self.shell.set_mode(DateViewMode::Month),
            DayViewEvent::Select(day) => self.commit_day(day),
        }
    }

    pub fn handle_month_event(&mut self, event: MonthViewEvent) {
        if self.shell.mode() != Some(DateViewMode::Month) {
            return;
        }
        match event {
            MonthViewEvent::PrevYear | MonthViewEvent::NextYear => {
                if let Some(date) = event.navigate(self.view_date) {
                    self.view_date = date;
                }
            }
            MonthViewEvent::HeaderClick => self.shell.set_mode(DateViewMode::Year),
            MonthViewEvent::Select(month0) => {
                self.view_date = self.view_date.with_month0(month0);
                self.shell.set_mode(DateViewMode::Day);
            }
        }
    }

    pub fn handle_year_event(&mut self, event: YearViewEvent) {
        if self.shell.mode() != Some(DateViewMode::Year) {
            return;
        }
        match event {
            YearViewEvent::PrevPage | YearViewEvent::NextPage => {
                if let Some(date) = event.navigate(self.view_date) {
                    self.view_date = date;
                }
            }
            YearViewEvent::Select(year) => {
                self.view_date = self.view_date.with_year(year);
                self.shell.set_mode(DateViewMode::Month);
            }
        }
    }

    fn commit_day(&mut self, day: u32) {
        let date = self.view_date.with_day(day);
        if !is_selectable(&date, self.props.min_date.as_ref(), self.props.max_date.as_ref()) {
            debug!("DATE_PICKER: ignored disabled day {}", date);
            return;
        }
        debug!("DATE_PICKER: committed {}", date);
        (self.on_change)(date);
        self.close();
    }

    fn day_view(&self, ctx: &PickerContext) -> DayView {
        DayView::new(self.view_date, ctx.today())
            .selected(self.props.value)
            .bounds(self.props.min_date, self.props.max_date)
    }

    fn month_view(&self) -> MonthView {
        MonthView::new(self.view_date, self.props.value).accent(Accent::Primary)
    }

    fn year_view(&self, ctx: &PickerContext) -> YearView {
        YearView::new(self.view_date, ctx.today())
    }

    pub fn trigger_label(&self) -> Option<String> {
        self.props.value.map(|value| value.format_thai(ThaiFormat::Long))
    }

    /// Render the trigger field and remember where it is for hit testing
    pub fn render_trigger(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.shell.set_trigger_area(area);
        let label = self.trigger_label();
        PickerTrigger::new(label.as_deref(), &self.props.placeholder)
            .open(self.is_open())
            .accent(Accent::Primary)
            .render(area, buf, theme);
    }

    pub fn popup_frame(&self, ctx: &PickerContext) -> Option<PopupFrame> {
        self.shell.frame(ctx)
    }

    /// Render the open popup on top of everything else; no-op while closed
    pub fn render_popup(&self, buf: &mut Buffer, theme: &Theme, ctx: &PickerContext) {
        let Some(content) = self.shell.render(buf, theme, ctx) else {
            return;
        };
        match self.shell.mode() {
            Some(DateViewMode::Day) => self.day_view(ctx).render(content, buf, theme),
            Some(DateViewMode::Month) => self.month_view().render(content, buf, theme),
            Some(DateViewMode::Year) => self.year_view(ctx).render(content, buf, theme),
            None => {}
        }
    }
}

impl Picker for ThaiDatePicker {
    fn is_open(&self) -> bool {
        ThaiDatePicker::is_open(self)
    }

    fn set_value(&mut self, value: Option<CalendarDate>) {
        ThaiDatePicker::set_value(self, value);
    }

    fn handle_outside_mouse_down(&mut self, pos: Position, ctx: &PickerContext) -> bool {
        ThaiDatePicker::handle_outside_mouse_down(self, pos, ctx)
    }

    fn handle_click(&mut self, pos: Position, ctx: &PickerContext) -> bool {
        ThaiDatePicker::handle_click(self, pos, ctx)
    }

    fn render_trigger(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        ThaiDatePicker::render_trigger(self, area, buf, theme);
    }

    fn render_popup(&self, buf: &mut Buffer, theme: &Theme, ctx: &PickerContext) {
        ThaiDatePicker::render_popup(self, buf, theme, ctx);
    }
}
