//! ThaiMonthPicker - month/year drill-down month selection.
//!
//! Opening resets the browsed date to the value (else today) and the mode to
//! `Month`. The header escalates to the year grid; picking a year returns to
//! the month grid. Picking a month commits the first day of that month.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect, Size},
};
use tracing::debug;

use crate::calendar::{CalendarDate, Unit};
use crate::formatting::ThaiFormat;
use crate::layout_constants::{MONTH_POPUP_CONTENT_HEIGHT, MONTH_POPUP_HEIGHT, POPUP_CONTENT_WIDTH};
use crate::tui::theme::{Accent, Theme};
use crate::tui::widgets::{
    MonthView, MonthViewEvent, PickerTrigger, PopupFrame, RenderableWidget, YearView, YearViewEvent,
};
use super::{ChangeCallback, Picker, PickerContext, PopupShell, ShellClick};

pub const DEFAULT_MONTH_PLACEHOLDER: &str = "เลือกเดือน";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthPickerMode {
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPickerProps {
    pub value: Option<CalendarDate>,
    pub placeholder: String,
}

impl Default for MonthPickerProps {
    fn default() -> Self {
        Self {
            value: None,
            placeholder: DEFAULT_MONTH_PLACEHOLDER.to_string(),
        }
    }
}

pub struct ThaiMonthPicker {
    props: MonthPickerProps,
    view_date: CalendarDate,
    shell: PopupShell<MonthPickerMode>,
    on_change: ChangeCallback,
}

impl ThaiMonthPicker {
    pub fn new(
        props: MonthPickerProps,
        today: CalendarDate,
        on_change: impl FnMut(CalendarDate) + 'static,
    ) -> Self {
        let view_date = props.value.unwrap_or(today);
        Self {
            props,
            view_date,
            shell: PopupShell::new(
                MONTH_POPUP_HEIGHT,
                Size::new(POPUP_CONTENT_WIDTH, MONTH_POPUP_CONTENT_HEIGHT),
                Accent::Secondary,
            ),
            on_change: Box::new(on_change),
        }
    }

    pub fn value(&self) -> Option<CalendarDate> {
        self.props.value
    }

    pub fn set_value(&mut self, value: Option<CalendarDate>) {
        self.props.value = value;
    }

    pub fn view_date(&self) -> CalendarDate {
        self.view_date
    }

    pub fn mode(&self) -> Option<MonthPickerMode> {
        self.shell.mode()
    }

    pub fn is_open(&self) -> bool {
        self.shell.is_open()
    }

    pub fn shell(&self) -> &PopupShell<MonthPickerMode> {
        &self.shell
    }

    pub fn open(&mut self, ctx: &PickerContext) {
        self.view_date = self.props.value.unwrap_or_else(|| ctx.today());
        self.shell.open(MonthPickerMode::Month, ctx);
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

    pub fn handle_click(&mut self, pos: Position, ctx: &PickerContext) -> bool {
        let routed = self.shell.route_click(pos, ctx);
        match routed {
            ShellClick::Trigger => self.toggle(ctx),
            ShellClick::Content(pos) => {
                if let Some(frame) = self.shell.frame(ctx) {
                    match self.shell.mode() {
                        Some(MonthPickerMode::Month) => {
                            if let Some(event) = self.month_view().hit_test(frame.content, pos) {
                                self.handle_month_event(event);
                            }
                        }
                        Some(MonthPickerMode::Year) => {
                            if let Some(event) = self.year_view(ctx).hit_test(frame.content, pos) {
                                self.handle_year_event(event);
                            }
                        }
                        None => {}
                    }
                }
            }
            ShellClick::Consumed | ShellClick::Dismissed | ShellClick::Ignored => {}
        }
        routed.is_handled()
    }

    pub fn handle_month_event(&mut self, event: MonthViewEvent) {
        if self.shell.mode() != Some(MonthPickerMode::Month) {
            return;
        }
        match event {
            MonthViewEvent::PrevYear | MonthViewEvent::NextYear => {
                if let Some(date) = event.navigate(self.view_date) {
                    self.view_date = date;
                }
            }
            MonthViewEvent::HeaderClick => self.shell.set_mode(MonthPickerMode::Year),
            MonthViewEvent::Select(month0) => {
                let date = self.view_date.with_month0(month0).start_of(Unit::Month);
                debug!("MONTH_PICKER: committed {}", date);
                (self.on_change)(date);
                self.close();
            }
        }
    }

    pub fn handle_year_event(&mut self, event: YearViewEvent) {
        if self.shell.mode() != Some(MonthPickerMode::Year) {
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
                self.shell.set_mode(MonthPickerMode::Month);
            }
        }
    }

    fn month_view(&self) -> MonthView {
        MonthView::new(self.view_date, self.props.value).accent(Accent::Secondary)
    }

    fn year_view(&self, ctx: &PickerContext) -> YearView {
        YearView::new(self.view_date, ctx.today())
    }

    pub fn trigger_label(&self) -> Option<String> {
        self.props.value.map(|value| value.format_thai(ThaiFormat::MonthYear))
    }

    pub fn render_trigger(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.shell.set_trigger_area(area);
        let label = self.trigger_label();
        PickerTrigger::new(label.as_deref(), &self.props.placeholder)
            .open(self.is_open())
            .accent(Accent::Secondary)
            .render(area, buf, theme);
    }

    pub fn popup_frame(&self, ctx: &PickerContext) -> Option<PopupFrame> {
        self.shell.frame(ctx)
    }

    pub fn render_popup(&self, buf: &mut Buffer, theme: &Theme, ctx: &PickerContext) {
        let Some(content) = self.shell.render(buf, theme, ctx) else {
            return;
        };
        match self.shell.mode() {
            Some(MonthPickerMode::Month) => self.month_view().render(content, buf, theme),
            Some(MonthPickerMode::Year) => self.year_view(ctx).render(content, buf, theme),
            None => {}
        }
    }
}

impl Picker for ThaiMonthPicker {
    fn is_open(&self) -> bool {
        ThaiMonthPicker::is_open(self)
    }

    fn set_value(&mut self, value: Option<CalendarDate>) {
        ThaiMonthPicker::set_value(self, value);
    }

    fn handle_outside_mouse_down(&mut self, pos: Position, ctx: &PickerContext) -> bool {
        ThaiMonthPicker::handle_outside_mouse_down(self, pos, ctx)
    }

    fn handle_click(&mut self, pos: Position, ctx: &PickerContext) -> bool {
        ThaiMonthPicker::handle_click(self, pos, ctx)
    }

    fn render_trigger(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        ThaiMonthPicker::render_trigger(self, area, buf, theme);
    }

    fn render_popup(&self, buf: &mut Buffer, theme: &Theme, ctx: &PickerContext) {
        ThaiMonthPicker::render_popup(self, buf, theme, ctx);
    }
}
