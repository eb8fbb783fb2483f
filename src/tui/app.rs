//! Demo page: three picker sections stacked in a centered column.
//!
//! Picker callbacks only send `Action::Committed` over the action channel.
//! The app drains the channel between frames, stores each value and pushes it
//! back into its picker with `set_value`, so the page is the single owner of
//! the selected values.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::calendar::{CalendarDate, Clock, Unit};
use crate::config::Config;
use crate::formatting::ThaiFormat;
use crate::layout_constants::{PAGE_MAX_WIDTH, TRIGGER_HEIGHT};
use super::action::{Action, PickerSlot};
use super::outside_click::OutsideClickListeners;
use super::pickers::{
    DatePickerProps, MonthPickerProps, Picker, PickerContext, ThaiDatePicker, ThaiMonthPicker,
};
use super::theme::Theme;
use super::viewport::Viewport;
use super::widgets::{render_horizontal_separator, render_section_header};

pub const MONTH_SECTION_TITLE: &str = "1. เลือกเดือน (Month Picker)";
pub const MONTH_SECTION_DESCRIPTION: &str = "Responsive Modal/Popover";
pub const MIN_SECTION_TITLE: &str = "2. กำหนดขั้นต่ำ (Min Date)";
pub const MIN_SECTION_DESCRIPTION: &str = "Mobile First: แสดงเป็น Modal บนมือถือ";
pub const MIN_LABEL: &str = "วันที่เริ่มงาน";
pub const RANGE_SECTION_TITLE: &str = "3. กำหนดช่วง (Range Limit)";
pub const RANGE_SECTION_DESCRIPTION: &str = "Desktop: แสดงเป็น Popover";
pub const RANGE_LABEL: &str = "วันที่นัดหมาย";
pub const RANGE_INFO_TITLE: &str = "ช่วงที่เลือกได้:";
pub const QUIT_HINT: &str = "q: quit";

/// Everything the pickers read from outside themselves
pub struct Environment {
    pub viewport: Box<dyn Viewport>,
    pub clock: Box<dyn Clock>,
    pub listeners: OutsideClickListeners,
    pub compact_breakpoint: u16,
}

impl Environment {
    pub fn ctx(&self) -> PickerContext<'_> {
        PickerContext {
            viewport: self.viewport.as_ref(),
            clock: self.clock.as_ref(),
            listeners: &self.listeners,
            compact_breakpoint: self.compact_breakpoint,
        }
    }
}

/// Values owned by the page, one per section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoValues {
    pub month: Option<CalendarDate>,
    pub min_date: Option<CalendarDate>,
    pub range_date: Option<CalendarDate>,
}

/// Rows of the demo column, computed the same way for rendering and hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub column: Rect,
    pub month_trigger: Rect,
    pub min_trigger: Rect,
    pub range_trigger: Rect,
}

impl PageLayout {
    pub fn new(area: Rect) -> Self {
        let width = area.width.min(PAGE_MAX_WIDTH);
        let column = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);
        let trigger = |row: u16| Rect::new(column.x, column.y + row, column.width, TRIGGER_HEIGHT);
        Self {
            column,
            month_trigger: trigger(3),
            min_trigger: trigger(12),
            range_trigger: trigger(21),
        }
    }

    fn row(&self, offset: u16) -> u16 {
        self.column.y + offset
    }
}

struct Pickers {
    month: ThaiMonthPicker,
    min_date: ThaiDatePicker,
    range_date: ThaiDatePicker,
}

impl Pickers {
    fn all(&self) -> [&dyn Picker; 3] {
        [&self.month, &self.min_date, &self.range_date]
    }

    fn all_mut(&mut self) -> [&mut dyn Picker; 3] {
        [&mut self.month, &mut self.min_date, &mut self.range_date]
    }

    fn get_mut(&mut self, slot: PickerSlot) -> &mut dyn Picker {
        match slot {
            PickerSlot::Month => &mut self.month,
            PickerSlot::MinDate => &mut self.min_date,
            PickerSlot::RangeDate => &mut self.range_date,
        }
    }
}

fn commit_sender(
    tx: &mpsc::UnboundedSender<Action>,
    slot: PickerSlot,
) -> impl FnMut(CalendarDate) + 'static {
    let tx = tx.clone();
    move |date| {
        if tx.send(Action::Committed { slot, date }).is_err() {
            debug!("ACTION: channel closed, dropping commit for {:?}", slot);
        }
    }
}

pub struct App {
    env: Environment,
    pickers: Pickers,
    values: DemoValues,
    range_min: CalendarDate,
    range_max: CalendarDate,
    theme: Theme,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, viewport: Box<dyn Viewport>, clock: Box<dyn Clock>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let today = clock.today();
        let range_max = today.add(2, Unit::Month);
        let values = DemoValues {
            month: Some(today),
            ..Default::default()
        };

        let pickers = Pickers {
            month: ThaiMonthPicker::new(
                MonthPickerProps {
                    value: values.month,
                    ..Default::default()
                },
                today,
                commit_sender(&action_tx, PickerSlot::Month),
            ),
            min_date: ThaiDatePicker::new(
                DatePickerProps {
                    min_date: Some(today),
                    ..Default::default()
                },
                today,
                commit_sender(&action_tx, PickerSlot::MinDate),
            ),
            range_date: ThaiDatePicker::new(
                DatePickerProps {
                    min_date: Some(today),
                    max_date: Some(range_max),
                    ..Default::default()
                },
                today,
                commit_sender(&action_tx, PickerSlot::RangeDate),
            ),
        };

        Self {
            env: Environment {
                viewport,
                clock,
                listeners: OutsideClickListeners::new(),
                compact_breakpoint: config.compact_breakpoint,
            },
            pickers,
            values,
            range_min: today,
            range_max,
            theme: Theme::from_config(&config.theme),
            action_tx,
            action_rx,
            should_quit: false,
        }
    }

    pub fn values(&self) -> DemoValues {
        self.values
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn listeners(&self) -> &OutsideClickListeners {
        &self.env.listeners
    }

    pub fn is_open(&self, slot: PickerSlot) -> bool {
        match slot {
            PickerSlot::Month => self.pickers.month.is_open(),
            PickerSlot::MinDate => self.pickers.min_date.is_open(),
            PickerSlot::RangeDate => self.pickers.range_date.is_open(),
        }
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        match action {
            Action::Click(pos) => self.handle_click(pos),
            Action::Committed { slot, date } => {
                debug!("ACTION: {:?} committed {}", slot, date);
                match slot {
                    PickerSlot::Month => self.values.month = Some(date),
                    PickerSlot::MinDate => self.values.min_date = Some(date),
                    PickerSlot::RangeDate => self.values.range_date = Some(date),
                }
                self.pickers.get_mut(slot).set_value(Some(date));
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Outside-click listeners see the press first, then open popups, then triggers
    fn handle_click(&mut self, pos: Position) {
        let ctx = self.env.ctx();
        let mut pickers = self.pickers.all_mut();

        for picker in pickers.iter_mut() {
            picker.handle_outside_mouse_down(pos, &ctx);
        }

        for picker in pickers.iter_mut().filter(|picker| picker.is_open()) {
            if picker.handle_click(pos, &ctx) {
                return;
            }
        }

        for picker in pickers.iter_mut() {
            if picker.handle_click(pos, &ctx) {
                return;
            }
        }
        trace!("MOUSE: click at {:?} hit nothing", pos);
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let layout = PageLayout::new(area);
        let column = layout.column;
        let theme = &self.theme;

        render_section_header(
            MONTH_SECTION_TITLE,
            Some(MONTH_SECTION_DESCRIPTION),
            0,
            column,
            layout.row(1),
            buf,
            theme,
        );
        self.pickers.month.render_trigger(layout.month_trigger, buf, theme);
        render_horizontal_separator(column.width as usize, 0, column, layout.row(7), buf, theme);

        render_section_header(
            MIN_SECTION_TITLE,
            Some(MIN_SECTION_DESCRIPTION),
            0,
            column,
            layout.row(9),
            buf,
            theme,
        );
        put_line(buf, column, layout.row(11), MIN_LABEL, theme.normal_style());
        self.pickers.min_date.render_trigger(layout.min_trigger, buf, theme);
        render_horizontal_separator(column.width as usize, 0, column, layout.row(16), buf, theme);

        render_section_header(
            RANGE_SECTION_TITLE,
            Some(RANGE_SECTION_DESCRIPTION),
            0,
            column,
            layout.row(18),
            buf,
            theme,
        );
        put_line(buf, column, layout.row(20), RANGE_LABEL, theme.normal_style());
        self.pickers.range_date.render_trigger(layout.range_trigger, buf, theme);
        put_line(buf, column, layout.row(24), RANGE_INFO_TITLE, theme.header_style());
        put_line(buf, column, layout.row(25), &self.range_info(), theme.normal_style());

        put_line(buf, column, layout.row(27), QUIT_HINT, theme.hint_style());

        let ctx = self.env.ctx();
        for picker in self.pickers.all() {
            picker.render_popup(buf, theme, &ctx);
        }
    }

    pub fn range_info(&self) -> String {
        format!(
            "Min: {}   Max: {}",
            self.range_min.format_thai(ThaiFormat::Short),
            self.range_max.format_thai(ThaiFormat::Short)
        )
    }
}

/// Write one clipped line inside `area`; rows below it are skipped
fn put_line(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let area = area.intersection(buf.area);
    if y < area.y || y >= area.bottom() {
        return;
    }
    buf.set_stringn(area.x, y, text, area.width as usize, style);
}
