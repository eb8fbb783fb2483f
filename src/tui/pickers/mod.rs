//! Picker widgets built on a shared popup shell.
//!
//! `PopupShell` owns everything the month and date pickers have in common:
//! the open/closed state with the current view mode, the popup side chosen
//! when it opened, the trigger rect recorded at render time and the
//! outside-click subscription held while a popover is open.

pub mod date_picker;
pub mod month_picker;

pub use date_picker::{DatePickerProps, DateViewMode, ThaiDatePicker};
pub use month_picker::{MonthPickerMode, MonthPickerProps, ThaiMonthPicker};

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect, Size},
};
use tracing::debug;

use crate::calendar::{CalendarDate, Clock};
use super::outside_click::{ListenerId, OutsideClickListeners, OutsideClickSubscription};
use super::theme::{Accent, Theme};
use super::viewport::Viewport;
use super::widgets::{compute_position, PopupFrame, PopupHit, PopupLayout, PopupPosition, ResponsivePopup};

/// Called once per committed value
pub type ChangeCallback = Box<dyn FnMut(CalendarDate)>;

/// Environment a picker reads while handling input and rendering
#[derive(Clone, Copy)]
pub struct PickerContext<'a> {
    pub viewport: &'a dyn Viewport,
    pub clock: &'a dyn Clock,
    pub listeners: &'a OutsideClickListeners,
    /// Terminal width below which popups render as a modal
    pub compact_breakpoint: u16,
}

impl PickerContext<'_> {
    pub fn popup_layout(&self) -> PopupLayout {
        PopupLayout::for_width(self.viewport.width(), self.compact_breakpoint)
    }

    pub fn screen(&self) -> Rect {
        self.viewport.area()
    }

    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }
}

/// Common surface the demo page drives its pickers through
pub trait Picker {
    fn is_open(&self) -> bool;

    /// Consumer-driven value update; never fires the change callback
    fn set_value(&mut self, value: Option<CalendarDate>);

    /// Close a popover when a press lands outside its trigger and panel
    fn handle_outside_mouse_down(&mut self, pos: Position, ctx: &PickerContext) -> bool;

    /// Route a click; returns whether this picker consumed it
    fn handle_click(&mut self, pos: Position, ctx: &PickerContext) -> bool;

    /// Render the trigger and record its rect for hit testing
    fn render_trigger(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Render the open popup; no-op while closed
    fn render_popup(&self, buf: &mut Buffer, theme: &Theme, ctx: &PickerContext);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState<M> {
    Closed,
    Open(M),
}

/// Result of routing a click through the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellClick {
    /// The trigger was clicked; the picker toggles
    Trigger,
    /// Inside the view area of the open popup
    Content(Position),
    /// Swallowed by the popup border or padding
    Consumed,
    /// Close button or backdrop; the popup is now closed
    Dismissed,
    /// Not meant for this picker
    Ignored,
}

impl ShellClick {
    pub fn is_handled(&self) -> bool {
        !matches!(self, ShellClick::Ignored)
    }
}

#[derive(Debug)]
pub struct PopupShell<M> {
    state: PopupState<M>,
    position: PopupPosition,
    /// Assumed panel height for the flip decision
    popup_height: u16,
    content: Size,
    accent: Accent,
    trigger_area: Rect,
    outside_click: Option<OutsideClickSubscription>,
}

impl<M: Copy + std::fmt::Debug> PopupShell<M> {
    pub fn new(popup_height: u16, content: Size, accent: Accent) -> Self {
        Self {
            state: PopupState::Closed,
            position: PopupPosition::default(),
            popup_height,
            content,
            accent,
            trigger_area: Rect::default(),
            outside_click: None,
        }
    }

    pub fn state(&self) -> PopupState<M> {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PopupState::Open(_))
    }

    pub fn mode(&self) -> Option<M> {
        match self.state {
            PopupState::Open(mode) => Some(mode),
            PopupState::Closed => None,
        }
    }

    /// Switch the view mode of an open popup; ignored while closed
    pub fn set_mode(&mut self, mode: M) {
        if let PopupState::Open(current) = &mut self.state {
            debug!("PICKER: mode {:?} -> {:?}", current, mode);
            *current = mode;
        }
    }

    pub fn position(&self) -> PopupPosition {
        self.position
    }

    pub fn trigger_area(&self) -> Rect {
        self.trigger_area
    }

    pub fn set_trigger_area(&mut self, area: Rect) {
        self.trigger_area = area;
    }

    /// Open in `mode`, computing the popup side from the trigger rect
    ///
    /// Popovers attach one outside-click listener; modals rely on their backdrop.
    pub fn open(&mut self, mode: M, ctx: &PickerContext) {
        self.position = compute_position(self.trigger_area, ctx.viewport.height(), self.popup_height);
        self.outside_click = None;
        if ctx.popup_layout() == PopupLayout::Popover {
            self.outside_click = Some(ctx.listeners.subscribe());
        }
        self.state = PopupState::Open(mode);
        debug!(
            "PICKER: opened in {:?} ({:?}, {:?})",
            mode,
            ctx.popup_layout(),
            self.position
        );
    }

    pub fn close(&mut self) {
        if self.is_open() {
            debug!("PICKER: closed");
        }
        self.state = PopupState::Closed;
        self.outside_click = None;
    }

    pub fn listener_id(&self) -> Option<ListenerId> {
        self.outside_click.as_ref().map(OutsideClickSubscription::id)
    }

    fn popup(&self, ctx: &PickerContext) -> ResponsivePopup {
        ResponsivePopup::new(ctx.popup_layout(), self.position, self.content).accent(self.accent)
    }

    /// Geometry of the open popup; `None` while closed
    pub fn frame(&self, ctx: &PickerContext) -> Option<PopupFrame> {
        self.is_open()
            .then(|| self.popup(ctx).frame(self.trigger_area, ctx.screen()))
    }

    /// Whether `pos` is on the trigger or the open panel
    pub fn contains(&self, pos: Position, ctx: &PickerContext) -> bool {
        self.trigger_area.contains(pos)
            || self.frame(ctx).is_some_and(|frame| frame.panel.contains(pos))
    }

    /// Close when an attached listener sees a press outside trigger and panel
    pub fn handle_outside_mouse_down(&mut self, pos: Position, ctx: &PickerContext) -> bool {
        let listening = self
            .listener_id()
            .is_some_and(|id| ctx.listeners.is_attached(id));
        if !listening || self.contains(pos, ctx) {
            return false;
        }
        debug!("PICKER: outside click at {:?}", pos);
        self.close();
        true
    }

    pub fn route_click(&mut self, pos: Position, ctx: &PickerContext) -> ShellClick {
        if let Some(frame) = self.frame(ctx) {
            match self.popup(ctx).hit_test(&frame, pos) {
                PopupHit::Close | PopupHit::Backdrop => {
                    self.close();
                    return ShellClick::Dismissed;
                }
                PopupHit::Content(pos) => return ShellClick::Content(pos),
                PopupHit::Panel => return ShellClick::Consumed,
                PopupHit::Outside => {}
            }
        }

        if self.trigger_area.contains(pos) {
            ShellClick::Trigger
        } else {
            ShellClick::Ignored
        }
    }

    /// Draw the popup chrome and return the rect the view renders into
    pub fn render(&self, buf: &mut Buffer, theme: &Theme, ctx: &PickerContext) -> Option<Rect> {
        let frame = self.frame(ctx)?;
        self.popup(ctx).render(&frame, buf, theme);
        Some(frame.content)
    }
}
