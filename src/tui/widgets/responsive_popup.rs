/// ResponsivePopup - adaptive container for picker panels
///
/// Narrow terminals get a centered modal over a dimmed backdrop with a `[x]`
/// close button. Wider terminals get a popover anchored to the trigger, opening
/// below it unless the space below is too short and the space above is larger.
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect, Size},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::layout_constants::POPUP_PADDING_X;
use crate::tui::theme::{Accent, Theme};

pub const CLOSE_LABEL: &str = "[x]";
const CLOSE_WIDTH: u16 = 3;

/// Side of the trigger a popover opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPosition {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupLayout {
    /// Centered over a backdrop (narrow terminals)
    Modal,
    /// Anchored to the trigger (wide terminals)
    Popover,
}

impl PopupLayout {
    /// Layout for the current terminal width; the breakpoint itself is a popover
    pub fn for_width(width: u16, compact_breakpoint: u16) -> Self {
        if width < compact_breakpoint {
            Self::Modal
        } else {
            Self::Popover
        }
    }
}

/// Choose the side of `trigger` to open on
///
/// Flips to `Top` only when the panel does not fit below and there is
/// strictly more room above than below.
pub fn compute_position(trigger: Rect, viewport_height: u16, popup_height: u16) -> PopupPosition {
    let space_below = viewport_height.saturating_sub(trigger.bottom());
    let space_above = trigger.y;
    if space_below < popup_height && space_above > space_below {
        PopupPosition::Top
    } else {
        PopupPosition::Bottom
    }
}

/// Resolved screen geometry of an open popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupFrame {
    /// Bordered panel
    pub panel: Rect,
    /// Where the picker view renders
    pub content: Rect,
    /// Modal only
    pub close_button: Option<Rect>,
    /// Modal only: the whole screen behind the panel
    pub backdrop: Option<Rect>,
}

/// Where a click landed relative to an open popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupHit {
    Content(Position),
    /// Panel border or padding
    Panel,
    Close,
    Backdrop,
    /// Popover only: anywhere not on the panel
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsivePopup {
    pub layout: PopupLayout,
    pub position: PopupPosition,
    /// Size the picker view asks for
    pub content: Size,
    pub accent: Accent,
}

impl ResponsivePopup {
    pub fn new(layout: PopupLayout, position: PopupPosition, content: Size) -> Self {
        Self {
            layout,
            position,
            content,
            accent: Accent::Primary,
        }
    }

    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    pub fn frame(&self, anchor: Rect, screen: Rect) -> PopupFrame {
        match self.layout {
            PopupLayout::Modal => self.modal_frame(screen),
            PopupLayout::Popover => self.popover_frame(anchor, screen),
        }
    }

    fn modal_frame(&self, screen: Rect) -> PopupFrame {
        let max_width = (screen.width as u32 * 9 / 10) as u16;
        let width = (self.content.width + 2 + 2 * POPUP_PADDING_X).min(max_width);
        // Extra row for the close button
        let height = (self.content.height + 3).min(screen.height);
        let panel = Rect::new(
            screen.x + (screen.width - width) / 2,
            screen.y + (screen.height - height) / 2,
            width,
            height,
        );

        let inner = inner_rect(panel);
        let close_x = inner.right().saturating_sub(POPUP_PADDING_X + CLOSE_WIDTH).max(inner.x);
        let close_button = Rect::new(close_x, inner.y, CLOSE_WIDTH, 1).intersection(inner);
        let content = Rect::new(
            inner.x + POPUP_PADDING_X,
            inner.y + 1,
            inner.width.saturating_sub(2 * POPUP_PADDING_X),
            inner.height.saturating_sub(1),
        )
        .intersection(inner);

        PopupFrame {
            panel,
            content,
            close_button: Some(close_button),
            backdrop: Some(screen),
        }
    }

    fn popover_frame(&self, anchor: Rect, screen: Rect) -> PopupFrame {
        let width = (self.content.width + 2 + 2 * POPUP_PADDING_X).min(screen.width);
        let x = anchor.x.min(screen.right().saturating_sub(width)).max(screen.x);
        // Shrink to the rows on the chosen side so the panel never covers its trigger
        let (y, height) = match self.position {
            PopupPosition::Bottom => {
                let room = screen.bottom().saturating_sub(anchor.bottom());
                (anchor.bottom(), (self.content.height + 2).min(room))
            }
            PopupPosition::Top => {
                let room = anchor.y.saturating_sub(screen.y);
                let height = (self.content.height + 2).min(room);
                (anchor.y - height, height)
            }
        };
        let panel = Rect::new(x, y, width, height).intersection(screen);

        let inner = inner_rect(panel);
        let content = Rect::new(
            inner.x + POPUP_PADDING_X,
            inner.y,
            inner.width.saturating_sub(2 * POPUP_PADDING_X),
            inner.height,
        )
        .intersection(inner);

        PopupFrame {
            panel,
            content,
            close_button: None,
            backdrop: None,
        }
    }

    /// Draw the backdrop, panel and close button. The caller renders the view into `frame.content`.
    pub fn render(&self, frame: &PopupFrame, buf: &mut Buffer, theme: &Theme) {
        if let Some(backdrop) = frame.backdrop {
            buf.set_style(backdrop.intersection(buf.area), theme.backdrop_style());
        }

        let panel = frame.panel.intersection(buf.area);
        if panel.is_empty() {
            return;
        }
        Clear.render(panel, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(true, self.accent))
            .render(panel, buf);

        if let Some(close) = frame.close_button {
            let close = close.intersection(buf.area);
            if !close.is_empty() {
                buf.set_stringn(close.x, close.y, CLOSE_LABEL, close.width as usize, theme.hint_style());
            }
        }
    }

    pub fn hit_test(&self, frame: &PopupFrame, pos: Position) -> PopupHit {
        if frame.close_button.is_some_and(|close| close.contains(pos)) {
            PopupHit::Close
        } else if frame.content.contains(pos) {
            PopupHit::Content(pos)
        } else if frame.panel.contains(pos) {
            PopupHit::Panel
        } else if frame.backdrop.is_some() {
            PopupHit::Backdrop
        } else {
            PopupHit::Outside
        }
    }
}

fn inner_rect(panel: Rect) -> Rect {
    Rect::new(
        panel.x.saturating_add(1),
        panel.y.saturating_add(1),
        panel.width.saturating_sub(2),
        panel.height.saturating_sub(2),
    )
}
