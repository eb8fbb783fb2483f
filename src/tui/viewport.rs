//! Viewport size readers.
//!
//! Popup layout (modal vs popover) and flip direction depend on the size of
//! the terminal at the moment a picker opens. The size is read through the
//! `Viewport` trait so tests can pin it without a real terminal.

use ratatui::layout::{Rect, Size};
use tracing::warn;

/// Size used when the terminal cannot be queried
pub const FALLBACK_SIZE: Size = Size { width: 80, height: 24 };

pub trait Viewport {
    fn size(&self) -> Size;

    fn width(&self) -> u16 {
        self.size().width
    }

    fn height(&self) -> u16 {
        self.size().height
    }

    /// The whole screen as a rect anchored at the origin
    fn area(&self) -> Rect {
        let size = self.size();
        Rect::new(0, 0, size.width, size.height)
    }
}

/// Reads the live terminal size from crossterm
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalViewport;

impl Viewport for TerminalViewport {
    fn size(&self) -> Size {
        match crossterm::terminal::size() {
            Ok((width, height)) => Size { width, height },
            Err(e) => {
                warn!("VIEWPORT: failed to read terminal size: {}", e);
                FALLBACK_SIZE
            }
        }
    }
}

/// Viewport with a fixed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub Size);

impl FixedViewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self(Size { width, height })
    }
}

impl Viewport for FixedViewport {
    fn size(&self) -> Size {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_viewport_area() {
        let viewport = FixedViewport::new(100, 30);
        assert_eq!(viewport.width(), 100);
        assert_eq!(viewport.height(), 30);
        assert_eq!(viewport.area(), Rect::new(0, 0, 100, 30));
    }
}
