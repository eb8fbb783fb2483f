//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.
//!
//! # Usage
//!
//! ```rust
//! #[cfg(test)]
//! mod tests {
//!     use crate::tui::testing::*;
//!
//!     #[test]
//!     fn test_example() {
//!         let env = TestContext::wide();
//!         let ctx = env.ctx();
//!         // Drive a picker with ctx...
//!     }
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::buffer::Buffer;
use unicode_width::UnicodeWidthStr;

use crate::calendar::{CalendarDate, FixedClock};
use crate::layout_constants::DEFAULT_COMPACT_BREAKPOINT;
use super::outside_click::OutsideClickListeners;
use super::pickers::PickerContext;
use super::viewport::FixedViewport;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 100;

/// "Today" for every test that needs a clock
pub fn today() -> CalendarDate {
    d(2026, 10, 16)
}

/// Shorthand for a valid date
///
/// # Panics
///
/// Panics on an invalid date (acceptable in test code).
pub fn d(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("valid test date")
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
///
/// Lines are compared with trailing whitespace trimmed. Width is measured in
/// terminal columns so lines with Thai combining marks compare correctly.
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].width(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].width()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

/// Owned viewport, clock and listener registry for building a `PickerContext`
pub struct TestContext {
    pub viewport: FixedViewport,
    pub clock: FixedClock,
    pub listeners: OutsideClickListeners,
    pub compact_breakpoint: u16,
}

impl TestContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: FixedViewport::new(width, height),
            clock: FixedClock(today()),
            listeners: OutsideClickListeners::new(),
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
        }
    }

    /// Terminal wide enough for popovers
    pub fn wide() -> Self {
        Self::new(RENDER_WIDTH, 40)
    }

    /// Terminal narrow enough for modals
    pub fn narrow() -> Self {
        Self::new(60, 30)
    }

    pub fn ctx(&self) -> PickerContext<'_> {
        PickerContext {
            viewport: &self.viewport,
            clock: &self.clock,
            listeners: &self.listeners,
            compact_breakpoint: self.compact_breakpoint,
        }
    }
}

/// Change callback that records every committed date
pub fn recorder() -> (Rc<RefCell<Vec<CalendarDate>>>, impl FnMut(CalendarDate) + 'static) {
    let commits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&commits);
    (commits, move |date| sink.borrow_mut().push(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn test_buffer_lines() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        buf.set_string(0, 0, "ab", Style::default());
        assert_eq!(buffer_lines(&buf), vec!["ab  ".to_string(), "    ".to_string()]);
    }

    #[test]
    fn test_assert_buffer_handles_combining_marks() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        buf.set_string(0, 0, "มี.ค.", Style::default());
        assert_buffer(&buf, &["มี.ค."]);
    }

    #[test]
    fn test_recorder_collects_commits() {
        let (commits, mut on_change) = recorder();
        on_change(d(2026, 1, 1));
        on_change(d(2026, 2, 1));
        assert_eq!(*commits.borrow(), vec![d(2026, 1, 1), d(2026, 2, 1)]);
    }

    #[test]
    fn test_context_layouts() {
        use crate::tui::widgets::PopupLayout;

        assert_eq!(TestContext::wide().ctx().popup_layout(), PopupLayout::Popover);
        assert_eq!(TestContext::narrow().ctx().popup_layout(), PopupLayout::Modal);
    }
}
