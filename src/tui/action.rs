use ratatui::layout::Position;

use crate::calendar::CalendarDate;

/// Which picker on the demo page a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerSlot {
    /// Section 1: month picker
    Month,
    /// Section 2: date picker bounded below by today
    MinDate,
    /// Section 3: date picker bounded to today .. today + 2 months
    RangeDate,
}

/// Global actions
///
/// All changes to the demo page's values happen through actions. Actions are
/// dispatched from:
/// - User input (mouse presses, the quit key)
/// - Picker change callbacks (committed values)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Left mouse button pressed at a screen cell
    Click(Position),
    /// A picker committed a new value
    Committed { slot: PickerSlot, date: CalendarDate },
    Quit,
}
