//! Shared layout constants used across the TUI widgets and CLI output.
//!
//! This module centralizes the terminal geometry of the pickers so popup
//! placement and rendering agree on sizes.

/// Terminal width (columns) below which popups render as a centered modal
pub const DEFAULT_COMPACT_BREAKPOINT: u16 = 80;

/// Width of one day cell in the day grid (" 31 ")
pub const DAY_CELL_WIDTH: u16 = 4;

/// Columns in the day grid (one per weekday)
pub const DAY_GRID_COLUMNS: u16 = 7;

/// Columns in the month and year grids
pub const CHOICE_GRID_COLUMNS: u16 = 3;

/// Rows in the month and year grids (3 x 4 = 12 choices)
pub const CHOICE_GRID_ROWS: u16 = 4;

/// Maximum week rows a month can span
pub const MAX_WEEK_ROWS: u16 = 6;

/// Inner width of every picker popup (7 day cells)
pub const POPUP_CONTENT_WIDTH: u16 = DAY_CELL_WIDTH * DAY_GRID_COLUMNS;

/// Inner height of the date picker popup: header, spacer, weekday row, 6 weeks
pub const DATE_POPUP_CONTENT_HEIGHT: u16 = 3 + MAX_WEEK_ROWS;

/// Inner height of the month picker popup: header, spacer, 4 grid rows
pub const MONTH_POPUP_CONTENT_HEIGHT: u16 = 2 + CHOICE_GRID_ROWS;

/// Horizontal padding between the popup border and its content
pub const POPUP_PADDING_X: u16 = 1;

/// Assumed full date picker popup height used to decide whether to flip above the trigger
pub const DATE_POPUP_HEIGHT: u16 = DATE_POPUP_CONTENT_HEIGHT + 2;

/// Assumed full month picker popup height used to decide whether to flip above the trigger
pub const MONTH_POPUP_HEIGHT: u16 = MONTH_POPUP_CONTENT_HEIGHT + 2;

/// Height of a picker trigger (bordered single line)
pub const TRIGGER_HEIGHT: u16 = 3;

/// Maximum width of the demo page column
pub const PAGE_MAX_WIDTH: u16 = 48;
