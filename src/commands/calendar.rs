use anyhow::{bail, Result};

use crate::calendar::{CalendarDate, Clock, SystemClock};
use crate::commands::{center, parse_date, parse_month};
use crate::formatting::THAI_WEEKDAYS_SHORT;
use crate::layout_constants::{DAY_CELL_WIDTH, DAY_GRID_COLUMNS};
use crate::tui::widgets::{DayCell, DayView};

fn format_cell(cell: &DayCell) -> String {
    if cell.disabled {
        format!("({:>2})", cell.day)
    } else if cell.today {
        format!("[{:>2}]", cell.day)
    } else {
        format!(" {:>2} ", cell.day)
    }
}

/// Render one month as a plain-text Thai calendar
///
/// Today is shown as `[16]`, days outside the min/max window as `(15)`.
pub fn format_calendar(
    month: CalendarDate,
    today: CalendarDate,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
) -> String {
    let view = DayView::new(month, today).bounds(min, max);
    let width = (DAY_CELL_WIDTH * DAY_GRID_COLUMNS) as usize;
    let mut output = String::new();

    output.push_str(&format!("{}\n", center(&view.title(), width).trim_end()));
    output.push_str(&format!("{}\n", "═".repeat(width)));

    let weekdays: String = THAI_WEEKDAYS_SHORT
        .iter()
        .map(|name| format!(" {:>2} ", name))
        .collect();
    output.push_str(&format!("{}\n", weekdays.trim_end()));

    let blanks = view.leading_blanks() as usize;
    let mut line = " ".repeat(blanks * DAY_CELL_WIDTH as usize);
    for cell in view.cells() {
        line.push_str(&format_cell(&cell));
        if (blanks + cell.day as usize) % DAY_GRID_COLUMNS as usize == 0 {
            output.push_str(&format!("{}\n", line.trim_end()));
            line.clear();
        }
    }
    if !line.is_empty() {
        output.push_str(&format!("{}\n", line.trim_end()));
    }

    output
}

pub fn run(month: Option<String>, min: Option<String>, max: Option<String>) -> Result<()> {
    let today = SystemClock.today();
    let month = parse_month(month.as_deref(), today)?;
    let min = parse_date(min.as_deref())?;
    let max = parse_date(max.as_deref())?;

    if let (Some(min), Some(max)) = (min, max) {
        if min.is_after(&max) {
            bail!("--min {} is after --max {}", min, max);
        }
    }

    tracing::debug!("CALENDAR: month={} min={:?} max={:?}", month, min, max);
    print!("{}", format_calendar(month, today, min, max));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_format_calendar_layout() {
        let output = format_calendar(d(2026, 10, 1), d(2026, 10, 16), None, None);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0].trim(), "ตุลาคม 2569");
        assert_eq!(lines[2], " อา   จ   อ   พ  พฤ   ศ   ส");
        assert_eq!(lines[3], "                  1   2   3");
        assert_eq!(lines[4], "  4   5   6   7   8   9  10");
        assert_eq!(lines[5], " 11  12  13  14  15 [16]  17");
        assert_eq!(lines[7], " 25  26  27  28  29  30  31");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_format_calendar_marks_disabled_days() {
        let output = format_calendar(
            d(2026, 10, 1),
            d(2026, 10, 16),
            Some(d(2026, 10, 16)),
            Some(d(2026, 10, 20)),
        );
        let lines: Vec<&str> = output.lines().collect();

        // Today is inside the window, so it is not marked disabled
        assert_eq!(lines[5], "(11)(12)(13)(14)(15)[16]  17");
        assert_eq!(lines[6], " 18  19  20 (21)(22)(23)(24)");
    }

    #[test]
    fn test_format_calendar_month_starting_sunday() {
        // 1 Feb 2026 is a Sunday, 28 days fill exactly four weeks
        let output = format_calendar(d(2026, 2, 1), d(2026, 10, 16), None, None);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[3], "  1   2   3   4   5   6   7");
        assert_eq!(lines.len(), 7);
    }
}
