use anyhow::{bail, Result};

use crate::calendar::{CalendarDate, Clock, SystemClock};
use crate::commands::center;
use crate::layout_constants::{CHOICE_GRID_COLUMNS, POPUP_CONTENT_WIDTH};
use crate::tui::widgets::{YearCell, YearView};

fn format_cell(cell: &YearCell) -> String {
    let year = crate::formatting::buddhist_year(cell.year);
    if cell.selected {
        format!("[{}]", year)
    } else if cell.current {
        format!("*{}*", year)
    } else {
        format!(" {} ", year)
    }
}

/// Render the 12-year page containing `year` as a 3 x 4 text grid
///
/// The requested year is bracketed, the current year starred.
pub fn format_years(year: i32, today: CalendarDate) -> String {
    let view_date = today.with_year(year);
    let view = YearView::new(view_date, today);
    let width = POPUP_CONTENT_WIDTH as usize;
    let mut output = String::new();

    output.push_str(&format!("{}\n", center(&view.title(), width).trim_end()));
    output.push_str(&format!("{}\n", "═".repeat(width)));

    for row in view.cells().chunks(CHOICE_GRID_COLUMNS as usize) {
        let line: Vec<String> = row.iter().map(format_cell).collect();
        output.push_str(&format!("{}\n", line.join("   ").trim_end()));
    }

    output
}

pub fn run(year: Option<i32>) -> Result<()> {
    let today = SystemClock.today();
    let year = year.unwrap_or_else(|| today.year());
    if !(1..=9999).contains(&year) {
        bail!("Year {} is out of range", year);
    }

    tracing::debug!("YEARS: year={}", year);
    print!("{}", format_years(year, today));
    Ok(())
}
