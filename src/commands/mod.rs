pub mod calendar;
pub mod years;

use anyhow::{Context, Result};

use crate::calendar::CalendarDate;

/// Parse an optional YYYY-MM-DD argument
///
/// Returns an error if the date string is malformed.
pub fn parse_date(date: Option<&str>) -> Result<Option<CalendarDate>> {
    date.map(|date_str| {
        date_str
            .parse::<CalendarDate>()
            .with_context(|| format!("Invalid date '{}'", date_str))
    })
    .transpose()
}

/// Parse an optional YYYY-MM argument, defaulting to `today`'s month
pub fn parse_month(month: Option<&str>, today: CalendarDate) -> Result<CalendarDate> {
    match month {
        Some(month_str) => CalendarDate::parse_year_month(month_str)
            .with_context(|| format!("Invalid month '{}'", month_str)),
        None => Ok(today.start_of(crate::calendar::Unit::Month)),
    }
}

/// Pad `text` on both sides to `width` terminal columns
pub(crate) fn center(text: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
