//! Day-granular calendar values.
//!
//! `CalendarDate` wraps a `chrono::NaiveDate` and only exposes functional
//! updates: every setter and every bit of arithmetic returns a new value.
//! Month and year changes clamp the day of month to the target month's length
//! (Jan 31 + 1 month = Feb 28/29).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use thiserror::Error;

/// Offset between Gregorian and Buddhist Era year numbering
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Number of years shown on one page of the year grid
pub const YEARS_PER_PAGE: i32 = 12;

/// Errors raised when building a date from user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid date format '{0}'. Use YYYY-MM-DD")]
    InvalidFormat(String),

    #[error("Invalid month format '{0}'. Use YYYY-MM")]
    InvalidMonthFormat(String),
}

/// Unit for arithmetic and truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Day,
    Month,
    Year,
    /// One page of the year grid (12 years)
    Decade,
}

impl Unit {
    fn months(self) -> Option<u32> {
        match self {
            Unit::Day => None,
            Unit::Month => Some(1),
            Unit::Year => Some(12),
            Unit::Decade => Some(12 * YEARS_PER_PAGE as u32),
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (month is 1-based)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// First year of the 12-year page containing `year`.
///
/// Pages are aligned to multiples of 12, not centered on the year.
pub fn page_start(year: i32) -> i32 {
    year.div_euclid(YEARS_PER_PAGE) * YEARS_PER_PAGE
}

/// Immutable calendar date with no time-of-day component
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `YYYY-MM` string into the first day of that month
    pub fn parse_year_month(s: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidMonthFormat(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::from_ymd(year, month, 1).map_err(|_| invalid())
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1 = January
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Month index, 0 = January
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday index, 0 = Sunday
    pub fn weekday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn buddhist_year(&self) -> i32 {
        self.year() + BUDDHIST_ERA_OFFSET
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Weekday index (0 = Sunday) of the first day of this date's month
    pub fn first_weekday_of_month(&self) -> u32 {
        self.start_of(Unit::Month).weekday()
    }

    pub fn with_year(&self, year: i32) -> Self {
        self.clamped(year, self.month(), self.day())
    }

    /// Replace the month with a 0-based index. Indices past 11 roll into later years.
    pub fn with_month0(&self, month0: u32) -> Self {
        let year = self.year().saturating_add((month0 / 12) as i32);
        self.clamped(year, month0 % 12 + 1, self.day())
    }

    pub fn with_day(&self, day: u32) -> Self {
        self.clamped(self.year(), self.month(), day)
    }

    fn clamped(&self, year: i32, month: u32, day: u32) -> Self {
        let last = days_in_month(year, month);
        NaiveDate::from_ymd_opt(year, month, day.clamp(1, last.max(1)))
            .map(Self)
            .unwrap_or(*self)
    }

    /// Shift by `amount` units. Values outside chrono's range leave the date unchanged.
    pub fn add(&self, amount: i32, unit: Unit) -> Self {
        let magnitude = amount.unsigned_abs();
        let shifted = match unit.months() {
            None if amount >= 0 => self.0.checked_add_days(Days::new(magnitude as u64)),
            None => self.0.checked_sub_days(Days::new(magnitude as u64)),
            Some(per_unit) => magnitude.checked_mul(per_unit).and_then(|months| {
                if amount >= 0 {
                    self.0.checked_add_months(Months::new(months))
                } else {
                    self.0.checked_sub_months(Months::new(months))
                }
            }),
        };
        shifted.map(Self).unwrap_or(*self)
    }

    pub fn subtract(&self, amount: i32, unit: Unit) -> Self {
        self.add(amount.saturating_neg(), unit)
    }

    pub fn start_of(&self, unit: Unit) -> Self {
        match unit {
            Unit::Day => *self,
            Unit::Month => self.with_day(1),
            Unit::Year => Self::from_ymd(self.year(), 1, 1).unwrap_or(*self),
            Unit::Decade => Self::from_ymd(page_start(self.year()), 1, 1).unwrap_or(*self),
        }
    }

    pub fn is_before(&self, other: &CalendarDate) -> bool {
        self.0 < other.0
    }

    pub fn is_after(&self, other: &CalendarDate) -> bool {
        self.0 > other.0
    }

    pub fn is_same_day(&self, other: &CalendarDate) -> bool {
        self.0 == other.0
    }

    pub fn is_same_month(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CalendarError::InvalidFormat(s.to_string()))
    }
}

/// Inclusive day-granular bound check; a missing bound is open on that side
pub fn is_selectable(
    date: &CalendarDate,
    min: Option<&CalendarDate>,
    max: Option<&CalendarDate>,
) -> bool {
    let after_min = min.map_or(true, |min| !date.is_before(min));
    let before_max = max.map_or(true, |max| !date.is_after(max));
    after_min && before_max
}

/// Source of "today"
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Local wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate(Local::now().date_naive())
    }
}

/// Clock pinned to a single day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
