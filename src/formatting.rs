use crate::calendar::{CalendarDate, BUDDHIST_ERA_OFFSET};

/// Full Thai month names, January first
pub const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Abbreviated Thai month names, January first
pub const THAI_MONTHS_SHORT: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
];

/// Short Thai weekday names, Sunday first
pub const THAI_WEEKDAYS_SHORT: [&str; 7] = ["อา", "จ", "อ", "พ", "พฤ", "ศ", "ส"];

/// Prefix used in front of Buddhist Era years ("พ.ศ. 2569")
pub const BUDDHIST_ERA_PREFIX: &str = "พ.ศ.";

/// Output patterns for Thai date rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThaiFormat {
    /// "16 ตุลาคม 2569"
    Long,
    /// "ตุลาคม 2569"
    MonthYear,
    /// "ต.ค."
    MonthAbbrev,
    /// "2569"
    BuddhistYear,
    /// "16 ต.ค. 69"
    Short,
}

pub fn month_name(month0: u32) -> &'static str {
    THAI_MONTHS[(month0 % 12) as usize]
}

pub fn month_abbrev(month0: u32) -> &'static str {
    THAI_MONTHS_SHORT[(month0 % 12) as usize]
}

/// Buddhist Era number for a Gregorian year
pub fn buddhist_year(year: i32) -> i32 {
    year + BUDDHIST_ERA_OFFSET
}

/// "2566 - 2577" for a page of Gregorian years
pub fn format_year_range(start_year: i32, end_year: i32) -> String {
    format!("{} - {}", buddhist_year(start_year), buddhist_year(end_year))
}

impl CalendarDate {
    pub fn format_thai(&self, format: ThaiFormat) -> String {
        match format {
            ThaiFormat::Long => format!(
                "{} {} {}",
                self.day(),
                month_name(self.month0()),
                self.buddhist_year()
            ),
            ThaiFormat::MonthYear => {
                format!("{} {}", month_name(self.month0()), self.buddhist_year())
            }
            ThaiFormat::MonthAbbrev => month_abbrev(self.month0()).to_string(),
            ThaiFormat::BuddhistYear => self.buddhist_year().to_string(),
            ThaiFormat::Short => format!(
                "{} {} {:02}",
                self.day(),
                month_abbrev(self.month0()),
                self.buddhist_year().rem_euclid(100)
            ),
        }
    }
}
