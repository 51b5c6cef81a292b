use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};

/// Raised when chrono reports an out-of-range result. Calendar math never
/// clamps or wraps silently; the only sanctioned clamp is day-of-month
/// adjustment in month arithmetic (Jan 31 + 1 month = end of February).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateError {
    message: String,
}

impl InvalidDateError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InvalidDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date: {}", self.message)
    }
}

impl std::error::Error for InvalidDateError {}

/// Checked construction from calendar components. The only place unvalidated
/// input can enter the system.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, InvalidDateError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        InvalidDateError::new(format!(
            "{:04}-{:02}-{:02} is not a calendar day",
            year, month, day
        ))
    })
}

pub fn start_of_month(d: NaiveDate) -> Result<NaiveDate, InvalidDateError> {
    d.with_day(1)
        .ok_or_else(|| InvalidDateError::new(format!("no first day in the month of {}", d)))
}

pub fn end_of_month(d: NaiveDate) -> Result<NaiveDate, InvalidDateError> {
    let next_month = add_months(start_of_month(d)?, 1)?;
    next_month
        .checked_sub_days(Days::new(1))
        .ok_or_else(|| InvalidDateError::new(format!("no last day in the month of {}", d)))
}

/// Nearest Monday on or before `d`. Week start is fixed, not configurable.
pub fn start_of_week(d: NaiveDate) -> Result<NaiveDate, InvalidDateError> {
    let back = u64::from(d.weekday().num_days_from_monday());
    d.checked_sub_days(Days::new(back))
        .ok_or_else(|| InvalidDateError::new(format!("no Monday on or before {}", d)))
}

/// Nearest Sunday on or after `d`.
pub fn end_of_week(d: NaiveDate) -> Result<NaiveDate, InvalidDateError> {
    let forward = u64::from(6 - d.weekday().num_days_from_monday());
    d.checked_add_days(Days::new(forward))
        .ok_or_else(|| InvalidDateError::new(format!("no Sunday on or after {}", d)))
}

/// Lazy ascending walk over `[start, end]`, inclusive. Cloning the iterator
/// restarts the walk; an inverted interval yields nothing.
#[derive(Debug, Clone)]
pub struct DayInterval {
    cursor: Option<NaiveDate>,
    end: NaiveDate,
}

pub fn days_between(start: NaiveDate, end: NaiveDate) -> DayInterval {
    DayInterval {
        cursor: (start <= end).then_some(start),
        end,
    }
}

impl Iterator for DayInterval {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let day = self.cursor?;
        self.cursor = if day < self.end { day.succ_opt() } else { None };
        Some(day)
    }
}

pub fn same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn is_before(a: NaiveDate, b: NaiveDate) -> bool {
    a < b
}

/// Inclusive on both ends.
pub fn within(d: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= d && d <= end
}

pub fn add_months(d: NaiveDate, n: u32) -> Result<NaiveDate, InvalidDateError> {
    d.checked_add_months(Months::new(n))
        .ok_or_else(|| InvalidDateError::new(format!("{} plus {} months is out of range", d, n)))
}

pub fn sub_months(d: NaiveDate, n: u32) -> Result<NaiveDate, InvalidDateError> {
    d.checked_sub_months(Months::new(n))
        .ok_or_else(|| InvalidDateError::new(format!("{} minus {} months is out of range", d, n)))
}
