//! DGII filing periods and report date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when constructing a filing period.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilingPeriodError {
    /// The label is not six ASCII digits.
    #[error("period label must be 6 digits in AAAAMM form, got {0:?}")]
    InvalidLabel(String),

    /// The month is outside 1-12.
    #[error("period month must be between 01 and 12, got {0:02}")]
    InvalidMonth(u32),

    /// The year cannot be represented as a calendar date.
    #[error("period year {0} is out of range")]
    InvalidYear(i32),
}

/// Start date after end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("start date {start} is after end date {end}")]
pub struct InvalidDateRange {
    /// Requested start date.
    pub start: NaiveDate,
    /// Requested end date.
    pub end: NaiveDate,
}

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day, inclusive.
    pub start: NaiveDate,
    /// Last day, inclusive.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting an inverted pair.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRange> {
        if start > end {
            return Err(InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A monthly DGII filing period, labeled `AAAAMM` (e.g. "202501").
///
/// Report 606 filings cover one calendar month; the period resolves to the
/// first and last day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilingPeriod {
    year: i32,
    month: u32,
    start: NaiveDate,
    end: NaiveDate,
}

impl FilingPeriod {
    /// Creates a period for the given year and month.
    pub fn new(year: i32, month: u32) -> Result<Self, FilingPeriodError> {
        if !(1..=12).contains(&month) {
            return Err(FilingPeriodError::InvalidMonth(month));
        }

        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(FilingPeriodError::InvalidYear(year))?;
        let next_month_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or(FilingPeriodError::InvalidYear(year))?;
        let end = next_month_start
            .pred_opt()
            .ok_or(FilingPeriodError::InvalidYear(year))?;

        Ok(Self {
            year,
            month,
            start,
            end,
        })
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the period.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the period.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// Returns the period as an inclusive date range.
    #[must_use]
    pub const fn date_range(&self) -> DateRange {
        DateRange {
            start: self.start,
            end: self.end,
        }
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for FilingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for FilingPeriod {
    type Err = FilingPeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FilingPeriodError::InvalidLabel(s.to_string()));
        }

        let year: i32 = s[..4]
            .parse()
            .map_err(|_| FilingPeriodError::InvalidLabel(s.to_string()))?;
        let month: u32 = s[4..]
            .parse()
            .map_err(|_| FilingPeriodError::InvalidLabel(s.to_string()))?;

        Self::new(year, month)
    }
}
