//! Report periods and their resolution into concrete date ranges.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing `period` / `date` parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Unknown period '{0}', expected one of day, week, month, year, range")]
    UnknownPeriod(String),

    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    #[error("Date range must be 'YYYY-MM-DD,YYYY-MM-DD', got '{0}'")]
    InvalidRange(String),

    #[error("Date range ends ({end}) before it starts ({start})")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

impl PeriodError {
    /// Name of the request parameter the error refers to.
    pub fn parameter(&self) -> &'static str {
        match self {
            PeriodError::UnknownPeriod(_) => "period",
            _ => "date",
        }
    }
}

/// Granularity of a report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
    Range,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::Range => "range",
        }
    }

    /// Whether unique visitor counts are computed for this period.
    ///
    /// Deduplicating visitors over a whole year or an arbitrary range is
    /// not offered.
    pub fn has_unique_visitors(&self) -> bool {
        matches!(self, Period::Day | Period::Week | Period::Month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            "range" => Ok(Period::Range),
            other => Err(PeriodError::UnknownPeriod(other.to_string())),
        }
    }
}

/// Inclusive calendar date range covered by a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Resolves a `(period, date)` pair into the dates it covers.
    ///
    /// `today` anchors the `today` / `yesterday` keywords.
    ///
    /// # Examples
    ///
    /// ```
    /// use analytics_console::domain::report::{DateRange, Period};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
    /// let range = DateRange::resolve(Period::Week, "2024-03-14", today).unwrap();
    /// assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    /// assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
    /// ```
    pub fn resolve(period: Period, date: &str, today: NaiveDate) -> Result<Self, PeriodError> {
        let invalid = || PeriodError::InvalidDate(date.to_string());

        let range = match period {
            Period::Range => {
                let (from, to) = date
                    .split_once(',')
                    .ok_or_else(|| PeriodError::InvalidRange(date.to_string()))?;
                let start = parse_date(from, today)?;
                let end = parse_date(to, today)?;
                if end < start {
                    return Err(PeriodError::InvertedRange { start, end });
                }
                Self { start, end }
            }
            Period::Day => {
                let day = parse_date(date, today)?;
                Self {
                    start: day,
                    end: day,
                }
            }
            Period::Week => {
                let day = parse_date(date, today)?;
                let offset = u64::from(day.weekday().num_days_from_monday());
                let start = day.checked_sub_days(Days::new(offset)).ok_or_else(invalid)?;
                let end = start.checked_add_days(Days::new(6)).ok_or_else(invalid)?;
                Self { start, end }
            }
            Period::Month => {
                let day = parse_date(date, today)?;
                let start = day.with_day(1).ok_or_else(invalid)?;
                let (year, month) = if day.month() == 12 {
                    (day.year() + 1, 1)
                } else {
                    (day.year(), day.month() + 1)
                };
                let end = NaiveDate::from_ymd_opt(year, month, 1)
                    .and_then(|d| d.pred_opt())
                    .ok_or_else(invalid)?;
                Self { start, end }
            }
            Period::Year => {
                let day = parse_date(date, today)?;
                Self {
                    start: NaiveDate::from_ymd_opt(day.year(), 1, 1).ok_or_else(invalid)?,
                    end: NaiveDate::from_ymd_opt(day.year(), 12, 31).ok_or_else(invalid)?,
                }
            }
        };

        Ok(range)
    }

    /// Number of days covered, inclusive.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

fn parse_date(value: &str, today: NaiveDate) -> Result<NaiveDate, PeriodError> {
    match value.trim() {
        "today" => Ok(today),
        "yesterday" => today
            .pred_opt()
            .ok_or_else(|| PeriodError::InvalidDate(value.to_string())),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| PeriodError::InvalidDate(value.to_string())),
    }
}
