//! Date reference parsing and resolution

use crate::domain::entry::{date_key, DATE_KEY_FORMAT};
use crate::error::{DiaryError, Result};
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

/// A human reference to a diary day, resolved against "today"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Today if it is that weekday, otherwise its most recent occurrence
    Weekday(Weekday),
    /// Occurrence strictly before today
    LastWeekday(Weekday),
    /// Occurrence strictly after today
    NextWeekday(Weekday),
    /// Signed day offset from today (`+1`, `-3`)
    Offset(i64),
    /// A `YYYY-MM-DD` date
    Date(NaiveDate),
}

impl DateReference {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(DateReference::Weekday(weekday));
        }

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            "tomorrow" => Ok(DateReference::Tomorrow),
            _ if normalized.starts_with("last ") => parse_weekday(&normalized[5..])
                .map(DateReference::LastWeekday)
                .ok_or_else(|| DiaryError::InvalidDate(input.to_string())),
            _ if normalized.starts_with("next ") => parse_weekday(&normalized[5..])
                .map(DateReference::NextWeekday)
                .ok_or_else(|| DiaryError::InvalidDate(input.to_string())),
            _ if normalized.starts_with('+') || normalized.starts_with('-') => normalized
                .parse::<i64>()
                .map(DateReference::Offset)
                .map_err(|_| DiaryError::InvalidDate(input.to_string())),
            _ => parse_date_key(&normalized)
                .map(DateReference::Date)
                .map_err(|_| DiaryError::InvalidDate(input.to_string())),
        }
    }

    /// Resolve this reference to a calendar date.
    /// Fails when the result falls outside the supported calendar range.
    pub fn resolve(&self, today: NaiveDate) -> Result<NaiveDate> {
        let days = match self {
            DateReference::Today => 0,
            DateReference::Yesterday => -1,
            DateReference::Tomorrow => 1,
            DateReference::Weekday(target) => -days_back(today, *target),
            DateReference::LastWeekday(target) => match days_back(today, *target) {
                0 => -7,
                n => -n,
            },
            DateReference::NextWeekday(target) => {
                let forward = (target.num_days_from_monday() + 7
                    - today.weekday().num_days_from_monday())
                    % 7;
                if forward == 0 {
                    7
                } else {
                    forward as i64
                }
            }
            DateReference::Offset(days) => *days,
            DateReference::Date(date) => return Ok(*date),
        };

        shift(today, days).ok_or_else(|| {
            DiaryError::InvalidDate(format!("{:+} days from {}", days, date_key(today)))
        })
    }
}

/// Parse an optional reference, defaulting to today
pub fn resolve_or_today(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match input {
        Some(raw) => DateReference::parse(raw)?
            .resolve(today)
            .map_err(|_| DiaryError::InvalidDate(raw.to_string())),
        None => Ok(today),
    }
}

/// Parse a strict `YYYY-MM-DD` entry key
pub fn parse_date_key(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_KEY_FORMAT)
        .map_err(|_| DiaryError::InvalidDate(input.to_string()))
}

/// `date` moved by `days`, or `None` past the representable range
pub fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

pub fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
    date.pred_opt()
}

pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.succ_opt()
}

/// Days from the most recent `target` (inclusive of today) back to `today`
fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    ((today.weekday().num_days_from_monday() + 7 - target.num_days_from_monday()) % 7) as i64
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
