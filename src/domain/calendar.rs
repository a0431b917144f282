//! Monthly aggregates and the month calendar grid

use crate::domain::date_ref::resolve_or_today;
use crate::domain::entry::DiaryEntry;
use crate::domain::query::has_entry;
use crate::error::{DiaryError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month of a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(DiaryError::InvalidMonth(format!("{}-{:02}", year, month)));
        }
        Ok(Month { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .unwrap_or_else(|| self.first_day())
    }

    /// Every day of the month in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day();
        self.first_day().iter_days().take_while(move |d| *d <= last)
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Month {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Month {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Month {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Month {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// `June 2025`
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl FromStr for Month {
    type Err = DiaryError;

    /// Parse `YYYY-MM`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DiaryError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Month::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Number of entries dated within `month`
pub fn monthly_count(entries: &[DiaryEntry], month: Month) -> usize {
    entries.iter().filter(|e| month.contains(e.date)).count()
}

/// `round(monthly_count / day_of_month(today) * 100)`.
///
/// `None` when the diary holds no entries at all. Not clamped: future-dated
/// entries can push the value past 100.
pub fn consistency_percentage(
    entries: &[DiaryEntry],
    month: Month,
    today: NaiveDate,
) -> Option<u32> {
    if entries.is_empty() {
        return None;
    }
    let ratio = monthly_count(entries, month) as f64 / today.day() as f64;
    Some((ratio * 100.0).round() as u32)
}

/// Headline numbers for the progress panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryStats {
    pub month: Month,
    pub total_entries: usize,
    pub month_entries: usize,
    pub consistency: Option<u32>,
}

impl DiaryStats {
    pub fn compute(entries: &[DiaryEntry], month: Month, today: NaiveDate) -> Self {
        DiaryStats {
            month,
            total_entries: entries.len(),
            month_entries: monthly_count(entries, month),
            consistency: consistency_percentage(entries, month, today),
        }
    }
}

/// Month to display and the day to highlight, from `YYYY-MM` or a date
/// reference. No input means the current month with nothing selected.
pub fn calendar_target(
    input: Option<&str>,
    today: NaiveDate,
) -> Result<(Month, Option<NaiveDate>)> {
    let Some(raw) = input else {
        return Ok((Month::of(today), None));
    };
    if let Ok(month) = raw.parse::<Month>() {
        return Ok((month, None));
    }

    match resolve_or_today(Some(raw), today) {
        Ok(date) => Ok((Month::of(date), Some(date))),
        Err(_) if looks_like_month(raw) => Err(DiaryError::InvalidMonth(raw.to_string())),
        Err(e) => Err(e),
    }
}

fn looks_like_month(raw: &str) -> bool {
    let raw = raw.trim();
    raw.starts_with(|c: char| c.is_ascii_digit()) && raw.split('-').count() == 2
}

/// One day in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub has_entry: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// A month laid out in Sunday-first weeks; `None` pads days outside the month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCalendar {
    pub month: Month,
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthCalendar {
    pub fn build(
        entries: &[DiaryEntry],
        month: Month,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> Self {
        let mut weeks = Vec::new();
        let mut week: [Option<DayCell>; 7] = [None; 7];

        for date in month.days() {
            let column = date.weekday().num_days_from_sunday() as usize;
            week[column] = Some(DayCell {
                date,
                has_entry: has_entry(entries, date),
                is_today: date == today,
                is_selected: selected == Some(date),
            });
            if column == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }

        MonthCalendar { month, weeks }
    }

    /// Cells that carry an entry marker
    pub fn marked_days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks
            .iter()
            .flat_map(|w| w.iter().flatten())
            .filter(|c| c.has_entry)
    }
}
