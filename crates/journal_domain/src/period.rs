use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PeriodError {
    #[error("period start {start} falls after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Date window an aggregation runs over. Derived per call, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    /// Inclusive.
    pub end: NaiveDate,
    /// Day count used as the per-day habit target. The week view keeps the
    /// flat nominal 7 even mid-week; the month view uses days elapsed.
    pub target_days: u32,
    /// Fractional weekly periods elapsed inside the window.
    pub weekly_units: f64,
}

impl PeriodWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Inclusive day count from start to end.
    pub fn days_in_period(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Window from Monday of the current week through `today`. Days after
/// `today` stay outside the window so a partial week is never penalized,
/// while the daily target keeps the full nominal week.
pub fn week_to_date(today: NaiveDate) -> PeriodWindow {
    let offset = i64::from(today.weekday().num_days_from_monday());
    PeriodWindow {
        start: today - Duration::days(offset),
        end: today,
        target_days: 7,
        weekly_units: 1.0,
    }
}

/// Window from the first of the month through `today`.
pub fn month_to_date(today: NaiveDate) -> PeriodWindow {
    let elapsed = today.day();
    PeriodWindow {
        start: today.with_day(1).unwrap(),
        end: today,
        target_days: elapsed,
        weekly_units: f64::from(elapsed) / 7.0,
    }
}

/// Arbitrary inclusive range for custom analyses.
pub fn custom_range(start: NaiveDate, end: NaiveDate) -> Result<PeriodWindow, PeriodError> {
    if start > end {
        return Err(PeriodError::InvalidRange { start, end });
    }
    let days = (end - start).num_days() + 1;
    Ok(PeriodWindow {
        start,
        end,
        target_days: days as u32,
        weekly_units: days as f64 / 7.0,
    })
}
