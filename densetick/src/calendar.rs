// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar buckets: how far a time tick advances and where a run of ticks
//! starts.
//!
//! Advancing is calendar aware (months and years have varying length) and
//! always lands on midnight. Week steps are approximate on purpose: they add
//! 7 or 14 to the day of the month and jump to the 1st of the next month once
//! the day would pass 28, so every month gets ticks on the 1st, 8th, 15th and
//! 22nd.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Unit of a [`CalendarStep`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalendarUnit {
    /// Exact calendar days.
    Day,
    /// 7 days, restarting at the 1st of the next month after day 28.
    Week,
    /// Calendar months; lands on the 1st.
    Month,
    /// Calendar years; lands on January 1st.
    Year,
}

/// A calendar-aware increment such as "2 months".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarStep {
    /// What is counted.
    pub unit: CalendarUnit,
    /// How many units one step covers.
    pub amount: u32,
}

impl CalendarStep {
    /// `amount` days.
    pub const fn days(amount: u32) -> Self {
        Self {
            unit: CalendarUnit::Day,
            amount,
        }
    }

    /// `amount` weeks, with the day-28 rollover.
    pub const fn weeks(amount: u32) -> Self {
        Self {
            unit: CalendarUnit::Week,
            amount,
        }
    }

    /// `amount` months.
    pub const fn months(amount: u32) -> Self {
        Self {
            unit: CalendarUnit::Month,
            amount,
        }
    }

    /// `amount` years.
    pub const fn years(amount: u32) -> Self {
        Self {
            unit: CalendarUnit::Year,
            amount,
        }
    }

    /// Moves `time` forward by one step.
    ///
    /// The time of day is dropped. Returns `None` once the result leaves
    /// chrono's representable range.
    pub fn advance(self, time: NaiveDateTime) -> Option<NaiveDateTime> {
        let date = time.date();
        let next = match self.unit {
            CalendarUnit::Day => date.checked_add_days(Days::new(u64::from(self.amount)))?,
            CalendarUnit::Week => {
                let day = date.day().checked_add(self.amount.checked_mul(7)?)?;
                if day > 28 {
                    first_of_month(date.year(), date.month0().checked_add(1)?)?
                } else {
                    date.with_day(day)?
                }
            }
            CalendarUnit::Month => {
                first_of_month(date.year(), date.month0().checked_add(self.amount)?)?
            }
            CalendarUnit::Year => {
                let year = date.year().checked_add(i32::try_from(self.amount).ok()?)?;
                NaiveDate::from_ymd_opt(year, 1, 1)?
            }
        };
        Some(next.and_time(NaiveTime::MIN))
    }
}

/// Where a run of ticks is anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BucketStart {
    /// Midnight of the same day.
    Day,
    /// Midnight on the 1st of the same month.
    Month,
    /// January 1st of the enclosing block of `n` years (`year / n * n`).
    Years(u32),
}

impl BucketStart {
    /// Rounds `time` down to the start of its bucket.
    pub fn floor(self, time: NaiveDateTime) -> Option<NaiveDateTime> {
        let date = time.date();
        let start = match self {
            Self::Day => date,
            Self::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?,
            Self::Years(n) => {
                let n = i32::try_from(n.max(1)).ok()?;
                NaiveDate::from_ymd_opt(date.year() / n * n, 1, 1)?
            }
        };
        Some(start.and_time(NaiveTime::MIN))
    }
}

/// One row of [`BUCKETS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bucket {
    /// Distance between ticks.
    pub step: CalendarStep,
    /// Anchor of the first tick.
    pub start: BucketStart,
}

impl Bucket {
    const fn new(step: CalendarStep, start: BucketStart) -> Self {
        Self { step, start }
    }

    /// The first two tick times of a run containing `time`.
    pub fn span(&self, time: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let t0 = self.start.floor(time)?;
        let t1 = self.step.advance(t0)?;
        Some((t0, t1))
    }
}

/// Candidate buckets, finest first.
pub static BUCKETS: [Bucket; 14] = [
    Bucket::new(CalendarStep::days(1), BucketStart::Day),
    Bucket::new(CalendarStep::days(2), BucketStart::Month),
    Bucket::new(CalendarStep::weeks(1), BucketStart::Month),
    Bucket::new(CalendarStep::weeks(2), BucketStart::Month),
    Bucket::new(CalendarStep::months(1), BucketStart::Month),
    Bucket::new(CalendarStep::months(2), BucketStart::Years(1)),
    Bucket::new(CalendarStep::months(3), BucketStart::Years(1)),
    Bucket::new(CalendarStep::months(4), BucketStart::Years(1)),
    Bucket::new(CalendarStep::months(6), BucketStart::Years(1)),
    Bucket::new(CalendarStep::years(1), BucketStart::Years(1)),
    Bucket::new(CalendarStep::years(2), BucketStart::Years(2)),
    Bucket::new(CalendarStep::years(5), BucketStart::Years(5)),
    Bucket::new(CalendarStep::years(10), BucketStart::Years(10)),
    Bucket::new(CalendarStep::years(20), BucketStart::Years(20)),
];

/// Midnight on the 1st of month `month0` (zero based, may exceed 11) of `year`.
fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    let year = year.checked_add(i32::try_from(month0 / 12).ok()?)?;
    NaiveDate::from_ymd_opt(year, month0 % 12 + 1, 1)
}
