// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense calendar ticks for time axes.
//!
//! Axis values are plain numbers; a [`TimeConversion`] turns them into
//! calendar dates and back. The strategy walks [`BUCKETS`] from the finest
//! entry (every day) to the coarsest (every 20 years) and keeps the first one
//! whose tick spacing on screen exceeds the width of a formatted label.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime};
use densetick_text::LabelWidth;

use crate::calendar::{BUCKETS, Bucket};
use crate::error::TickError;
use crate::normalize::{AxisNormalizer, LinearNormalizer};
use crate::tick::{MAX_TICKS, Tick, Ticker};

/// Format used by [`DenseTimeTicks::default`].
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts between axis values and calendar timestamps.
///
/// The two directions must be exact inverses for every timestamp a tick can
/// land on (midnight of any day); otherwise tick values and labels disagree.
pub trait TimeConversion {
    /// The timestamp at axis value `value`, or `None` if it has none.
    fn to_datetime(&self, value: f64) -> Option<NaiveDateTime>;

    /// The axis value of `time`.
    fn to_value(&self, time: NaiveDateTime) -> f64;
}

/// Axis values are whole Unix seconds, interpreted in UTC.
///
/// Fractional values are truncated toward zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnixSeconds;

impl TimeConversion for UnixSeconds {
    fn to_datetime(&self, value: f64) -> Option<NaiveDateTime> {
        if !value.is_finite() {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "saturating cast; chrono rejects anything outside its range"
        )]
        let secs = value as i64;
        DateTime::from_timestamp(secs, 0).map(|t| t.naive_utc())
    }

    fn to_value(&self, time: NaiveDateTime) -> f64 {
        time.and_utc().timestamp() as f64
    }
}

/// Axis values are whole Unix milliseconds, interpreted in UTC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnixMillis;

impl TimeConversion for UnixMillis {
    fn to_datetime(&self, value: f64) -> Option<NaiveDateTime> {
        if !value.is_finite() {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "saturating cast; chrono rejects anything outside its range"
        )]
        let millis = value as i64;
        DateTime::from_timestamp_millis(millis).map(|t| t.naive_utc())
    }

    fn to_value(&self, time: NaiveDateTime) -> f64 {
        time.and_utc().timestamp_millis() as f64
    }
}

/// The densest calendar-aligned ticks whose labels do not overlap.
///
/// All configuration is immutable once built, so a single instance can be
/// shared between axes and threads.
#[derive(Clone)]
pub struct DenseTimeTicks {
    format: String,
    conversion: Arc<dyn TimeConversion + Send + Sync>,
    normalizer: Option<Arc<dyn AxisNormalizer + Send + Sync>>,
}

impl core::fmt::Debug for DenseTimeTicks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DenseTimeTicks")
            .field("format", &self.format)
            .field("conversion", &"dyn TimeConversion")
            .field("normalizer", &self.normalizer.is_some())
            .finish()
    }
}

impl Default for DenseTimeTicks {
    fn default() -> Self {
        Self {
            format: String::from(DEFAULT_DATE_FORMAT),
            conversion: Arc::new(UnixSeconds),
            normalizer: None,
        }
    }
}

impl DenseTimeTicks {
    /// Creates a strategy labelling ticks with the strftime-style `format`.
    ///
    /// Values are Unix seconds and the axis is assumed linear over the range
    /// passed to [`Ticker::ticks`] until configured otherwise.
    pub fn new(format: impl Into<String>) -> Result<Self, TickError> {
        Self::default().with_format(format)
    }

    /// Replaces the label format.
    pub fn with_format(mut self, format: impl Into<String>) -> Result<Self, TickError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(TickError::InvalidFormat { format });
        }
        self.format = format;
        Ok(self)
    }

    /// Replaces the value/timestamp conversion.
    #[must_use]
    pub fn with_conversion(mut self, conversion: impl TimeConversion + Send + Sync + 'static) -> Self {
        self.conversion = Arc::new(conversion);
        self
    }

    /// Measures tick spacing through `normalizer` (for non-linear axes).
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: impl AxisNormalizer + Send + Sync + 'static) -> Self {
        self.normalizer = Some(Arc::new(normalizer));
        self
    }

    /// The label format.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Picks the bucket ticks for `[min, max]` would use.
    ///
    /// Falls back to the coarsest bucket when nothing leaves room for the
    /// labels. Returns `None` only if `min` has no timestamp.
    pub fn select_bucket(
        &self,
        min: f64,
        max: f64,
        label_width: &dyn LabelWidth,
        length: f64,
    ) -> Option<&'static Bucket> {
        let min_time = self.conversion.to_datetime(min)?;
        let width = label_width.label_width(&self.label(min_time));
        let linear = LinearNormalizer::new((min, max));
        let normalizer: &dyn AxisNormalizer = match &self.normalizer {
            Some(n) => n.as_ref(),
            None => &linear,
        };

        let chosen = BUCKETS
            .iter()
            .find(|bucket| {
                let Some((t0, t1)) = bucket.span(min_time) else {
                    return false;
                };
                let spacing = length
                    * (normalizer.normalize(self.conversion.to_value(t1))
                        - normalizer.normalize(self.conversion.to_value(t0)));
                tracing::trace!(step = ?bucket.step, spacing, width, "calendar bucket candidate");
                spacing > width
            })
            .or(BUCKETS.last());
        if let Some(bucket) = chosen {
            tracing::debug!(step = ?bucket.step, start = ?bucket.start, "calendar bucket");
        }
        chosen
    }

    fn label(&self, time: NaiveDateTime) -> String {
        let mut label = String::new();
        // The format was validated up front, so rendering does not fail.
        if write!(label, "{}", time.format(&self.format)).is_err() {
            label.clear();
        }
        label
    }

    fn emit(&self, min: f64, max: f64, bucket: &Bucket) -> Vec<Tick> {
        let mut ticks = Vec::new();
        let Some(mut time) = self
            .conversion
            .to_datetime(min)
            .and_then(|t| bucket.start.floor(t))
        else {
            return ticks;
        };

        // Rounding down to the bucket start usually lands before `min`.
        let mut skipped = 0;
        while self.conversion.to_value(time) < min {
            skipped += 1;
            match bucket.step.advance(time) {
                Some(next) if skipped <= MAX_TICKS => time = next,
                _ => {
                    tracing::warn!(min, "no calendar tick at or after the range start");
                    return ticks;
                }
            }
        }

        loop {
            let value = self.conversion.to_value(time);
            if value > max {
                break;
            }
            if ticks.len() == MAX_TICKS {
                tracing::warn!(min, max, max_ticks = MAX_TICKS, "calendar ticks truncated");
                break;
            }
            ticks.push(Tick::new(value, self.label(time)));
            let Some(next) = bucket.step.advance(time) else {
                tracing::warn!(max, "calendar ticks ran past the representable dates");
                break;
            };
            time = next;
        }
        ticks
    }
}

impl Ticker for DenseTimeTicks {
    fn ticks(&self, min: f64, max: f64, label_width: &dyn LabelWidth, length: f64) -> Vec<Tick> {
        if !max.is_finite() {
            return Vec::new();
        }
        match self.select_bucket(min, max, label_width, length) {
            Some(bucket) => self.emit(min, max, bucket),
            None => Vec::new(),
        }
    }
}
