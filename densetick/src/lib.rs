// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense, non-overlapping tick placement for plot axes.
//!
//! Given the visible range of an axis, its length on screen and a way to
//! measure label text, a [`Ticker`] decides where labelled ticks go. The
//! strategies here aim for as many ticks as fit without labels colliding:
//! - [`DenseTicks`] places evenly spaced decimal ticks on numeric axes,
//! - [`DenseTimeTicks`] places calendar-aligned ticks (days, weeks, months,
//!   year blocks) on time axes,
//! - [`FixedTicks`] returns a caller-chosen list.
//!
//! Rendering is out of scope: the result is a list of [`Tick`]s the caller
//! draws however it likes.
//!
//! ```
//! use densetick::{DenseTicks, FixedAdvance, Ticker};
//!
//! let ticks = DenseTicks.ticks(0.0, 10.0, &FixedAdvance(1.0), 20.0);
//! let labels: Vec<&str> = ticks.iter().map(|t| t.label()).collect();
//! assert_eq!(labels, ["0", "5", "10"]);
//! ```

#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod calendar;
mod dense;
mod error;
mod fixed;
#[cfg(not(feature = "std"))]
mod float;
mod normalize;
#[cfg(test)]
mod property_tests;
mod tick;
mod time;

pub use calendar::{BUCKETS, Bucket, BucketStart, CalendarStep, CalendarUnit};
pub use dense::{DenseTicks, NumericStep};
pub use densetick_text::{FixedAdvance, LabelWidth, MeasuredLabels, TextMeasurer, TextStyle};
pub use error::TickError;
pub use fixed::FixedTicks;
pub use normalize::{AxisNormalizer, LinearNormalizer, LogNormalizer};
pub use tick::{MAX_TICKS, Tick, Ticker};
pub use time::{DEFAULT_DATE_FORMAT, DenseTimeTicks, TimeConversion, UnixMillis, UnixSeconds};
