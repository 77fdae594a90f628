// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tick contract shared by every strategy.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use densetick_text::LabelWidth;

/// Upper bound on the ticks a single call emits.
///
/// Emission stops at the cap, so the returned ticks then cover only the start
/// of the range. Besides degenerate inputs (a label width that reports zero, a
/// time conversion that is not monotonic) the cap is reached whenever the axis
/// is long enough to fit more labels than this, e.g. `0..10` over `1e7` units
/// with one unit per glyph.
pub const MAX_TICKS: usize = 10_000;

/// A labeled position along an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    value: f64,
    label: String,
}

impl Tick {
    /// Creates a tick at `value` showing `label`.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// Position on the axis scale.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Formatted label text.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Chooses tick positions for a visible range.
///
/// Implementations are pure functions of their arguments and their own
/// immutable configuration, so one instance can serve any number of axes and
/// threads.
pub trait Ticker {
    /// Returns ticks for `[min, max]` drawn along an axis `length` units long.
    ///
    /// The result is strictly increasing by value and every value lies inside
    /// `[min, max]`. Callers are expected to pass `min < max` and a positive
    /// `length`; anything else yields an empty or otherwise degenerate list.
    fn ticks(&self, min: f64, max: f64, label_width: &dyn LabelWidth, length: f64) -> Vec<Tick>;
}

impl<T: Ticker + ?Sized> Ticker for &T {
    fn ticks(&self, min: f64, max: f64, label_width: &dyn LabelWidth, length: f64) -> Vec<Tick> {
        (**self).ticks(min, max, label_width, length)
    }
}

impl<T: Ticker + ?Sized> Ticker for alloc::boxed::Box<T> {
    fn ticks(&self, min: f64, max: f64, label_width: &dyn LabelWidth, length: f64) -> Vec<Tick> {
        (**self).ticks(min, max, label_width, length)
    }
}
