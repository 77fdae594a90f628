// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Manually placed ticks.

extern crate alloc;

use alloc::vec::Vec;

use densetick_text::LabelWidth;

use crate::dense::format_fixed;
use crate::error::TickError;
use crate::tick::{Tick, Ticker};

/// A caller-chosen list of ticks; the visible subset is returned as-is.
///
/// Label widths and axis length are ignored: the caller decided the density.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedTicks {
    ticks: Vec<Tick>,
}

impl FixedTicks {
    /// Builds the list, sorted by value.
    ///
    /// When several ticks share a value the first one supplied is kept.
    pub fn new(ticks: impl IntoIterator<Item = Tick>) -> Result<Self, TickError> {
        let mut ticks: Vec<Tick> = ticks.into_iter().collect();
        if let Some(bad) = ticks.iter().find(|t| !t.value().is_finite()) {
            return Err(TickError::NonFiniteTick { value: bad.value() });
        }
        ticks.sort_by(|a, b| a.value().total_cmp(&b.value()));
        ticks.dedup_by(|later, earlier| later.value() == earlier.value());
        Ok(Self { ticks })
    }

    /// Ticks at `values`, labelled fixed-point with `fraction_digits` digits.
    pub fn from_values(
        values: impl IntoIterator<Item = f64>,
        fraction_digits: usize,
    ) -> Result<Self, TickError> {
        Self::new(
            values
                .into_iter()
                .map(|v| Tick::new(v, format_fixed(v, fraction_digits))),
        )
    }

    /// All configured ticks, in order.
    pub fn all(&self) -> &[Tick] {
        &self.ticks
    }
}

impl Ticker for FixedTicks {
    fn ticks(&self, min: f64, max: f64, _label_width: &dyn LabelWidth, _length: f64) -> Vec<Tick> {
        self.ticks
            .iter()
            .filter(|t| (min..=max).contains(&t.value()))
            .cloned()
            .collect()
    }
}
