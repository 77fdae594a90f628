// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis normalizers.
//!
//! The calendar strategy needs to know how far apart two candidate ticks end
//! up on screen without drawing them. A normalizer maps an axis value to its
//! fractional position along the axis, so the screen distance between `a` and
//! `b` is `length * (normalize(b) - normalize(a))` for any scale transform.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Maps an axis value to its position along the rendered axis.
///
/// `0` is the start of the axis and `1` its end; values outside the visible
/// range map outside `[0, 1]`. Any `Fn(f64) -> f64` is a normalizer.
pub trait AxisNormalizer {
    /// Fractional position of `value`.
    fn normalize(&self, value: f64) -> f64;
}

impl<F> AxisNormalizer for F
where
    F: Fn(f64) -> f64,
{
    fn normalize(&self, value: f64) -> f64 {
        self(value)
    }
}

/// Linear placement over a domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearNormalizer {
    domain: (f64, f64),
}

impl LinearNormalizer {
    /// `domain.0` maps to `0`, `domain.1` to `1`.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// The configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

impl AxisNormalizer for LinearNormalizer {
    fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        if denom == 0.0 {
            return 0.0;
        }
        (value - d0) / denom
    }
}

/// Logarithmic placement over a positive domain.
///
/// The position is independent of the logarithm base, so none is configured.
/// Non-positive values and domains map to `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogNormalizer {
    domain: (f64, f64),
}

impl LogNormalizer {
    /// `domain.0` maps to `0`, `domain.1` to `1`.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// The configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

impl AxisNormalizer for LogNormalizer {
    fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        if value <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return 0.0;
        }
        let l0 = d0.log10();
        let denom = d1.log10() - l0;
        if denom == 0.0 {
            return 0.0;
        }
        (value.log10() - l0) / denom
    }
}
