// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense decimal ticks for continuous numeric axes.
//!
//! The step search starts one decade too coarse and walks finer through the
//! sub-decade multipliers `1, 0.5, 0.25, 0.2` (then the next decade down) for as
//! long as a worst-case label still fits in the space one step occupies on
//! screen. The last configuration that fit wins.
//!
//! Sizing is logarithm based. Ranges whose magnitude approaches the limits of
//! `f64` (or whose width is tiny relative to their magnitude) lose precision in
//! the decade computation; no attempt is made to correct for that.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use densetick_text::LabelWidth;

use crate::tick::{MAX_TICKS, Tick, Ticker};

/// Sub-decade multipliers, coarsest first.
const MULTIPLIERS: [f64; 4] = [1.0, 0.5, 0.25, 0.2];

/// Extra fractional digits each multiplier needs on top of the decade.
const DIGIT_CORRECTION: [i32; 4] = [0, 1, 2, 1];

/// The densest evenly spaced decimal ticks whose labels do not overlap.
///
/// Labels use a fixed number of fractional digits across the whole axis and
/// never switch to exponential notation.
///
/// Conventions for inputs the logarithmic sizing cannot handle:
/// - an empty, inverted or non-finite range (`max - min` not a positive finite
///   number) produces no ticks;
/// - an endpoint equal to `0` contributes zero integer digits to the label
///   width estimate (a range touching zero is sized by its other endpoint).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DenseTicks;

/// The spacing [`DenseTicks`] settled on for a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericStep {
    /// Distance between neighbouring ticks.
    pub step: f64,
    /// Digits after the decimal point in every label.
    pub fraction_digits: usize,
}

impl DenseTicks {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }

    /// Chooses the step and label precision for `[min, max]`.
    ///
    /// Returns `None` when the range is empty or not finite.
    pub fn step(
        &self,
        min: f64,
        max: f64,
        label_width: &dyn LabelWidth,
        length: f64,
    ) -> Option<NumericStep> {
        let delta = max - min;
        if !delta.is_finite() || delta <= 0.0 {
            return None;
        }

        let int_digits = integer_digits(min, max);
        let mut state = StepState::new(delta);
        while state.width > 0.0
            && label_fits(
                label_width,
                int_digits,
                state.fraction_digits(),
                state.spacing(length),
            )
        {
            state.densify();
        }
        state.coarsen();

        let chosen = NumericStep {
            step: state.step(),
            fraction_digits: state.fraction_digits(),
        };
        tracing::trace!(
            min,
            max,
            length,
            step = chosen.step,
            fraction_digits = chosen.fraction_digits,
            "numeric tick step"
        );
        Some(chosen)
    }
}

impl Ticker for DenseTicks {
    fn ticks(&self, min: f64, max: f64, label_width: &dyn LabelWidth, length: f64) -> Vec<Tick> {
        match self.step(min, max, label_width, length) {
            Some(step) => emit(min, max, step),
            None => Vec::new(),
        }
    }
}

/// Search position of one call. Lives on the stack for the duration of
/// [`DenseTicks::step`].
#[derive(Debug)]
struct StepState {
    delta: f64,
    /// Power of ten of `width`.
    decade: i32,
    /// Index into [`MULTIPLIERS`].
    index: usize,
    /// Power-of-ten step before the multiplier is applied.
    width: f64,
}

impl StepState {
    fn new(delta: f64) -> Self {
        let base = floor_i32(delta.log10());
        // One decade above the range itself; densifying brings it down.
        Self {
            delta,
            decade: base.saturating_add(1),
            index: 0,
            width: exp10(base) * 10.0,
        }
    }

    fn step(&self) -> f64 {
        self.width * MULTIPLIERS[self.index]
    }

    /// Screen distance between ticks for the current candidate.
    fn spacing(&self, length: f64) -> f64 {
        length * (self.step() / self.delta)
    }

    fn fraction_digits(&self) -> usize {
        let digits = DIGIT_CORRECTION[self.index].saturating_sub(self.decade);
        usize::try_from(digits).unwrap_or(0)
    }

    fn densify(&mut self) {
        self.index += 1;
        if self.index == MULTIPLIERS.len() {
            self.width /= 10.0;
            self.decade = self.decade.saturating_sub(1);
            self.index = 0;
        }
    }

    fn coarsen(&mut self) {
        if self.index == 0 {
            self.width *= 10.0;
            self.decade = self.decade.saturating_add(1);
            self.index = MULTIPLIERS.len() - 1;
        } else {
            self.index -= 1;
        }
    }
}

/// Whether a worst-case label, padded by one digit, fits in `spacing`.
fn label_fits(
    label_width: &dyn LabelWidth,
    int_digits: usize,
    fraction_digits: usize,
    spacing: f64,
) -> bool {
    let mut template = String::with_capacity(int_digits + fraction_digits + 1);
    template.extend(core::iter::repeat_n('0', int_digits));
    if fraction_digits > 0 {
        template.push('.');
        template.extend(core::iter::repeat_n('0', fraction_digits));
    }
    let width = label_width.label_width(&template) + label_width.label_width("0");
    spacing > width
}

/// Digits left of the decimal point for the wider endpoint, plus one for a
/// minus sign.
fn integer_digits(min: f64, max: f64) -> usize {
    let digits = endpoint_digits(min).max(endpoint_digits(max)).max(1);
    let digits = usize::try_from(digits).unwrap_or(1);
    if min < 0.0 { digits + 1 } else { digits }
}

fn endpoint_digits(v: f64) -> i32 {
    if v == 0.0 {
        return 0;
    }
    floor_i32(v.abs().log10()).saturating_add(1)
}

fn floor_i32(x: f64) -> i32 {
    let x = x.floor().clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        x as i32
    }
}

/// `10^exp` by repeated multiplication or division.
fn exp10(exp: i32) -> f64 {
    let mut v = 1.0;
    if exp < 0 {
        for _ in 0..exp.unsigned_abs() {
            v /= 10.0;
        }
    } else {
        for _ in 0..exp {
            v *= 10.0;
        }
    }
    v
}

fn emit(min: f64, max: f64, step: NumericStep) -> Vec<Tick> {
    let NumericStep {
        step,
        fraction_digits,
    } = step;
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }

    let first = (min / step).ceil();
    let mut ticks: Vec<Tick> = Vec::new();
    for k in 0..=MAX_TICKS {
        // `+ 0.0` turns `-0.0` into `0.0`.
        let value = (first + k as f64) * step + 0.0;
        if value > max {
            break;
        }
        if k == MAX_TICKS {
            tracing::warn!(min, max, step, max_ticks = MAX_TICKS, "numeric ticks truncated");
            break;
        }
        if value < min || ticks.last().is_some_and(|last| last.value() >= value) {
            continue;
        }
        ticks.push(Tick::new(value, format_fixed(value, fraction_digits)));
    }
    ticks
}

/// Fixed-point rendering with exactly `digits` fractional digits.
pub(crate) fn format_fixed(value: f64, digits: usize) -> String {
    alloc::format!("{value:.digits$}")
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;

    use densetick_text::FixedAdvance;

    use super::*;

    fn values(ticks: &[Tick]) -> Vec<f64> {
        ticks.iter().map(Tick::value).collect()
    }

    fn labels(ticks: &[Tick]) -> Vec<&str> {
        ticks.iter().map(Tick::label).collect()
    }

    #[test]
    fn integer_steps_when_half_steps_crowd() {
        let ticks = DenseTicks.ticks(0.0, 10.0, &FixedAdvance(1.0), 60.0);
        assert_eq!(
            labels(&ticks),
            vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]
        );
        assert_eq!(ticks[10].value(), 10.0);
    }

    #[test]
    fn wide_axis_refines_to_half_steps() {
        let ticks = DenseTicks.ticks(0.0, 10.0, &FixedAdvance(1.0), 200.0);
        assert_eq!(ticks.len(), 21);
        assert_eq!(ticks[1].label(), "0.5");
        assert_eq!(ticks[20].label(), "10.0");

        // Wider glyphs at the same length fall back to whole numbers.
        let wide_glyphs = DenseTicks.ticks(0.0, 10.0, &FixedAdvance(3.0), 200.0);
        assert_eq!(wide_glyphs.len(), 11);
        assert_eq!(wide_glyphs[3].label(), "3");
    }

    #[test]
    fn narrow_axis_uses_fives() {
        let ticks = DenseTicks.ticks(0.0, 10.0, &FixedAdvance(1.0), 20.0);
        assert_eq!(values(&ticks), vec![0.0, 5.0, 10.0]);
        assert_eq!(labels(&ticks), vec!["0", "5", "10"]);
    }

    #[test]
    fn quarter_steps_get_two_extra_digits() {
        // A constant per-label overhead makes the fifth step (one digit fewer)
        // just too tight while the quarter step still fits.
        let lw = |s: &str| s.len() as f64 + 1.0;
        let step = DenseTicks.step(0.0, 1.0, &lw, 30.0).expect("non-empty range");
        assert_eq!(step.step, 0.25);
        assert_eq!(step.fraction_digits, 2);
        let ticks = DenseTicks.ticks(0.0, 1.0, &lw, 30.0);
        assert_eq!(
            labels(&ticks),
            vec!["0.00", "0.25", "0.50", "0.75", "1.00"]
        );
    }

    #[test]
    fn min_is_included_only_on_a_step_multiple() {
        let ticks = DenseTicks.ticks(0.3, 10.0, &FixedAdvance(1.0), 20.0);
        assert_eq!(values(&ticks), vec![2.0, 4.0, 6.0, 8.0, 10.0]);

        let ticks = DenseTicks.ticks(5.0, 15.0, &FixedAdvance(1.0), 20.0);
        assert_eq!(values(&ticks), vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn negative_ranges_reserve_a_sign_and_avoid_negative_zero() {
        assert_eq!(integer_digits(-10.0, 10.0), 3);
        let ticks = DenseTicks.ticks(-1.0, 1.0, &FixedAdvance(1.0), 40.0);
        assert!(!ticks.is_empty(), "range straddling zero has ticks");
        assert!(
            ticks.iter().all(|t| !t.label().starts_with("-0") || t.value() < 0.0),
            "zero must not be labeled as negative: {ticks:?}"
        );
        assert!(ticks.iter().any(|t| t.value() == 0.0 && !t.label().starts_with('-')));
    }

    #[test]
    fn zero_endpoints_count_as_no_digits() {
        assert_eq!(endpoint_digits(0.0), 0);
        assert_eq!(integer_digits(0.0, 0.5), 1);
        assert_eq!(integer_digits(0.0, 999.0), 3);
        assert_eq!(integer_digits(-0.5, 0.0), 2);
    }

    #[test]
    fn degenerate_ranges_produce_nothing() {
        let lw = FixedAdvance(1.0);
        assert!(DenseTicks.ticks(3.0, 3.0, &lw, 100.0).is_empty());
        assert!(DenseTicks.ticks(4.0, 3.0, &lw, 100.0).is_empty());
        assert!(DenseTicks.ticks(f64::NAN, 3.0, &lw, 100.0).is_empty());
        assert!(DenseTicks.ticks(0.0, f64::INFINITY, &lw, 100.0).is_empty());
    }

    #[test]
    fn no_room_keeps_the_coarsest_probe() {
        // Nothing fits, so the search backs off from its starting point once.
        let step = DenseTicks
            .step(0.0, 10.0, &FixedAdvance(1.0), 0.0)
            .expect("non-empty range");
        assert_eq!(step.step, 200.0);
        let ticks = DenseTicks.ticks(0.0, 10.0, &FixedAdvance(1.0), 0.0);
        assert_eq!(labels(&ticks), vec!["0"]);
    }

    #[test]
    fn zero_width_labels_are_capped() {
        let ticks = DenseTicks.ticks(0.0, 1.0, &|_: &str| 0.0, 1.0e9);
        assert_eq!(ticks.len(), MAX_TICKS, "cap holds");
    }

    #[test]
    fn very_long_axes_stop_at_the_cap() {
        let ticks = DenseTicks.ticks(0.0, 10.0, &FixedAdvance(1.0), 1.0e7);
        assert_eq!(ticks.len(), MAX_TICKS);
        let last = ticks.last().map_or(f64::NAN, Tick::value);
        assert!(last < 1.0, "only the start of the range is covered: {last}");
        assert!(ticks.windows(2).all(|w| w[0].value() < w[1].value()));
    }

    #[test]
    fn small_fractional_ranges() {
        let ticks = DenseTicks.ticks(0.1, 0.2, &FixedAdvance(1.0), 100.0);
        assert!(ticks.len() >= 2, "{ticks:?}");
        let digits = ticks[0].label().split('.').nth(1).map_or(0, str::len);
        assert!(digits >= 2, "{ticks:?}");
        assert!(ticks.windows(2).all(|w| w[0].value() < w[1].value()));
    }

    #[test]
    fn powers_of_ten_are_built_by_repetition() {
        assert_eq!(exp10(0), 1.0);
        assert_eq!(exp10(3), 1000.0);
        assert_eq!(exp10(-2), 1.0 / 10.0 / 10.0);
    }
}
