// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests shared by the tick strategies.
//!
//! Uses proptest to check:
//! 1. ordering and bounds: ticks strictly increase and stay inside the range
//! 2. one fractional digit count per numeric axis
//! 3. determinism across fresh instances
//! 4. monotonic density: more room never means fewer numeric ticks
//! 5. calendar ticks are exactly the bucket run from the rounded-down range
//!    start, clipped to the range

extern crate std;

use std::vec::Vec;

use chrono::NaiveDate;
use densetick_text::FixedAdvance;
use proptest::prelude::*;

use crate::{DenseTicks, DenseTimeTicks, MAX_TICKS, Tick, Ticker, TimeConversion, UnixSeconds};

// ── Strategies ───────────────────────────────────────────────────────

fn arb_range() -> impl Strategy<Value = (f64, f64)> {
    (-1.0e6..1.0e6_f64, 1.0e-3..1.0e6_f64).prop_map(|(min, delta)| (min, min + delta))
}

fn arb_length() -> impl Strategy<Value = f64> {
    1.0..2_000.0_f64
}

fn arb_advance() -> impl Strategy<Value = f64> {
    1.0..12.0_f64
}

fn arb_time_range() -> impl Strategy<Value = (f64, f64)> {
    // 1950..2100, spans from a day to ~60 years, both ends at any second of the day.
    (0_i64..55_000, 0_i64..86_400, 1_i64..22_000, 0_i64..86_400).prop_map(
        |(start, start_secs, span, end_secs)| {
            let epoch = NaiveDate::from_ymd_opt(1950, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .expect("valid epoch");
            let min = UnixSeconds.to_value(epoch) + (start * 86_400 + start_secs) as f64;
            (min, min + (span * 86_400 + end_secs) as f64)
        },
    )
}

fn fraction_digits(label: &str) -> usize {
    label.split_once('.').map_or(0, |(_, frac)| frac.len())
}

fn assert_ordered_within(ticks: &[Tick], min: f64, max: f64) -> Result<(), TestCaseError> {
    for w in ticks.windows(2) {
        prop_assert!(w[0].value() < w[1].value(), "{:?} !< {:?}", w[0], w[1]);
    }
    for t in ticks {
        prop_assert!(min <= t.value() && t.value() <= max, "{t:?} outside [{min}, {max}]");
    }
    Ok(())
}

// ── Numeric ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn numeric_ticks_are_ordered_and_bounded(
        (min, max) in arb_range(),
        length in arb_length(),
        advance in arb_advance(),
    ) {
        let ticks = DenseTicks.ticks(min, max, &FixedAdvance(advance), length);
        assert_ordered_within(&ticks, min, max)?;
    }

    #[test]
    fn numeric_labels_share_one_precision(
        (min, max) in arb_range(),
        length in arb_length(),
        advance in arb_advance(),
    ) {
        let ticks = DenseTicks.ticks(min, max, &FixedAdvance(advance), length);
        let digits: Vec<usize> = ticks.iter().map(|t| fraction_digits(t.label())).collect();
        prop_assert!(digits.windows(2).all(|w| w[0] == w[1]), "{digits:?}");
        for t in &ticks {
            prop_assert!(!t.label().contains('e'), "exponential label {t:?}");
        }
    }

    #[test]
    fn numeric_ticks_are_deterministic(
        (min, max) in arb_range(),
        length in arb_length(),
    ) {
        let lw = FixedAdvance(6.0);
        let first = DenseTicks::new().ticks(min, max, &lw, length);
        let second = DenseTicks::new().ticks(min, max, &lw, length);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn more_room_never_means_fewer_ticks(
        max in 1.0e-3..1.0e6_f64,
        a in arb_length(),
        b in arb_length(),
        advance in arb_advance(),
    ) {
        // Anchored at zero so every candidate step's multiples are nested by count.
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let lw = FixedAdvance(advance);
        let sparse = DenseTicks.ticks(0.0, max, &lw, short);
        let dense = DenseTicks.ticks(0.0, max, &lw, long);
        prop_assert!(sparse.len() <= dense.len(), "{} > {}", sparse.len(), dense.len());
    }

    #[test]
    fn labels_fit_their_share_of_the_axis(
        (min, max) in arb_range(),
        length in arb_length(),
        advance in arb_advance(),
    ) {
        let lw = FixedAdvance(advance);
        if let Some(step) = DenseTicks.step(min, max, &lw, length) {
            let ticks = DenseTicks.ticks(min, max, &lw, length);
            // The backed-off step only fails to fit if nothing fit at all,
            // in which case at most a single tick is visible.
            if ticks.len() > 1 {
                let per_tick = length * step.step / (max - min);
                let widest = ticks
                    .iter()
                    .map(|t| t.label().trim_start_matches('-').len())
                    .max()
                    .unwrap_or(0);
                prop_assert!(per_tick >= advance * widest as f64, "{per_tick} < {widest} glyphs");
            }
        }
    }
}

// ── Calendar ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn calendar_ticks_are_the_bucket_run_inside_the_range(
        (min, max) in arb_time_range(),
        length in arb_length(),
        advance in arb_advance(),
    ) {
        let ticker = DenseTimeTicks::default();
        let lw = FixedAdvance(advance);
        let ticks = ticker.ticks(min, max, &lw, length);
        assert_ordered_within(&ticks, min, max)?;

        // Rebuild the run: round `min` down to its bucket start, step forward
        // and keep what lands inside the range.
        let bucket = ticker.select_bucket(min, max, &lw, length).expect("min has a timestamp");
        let min_time = UnixSeconds.to_datetime(min).expect("min has a timestamp");
        let mut time = bucket.start.floor(min_time).expect("in range");
        let mut expected = Vec::new();
        loop {
            let value = UnixSeconds.to_value(time);
            if value > max || expected.len() == MAX_TICKS {
                break;
            }
            if value >= min {
                expected.push(value);
            }
            match bucket.step.advance(time) {
                Some(next) => time = next,
                None => break,
            }
        }

        let values: Vec<f64> = ticks.iter().map(Tick::value).collect();
        prop_assert_eq!(values, expected, "bucket {:?}", bucket);
    }

    #[test]
    fn calendar_ticks_are_deterministic(
        (min, max) in arb_time_range(),
        length in arb_length(),
    ) {
        let lw = FixedAdvance(6.0);
        let first = DenseTimeTicks::default().ticks(min, max, &lw, length);
        let second = DenseTimeTicks::default().ticks(min, max, &lw, length);
        prop_assert_eq!(first, second);
    }
}
