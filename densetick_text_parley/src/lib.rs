// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shaping-aware label widths through Parley.
//!
//! [`ParleyTextMeasurer`] implements [`densetick_text::TextMeasurer`]; wrap it
//! in [`densetick_text::MeasuredLabels`] to hand it to a tick strategy.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use densetick_text::{FontFamily, TextMeasurer, TextMetrics, TextStyle};
use parley::style::{FontFamily as ParleyFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontWeight, Layout, LayoutContext};

/// A [`TextMeasurer`] that shapes labels with Parley's system font setup.
///
/// The contexts are reused between calls, so one measurer should be kept
/// around for the lifetime of an axis rather than rebuilt per label.
pub struct ParleyTextMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<LayoutContext<()>>,
    display_scale: f32,
}

impl core::fmt::Debug for ParleyTextMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyTextMeasurer")
            .field("display_scale", &self.display_scale)
            .finish_non_exhaustive()
    }
}

impl ParleyTextMeasurer {
    /// Creates a measurer at display scale 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(LayoutContext::new()),
            display_scale: 1.0,
        }
    }

    /// Sets the device pixel ratio used for shaping.
    ///
    /// Returned widths stay in logical units.
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(1.0e-6);
        self
    }

    fn font_stack(family: &FontFamily) -> FontStack<'_> {
        FontStack::from(match family {
            FontFamily::Serif => ParleyFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFamily::Named(Cow::Borrowed(name.as_ref())),
        })
    }

    fn layout(&self, line: &str, style: &TextStyle) -> Layout<()> {
        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let font_size = if style.font_size.is_finite() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "font sizes are far inside the f32 range"
            )]
            {
                style.font_size.clamp(0.0, 1.0e6) as f32
            }
        } else {
            0.0
        };

        let mut builder = layout_cx.ranged_builder(&mut font_cx, line, self.display_scale, true);
        builder.push_default(StyleProperty::FontSize(font_size));
        builder.push_default(StyleProperty::FontStack(Self::font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(f32::from(
            style.font_weight.0,
        ))));

        let mut layout = builder.build(line);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());
        layout
    }
}

impl Default for ParleyTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for ParleyTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        // Tick labels are single line.
        let line = text.lines().next().unwrap_or("");
        if line.is_empty() {
            return TextMetrics::default();
        }

        let layout = self.layout(line, style);
        let Some(first) = layout.lines().next() else {
            return TextMetrics::default();
        };

        let scale = f64::from(self.display_scale);
        let m = first.metrics();
        TextMetrics {
            advance_width: f64::from(m.advance) / scale,
            ascent: f64::from(m.ascent) / scale,
            descent: f64::from(m.descent) / scale,
        }
    }
}
