// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label width measurement for tick generation.
//!
//! Tick strategies decide how dense an axis can be by asking how wide a label
//! would be once rendered. They never render anything themselves, so the only
//! thing they depend on is [`LabelWidth`]: a pure function from a label string
//! to a width in the same unit as the axis length.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - renderer-agnostic: a closure, a heuristic, or a shaping engine (see
//!   `densetick_text_parley`) can all provide label widths.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::sync::Arc;

/// Measures the rendered width of a tick label.
///
/// Implementations must be side-effect free and safe to call repeatedly; tick
/// strategies call this several times per invocation while probing step sizes.
///
/// Any `Fn(&str) -> f64` is a `LabelWidth`:
///
/// ```
/// use densetick_text::LabelWidth;
///
/// let width = |label: &str| 7.0 * label.len() as f64;
/// assert_eq!(width.label_width("12.5"), 28.0);
/// ```
pub trait LabelWidth {
    /// Returns the width of `label` in axis length units.
    fn label_width(&self, label: &str) -> f64;
}

impl<F> LabelWidth for F
where
    F: Fn(&str) -> f64,
{
    fn label_width(&self, label: &str) -> f64 {
        self(label)
    }
}

/// Every glyph advances by the same amount (a monospace approximation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance(pub f64);

impl LabelWidth for FixedAdvance {
    fn label_width(&self, label: &str) -> f64 {
        self.0 * label.chars().count() as f64
    }
}

/// A text measurement backend.
///
/// Backends report full line metrics; tick generation only needs the advance,
/// see [`MeasuredLabels`] for the adapter.
pub trait TextMeasurer {
    /// Measures `text` as a single line.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Binds a [`TextMeasurer`] to the style tick labels are drawn with.
#[derive(Clone, Debug)]
pub struct MeasuredLabels<M> {
    measurer: M,
    style: TextStyle,
}

impl<M: TextMeasurer> MeasuredLabels<M> {
    /// Creates a label width source measuring with `style`.
    pub fn new(measurer: M, style: TextStyle) -> Self {
        Self { measurer, style }
    }

    /// Returns the style labels are measured with.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}

impl<M: TextMeasurer> LabelWidth for MeasuredLabels<M> {
    fn label_width(&self, label: &str) -> f64 {
        self.measurer.measure(label, &self.style).advance_width
    }
}

/// Styling inputs relevant to measuring a label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in axis length units (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// CSS-style weight.
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// A sans-serif, normal weight style at `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// CSS `serif`.
    Serif,
    /// CSS `sans-serif`.
    SansSerif,
    /// CSS `monospace`.
    Monospace,
    /// A named family such as `"Inter"`.
    Named(Arc<str>),
}

impl FontFamily {
    /// The CSS `font-family` value.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// `400`.
    pub const NORMAL: Self = Self(400);
    /// `700`.
    pub const BOLD: Self = Self(700);
}

/// Metrics of a single measured line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole line.
    pub advance_width: f64,
    /// Baseline to top of typical glyphs.
    pub ascent: f64,
    /// Baseline to bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Rough metrics without a font: ~0.6em per glyph, baseline at 0.8em.
///
/// Bold text is widened by 10%.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let em = style.font_size;
        let glyph = if style.font_weight >= FontWeight::BOLD {
            0.66 * em
        } else {
            0.6 * em
        };
        TextMetrics {
            advance_width: glyph * text.chars().count() as f64,
            ascent: 0.8 * em,
            descent: 0.2 * em,
        }
    }
}
