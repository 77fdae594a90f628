// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG preview of a horizontal axis.

use densetick::{AxisNormalizer, LabelWidth, Tick};
use kurbo::{BezPath, Rect};
use peniko::Brush;
use peniko::color::palette::css;

/// Stroke and label paints for the preview.
#[derive(Clone, Debug)]
pub(crate) struct AxisStyle {
    pub(crate) rule: Brush,
    pub(crate) grid: Brush,
    pub(crate) label: Brush,
    pub(crate) font_size: f64,
    pub(crate) tick_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: Brush::Solid(css::BLACK),
            grid: Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0)),
            label: Brush::Solid(css::DARK_SLATE_GRAY),
            font_size: 10.0,
            tick_size: 5.0,
        }
    }
}

/// A bottom axis `length` units long, drawn below a strip of gridlines.
#[derive(Clone, Debug)]
pub(crate) struct AxisPreview {
    length: f64,
    plot_height: f64,
    padding: f64,
    style: AxisStyle,
}

impl AxisPreview {
    pub(crate) fn new(length: f64) -> Self {
        Self {
            length,
            plot_height: 40.0,
            padding: 24.0,
            style: AxisStyle::default(),
        }
    }

    pub(crate) fn with_font_size(mut self, font_size: f64) -> Self {
        self.style.font_size = font_size;
        self
    }

    /// Screen x of `value`.
    fn x(&self, normalizer: &dyn AxisNormalizer, value: f64) -> f64 {
        self.padding + self.length * normalizer.normalize(value)
    }

    fn axis_y(&self) -> f64 {
        self.padding + self.plot_height
    }

    /// Bounds of each centred label.
    pub(crate) fn label_bounds(
        &self,
        ticks: &[Tick],
        normalizer: &dyn AxisNormalizer,
        label_width: &dyn LabelWidth,
    ) -> Vec<Rect> {
        let top = self.axis_y() + self.style.tick_size + 2.0;
        ticks
            .iter()
            .map(|t| {
                let x = self.x(normalizer, t.value());
                let half = 0.5 * label_width.label_width(t.label());
                Rect::new(x - half, top, x + half, top + self.style.font_size)
            })
            .collect()
    }

    /// Number of neighbouring label pairs whose boxes intersect.
    pub(crate) fn overlaps(bounds: &[Rect]) -> usize {
        bounds
            .windows(2)
            .filter(|w| w[0].intersect(w[1]).area() > 0.0)
            .count()
    }

    pub(crate) fn to_svg_string(
        &self,
        title: &str,
        ticks: &[Tick],
        normalizer: &dyn AxisNormalizer,
        label_width: &dyn LabelWidth,
    ) -> String {
        let bounds = self.label_bounds(ticks, normalizer, label_width);
        let axis_y = self.axis_y();

        let mut domain = BezPath::new();
        domain.move_to((self.padding, axis_y));
        domain.line_to((self.padding + self.length, axis_y));

        let mut tick_marks = BezPath::new();
        let mut grid = BezPath::new();
        for t in ticks {
            let x = self.x(normalizer, t.value());
            tick_marks.move_to((x, axis_y));
            tick_marks.line_to((x, axis_y + self.style.tick_size));
            grid.move_to((x, self.padding));
            grid.line_to((x, axis_y));
        }

        let view = bounds.iter().fold(
            Rect::new(0.0, 0.0, self.length + 2.0 * self.padding, axis_y),
            |acc, b| acc.union(*b),
        );
        let view = view.inflate(self.padding, self.padding * 0.5);

        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view.x0,
            view.y0,
            view.width(),
            view.height(),
            view.width(),
            view.height()
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}""#,
            self.padding,
            self.padding * 0.5,
            self.style.font_size + 2.0
        ));
        write_paint_attr(&mut out, "fill", &self.style.rule);
        out.push_str(&format!(">{}</text>\n", escape_xml(title)));

        write_stroke(&mut out, &grid, &self.style.grid);
        write_stroke(&mut out, &domain, &self.style.rule);
        write_stroke(&mut out, &tick_marks, &self.style.rule);

        for (t, b) in ticks.iter().zip(&bounds) {
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="hanging""#,
                b.center().x,
                b.y0,
                self.style.font_size
            ));
            write_paint_attr(&mut out, "fill", &self.style.label);
            out.push_str(&format!(">{}</text>\n", escape_xml(t.label())));
        }

        out.push_str("</svg>\n");
        out
    }
}

fn write_stroke(out: &mut String, path: &BezPath, brush: &Brush) {
    if path.elements().is_empty() {
        return;
    }
    out.push_str(&format!(r#"<path d="{}" fill="none""#, path.to_svg()));
    write_paint_attr(out, "stroke", brush);
    out.push_str(" stroke-width=\"1\"/>\n");
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (value, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use densetick::{DenseTicks, FixedAdvance, LinearNormalizer, Ticker};

    use super::*;

    #[test]
    fn dense_ticks_do_not_overlap_in_the_preview() {
        let lw = FixedAdvance(6.0);
        let ticks = DenseTicks.ticks(-3.0, 117.0, &lw, 480.0);
        let preview = AxisPreview::new(480.0);
        let bounds = preview.label_bounds(&ticks, &LinearNormalizer::new((-3.0, 117.0)), &lw);
        assert_eq!(AxisPreview::overlaps(&bounds), 0, "{ticks:?}");
    }

    #[test]
    fn overlapping_labels_are_counted() {
        let bounds = [
            Rect::new(0.0, 0.0, 10.0, 5.0),
            Rect::new(8.0, 0.0, 18.0, 5.0),
            Rect::new(20.0, 0.0, 30.0, 5.0),
        ];
        assert_eq!(AxisPreview::overlaps(&bounds), 1);
    }

    #[test]
    fn svg_contains_escaped_labels_and_paths() {
        let ticks = [Tick::new(0.0, "a<b"), Tick::new(1.0, "1")];
        let svg = AxisPreview::new(100.0).with_font_size(12.0).to_svg_string(
            "x & y",
            &ticks,
            &LinearNormalizer::new((0.0, 1.0)),
            &FixedAdvance(6.0),
        );
        assert!(svg.starts_with("<svg"), "{svg}");
        assert!(svg.contains("a&lt;b"), "{svg}");
        assert!(svg.contains("x &amp; y"), "{svg}");
        assert!(svg.contains(r##"stroke="#000000""##), "{svg}");
        assert!(svg.contains(r#"font-size="12""#), "{svg}");
    }

    #[test]
    fn one_element_per_line() {
        let ticks = [Tick::new(0.0, "0"), Tick::new(0.5, "0.5"), Tick::new(1.0, "1")];
        let svg = AxisPreview::new(100.0).to_svg_string(
            "axis",
            &ticks,
            &LinearNormalizer::new((0.0, 1.0)),
            &FixedAdvance(6.0),
        );
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(lines.iter().filter(|l| l.starts_with("<text")).count(), 4);
        assert_eq!(lines.iter().filter(|l| l.starts_with("<path")).count(), 3);
        assert!(lines.iter().any(|l| l.contains("stroke-opacity=")), "{svg}");
        assert_eq!(lines.last(), Some(&"</svg>"));
    }

    #[test]
    fn translucent_brushes_carry_opacity() {
        let (value, opacity) = svg_paint(&AxisStyle::default().grid);
        assert_eq!(value, "#000000");
        assert!(opacity.is_some_and(|o| o < 0.2), "{opacity:?}");
    }
}
