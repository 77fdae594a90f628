// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the ticks a densetick strategy picks for a range, and optionally
//! renders the axis to SVG.
//!
//! ```text
//! densetick_demo numeric --min -3 --max 117 --length 480
//! densetick_demo calendar --from 2020-01-01 --to 2023-01-01 --length 300 --svg axis.svg
//! RUST_LOG=densetick=trace densetick_demo numeric --min 0 --max 1 --length 90
//! ```

mod svg;

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use densetick::{
    AxisNormalizer, DEFAULT_DATE_FORMAT, DenseTicks, DenseTimeTicks, FixedTicks, LabelWidth,
    LinearNormalizer, LogNormalizer, Tick, Ticker, TimeConversion, UnixSeconds,
};
use densetick_text::{FixedAdvance, HeuristicTextMeasurer, MeasuredLabels, TextStyle};
use tracing_subscriber::EnvFilter;

use crate::svg::AxisPreview;

#[derive(Debug, Parser)]
#[command(name = "densetick_demo", about = "Preview dense axis ticks")]
struct Cli {
    /// Label font size, in axis length units.
    #[arg(long, global = true, default_value_t = 10.0)]
    font_size: f64,

    /// How label widths are measured.
    #[arg(long, global = true, value_enum, default_value_t = Measurer::Heuristic)]
    measurer: Measurer,

    /// Also write an SVG preview of the axis.
    #[arg(long, global = true)]
    svg: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Measurer {
    /// Per-glyph estimate from the font size and weight.
    Heuristic,
    /// Every glyph is 0.6 em wide.
    Fixed,
    /// Shaped with parley (requires the `parley` feature).
    Parley,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evenly spaced decimal ticks.
    Numeric {
        #[arg(long, allow_hyphen_values = true)]
        min: f64,
        #[arg(long, allow_hyphen_values = true)]
        max: f64,
        /// Axis length.
        #[arg(long, default_value_t = 400.0)]
        length: f64,
    },
    /// Calendar-aligned ticks between two dates (UTC midnight).
    Calendar {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        #[arg(long, default_value_t = 400.0)]
        length: f64,
        /// strftime-style label format.
        #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
        format: String,
        /// Space ticks as on a logarithmic axis.
        #[arg(long)]
        log: bool,
    },
    /// A fixed list of values, filtered to the range.
    Fixed {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<f64>,
        #[arg(long, allow_hyphen_values = true)]
        min: f64,
        #[arg(long, allow_hyphen_values = true)]
        max: f64,
        /// Fractional digits in each label.
        #[arg(long, default_value_t = 0)]
        digits: usize,
        #[arg(long, default_value_t = 400.0)]
        length: f64,
    },
}

/// One fully configured axis.
struct Axis {
    title: String,
    min: f64,
    max: f64,
    length: f64,
    ticker: Box<dyn Ticker>,
    normalizer: Box<dyn AxisNormalizer>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let label_width = label_width(cli.measurer, cli.font_size)?;
    let axis = axis(cli.command)?;

    let ticks = axis
        .ticker
        .ticks(axis.min, axis.max, label_width.as_ref(), axis.length);
    tracing::info!(title = %axis.title, count = ticks.len(), "ticks");
    for tick in &ticks {
        println!("{}\t{}", tick.value(), tick.label());
    }

    if let Some(path) = cli.svg {
        write_svg(&path, &axis, &ticks, label_width.as_ref(), cli.font_size)?;
    }
    Ok(())
}

fn label_width(measurer: Measurer, font_size: f64) -> Result<Box<dyn LabelWidth>> {
    let style = TextStyle::new(font_size);
    Ok(match measurer {
        Measurer::Heuristic => Box::new(MeasuredLabels::new(HeuristicTextMeasurer, style)),
        Measurer::Fixed => Box::new(FixedAdvance(0.6 * font_size)),
        #[cfg(feature = "parley")]
        Measurer::Parley => Box::new(MeasuredLabels::new(
            densetick_text_parley::ParleyTextMeasurer::new(),
            style,
        )),
        #[cfg(not(feature = "parley"))]
        Measurer::Parley => bail!("built without the `parley` feature"),
    })
}

fn axis(command: Command) -> Result<Axis> {
    Ok(match command {
        Command::Numeric { min, max, length } => {
            check_range(min, max)?;
            Axis {
                title: format!("numeric [{min}, {max}]"),
                min,
                max,
                length,
                ticker: Box::new(DenseTicks::new()),
                normalizer: Box::new(LinearNormalizer::new((min, max))),
            }
        }
        Command::Calendar {
            from,
            to,
            length,
            format,
            log,
        } => {
            if from >= to {
                bail!("--from ({from}) must be before --to ({to})");
            }
            let min = UnixSeconds.to_value(midnight(from)?);
            let max = UnixSeconds.to_value(midnight(to)?);
            let mut ticker = DenseTimeTicks::new(format.as_str())
                .with_context(|| format!("invalid label format {format:?}"))?;
            let normalizer: Box<dyn AxisNormalizer> = if log {
                ticker = ticker.with_normalizer(LogNormalizer::new((min, max)));
                Box::new(LogNormalizer::new((min, max)))
            } else {
                Box::new(LinearNormalizer::new((min, max)))
            };
            Axis {
                title: format!("calendar {from} .. {to}"),
                min,
                max,
                length,
                ticker: Box::new(ticker),
                normalizer,
            }
        }
        Command::Fixed {
            values,
            min,
            max,
            digits,
            length,
        } => {
            check_range(min, max)?;
            let ticker = FixedTicks::from_values(values, digits)?;
            Axis {
                title: format!("fixed [{min}, {max}]"),
                min,
                max,
                length,
                ticker: Box::new(ticker),
                normalizer: Box::new(LinearNormalizer::new((min, max))),
            }
        }
    })
}

fn check_range(min: f64, max: f64) -> Result<()> {
    if min.partial_cmp(&max) != Some(Ordering::Less) {
        bail!("--min ({min}) must be below --max ({max})");
    }
    Ok(())
}

fn midnight(date: NaiveDate) -> Result<NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
        .with_context(|| format!("no midnight on {date}"))
}

fn write_svg(
    path: &Path,
    axis: &Axis,
    ticks: &[Tick],
    label_width: &dyn LabelWidth,
    font_size: f64,
) -> Result<()> {
    let preview = AxisPreview::new(axis.length).with_font_size(font_size);
    let overlaps =
        AxisPreview::overlaps(&preview.label_bounds(ticks, axis.normalizer.as_ref(), label_width));
    if overlaps > 0 {
        tracing::warn!(overlaps, "neighbouring labels overlap in the preview");
    }
    let svg = preview.to_svg_string(&axis.title, ticks, axis.normalizer.as_ref(), label_width);
    fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote SVG preview");
    Ok(())
}
