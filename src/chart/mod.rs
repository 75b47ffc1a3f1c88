//! SVG rendering of a player's record.
//!
//! Unavailable values are left out of a chart (with a warning), and a chart with
//! nothing left to draw is skipped altogether.

pub mod bar;
pub mod box_plot;
pub mod pie;

use std::{
    io::BufWriter,
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::Context;
use fs_err::File;
use itertools::Itertools;
use log::{info, warn};
use strum::{EnumIter, IntoEnumIterator};
use svg::{
    node::element::{Line, Rectangle, Text},
    Document,
};

use crate::schema::{Format, PlayerRecord, StatKind, StatValue};

#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter)]
pub enum ChartKind {
    RunsAndWickets,
    Matches,
    Averages,
}
impl ChartKind {
    pub fn file_suffix(self) -> &'static str {
        use ChartKind::*;
        match self {
            RunsAndWickets => "runs-wickets",
            Matches => "matches",
            Averages => "averages",
        }
    }

    pub fn draw(self, record: &PlayerRecord) -> Option<Document> {
        use ChartKind::*;
        match self {
            RunsAndWickets => bar::draw(record),
            Matches => pie::draw(record),
            Averages => box_plot::draw(record),
        }
    }
}

/// Draws every chart and writes each one to `dir` as `<stem>-<kind>.svg`.
pub fn write_charts(record: &PlayerRecord, dir: &Path, stem: &str) -> anyhow::Result<Vec<PathBuf>> {
    fs_err::create_dir_all(dir)?;
    let mut written = vec![];
    for kind in ChartKind::iter() {
        let Some(document) = kind.draw(record) else {
            continue;
        };
        let path = dir.join(format!("{stem}-{}.svg", kind.file_suffix()));
        svg::write(BufWriter::new(File::create(&path)?), &document)
            .with_context(|| format!("While writing {path:?}"))?;
        info!("Wrote {kind:?} chart to {path:?}");
        written.push(path);
    }
    Ok(written)
}

/// Lower-cased `name` with every run of other characters replaced by `-`.
pub fn file_stem(name: &str) -> String {
    let lower = name.to_lowercase();
    let stem = regex!(r"[^a-z0-9]+").replace_all(&lower, "-");
    match stem.trim_matches('-') {
        "" => "player".to_owned(),
        stem => stem.to_owned(),
    }
}

/// The available values of `kind`, warning about each one that is not.
fn available(record: &PlayerRecord, kind: StatKind) -> Vec<(Format, f64)> {
    record
        .series(kind)
        .filter_map(|(format, value)| {
            if value.number().is_none() {
                warn!("{format} {kind} is unavailable and is left out of the chart");
            }
            value.number().map(|x| (format, x))
        })
        .collect_vec()
}

fn all_unavailable(series: &[(Format, StatValue)]) -> bool {
    series.iter().all(|(_, value)| !value.is_available())
}

fn map_float(a: f64, src: Range<f64>, dst: Range<f64>) -> f64 {
    dst.start + (dst.end - dst.start) * (a - src.start) / (src.end - src.start)
}

/// The smallest of 1, 2, 5 times a power of ten that is at least `max`.
fn nice_max(max: f64) -> f64 {
    if max.is_nan() || max <= 0. {
        return 1.;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    [1., 2., 5., 10.]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|&x| x >= max)
        .unwrap_or(10. * magnitude)
}

const TICKS: usize = 5;

/// Evenly spaced tick values from zero to `max`, with their labels.
fn ticks(max: f64) -> impl Iterator<Item = (f64, String)> {
    let step = max / TICKS as f64;
    let decimals = (-step.log10().floor()).max(0.) as usize;
    (0..=TICKS).map(move |i| {
        let value = step * i as f64;
        (value, format!("{value:.decimals$}"))
    })
}

fn label(x: f64, y: f64, content: impl Into<String>, size: u32) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-size", size)
        .set("font-family", "sans-serif")
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central")
}

fn frame(x_range: &Range<f64>, y_range: &Range<f64>) -> Rectangle {
    Rectangle::new()
        .set("x", x_range.start)
        .set("y", y_range.end)
        .set("width", x_range.end - x_range.start)
        .set("height", y_range.start - y_range.end)
        .set("stroke", "black")
        .set("fill", "none")
}

/// Horizontal grid lines with value labels on the left edge of the frame.
fn add_grid(
    mut document: Document,
    max: f64,
    x_range: &Range<f64>,
    y_range: &Range<f64>,
) -> Document {
    for (value, text) in ticks(max) {
        let y = map_float(value, 0.0..max, y_range.clone());
        document = document
            .add(
                Line::new()
                    .set("x1", x_range.start)
                    .set("x2", x_range.end)
                    .set("y1", y)
                    .set("y2", y)
                    .set("stroke", "#bbb")
                    .set("stroke-width", 0.5),
            )
            .add(label(x_range.start - 8., y, text, 12).set("text-anchor", "end"));
    }
    document
}

fn y_axis_title(x: f64, y_range: &Range<f64>, content: &str) -> Text {
    let y = (y_range.start + y_range.end) / 2.;
    label(0., 0., content, 14).set("transform", format!("translate({x}, {y}) rotate(-90)"))
}
