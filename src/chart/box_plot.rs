use itertools::Itertools;
use log::warn;
use svg::{
    node::element::{Circle, Line, Rectangle},
    Document,
};

use super::{add_grid, available, frame, label, map_float, nice_max, y_axis_title};
use crate::schema::{PlayerRecord, StatKind};

const SIZE: f64 = 600.;
const MARGIN: f64 = 70.;
const BOX_WIDTH: f64 = 160.;
const COOLWARM: [&str; 3] = ["#3b4cc0", "#b0b0b0", "#b40426"];

/// Five-number summary of a sample.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Summary {
    pub min: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub max: f64,
}

impl Summary {
    /// Quartiles interpolate linearly between the closest ranks.
    pub fn of(values: &[f64]) -> Option<Self> {
        let sorted = values.iter().copied().sorted_by(f64::total_cmp).collect_vec();
        let quantile = |p: f64| {
            let position = p * (sorted.len() - 1) as f64;
            let (lower, upper) = (position.floor() as usize, position.ceil() as usize);
            sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
        };
        (!sorted.is_empty()).then(|| Summary {
            min: sorted[0],
            lower_quartile: quantile(0.25),
            median: quantile(0.5),
            upper_quartile: quantile(0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Spread of batting averages across formats.
pub fn draw(record: &PlayerRecord) -> Option<Document> {
    let averages = available(record, StatKind::Average);
    let Some(summary) = Summary::of(&averages.iter().map(|&(_, x)| x).collect_vec()) else {
        warn!("No batting average is available; skipping the box chart");
        return None;
    };

    let x_range = MARGIN..SIZE - MARGIN / 2.;
    let y_range = SIZE - MARGIN..MARGIN;
    let max = nice_max(summary.max);
    let y = |v: f64| map_float(v, 0.0..max, y_range.clone());
    let center = (x_range.start + x_range.end) / 2.;
    let (left, right) = (center - BOX_WIDTH / 2., center + BOX_WIDTH / 2.);
    let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
            .set("stroke", "black")
            .set("stroke-width", 1.5)
    };

    let mut document = Document::new()
        .set("viewBox", (0, 0, SIZE, SIZE))
        .add(
            Rectangle::new()
                .set("width", SIZE)
                .set("height", SIZE)
                .set("fill", "white"),
        );
    document = add_grid(document, max, &x_range, &y_range)
        .add(frame(&x_range, &y_range))
        .add(label(SIZE / 2., MARGIN / 2., "Batting Average Comparison Across Formats", 18))
        .add(y_axis_title(16., &y_range, "Average"))
        // whiskers
        .add(line(center, y(summary.min), center, y(summary.lower_quartile)))
        .add(line(center, y(summary.upper_quartile), center, y(summary.max)))
        .add(line(center - BOX_WIDTH / 4., y(summary.min), center + BOX_WIDTH / 4., y(summary.min)))
        .add(line(center - BOX_WIDTH / 4., y(summary.max), center + BOX_WIDTH / 4., y(summary.max)))
        .add(
            Rectangle::new()
                .set("x", left)
                .set("y", y(summary.upper_quartile))
                .set("width", BOX_WIDTH)
                .set("height", y(summary.lower_quartile) - y(summary.upper_quartile))
                .set("fill", "#dddddd")
                .set("stroke", "black")
                .set("stroke-width", 1.5),
        )
        .add(line(left, y(summary.median), right, y(summary.median)).set("stroke-width", 3));

    for (format, average) in averages {
        let color = COOLWARM[format as usize];
        let x = right + 40.;
        document = document
            .add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y(average))
                    .set("r", 5)
                    .set("fill", color),
            )
            .add(
                label(x + 12., y(average), format!("{format}: {average}"), 13)
                    .set("text-anchor", "start"),
            );
    }
    Some(document)
}
