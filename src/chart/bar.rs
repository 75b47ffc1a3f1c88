use itertools::Itertools;
use log::warn;
use svg::{node::element::Rectangle, Document};

use super::{add_grid, all_unavailable, frame, label, map_float, nice_max, y_axis_title};
use crate::schema::{Format, PlayerRecord, StatKind, StatValue};

const WIDTH: f64 = 1400.;
const HEIGHT: f64 = 600.;
const MARGIN: f64 = 70.;
const VIRIDIS: [&str; 3] = ["#440154", "#21918c", "#fde725"];

/// Runs and wickets by format, side by side.
pub fn draw(record: &PlayerRecord) -> Option<Document> {
    let runs = record.series(StatKind::Runs).collect_vec();
    let wickets = record.series(StatKind::Wickets).collect_vec();
    if all_unavailable(&runs) && all_unavailable(&wickets) {
        warn!("Neither runs nor wickets are available; skipping the bar chart");
        return None;
    }

    let document = Document::new()
        .set("viewBox", (0, 0, WIDTH, HEIGHT))
        .add(
            Rectangle::new()
                .set("width", WIDTH)
                .set("height", HEIGHT)
                .set("fill", "white"),
        );
    let document = panel(document, 0., "Runs Scored in Different Formats", "Runs", &runs);
    let document = panel(
        document,
        WIDTH / 2.,
        "Wickets Taken in Different Formats",
        "Wickets",
        &wickets,
    );
    Some(document)
}

fn panel(
    mut document: Document,
    left: f64,
    title: &str,
    y_title: &str,
    series: &[(Format, StatValue)],
) -> Document {
    for (format, value) in series {
        if !value.is_available() {
            warn!("{format} {y_title} is unavailable and is shown as N/A");
        }
    }
    let x_range = left + MARGIN..left + WIDTH / 2. - MARGIN / 2.;
    let y_range = HEIGHT - MARGIN..MARGIN;
    let max = nice_max(
        series
            .iter()
            .filter_map(|(_, value)| value.number())
            .fold(0., f64::max),
    );
    let y = |v: f64| map_float(v, 0.0..max, y_range.clone());

    document = add_grid(document, max, &x_range, &y_range)
        .add(frame(&x_range, &y_range))
        .add(label((x_range.start + x_range.end) / 2., MARGIN / 2., title, 18))
        .add(y_axis_title(left + 16., &y_range, y_title));

    let slot = (x_range.end - x_range.start) / series.len() as f64;
    for (i, ((format, value), color)) in series.iter().zip(VIRIDIS).enumerate() {
        let center = x_range.start + slot * (i as f64 + 0.5);
        document = document.add(label(center, y_range.start + 20., format.to_string(), 14));
        document = match value.number() {
            Some(v) => {
                let top = y(v.max(0.));
                document
                    .add(
                        Rectangle::new()
                            .set("x", center - slot * 0.4)
                            .set("y", top)
                            .set("width", slot * 0.8)
                            .set("height", y(0.) - top)
                            .set("fill", color),
                    )
                    .add(label(center, top - 12., value.to_string(), 13))
            }
            None => document.add(label(center, y(0.) - 12., "N/A", 13).set("fill", "gray")),
        };
    }
    document
}
