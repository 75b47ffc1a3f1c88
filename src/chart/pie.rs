use std::f64::consts::{PI, TAU};

use log::warn;
use svg::{
    node::element::{Circle, Path, Rectangle},
    Document,
};

use super::{available, label};
use crate::schema::{PlayerRecord, StatKind};

const SIZE: f64 = 800.;
const RADIUS: f64 = 280.;
const CENTER: (f64, f64) = (SIZE / 2., SIZE / 2. + 20.);
/// Angle of the first slice's leading edge, counterclockwise from three o'clock.
const START_ANGLE: f64 = 140.;
const PASTEL: [&str; 3] = ["#a1c9f4", "#ffb482", "#8de5a1"];

/// Share of matches played in each format.
pub fn draw(record: &PlayerRecord) -> Option<Document> {
    let slices = available(record, StatKind::Matches)
        .into_iter()
        .filter(|&(_, matches)| matches > 0.)
        .collect::<Vec<_>>();
    let total: f64 = slices.iter().map(|(_, matches)| matches).sum();
    if slices.is_empty() {
        warn!("No matches to distribute; skipping the pie chart");
        return None;
    }

    let mut document = Document::new()
        .set("viewBox", (0, 0, SIZE, SIZE))
        .add(
            Rectangle::new()
                .set("width", SIZE)
                .set("height", SIZE)
                .set("fill", "white"),
        )
        .add(label(SIZE / 2., 40., "Match Distribution Across Formats", 22));

    let mut angle = START_ANGLE.to_radians();
    for &(format, matches) in &slices {
        let share = matches / total;
        let sweep = share * TAU;
        let color = PASTEL[format as usize];
        document = if slices.len() == 1 {
            document.add(
                Circle::new()
                    .set("cx", CENTER.0)
                    .set("cy", CENTER.1)
                    .set("r", RADIUS)
                    .set("fill", color),
            )
        } else {
            document.add(Path::new().set("d", wedge(angle, angle + sweep)).set("fill", color))
        };

        let middle = angle + sweep / 2.;
        let (x, y) = point(middle, RADIUS * 1.12);
        document = document.add(label(x, y, format.to_string(), 18));
        let (x, y) = point(middle, RADIUS * 0.6);
        document = document.add(label(x, y, format!("{:.1}%", share * 100.), 16));
        angle += sweep;
    }
    Some(document)
}

fn point(angle: f64, radius: f64) -> (f64, f64) {
    (
        CENTER.0 + radius * angle.cos(),
        CENTER.1 - radius * angle.sin(),
    )
}

/// Path data of the slice between two angles, drawn counterclockwise.
fn wedge(from: f64, to: f64) -> String {
    let (x0, y0) = point(from, RADIUS);
    let (x1, y1) = point(to, RADIUS);
    let large_arc = u8::from(to - from > PI);
    format!(
        "M {} {} L {x0} {y0} A {RADIUS} {RADIUS} 0 {large_arc} 0 {x1} {y1} Z",
        CENTER.0, CENTER.1
    )
}
