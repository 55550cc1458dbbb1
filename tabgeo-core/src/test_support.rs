//! Test-only helpers for building compressed coordinate fixtures.

use crate::{Point, encode_floats};

/// Encode `points` as a `[lon, lat]` polyline at `precision`.
#[must_use]
pub fn encode_points(points: &[Point], precision: u32) -> String {
    let tuples: Vec<Vec<f64>> = points.iter().map(|p| vec![p.lon, p.lat]).collect();
    encode_floats(&tuples, &[precision, precision])
}

/// An open unit-square ring anchored at `(lat, lon)`.
#[must_use]
pub fn open_square(lat: f64, lon: f64) -> Vec<Point> {
    offsets()
        .into_iter()
        .map(|(dlat, dlon)| Point {
            lat: shift(lat, dlat),
            lon: shift(lon, dlon),
        })
        .collect()
}

/// The same square as [`open_square`] with the first point repeated.
#[must_use]
pub fn closed_square(lat: f64, lon: f64) -> Vec<Point> {
    let mut ring = open_square(lat, lon);
    crate::close_ring(&mut ring);
    ring
}

const fn offsets() -> [(f64, f64); 4] {
    [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]
}

#[expect(clippy::float_arithmetic, reason = "fixture coordinates are offsets")]
fn shift(base: f64, delta: f64) -> f64 {
    base + delta
}
