//! Circular buffering of a point into a spacing-exclusion disk.

use geo::{LineString, Point, Polygon};
use std::f64::consts::TAU;

use crate::config::MIN_BUFFER_SEGMENTS;

/// Approximates the disk of `radius` around `center` as a regular
/// `segments`-gon, counter-clockwise, with an explicit closing vertex.
///
/// The polygon is inscribed in the circle: its vertices lie on the circle
/// and its edges cut slightly inside it, so the clearance actually carved
/// around a placement is at least `radius * cos(PI / segments)`. Segment
/// counts below [`MIN_BUFFER_SEGMENTS`] are clamped up.
pub fn buffer_disk(center: Point<f64>, radius: f64, segments: usize) -> Polygon<f64> {
    let n = segments.max(MIN_BUFFER_SEGMENTS);
    let step = TAU / n as f64;

    let mut coords = Vec::with_capacity(n + 1);
    for i in 0..n {
        let angle = i as f64 * step;
        coords.push((
            center.x() + radius * angle.cos(),
            center.y() + radius * angle.sin(),
        ));
    }
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}
