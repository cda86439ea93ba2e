//! Ring-level polygon primitives.

use geo::{LineString, MultiPolygon, Point, Polygon};

/// Signed shoelace area of a ring. Positive for counter-clockwise winding.
///
/// Works on both open and closed rings; the closing duplicate contributes a
/// zero-length edge.
pub fn signed_ring_area(ring: &LineString<f64>) -> f64 {
    let coords = &ring.0;
    if coords.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..coords.len() {
        let a = coords[i];
        let b = coords[(i + 1) % coords.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Absolute shoelace area of a ring.
pub fn ring_area(ring: &LineString<f64>) -> f64 {
    signed_ring_area(ring).abs()
}

/// Exterior vertices of a polygon in stored order, without the closing
/// duplicate vertex.
pub fn exterior_vertices(poly: &Polygon<f64>) -> Vec<Point<f64>> {
    let coords = &poly.exterior().0;
    let n = match coords.len() {
        0 => 0,
        n if n > 1 && coords[0] == coords[n - 1] => n - 1,
        n => n,
    };
    coords[..n].iter().map(|c| Point::new(c.x, c.y)).collect()
}

/// Ray-cast point-in-ring test. Points exactly on the boundary may be
/// classified either way.
fn ring_contains(ring: &LineString<f64>, x: f64, y: f64) -> bool {
    let coords = &ring.0;
    let n = coords.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (coords[i].x, coords[i].y);
        let (xj, yj) = (coords[j].x, coords[j].y);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Tests whether a point lies inside the polygon: inside the exterior ring
/// and outside every hole.
pub fn contains_point(poly: &Polygon<f64>, point: Point<f64>) -> bool {
    if !ring_contains(poly.exterior(), point.x(), point.y()) {
        return false;
    }
    for hole in poly.interiors() {
        if ring_contains(hole, point.x(), point.y()) {
            return false;
        }
    }
    true
}

/// Tests whether any member of the region contains the point.
pub fn region_contains(region: &MultiPolygon<f64>, point: Point<f64>) -> bool {
    region.0.iter().any(|poly| contains_point(poly, point))
}
