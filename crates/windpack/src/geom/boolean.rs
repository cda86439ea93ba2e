//! Polygon set difference on top of the `i_overlay` boolean engine.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use crate::error::{Error, Result};

type Contour = Vec<[f64; 2]>;

/// Subtracts `subtrahend` from every member of `region`.
///
/// The result is always normalized to a `MultiPolygon`: zero members when
/// the subtrahend covers the region, one when the difference stays
/// connected, several when it splits. Holes are preserved; a subtrahend
/// strictly inside a member punches a new hole into it.
///
/// Returns [`Error::Geometry`] for degenerate input: any ring with fewer
/// than 3 vertices or a non-finite coordinate.
pub fn difference(
    region: &MultiPolygon<f64>,
    subtrahend: &Polygon<f64>,
) -> Result<MultiPolygon<f64>> {
    let mut subject: Vec<Contour> = Vec::new();
    for member in &region.0 {
        subject.push(oriented(contour_of(member.exterior())?, true));
        for hole in member.interiors() {
            subject.push(oriented(contour_of(hole)?, false));
        }
    }
    if subject.is_empty() {
        return Ok(MultiPolygon::new(Vec::new()));
    }

    let mut clip: Vec<Contour> = vec![oriented(contour_of(subtrahend.exterior())?, true)];
    for hole in subtrahend.interiors() {
        clip.push(oriented(contour_of(hole)?, false));
    }

    let shapes = subject.overlay(&clip, OverlayRule::Difference, FillRule::NonZero);

    // Each output shape lists its outer boundary first, then its holes.
    let mut members = Vec::new();
    for shape in shapes {
        let mut rings = shape.into_iter();
        let outer = match rings.next() {
            Some(ring) if ring.len() >= 3 => ring,
            _ => continue,
        };
        let holes: Vec<LineString<f64>> = rings
            .filter(|ring| ring.len() >= 3)
            .map(line_string)
            .collect();
        members.push(Polygon::new(line_string(outer), holes));
    }
    Ok(MultiPolygon::new(members))
}

/// Extracts a ring as an open contour, validating vertex count and
/// coordinate finiteness.
fn contour_of(ring: &LineString<f64>) -> Result<Contour> {
    let coords = &ring.0;
    let n = if coords.len() > 1 && coords[0] == coords[coords.len() - 1] {
        coords.len() - 1
    } else {
        coords.len()
    };

    if n < 3 {
        return Err(Error::Geometry(format!(
            "ring has {} vertices, need at least 3",
            n
        )));
    }

    let mut contour = Vec::with_capacity(n);
    for c in &coords[..n] {
        if !c.x.is_finite() || !c.y.is_finite() {
            return Err(Error::Geometry(format!(
                "non-finite coordinate ({}, {})",
                c.x, c.y
            )));
        }
        contour.push([c.x, c.y]);
    }
    Ok(contour)
}

/// Forces counter-clockwise (`ccw = true`) or clockwise winding so the
/// non-zero fill rule reads exteriors and holes correctly.
fn oriented(mut contour: Contour, ccw: bool) -> Contour {
    let mut sum = 0.0;
    for i in 0..contour.len() {
        let a = contour[i];
        let b = contour[(i + 1) % contour.len()];
        sum += a[0] * b[1] - b[0] * a[1];
    }
    if sum != 0.0 && (sum > 0.0) != ccw {
        contour.reverse();
    }
    contour
}

fn line_string(contour: Contour) -> LineString<f64> {
    LineString::from(
        contour
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect::<Vec<_>>(),
    )
}
