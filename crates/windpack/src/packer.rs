//! Greedy turbine placement over a safe region.

use geo::{Area, MultiPolygon, Point, Polygon};
use std::time::Instant;

use crate::config::PackingConfig;
use crate::error::{Error, Result};
use crate::geom;
use crate::layout::{PackSummary, TurbineLayout};

/// Fraction of the spacing-disk area the leftover must shrink by per
/// placement. A smaller shrink means the difference no longer makes
/// progress (floating-point boundary artifacts), so the run aborts with
/// [`Error::NonTermination`] instead of spinning.
const STALL_FRACTION: f64 = 1e-9;

/// Greedy packer maximizing turbine count in a safe region.
///
/// Each iteration places a turbine at the lowest-scoring exterior vertex of
/// the smallest leftover pocket, then carves a spacing disk around it. The
/// smallest-pocket-first order consumes fragmented slivers before larger
/// pockets fill in around them; the extreme-vertex choice keeps the
/// remaining interior large and regular.
///
/// `pack()` is cumulative: calling it again without [`reset`](Self::reset)
/// continues from whatever leftover region remains, which is a no-op once
/// the region is consumed. [`clear`](Self::clear) empties the layout only.
#[derive(Debug, Clone)]
pub struct Packer {
    config: PackingConfig,
    safe_region: MultiPolygon<f64>,
    leftover: Option<MultiPolygon<f64>>,
    layout: TurbineLayout,
}

impl Packer {
    /// Creates a packer over the given safe region.
    ///
    /// A bare `Polygon` promotes to a one-member `MultiPolygon` via `Into`.
    /// Returns [`Error::InvalidConfig`] when the configuration fails
    /// validation or the region has no usable area.
    pub fn new(config: PackingConfig, safe_region: impl Into<MultiPolygon<f64>>) -> Result<Self> {
        config.validate()?;

        let safe_region = safe_region.into();
        if safe_region.unsigned_area() <= 0.0 {
            return Err(Error::InvalidConfig(
                "safe region has zero usable area".into(),
            ));
        }

        Ok(Self {
            config,
            safe_region,
            leftover: None,
            layout: TurbineLayout::new(),
        })
    }

    /// Runs the greedy loop until no leftover pocket remains.
    ///
    /// Placements accumulate in the layout; on error the layout built so
    /// far is preserved but must be treated as incomplete.
    pub fn pack(&mut self) -> Result<PackSummary> {
        let start = Instant::now();
        let mut leftover = self
            .leftover
            .take()
            .unwrap_or_else(|| self.safe_region.clone());
        let mut placed = 0usize;

        while let Some(pocket) = smallest_member(&leftover) {
            let site = match select_site(pocket, self.config.weight_x) {
                Ok(site) => site,
                Err(err) => {
                    self.leftover = Some(leftover);
                    return Err(err);
                }
            };
            self.layout.push(site);
            placed += 1;

            let disk = geom::buffer_disk(site, self.config.min_spacing, self.config.buffer_segments);
            let before = leftover.unsigned_area();
            let next = match geom::difference(&leftover, &disk) {
                Ok(next) => next,
                Err(err) => {
                    self.leftover = Some(leftover);
                    return Err(err);
                }
            };

            // Consuming a member outright is progress even when its area is
            // negligible; a stall is a difference that neither removes area
            // nor shrinks the pocket count.
            let after = next.unsigned_area();
            if before - after < disk.unsigned_area() * STALL_FRACTION
                && next.0.len() >= leftover.0.len()
            {
                self.leftover = Some(next);
                log::warn!(
                    "leftover area stalled at {:.6} after {} placements",
                    after,
                    self.layout.len()
                );
                return Err(Error::NonTermination {
                    iterations: self.layout.len(),
                    remaining_area: after,
                });
            }

            log::debug!(
                "placed turbine {} at ({:.3}, {:.3}), {:.3} area left in {} pockets",
                self.layout.len(),
                site.x(),
                site.y(),
                after,
                next.0.len()
            );
            leftover = next;
        }

        let remaining_area = leftover.unsigned_area();
        self.leftover = Some(leftover);

        Ok(PackSummary {
            placed,
            total_placed: self.layout.len(),
            remaining_area,
            computation_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Empties the layout. The leftover region is untouched, matching the
    /// narrow historical meaning of a layout reset; use
    /// [`reset`](Self::reset) to also restore the region.
    pub fn clear(&mut self) {
        self.layout.clear();
    }

    /// Empties the layout and re-derives the leftover region from the safe
    /// region, restoring the fresh-construction state.
    pub fn reset(&mut self) {
        self.layout.clear();
        self.leftover = None;
    }

    /// Placed turbine locations.
    pub fn layout(&self) -> &TurbineLayout {
        &self.layout
    }

    /// The caller-supplied safe region, never mutated.
    pub fn safe_region(&self) -> &MultiPolygon<f64> {
        &self.safe_region
    }

    /// The not-yet-consumed portion of the safe region. `None` before the
    /// first `pack()` and after `reset()`.
    pub fn leftover_region(&self) -> Option<&MultiPolygon<f64>> {
        self.leftover.as_ref()
    }

    /// The packing configuration.
    pub fn config(&self) -> &PackingConfig {
        &self.config
    }
}

/// Member with the smallest area; first occurrence wins exact ties.
fn smallest_member(region: &MultiPolygon<f64>) -> Option<&Polygon<f64>> {
    let mut best: Option<(&Polygon<f64>, f64)> = None;
    for member in &region.0 {
        let area = member.unsigned_area();
        match best {
            Some((_, smallest)) if area >= smallest => {}
            _ => best = Some((member, area)),
        }
    }
    best.map(|(member, _)| member)
}

/// Exterior vertex minimizing `weight_x * x + y`; first occurrence wins
/// exact ties.
fn select_site(pocket: &Polygon<f64>, weight_x: f64) -> Result<Point<f64>> {
    let mut best: Option<(Point<f64>, f64)> = None;
    for vertex in geom::exterior_vertices(pocket) {
        let score = weight_x * vertex.x() + vertex.y();
        match best {
            Some((_, lowest)) if score >= lowest => {}
            _ => best = Some((vertex, score)),
        }
    }
    best.map(|(vertex, _)| vertex)
        .ok_or_else(|| Error::Geometry("polygon has no exterior vertices".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;

    fn square(origin: (f64, f64), side: f64) -> Polygon<f64> {
        let (x, y) = origin;
        Polygon::new(
            LineString::from(vec![
                (x, y),
                (x, y + side),
                (x + side, y + side),
                (x + side, y),
            ]),
            vec![],
        )
    }

    #[test]
    fn test_rejects_zero_area_region() {
        let collinear = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
            vec![],
        );
        let result = Packer::new(PackingConfig::new(1.0), collinear);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        let empty = MultiPolygon::new(Vec::new());
        let result = Packer::new(PackingConfig::new(1.0), empty);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_spacing_before_geometry_runs() {
        let result = Packer::new(PackingConfig::new(-2.0), square((0.0, 0.0), 10.0));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_smallest_member_tie_breaks_to_first() {
        let region = MultiPolygon::new(vec![
            square((0.0, 0.0), 2.0),
            square((10.0, 0.0), 2.0),
            square((20.0, 0.0), 1.0),
        ]);
        let smallest = smallest_member(&region).unwrap();
        assert_eq!(smallest.exterior().0[0].x, 20.0);

        let tied = MultiPolygon::new(vec![square((5.0, 0.0), 1.0), square((9.0, 0.0), 1.0)]);
        let first = smallest_member(&tied).unwrap();
        assert_eq!(first.exterior().0[0].x, 5.0);
    }

    #[test]
    fn test_select_site_scoring() {
        let triangle = Polygon::new(
            LineString::from(vec![(0.0, 8.0), (10.0, 0.0), (10.0, 10.0)]),
            vec![],
        );

        // weight_x = 0 favors the lowest vertex.
        let site = select_site(&triangle, 0.0).unwrap();
        assert_eq!(site, Point::new(10.0, 0.0));

        // A strong x weight flips the choice to the leftmost vertex.
        let site = select_site(&triangle, 2.0).unwrap();
        assert_eq!(site, Point::new(0.0, 8.0));
    }

    #[test]
    fn test_select_site_tie_breaks_to_first_occurrence() {
        // Both bottom corners score 0.0 with weight_x = 0; the first in
        // stored order wins.
        let sq = Polygon::new(
            LineString::from(vec![(4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (0.0, 0.0)]),
            vec![],
        );
        let site = select_site(&sq, 0.0).unwrap();
        assert_eq!(site, Point::new(4.0, 0.0));
    }

    #[test]
    fn test_two_distant_squares_get_one_turbine_each() {
        let region = MultiPolygon::new(vec![square((0.0, 0.0), 1.0), square((100.0, 0.0), 1.0)]);
        let mut packer = Packer::new(PackingConfig::new(3.0), region).unwrap();
        let summary = packer.pack().unwrap();

        assert_eq!(summary.placed, 2);
        assert_eq!(
            packer.layout().points(),
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]
        );
        assert_eq!(summary.remaining_area, 0.0);
    }

    #[test]
    fn test_pack_after_consumption_is_a_no_op() {
        let mut packer = Packer::new(PackingConfig::new(3.0), square((0.0, 0.0), 1.0)).unwrap();
        let first = packer.pack().unwrap();
        assert_eq!(first.placed, 1);

        let second = packer.pack().unwrap();
        assert_eq!(second.placed, 0);
        assert_eq!(second.total_placed, 1);
        assert_eq!(packer.layout().len(), 1);
    }

    #[test]
    fn test_clear_keeps_leftover_reset_restores_it() {
        let mut packer = Packer::new(PackingConfig::new(3.0), square((0.0, 0.0), 1.0)).unwrap();
        packer.pack().unwrap();
        let baseline = packer.layout().clone();

        // clear() drops the layout but the consumed leftover stays consumed.
        packer.clear();
        assert!(packer.layout().is_empty());
        packer.pack().unwrap();
        assert!(packer.layout().is_empty());

        // reset() re-derives the leftover, reproducing the fresh run.
        packer.reset();
        assert!(packer.leftover_region().is_none());
        packer.pack().unwrap();
        assert_eq!(packer.layout(), &baseline);
    }
}
