//! Packing outputs: placed turbine coordinates and run statistics.

use geo::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered list of placed turbine locations.
///
/// Insertion order is placement order. The order carries no semantic
/// meaning, but it is reproducible: identical inputs yield identical
/// sequences, including tie-breaks.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurbineLayout {
    points: Vec<Point<f64>>,
}

impl TurbineLayout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed turbines.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no turbine has been placed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Placed locations in placement order.
    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    /// Iterates over placed locations in placement order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point<f64>> {
        self.points.iter()
    }

    /// X coordinates of all placements, in placement order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x()).collect()
    }

    /// Y coordinates of all placements, in placement order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y()).collect()
    }

    pub(crate) fn push(&mut self, point: Point<f64>) {
        self.points.push(point);
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }
}

impl<'a> IntoIterator for &'a TurbineLayout {
    type Item = &'a Point<f64>;
    type IntoIter = std::slice::Iter<'a, Point<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Statistics for a single [`pack`](crate::Packer::pack) run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Turbines placed by this run.
    pub placed: usize,

    /// Total turbines in the layout after this run (includes earlier runs
    /// when packing cumulatively).
    pub total_placed: usize,

    /// Leftover area remaining when the run stopped.
    pub remaining_area: f64,

    /// Wall-clock duration of the run in milliseconds.
    pub computation_time_ms: u64,
}
