//! Packing run configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default vertex count of the spacing-disk approximation.
///
/// Equivalent to 16 segments per quadrant, the conventional resolution for
/// circular buffers.
pub const DEFAULT_BUFFER_SEGMENTS: usize = 64;

/// Smallest accepted vertex count for the spacing disk. Below this the disk
/// degrades enough to visibly violate the spacing guarantee near corners.
pub const MIN_BUFFER_SEGMENTS: usize = 8;

/// Immutable parameters for a packing run.
///
/// `min_spacing` is realized internally as the radius of the exclusion disk
/// carved around each placed turbine, so the region units and the spacing
/// unit must agree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingConfig {
    /// Minimum allowed center-to-center distance between turbines.
    pub min_spacing: f64,

    /// Weight applied to the x coordinate when scoring candidate vertices
    /// (`weight_x * x + y`, lowest score wins). Zero favors low-y vertices.
    pub weight_x: f64,

    /// Vertex count of the polygonal disk carved around each placement.
    /// Higher values trade speed for packing density near boundaries.
    pub buffer_segments: usize,
}

impl PackingConfig {
    /// Creates a configuration with the given spacing and default
    /// tie-break weight and disk fidelity.
    pub fn new(min_spacing: f64) -> Self {
        Self {
            min_spacing,
            weight_x: 0.0,
            buffer_segments: DEFAULT_BUFFER_SEGMENTS,
        }
    }

    /// Sets the x-coordinate tie-break weight.
    pub fn with_weight_x(mut self, weight_x: f64) -> Self {
        self.weight_x = weight_x;
        self
    }

    /// Sets the vertex count of the spacing disk.
    pub fn with_buffer_segments(mut self, segments: usize) -> Self {
        self.buffer_segments = segments;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.min_spacing.is_finite() || self.min_spacing <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_spacing must be positive and finite, got {}",
                self.min_spacing
            )));
        }

        if !self.weight_x.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "weight_x must be finite, got {}",
                self.weight_x
            )));
        }

        if self.buffer_segments < MIN_BUFFER_SEGMENTS {
            return Err(Error::InvalidConfig(format!(
                "buffer_segments must be at least {}, got {}",
                MIN_BUFFER_SEGMENTS, self.buffer_segments
            )));
        }

        Ok(())
    }
}
