//! Error types shared across the crate.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by configuration validation and geometry operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Packing parameters rejected before any placement work happened.
    #[error("invalid packing configuration: {0}")]
    InvalidConfig(String),

    /// A polygon operation received geometry it cannot process.
    #[error("geometry operation failed: {0}")]
    Geometry(String),

    /// The leftover region stopped shrinking, so the loop was aborted
    /// instead of spinning on floating-point boundary artifacts.
    #[error("packing stalled after {iterations} placements ({remaining_area} area remaining)")]
    NonTermination {
        /// Placements completed before the stall was detected.
        iterations: usize,
        /// Total leftover area when the stall was detected.
        remaining_area: f64,
    },
}
