//! # windpack
//!
//! Greedy wind-turbine packing over planar safe regions.
//!
//! Given a safe region (the area where turbines may stand, with all setback
//! and exclusion constraints already applied upstream) and a minimum
//! center-to-center spacing, the packer repeatedly places a turbine at an
//! extreme vertex of the smallest leftover pocket and carves a spacing disk
//! around it, until no free area remains. The layout is deterministic and
//! locally greedy; it maximizes turbine count per pass, not global
//! optimality.
//!
//! ## Quick Start
//!
//! ```rust
//! use geo::{LineString, Polygon};
//! use windpack::{Packer, PackingConfig};
//!
//! let plant_area = Polygon::new(
//!     LineString::from(vec![(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0)]),
//!     vec![],
//! );
//!
//! let config = PackingConfig::new(30.0);
//! let mut packer = Packer::new(config, plant_area)?;
//! let summary = packer.pack()?;
//!
//! assert!(summary.placed > 1);
//! assert_eq!(packer.layout().len(), summary.placed);
//! # Ok::<(), windpack::Error>(())
//! ```
//!
//! ## Region Model
//!
//! Regions are `geo` multipolygons; a bare polygon promotes via `Into`.
//! Disconnected regions and regions with holes are supported; the packer
//! treats every member pocket independently, smallest first.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization for configs, layouts, and summaries.

pub mod config;
pub mod error;
pub mod geom;
pub mod layout;
pub mod packer;

// Re-exports
pub use config::{PackingConfig, DEFAULT_BUFFER_SEGMENTS, MIN_BUFFER_SEGMENTS};
pub use error::{Error, Result};
pub use layout::{PackSummary, TurbineLayout};
pub use packer::Packer;

pub use geo::{MultiPolygon, Point, Polygon};
