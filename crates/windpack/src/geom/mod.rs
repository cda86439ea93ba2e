//! Geometry engine: the polygon primitives the packer composes.
//!
//! All operations are pure functions over `geo` primitive types
//! (`Polygon<f64>`, `MultiPolygon<f64>`, `Point<f64>`). Boolean set
//! operations delegate to the `i_overlay` engine; buffering and ring
//! predicates are implemented directly.

pub mod boolean;
pub mod buffer;
pub mod polygon;

pub use boolean::difference;
pub use buffer::buffer_disk;
pub use polygon::{contains_point, exterior_vertices, region_contains, ring_area, signed_ring_area};
