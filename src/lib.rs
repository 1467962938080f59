//! footprint - Building footprints and the union of overlapping ones
//!
//! A footprint is a simple closed polygon on the ground plane. When two
//! buildings are placed so that they overlap, their footprints merge into one
//! outline; [`polygon_union`] computes it by walking the two boundaries.
//!
//! All comparisons take an explicit tolerance `eps`; see
//! [`tolerance::default_eps`] for the value used throughout the tests.

pub mod bounds;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use bounds::Aabb2;
pub use error::FootprintError;
pub use polygon::{insert_nearest_crossing, polygon_union, regular_polygon, Cursor, Polygon};
pub use primitives::Point2;
pub use tolerance::{intersect, Intersection};
