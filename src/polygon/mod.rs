//! Footprint polygons and their union.
//!
//! A [`Polygon`] is a closed ring of vertices that can grow in place: the
//! union walk splices crossing points into both inputs while it traces the
//! combined outline.
//!
//! # Example
//!
//! ```
//! use footprint::polygon::{polygon_union, Polygon};
//! use footprint::tolerance::default_eps;
//!
//! let mut a = Polygon::from_coords(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]).unwrap();
//! let mut b = Polygon::from_coords(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)]).unwrap();
//!
//! let outline = polygon_union(&mut a, &mut b, default_eps()).unwrap();
//! assert_eq!(outline.len(), 8);
//! ```

mod core;
mod regular;
mod union;

pub use core::{Cursor, Polygon, Ring};
pub use regular::regular_polygon;
pub use union::{insert_nearest_crossing, polygon_union};
