//! Regular polygons used as seed footprints.

use super::core::Polygon;
use crate::error::FootprintError;
use crate::primitives::Point2;
use num_traits::Float;

/// Creates a regular polygon with `sides` vertices on a circle.
///
/// Vertex `i` sits at `start_angle + i * 360 / sides` degrees, measured
/// clockwise from the +x axis as seen looking down on the ground plane, at
/// distance `radius` from `origin`.
///
/// # Errors
///
/// - [`FootprintError::InvalidPolygon`] if `sides < 3`.
/// - [`FootprintError::DegenerateInput`] if `radius` is not positive and finite.
///
/// # Example
///
/// ```
/// use footprint::{regular_polygon, Point2};
///
/// let square = regular_polygon(Point2::origin(), 0.0_f64, 4, 1.0).unwrap();
/// assert_eq!(square.len(), 4);
/// ```
pub fn regular_polygon<F: Float>(
    origin: Point2<F>,
    start_angle: F,
    sides: usize,
    radius: F,
) -> Result<Polygon<F>, FootprintError> {
    if sides < 3 {
        return Err(FootprintError::InvalidPolygon { vertices: sides });
    }
    if !(radius.is_finite() && radius > F::zero()) {
        return Err(FootprintError::DegenerateInput);
    }

    let full_turn = F::from(360.0).ok_or(FootprintError::DegenerateInput)?;
    let count = F::from(sides).ok_or(FootprintError::DegenerateInput)?;
    let step = full_turn / count;

    let mut points = Vec::with_capacity(sides);
    for i in 0..sides {
        let index = F::from(i).ok_or(FootprintError::DegenerateInput)?;
        let (sin, cos) = (start_angle + index * step).to_radians().sin_cos();
        points.push(origin.translate(cos * radius, -sin * radius));
    }

    Polygon::new(points)
}
