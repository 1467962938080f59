//! Union of two simple polygons by boundary walk.
//!
//! The walk starts on whichever polygon reaches furthest left, follows its
//! edges and, whenever the current edge crosses the other polygon, splices
//! the crossing into both rings and continues along the other polygon. It
//! stops when it returns to the start vertex by identity.

use super::core::{Cursor, Polygon};
use crate::error::FootprintError;
use crate::primitives::Point2;
use crate::tolerance::{intersect, Intersection};
use num_traits::Float;

/// Splices the crossing of edge `from -> to` nearest to `from` into `polygon`.
///
/// Every edge of `polygon` is tested, one lap starting at `start`. An edge
/// starting at `to` counts as a crossing at `to` (the walk continues onto
/// `polygon` at a shared vertex); an edge ending at `from` never counts (it
/// is the crossing the walk just arrived through). Colinear overlaps are not
/// crossings.
///
/// Returns the cursor of the spliced vertex, or of the existing vertex it
/// coincides with, or `None` if the edge crosses nothing.
///
/// # Example
///
/// ```
/// use footprint::{insert_nearest_crossing, Point2, Polygon};
///
/// let mut roof = Polygon::from_coords(&[(-10.0, 0.0), (0.0, 10.0), (10.0, 0.0)]).unwrap();
/// let start = roof.first();
/// let hit = insert_nearest_crossing(
///     Point2::new(5.0, -5.0),
///     Point2::new(5.0, 10.0),
///     &mut roof,
///     start,
///     1e-5,
/// )
/// .unwrap();
///
/// assert_eq!(roof.point(hit), Point2::new(5.0, 0.0));
/// assert_eq!(roof.len(), 4);
/// ```
pub fn insert_nearest_crossing<F: Float>(
    from: Point2<F>,
    to: Point2<F>,
    polygon: &mut Polygon<F>,
    start: Cursor,
    eps: F,
) -> Option<Cursor> {
    let mut nearest: Option<(F, Cursor, Point2<F>)> = None;

    for edge_start in polygon.ring_from(start) {
        let c = polygon.point(edge_start);
        let d = polygon.point(polygon.next(edge_start));

        let hit = if to.approx_eq(c, eps) {
            Intersection::Point(to)
        } else if from.approx_eq(d, eps) {
            Intersection::None
        } else {
            intersect(from, to, c, d, eps)
        };

        match hit {
            Intersection::Point(point) => {
                let distance = point.distance_squared(from);
                if nearest.map_or(true, |(best, _, _)| distance < best) {
                    nearest = Some((distance, edge_start, point));
                }
            }
            Intersection::Overlap => {
                log::trace!(
                    "colinear overlap with edge at vertex {} left unspliced",
                    edge_start.index()
                );
            }
            Intersection::None => {}
        }
    }

    nearest.map(|(_, edge_start, point)| polygon.insert_vertex(edge_start, point, eps))
}

/// Computes the outer boundary of the union of `a` and `b`.
///
/// Both inputs must be simple closed polygons. The result depends only on the
/// two shapes, not on argument order or on which vertex each ring starts at.
/// Three outcomes are possible:
///
/// - Overlapping shapes: one outline through the crossing points.
/// - Nested shapes: the outer polygon's vertices.
/// - Disjoint shapes (separate bounding boxes): both rings concatenated, the
///   leftmost one first. Callers that need two polygons split the sequence
///   where the second ring begins.
///
/// Both inputs gain a vertex at every crossing the walk passes through.
///
/// # Errors
///
/// - [`FootprintError::InvalidPolygon`] if either input has fewer than 3
///   vertices.
/// - [`FootprintError::WalkDidNotClose`] if numeric degeneracies keep the walk
///   from returning to its start.
///
/// # Example
///
/// ```
/// use footprint::{polygon_union, tolerance::default_eps, Polygon};
///
/// let mut outer = Polygon::from_coords(&[(-2.0, -2.0), (-2.0, 2.0), (2.0, 2.0), (2.0, -2.0)]).unwrap();
/// let mut inner = Polygon::from_coords(&[(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)]).unwrap();
///
/// let union = polygon_union(&mut inner, &mut outer, default_eps()).unwrap();
/// assert_eq!(union.to_vec(), outer.to_vec());
/// ```
pub fn polygon_union<F: Float>(
    a: &mut Polygon<F>,
    b: &mut Polygon<F>,
    eps: F,
) -> Result<Polygon<F>, FootprintError> {
    for polygon in [&*a, &*b] {
        if polygon.len() < 3 {
            return Err(FootprintError::InvalidPolygon {
                vertices: polygon.len(),
            });
        }
    }

    let size = a.len() + b.len();
    let budget = 4 * size * size + 16;
    log::debug!("union of polygons with {} and {} vertices", a.len(), b.len());

    let mut walk = Walk { a, b };
    let start_a = Handle::new(Side::A, walk.a.leftmost_start());
    let start_b = Handle::new(Side::B, walk.b.leftmost_start());
    let (start, mut other) = if walk.point(start_a).x < walk.point(start_b).x {
        (start_a, start_b)
    } else {
        (start_b, start_a)
    };

    let mut current = start;
    let mut outline = vec![walk.point(start)];
    let mut crossings = 0usize;
    let mut steps = 0usize;

    loop {
        steps += 1;
        if steps > budget {
            log::warn!("union walk gave up after {} steps", budget);
            return Err(FootprintError::WalkDidNotClose { steps: budget });
        }

        let next = walk.next(current);
        let from = walk.point(current);
        let to = walk.point(next);

        let target = walk.polygon_mut(other.side);
        match insert_nearest_crossing(from, to, target, other.cursor, eps) {
            None => {
                if next != start {
                    outline.push(to);
                }
                current = next;
            }
            Some(found) => {
                crossings += 1;
                let entry = Handle::new(other.side, found);
                let crossing = walk.point(entry);
                outline.push(crossing);
                log::trace!(
                    "crossing at ({:?}, {:?}), walk moves to polygon {:?}",
                    crossing.x.to_f64(),
                    crossing.y.to_f64(),
                    entry.side
                );

                let reentry = walk
                    .polygon_mut(current.side)
                    .insert_vertex(current.cursor, crossing, eps);
                other = Handle::new(current.side, reentry);
                current = entry;
            }
        }

        if current == start {
            break;
        }
    }

    if crossings == 0 {
        if walk.polygon(Side::A).is_separate(walk.polygon(Side::B)) {
            log::debug!("disjoint polygons, appending second ring");
            let ring = walk.polygon(other.side);
            outline.extend(ring.ring_from(other.cursor).map(|c| ring.point(c)));
        } else {
            log::debug!("nested polygons, keeping outer ring");
        }
    } else {
        log::debug!(
            "union outline has {} vertices after {} crossings",
            outline.len(),
            crossings
        );
    }

    Polygon::new(outline)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    A,
    B,
}

/// A cursor tagged with the polygon it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Handle {
    side: Side,
    cursor: Cursor,
}

impl Handle {
    fn new(side: Side, cursor: Cursor) -> Self {
        Self { side, cursor }
    }
}

struct Walk<'a, F> {
    a: &'a mut Polygon<F>,
    b: &'a mut Polygon<F>,
}

impl<F: Float> Walk<'_, F> {
    fn polygon(&self, side: Side) -> &Polygon<F> {
        match side {
            Side::A => &*self.a,
            Side::B => &*self.b,
        }
    }

    fn polygon_mut(&mut self, side: Side) -> &mut Polygon<F> {
        match side {
            Side::A => &mut *self.a,
            Side::B => &mut *self.b,
        }
    }

    fn point(&self, handle: Handle) -> Point2<F> {
        self.polygon(handle.side).point(handle.cursor)
    }

    fn next(&self, handle: Handle) -> Handle {
        Handle::new(handle.side, self.polygon(handle.side).next(handle.cursor))
    }
}
