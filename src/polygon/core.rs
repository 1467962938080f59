//! Circular vertex ring with stable cursors.

use crate::bounds::Aabb2;
use crate::error::FootprintError;
use crate::primitives::Point2;
use num_traits::Float;

/// Handle to one vertex of one [`Polygon`].
///
/// Cursors are arena indices: inserting vertices never moves existing ones,
/// so a cursor stays valid for the lifetime of its polygon. Two cursors are
/// equal only if they name the same vertex, even when other vertices hold the
/// same coordinates. Using a cursor with a polygon that did not issue it is a
/// logic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor(usize);

impl Cursor {
    /// Arena slot of the vertex. Slots are assigned in insertion order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Vertex<F> {
    point: Point2<F>,
    next: usize,
    prev: usize,
}

/// A closed polygon stored as a circular ring of vertices.
///
/// The traversal direction is the order the vertices were given in; no
/// winding is assumed. Vertices can be inserted while cursors into the ring
/// are held, but never removed.
#[derive(Debug, Clone)]
pub struct Polygon<F> {
    vertices: Vec<Vertex<F>>,
    first: usize,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon whose ring visits `points` in order.
    ///
    /// Fails with [`FootprintError::EmptyPolygon`] if `points` is empty.
    pub fn new(points: Vec<Point2<F>>) -> Result<Self, FootprintError> {
        if points.is_empty() {
            return Err(FootprintError::EmptyPolygon);
        }

        let n = points.len();
        let vertices = points
            .into_iter()
            .enumerate()
            .map(|(i, point)| Vertex {
                point,
                next: (i + 1) % n,
                prev: (i + n - 1) % n,
            })
            .collect();

        Ok(Self { vertices, first: 0 })
    }

    /// Creates a polygon from `(x, y)` pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Result<Self, FootprintError> {
        Self::new(coords.iter().copied().map(Point2::from).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a polygon holds at least one vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The first vertex in traversal order.
    #[inline]
    pub fn first(&self) -> Cursor {
        Cursor(self.first)
    }

    /// Coordinates held by the vertex at `cursor`.
    #[inline]
    pub fn point(&self, cursor: Cursor) -> Point2<F> {
        self.vertices[cursor.0].point
    }

    /// The following vertex, wrapping from the last vertex to the first.
    #[inline]
    pub fn next(&self, cursor: Cursor) -> Cursor {
        Cursor(self.vertices[cursor.0].next)
    }

    /// The preceding vertex, wrapping from the first vertex to the last.
    #[inline]
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        Cursor(self.vertices[cursor.0].prev)
    }

    /// Moves `steps` vertices forward from `cursor`.
    pub fn advance(&self, cursor: Cursor, steps: usize) -> Cursor {
        (0..steps % self.len()).fold(cursor, |c, _| self.next(c))
    }

    /// One full lap of the ring starting at `start`.
    #[inline]
    pub fn ring_from(&self, start: Cursor) -> Ring<'_, F> {
        Ring {
            polygon: self,
            start,
            current: Some(start),
        }
    }

    /// One full lap of the ring starting at [`Polygon::first`].
    #[inline]
    pub fn cursors(&self) -> Ring<'_, F> {
        self.ring_from(self.first())
    }

    /// Vertex coordinates in traversal order, starting at the first vertex.
    pub fn points(&self) -> impl Iterator<Item = Point2<F>> + '_ {
        self.cursors().map(move |c| self.point(c))
    }

    /// Collects [`Polygon::points`].
    pub fn to_vec(&self) -> Vec<Point2<F>> {
        self.points().collect()
    }

    /// The vertex with the smallest x coordinate.
    ///
    /// Ties keep the vertex met first when walking from [`Polygon::first`],
    /// so the choice does not depend on where an equivalent ring happens to
    /// start unless several vertices share the minimum.
    pub fn leftmost_start(&self) -> Cursor {
        let mut found = self.first();
        for cursor in self.cursors().skip(1) {
            if self.point(cursor).x < self.point(found).x {
                found = cursor;
            }
        }
        found
    }

    /// Splits the edge `cursor -> next(cursor)` at `point`.
    ///
    /// If `point` is within `eps` of either end of the edge, the ring is left
    /// untouched and that end's cursor is returned. Otherwise a new vertex is
    /// linked in before `next(cursor)` and its cursor is returned. Inserting
    /// before the first vertex makes the new vertex the first one.
    pub fn insert_vertex(&mut self, cursor: Cursor, point: Point2<F>, eps: F) -> Cursor {
        if self.point(cursor).approx_eq(point, eps) {
            return cursor;
        }

        let next = self.next(cursor);
        if self.point(next).approx_eq(point, eps) {
            return next;
        }

        let index = self.vertices.len();
        self.vertices.push(Vertex {
            point,
            next: next.0,
            prev: cursor.0,
        });
        self.vertices[cursor.0].next = index;
        self.vertices[next.0].prev = index;
        if next.0 == self.first {
            self.first = index;
        }

        Cursor(index)
    }

    /// Component-wise min/max over all vertices.
    pub fn bounding_box(&self) -> Aabb2<F> {
        let first = self.vertices[self.first].point;
        self.vertices
            .iter()
            .fold(Aabb2::new(first, first), |bounds, v| {
                bounds.expand_to_include(v.point)
            })
    }

    /// Returns `true` if the bounding boxes of `self` and `other` are
    /// separated on at least one axis, which proves the shapes are disjoint.
    pub fn is_separate(&self, other: &Self) -> bool {
        self.bounding_box().is_separate(other.bounding_box())
    }
}

/// Iterator over one lap of a [`Polygon`] ring.
///
/// Created by [`Polygon::ring_from`] and [`Polygon::cursors`].
#[derive(Debug, Clone)]
pub struct Ring<'a, F> {
    polygon: &'a Polygon<F>,
    start: Cursor,
    current: Option<Cursor>,
}

impl<F: Float> Iterator for Ring<'_, F> {
    type Item = Cursor;

    fn next(&mut self) -> Option<Cursor> {
        let cursor = self.current?;
        let next = self.polygon.next(cursor);
        self.current = (next != self.start).then_some(next);
        Some(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-5;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_new_empty() {
        let err = Polygon::<f64>::new(vec![]).unwrap_err();
        assert_eq!(err, FootprintError::EmptyPolygon);
    }

    #[test]
    fn test_new_keeps_order() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).unwrap();
        assert_eq!(poly.len(), 3);
        assert!(!poly.is_empty());
        assert_eq!(poly.to_vec(), vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
    }

    #[test]
    fn test_leftmost_start_any_rotation() {
        let orders = [
            [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)],
            [(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)],
            [(1.0, 1.0), (0.0, 0.0), (2.0, 0.0)],
            [(1.0, 1.0), (2.0, 0.0), (0.0, 0.0)],
            [(2.0, 0.0), (0.0, 0.0), (1.0, 1.0)],
            [(2.0, 0.0), (1.0, 1.0), (0.0, 0.0)],
        ];
        for coords in orders {
            let poly = Polygon::from_coords(&coords).unwrap();
            assert_eq!(poly.point(poly.leftmost_start()), p(0.0, 0.0));
        }
    }

    #[test]
    fn test_leftmost_start_tie_keeps_first() {
        let poly =
            Polygon::from_coords(&[(1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)]).unwrap();
        let start = poly.leftmost_start();
        assert_eq!(start, poly.advance(poly.first(), 1));
        assert_eq!(poly.point(start), p(-1.0, -1.0));
    }

    #[test]
    fn test_next_wraps() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
        let start = poly.leftmost_start();

        let mut c = poly.next(start);
        assert_eq!(poly.point(c), p(1.0, 1.0));
        c = poly.next(c);
        assert_eq!(poly.point(c), p(2.0, 2.0));
        c = poly.next(c);
        assert_eq!(poly.point(c), p(0.0, 0.0));
        assert_eq!(c, start);
        c = poly.next(c);
        assert_eq!(poly.point(c), p(1.0, 1.0));
    }

    #[test]
    fn test_prev_wraps() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
        let first = poly.first();
        assert_eq!(poly.point(poly.prev(first)), p(2.0, 2.0));
        assert_eq!(poly.prev(poly.next(first)), first);
    }

    #[test]
    fn test_advance_full_lap() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        let first = poly.first();
        assert_eq!(poly.point(poly.advance(first, 2)), p(1.0, 1.0));
        assert_eq!(poly.advance(first, poly.len()), first);
        assert_eq!(poly.advance(first, 0), first);
        assert_eq!(poly.advance(first, 5), poly.next(first));
    }

    #[test]
    fn test_ring_from_is_one_lap() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).unwrap();
        let start = poly.next(poly.first());
        let lap: Vec<_> = poly.ring_from(start).map(|c| poly.point(c)).collect();
        assert_eq!(lap, vec![p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)]);
    }

    #[test]
    fn test_single_vertex_ring() {
        let poly = Polygon::new(vec![p(3.0, 4.0)]).unwrap();
        let only = poly.first();
        assert_eq!(poly.next(only), only);
        assert_eq!(poly.cursors().count(), 1);
    }

    #[test]
    fn test_insert_vertex_at_start() {
        let mut poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
        let start = poly.next(poly.first());

        let inserted = poly.insert_vertex(start, p(1.0, 1.0), EPS);

        assert_eq!(poly.len(), 3);
        assert_eq!(inserted, start);
    }

    #[test]
    fn test_insert_vertex_at_end() {
        let mut poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
        let start = poly.next(poly.first());
        let end = poly.next(start);

        let inserted = poly.insert_vertex(start, p(2.0, 2.0 + 1e-7), EPS);

        assert_eq!(poly.len(), 3);
        assert_eq!(inserted, end);
    }

    #[test]
    fn test_insert_vertex_between() {
        let mut poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
        let start = poly.next(poly.first());
        let end = poly.next(start);

        let inserted = poly.insert_vertex(start, p(3.0, 3.0), EPS);

        assert_eq!(poly.len(), 4);
        assert_eq!(poly.point(inserted), p(3.0, 3.0));
        assert_eq!(poly.prev(inserted), start);
        assert_eq!(poly.next(inserted), end);
        assert_eq!(poly.next(start), inserted);
        assert_eq!(poly.prev(end), inserted);
    }

    #[test]
    fn test_insert_vertex_keeps_cursors_valid() {
        let mut poly = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]).unwrap();
        let cursors: Vec<_> = poly.cursors().collect();

        poly.insert_vertex(cursors[0], p(2.0, 0.0), EPS);
        poly.insert_vertex(cursors[1], p(4.0, 2.0), EPS);

        assert_eq!(poly.point(cursors[0]), p(0.0, 0.0));
        assert_eq!(poly.point(cursors[1]), p(4.0, 0.0));
        assert_eq!(poly.point(cursors[2]), p(4.0, 4.0));
        assert_eq!(
            poly.to_vec(),
            vec![p(0.0, 0.0), p(2.0, 0.0), p(4.0, 0.0), p(4.0, 2.0), p(4.0, 4.0)]
        );
    }

    #[test]
    fn test_insert_before_first_becomes_first() {
        let mut poly = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]).unwrap();
        let last = poly.prev(poly.first());

        let inserted = poly.insert_vertex(last, p(2.0, 2.0), EPS);

        assert_eq!(poly.first(), inserted);
        assert_eq!(
            poly.to_vec(),
            vec![p(2.0, 2.0), p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0)]
        );
    }

    #[test]
    fn test_bounding_box() {
        let poly =
            Polygon::from_coords(&[(1.0, 2.0), (3.0, 1.0), (4.0, 3.0), (2.0, 4.0)]).unwrap();
        let bounds = poly.bounding_box();
        assert_eq!(bounds.min, p(1.0, 1.0));
        assert_eq!(bounds.max, p(4.0, 4.0));
    }

    #[test]
    fn test_is_separate() {
        let a = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).unwrap();
        let b = Polygon::from_coords(&[(2.0, 0.0), (3.0, 0.0), (3.0, 1.0)]).unwrap();
        let c = Polygon::from_coords(&[(0.5, 0.5), (3.0, 0.5), (3.0, 2.0)]).unwrap();
        assert!(a.is_separate(&b));
        assert!(b.is_separate(&a));
        assert!(!a.is_separate(&c));
    }
}
