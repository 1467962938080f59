//! Axis-aligned bounding box of a footprint.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Footprints never cache their box; [`crate::Polygon::bounding_box`]
/// recomputes it from the current vertices, so it reflects any crossing
/// vertices inserted by a union.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Smallest x and y over all vertices.
    pub min: Point2<F>,
    /// Largest x and y over all vertices.
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a box from its corners. Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Component-wise min/max over `points`.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), Self::expand_to_include))
    }

    /// Returns a box grown to include `p`.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Centre of the box; roof meshes fan out from here.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Smallest box containing both.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        self.expand_to_include(other.min).expand_to_include(other.max)
    }

    /// Returns `true` if the boxes share at least one point (touching counts).
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns `true` if a gap separates the boxes on at least one axis.
    ///
    /// Boxes that merely touch are not separate.
    #[inline]
    pub fn is_separate(self, other: Self) -> bool {
        !self.intersects(other)
    }

    /// Returns `true` if `p` lies inside or on the box.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
