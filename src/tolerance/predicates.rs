//! Line and segment predicates with explicit tolerance.
//!
//! Lines are handled in slope-intercept form (`y = slope * x + intercept`),
//! with vertical lines as a separate case. Contact at an endpoint of two
//! sloped segments is not a crossing.

use crate::primitives::Point2;
use num_traits::Float;

/// Returns `true` if `a` and `b` differ by less than `eps`.
#[inline]
pub fn approx_eq<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() < eps
}

/// Line through two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEquation<F> {
    /// `y = slope * x + intercept`.
    Sloped {
        /// Rise over run.
        slope: F,
        /// Value of `y` at `x = 0`.
        intercept: F,
    },
    /// `x` is constant; slope-intercept form does not exist.
    Vertical,
}

impl<F: Float> LineEquation<F> {
    /// Evaluates `y` at `x`, or `None` for a vertical line.
    #[inline]
    pub fn y_at(self, x: F) -> Option<F> {
        match self {
            LineEquation::Sloped { slope, intercept } => Some(slope * x + intercept),
            LineEquation::Vertical => None,
        }
    }
}

/// Computes the line through `a` and `b`.
///
/// Returns [`LineEquation::Vertical`] when `a.x ≈ b.x`, which includes the
/// degenerate case `a ≈ b`. The result does not depend on endpoint order.
#[inline]
pub fn line_equation<F: Float>(a: Point2<F>, b: Point2<F>, eps: F) -> LineEquation<F> {
    if approx_eq(a.x, b.x, eps) {
        return LineEquation::Vertical;
    }

    let slope = (a.y - b.y) / (a.x - b.x);
    LineEquation::Sloped {
        slope,
        intercept: a.y - slope * a.x,
    }
}

/// Tests whether `value` lies in the range spanned by `start` and `end`.
///
/// Works for either bound order. Values within `eps` of a bound count as
/// inside.
#[inline]
pub fn is_between_inclusive<F: Float>(value: F, start: F, end: F, eps: F) -> bool {
    if approx_eq(value, start, eps) || approx_eq(value, end, eps) {
        return true;
    }
    value >= start.min(end) && value <= start.max(end)
}

/// Tests whether `value` lies strictly inside the range spanned by `start`
/// and `end`.
///
/// Works for either bound order. Values within `eps` of a bound count as
/// outside.
#[inline]
pub fn is_between_exclusive<F: Float>(value: F, start: F, end: F, eps: F) -> bool {
    if approx_eq(value, start, eps) || approx_eq(value, end, eps) {
        return false;
    }
    value > start.min(end) && value < start.max(end)
}

/// Tests whether the closed 1D intervals `[a0, a1]` and `[b0, b1]` share at
/// least one point.
///
/// Bounds may be given in either order. Intervals that only touch overlap.
#[inline]
pub fn segments_overlap<F: Float>(a0: F, a1: F, b0: F, b1: F) -> bool {
    let (a_min, a_max) = (a0.min(a1), a0.max(a1));
    let (b_min, b_max) = (b0.min(b1), b0.max(b1));
    !(a_min > b_max || b_min > a_max)
}

/// Result of [`intersect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection<F> {
    /// The segments do not cross.
    None,
    /// The segments cross at a single point.
    Point(Point2<F>),
    /// The segments are colinear and share a stretch (or a single touching
    /// point) of their common line.
    Overlap,
}

/// Intersects segment AB with segment CD.
///
/// Between two sloped segments only proper crossings are reported as
/// [`Intersection::Point`]; a crossing at an endpoint of either one is
/// [`Intersection::None`]. When one segment is vertical the crossing must lie
/// strictly inside the vertical one but may sit on an end of the other.
///
/// # Example
///
/// ```
/// use footprint::tolerance::{intersect, Intersection};
/// use footprint::Point2;
///
/// let hit = intersect(
///     Point2::new(-3.0, -2.0),
///     Point2::new(-1.0, 4.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(-4.0, 2.0),
///     1e-5,
/// );
/// assert_eq!(hit, Intersection::Point(Point2::new(-2.0, 1.0)));
/// ```
pub fn intersect<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    d: Point2<F>,
    eps: F,
) -> Intersection<F> {
    let ab = line_equation(a, b, eps);
    let cd = line_equation(c, d, eps);

    match (ab, cd) {
        (LineEquation::Vertical, LineEquation::Vertical) => {
            if !approx_eq(a.x, c.x, eps) {
                return Intersection::None;
            }
            if segments_overlap(a.y, b.y, c.y, d.y) {
                Intersection::Overlap
            } else {
                Intersection::None
            }
        }
        (LineEquation::Vertical, LineEquation::Sloped { .. }) => {
            vertical_crossing(c, d, cd, a.x, a.y, b.y, eps)
        }
        (LineEquation::Sloped { .. }, LineEquation::Vertical) => {
            vertical_crossing(a, b, ab, c.x, c.y, d.y, eps)
        }
        (
            LineEquation::Sloped {
                slope: slope_ab,
                intercept: intercept_ab,
            },
            LineEquation::Sloped {
                slope: slope_cd,
                intercept: intercept_cd,
            },
        ) => {
            if approx_eq(slope_ab, slope_cd, eps) {
                if approx_eq(intercept_ab, intercept_cd, eps)
                    && segments_overlap(a.x, b.x, c.x, d.x)
                {
                    return Intersection::Overlap;
                }
                // Parallel, or colinear without a shared stretch.
                return Intersection::None;
            }

            let x = (intercept_cd - intercept_ab) / (slope_ab - slope_cd);
            let y = slope_ab * x + intercept_ab;

            if is_between_exclusive(x, a.x, b.x, eps) && is_between_exclusive(x, c.x, d.x, eps) {
                Intersection::Point(Point2::new(x, y))
            } else {
                Intersection::None
            }
        }
    }
}

/// Crossing of the sloped segment `start`–`end` with the vertical segment at
/// `x` spanning `y0..y1`.
fn vertical_crossing<F: Float>(
    start: Point2<F>,
    end: Point2<F>,
    line: LineEquation<F>,
    x: F,
    y0: F,
    y1: F,
    eps: F,
) -> Intersection<F> {
    if !is_between_inclusive(x, start.x, end.x, eps) {
        return Intersection::None;
    }

    match line.y_at(x) {
        Some(y) if is_between_exclusive(y, y0, y1, eps) => Intersection::Point(Point2::new(x, y)),
        _ => Intersection::None,
    }
}
