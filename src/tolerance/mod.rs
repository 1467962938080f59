//! Epsilon-aware line and segment predicates.
//!
//! All functions in this module take explicit tolerance parameters.
//! [`default_eps`] is the fixed tolerance used when a caller has no reason to
//! pick another one.

mod predicates;

use num_traits::Float;

pub use predicates::{
    approx_eq, intersect, is_between_exclusive, is_between_inclusive, line_equation,
    segments_overlap, Intersection, LineEquation,
};

/// Default absolute tolerance for footprint coordinates, `1e-5` world units.
#[inline]
pub fn default_eps<F: Float>() -> F {
    F::from(1e-5).unwrap_or_else(F::epsilon)
}
