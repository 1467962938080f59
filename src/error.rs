//! Error types for footprint operations.

use thiserror::Error;

/// Errors raised when a polygon operation's structural preconditions fail.
///
/// Ordinary numeric degeneracies (vertical, parallel or colinear edges) are
/// never errors; see [`crate::tolerance::Intersection`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootprintError {
    /// A polygon was built from an empty point list.
    #[error("polygon has no vertices")]
    EmptyPolygon,

    /// A closed boundary needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {vertices}")]
    InvalidPolygon {
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// Radius is zero, negative or not finite.
    #[error("degenerate input: radius must be positive and finite")]
    DegenerateInput,

    /// The union walk did not return to its start vertex.
    #[error("boundary walk did not close after {steps} steps")]
    WalkDidNotClose {
        /// Number of walk steps taken.
        steps: usize,
    },
}
