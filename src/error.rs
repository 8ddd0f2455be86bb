//! Error types for triangulation.

use thiserror::Error;

/// Errors that abort construction of a triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// No three points form a triangle with a finite circumcircle.
    ///
    /// Raised for fewer than 3 points, fewer than 3 distinct points, or
    /// input that is entirely collinear.
    #[error("degenerate input: no non-collinear seed triangle exists")]
    DegenerateInput,

    /// An input coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point in the input.
        index: usize,
    },

    /// An internal mesh or hull invariant was violated.
    ///
    /// Never expected on valid input; not meant to be retried.
    #[error("mesh inconsistency: {reason}")]
    MeshInconsistency {
        /// What went wrong.
        reason: &'static str,
    },
}
