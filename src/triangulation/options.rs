//! Tolerances used while building a triangulation.

/// Default cutoff above which `(|v0|² + |v1|²) / |v0 × v1|` marks a triple as
/// collinear.
pub const DEFAULT_COLLINEARITY_RATIO: f64 = 1e14;

/// Default squared-distance-to-span ratio below which points coincide.
pub const DEFAULT_COINCIDENCE_RATIO: f64 = 1e-20;

/// Tolerance parameters for [`Delaunay`](super::Delaunay).
///
/// All values are explicit; nothing in the triangulator uses a hidden epsilon.
///
/// # Example
///
/// ```
/// use triangulum::triangulation::{Delaunay, TriangulationOptions};
/// use triangulum::Point2;
///
/// let options = TriangulationOptions::default().with_duplicate_epsilon(1e-9);
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0 + 1e-12, 1.0),
/// ];
/// let delaunay = Delaunay::with_options(&points, options).unwrap();
///
/// // The last point is within tolerance of (1, 1) and contributes nothing
/// assert_eq!(delaunay.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationOptions {
    /// Component-wise tolerance for treating a point as an exact duplicate of
    /// the point inserted just before it.
    pub duplicate_epsilon: f64,
    /// A new point coincides with a hull vertex when
    /// `dist² / span < coincidence_ratio`, `span` being the squared diagonal
    /// of the input's bounding box.
    pub coincidence_ratio: f64,
    /// Orientation cutoff, see [`orient2d`](crate::tolerance::orient2d).
    pub collinearity_ratio: f64,
}

impl TriangulationOptions {
    /// Creates options with the default tolerances.
    pub fn new() -> Self {
        Self {
            duplicate_epsilon: f64::EPSILON,
            coincidence_ratio: DEFAULT_COINCIDENCE_RATIO,
            collinearity_ratio: DEFAULT_COLLINEARITY_RATIO,
        }
    }

    /// Sets the exact-duplicate tolerance.
    pub fn with_duplicate_epsilon(mut self, eps: f64) -> Self {
        self.duplicate_epsilon = eps;
        self
    }

    /// Sets the span-relative coincidence ratio.
    pub fn with_coincidence_ratio(mut self, ratio: f64) -> Self {
        self.coincidence_ratio = ratio;
        self
    }

    /// Sets the orientation collinearity cutoff.
    pub fn with_collinearity_ratio(mut self, ratio: f64) -> Self {
        self.collinearity_ratio = ratio;
        self
    }
}

impl Default for TriangulationOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = TriangulationOptions::default();
        assert_eq!(o.duplicate_epsilon, f64::EPSILON);
        assert_eq!(o.coincidence_ratio, 1e-20);
        assert_eq!(o.collinearity_ratio, 1e14);
    }

    #[test]
    fn test_builders() {
        let o = TriangulationOptions::new()
            .with_duplicate_epsilon(1e-6)
            .with_coincidence_ratio(1e-12)
            .with_collinearity_ratio(1e10);
        assert_eq!(o.duplicate_epsilon, 1e-6);
        assert_eq!(o.coincidence_ratio, 1e-12);
        assert_eq!(o.collinearity_ratio, 1e10);
    }
}
