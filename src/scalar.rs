//! Coordinate scalar trait for triangulation input.

use crate::primitives::Point2;
use num_traits::Float;
use std::fmt::Debug;

/// Floating-point types that can be triangulated.
///
/// Implemented for `f32` and `f64`. Predicates always run in `f64`, so the
/// trait provides a lossless widening plus the batched distance kernel used
/// to order points for insertion.
pub trait CoordinateScalar: Float + Debug + Send + Sync + 'static {
    /// Widens to `f64` without loss.
    fn widen(self) -> f64;

    /// Squared distance from every point to `target`, in input order.
    fn squared_distances(points: &[Point2<Self>], target: Point2<f64>) -> Vec<f64> {
        points
            .iter()
            .map(|p| {
                let dx = p.x.widen() - target.x;
                let dy = p.y.widen() - target.y;
                dx * dx + dy * dy
            })
            .collect()
    }
}

impl CoordinateScalar for f64 {
    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[cfg(feature = "simd")]
    fn squared_distances(points: &[Point2<Self>], target: Point2<f64>) -> Vec<f64> {
        crate::simd::distances_squared_to_point(points, target, |v: f64| v)
    }
}

impl CoordinateScalar for f32 {
    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[cfg(feature = "simd")]
    fn squared_distances(points: &[Point2<Self>], target: Point2<f64>) -> Vec<f64> {
        crate::simd::distances_squared_to_point(points, target, f64::from)
    }
}

/// Widens a point to `f64` coordinates.
#[inline]
pub(crate) fn widen_point<F: CoordinateScalar>(p: Point2<F>) -> Point2<f64> {
    Point2::new(p.x.widen(), p.y.widen())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen() {
        assert_eq!(0.1_f32.widen(), f64::from(0.1_f32));
        assert_eq!(0.1_f64.widen(), 0.1);
    }

    #[test]
    fn test_squared_distances() {
        let points = [
            Point2::new(0.0_f32, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(-2.0, 0.0),
        ];
        let d = f32::squared_distances(&points, Point2::new(0.0, 0.0));
        assert_eq!(d, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_widen_point() {
        let p = widen_point(Point2::new(1.5_f32, -0.25));
        assert_eq!(p, Point2::new(1.5, -0.25));
    }
}
