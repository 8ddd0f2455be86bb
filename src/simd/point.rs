//! SIMD point batch types.

use wide::f64x4;

use crate::primitives::Point2;

/// A batch of 4 2D points using SIMD, widened to `f64` lanes.
#[derive(Clone, Copy, Debug)]
pub struct Point2x4 {
    pub x: f64x4,
    pub y: f64x4,
}

impl Point2x4 {
    /// Creates a new batch of points.
    #[inline]
    pub fn new(x: f64x4, y: f64x4) -> Self {
        Self { x, y }
    }

    /// Creates a batch from the first 4 points of `points`, widening each
    /// coordinate with `widen`.
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than 4 points.
    #[inline]
    pub fn from_slice_with<T: Copy>(points: &[Point2<T>], widen: impl Fn(T) -> f64) -> Self {
        Self {
            x: f64x4::new([
                widen(points[0].x),
                widen(points[1].x),
                widen(points[2].x),
                widen(points[3].x),
            ]),
            y: f64x4::new([
                widen(points[0].y),
                widen(points[1].y),
                widen(points[2].y),
                widen(points[3].y),
            ]),
        }
    }

    /// Creates a batch where all 4 points are the same.
    #[inline]
    pub fn splat(p: Point2<f64>) -> Self {
        Self {
            x: f64x4::splat(p.x),
            y: f64x4::splat(p.y),
        }
    }

    /// Computes the squared distance from each point to a single target point.
    #[inline]
    pub fn distance_squared_to(self, target: Point2<f64>) -> f64x4 {
        let dx = self.x - f64x4::splat(target.x);
        let dy = self.y - f64x4::splat(target.y);
        dx * dx + dy * dy
    }

    /// Extracts the 4 points as an array.
    #[inline]
    pub fn to_array(self) -> [Point2<f64>; 4] {
        let x = self.x.to_array();
        let y = self.y.to_array();
        [
            Point2::new(x[0], y[0]),
            Point2::new(x[1], y[1]),
            Point2::new(x[2], y[2]),
            Point2::new(x[3], y[3]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_widens_f32() {
        let points = [
            Point2::new(0.5_f32, 1.0),
            Point2::new(2.0, 3.0),
            Point2::new(-1.0, 4.0),
            Point2::new(0.0, 0.0),
        ];
        let batch = Point2x4::from_slice_with(&points, f64::from);
        let back = batch.to_array();
        assert_eq!(back[0], Point2::new(0.5, 1.0));
        assert_eq!(back[2], Point2::new(-1.0, 4.0));
    }

    #[test]
    fn test_distance_squared_to() {
        let batch = Point2x4::new(
            f64x4::new([0.0, 3.0, 0.0, 3.0]),
            f64x4::new([0.0, 0.0, 4.0, 4.0]),
        );
        let d = batch.distance_squared_to(Point2::origin()).to_array();
        assert_eq!(d, [0.0, 9.0, 16.0, 25.0]);
    }

    #[test]
    fn test_splat() {
        let batch = Point2x4::splat(Point2::new(1.0, 2.0));
        for p in batch.to_array() {
            assert_eq!(p, Point2::new(1.0, 2.0));
        }
    }
}
