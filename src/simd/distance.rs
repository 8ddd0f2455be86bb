//! SIMD-accelerated distance computations.

use crate::primitives::Point2;

use super::point::Point2x4;

/// Computes squared distances from multiple points to a single target point.
///
/// Coordinates are widened to `f64` with `widen` and processed in batches
/// of 4.
///
/// # Returns
///
/// Vector of squared distances, one per input point.
pub fn distances_squared_to_point<T: Copy>(
    points: &[Point2<T>],
    target: Point2<f64>,
    widen: impl Fn(T) -> f64 + Copy,
) -> Vec<f64> {
    let n = points.len();
    let mut result = Vec::with_capacity(n);

    let chunks = n / 4;
    for i in 0..chunks {
        let batch = Point2x4::from_slice_with(&points[i * 4..], widen);
        let distances = batch.distance_squared_to(target);
        result.extend_from_slice(&distances.to_array());
    }

    for p in &points[chunks * 4..] {
        let dx = widen(p.x) - target.x;
        let dy = widen(p.y) - target.y;
        result.push(dx * dx + dy * dy);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distances_squared_with_remainder() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(0.0, 4.0),
            Point2::new(3.0, 4.0),
            Point2::new(6.0, 8.0),
        ];

        let distances = distances_squared_to_point(&points, Point2::new(0.0, 0.0), |v: f64| v);
        assert_eq!(distances, vec![0.0, 9.0, 16.0, 25.0, 100.0]);
    }

    #[test]
    fn test_distances_squared_f32_input() {
        let points: Vec<Point2<f32>> = (0..7).map(|i| Point2::new(i as f32, 1.0)).collect();
        let distances = distances_squared_to_point(&points, Point2::new(0.0, 1.0), f64::from);
        for (i, d) in distances.iter().enumerate() {
            assert_eq!(*d, (i * i) as f64);
        }
    }

    #[test]
    fn test_empty() {
        let points: Vec<Point2<f64>> = Vec::new();
        assert!(distances_squared_to_point(&points, Point2::origin(), |v: f64| v).is_empty());
    }
}
