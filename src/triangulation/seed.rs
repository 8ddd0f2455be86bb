//! Choice of the initial triangle.

use crate::error::TriangulationError;
use crate::primitives::Point2;
use crate::scalar::{widen_point, CoordinateScalar};
use crate::tolerance::{circumcenter, circumradius_squared, orient2d, Orientation};

/// The first triangle of the sweep, in clockwise order, and its circumcenter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Seed {
    pub(crate) vertices: [usize; 3],
    pub(crate) center: Point2<f64>,
}

/// Index of the smallest finite value, first one winning ties.
fn argmin(values: impl IntoIterator<Item = (usize, f64)>) -> Option<usize> {
    let mut best = None;
    let mut best_value = f64::INFINITY;
    for (i, v) in values {
        if v < best_value {
            best = Some(i);
            best_value = v;
        }
    }
    best
}

/// Picks the seed triangle.
///
/// `i0` is the point nearest `bbox_center`, `i1` the nearest distinct point
/// to `i0`, and `i2` the point forming the smallest circumcircle with them.
/// The triangle is reordered to be clockwise.
///
/// Fails with [`TriangulationError::DegenerateInput`] when every candidate is
/// collinear with `i0` and `i1`, or the best candidate is too close to
/// collinear to have a definite orientation.
pub(crate) fn select_seed<F: CoordinateScalar>(
    points: &[Point2<F>],
    bbox_center: Point2<f64>,
    collinearity_ratio: f64,
) -> Result<Seed, TriangulationError> {
    let to_center = F::squared_distances(points, bbox_center);
    let i0 = argmin(to_center.into_iter().enumerate()).ok_or(TriangulationError::DegenerateInput)?;
    let p0 = widen_point(points[i0]);

    let to_p0 = F::squared_distances(points, p0);
    let i1 = argmin(
        to_p0
            .into_iter()
            .enumerate()
            .filter(|&(i, d)| i != i0 && d > 0.0),
    )
    .ok_or(TriangulationError::DegenerateInput)?;
    let p1 = widen_point(points[i1]);

    let i2 = argmin(
        points
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != i0 && i != i1)
            .map(|(i, &p)| (i, circumradius_squared(p0, p1, widen_point(p)))),
    )
    .ok_or(TriangulationError::DegenerateInput)?;
    let p2 = widen_point(points[i2]);

    let (i1, i2, p1, p2) = match orient2d(p0, p1, p2, collinearity_ratio) {
        Orientation::Clockwise => (i1, i2, p1, p2),
        Orientation::CounterClockwise => (i2, i1, p2, p1),
        Orientation::Collinear => {
            tracing::debug!(i0, i1, i2, "best seed triangle is too close to collinear");
            return Err(TriangulationError::DegenerateInput);
        }
    };

    let center = circumcenter(p0, p1, p2).ok_or(TriangulationError::DegenerateInput)?;

    Ok(Seed {
        vertices: [i0, i1, i2],
        center,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::is_clockwise;
    use approx::assert_relative_eq;

    fn seed_of(points: &[Point2<f64>]) -> Result<Seed, TriangulationError> {
        let center = crate::bounds::Aabb2::from_points(points.iter().copied())
            .unwrap()
            .center();
        select_seed(points, center, 1e14)
    }

    #[test]
    fn test_seed_is_clockwise() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let seed = seed_of(&points).unwrap();
        let [a, b, c] = seed.vertices;
        assert!(is_clockwise(points[a], points[b], points[c], 1e14));
        assert_relative_eq!(seed.center.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(seed.center.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_seed_starts_near_bbox_center() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
            Point2::new(5.1, 4.9),
            Point2::new(5.5, 5.5),
            Point2::new(4.0, 6.0),
        ];
        let seed = seed_of(&points).unwrap();
        assert_eq!(seed.vertices[0], 4);
        // Nearest neighbour of (5.1, 4.9) is (5.5, 5.5); (4, 6) gives the
        // smallest circle with them. Either may land in slot 1 after reordering.
        let mut rest = [seed.vertices[1], seed.vertices[2]];
        rest.sort_unstable();
        assert_eq!(rest, [5, 6]);
    }

    #[test]
    fn test_seed_skips_duplicates_of_first_vertex() {
        let points = vec![
            Point2::new(0.5, 0.5),
            Point2::new(0.5, 0.5),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let seed = seed_of(&points).unwrap();
        assert_eq!(seed.vertices[0], 0);
        assert!(!seed.vertices.contains(&1));
    }

    #[test]
    fn test_collinear_points_fail() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        ];
        assert_eq!(seed_of(&points), Err(TriangulationError::DegenerateInput));
    }

    #[test]
    fn test_all_identical_points_fail() {
        let points = vec![Point2::new(1.0, 1.0); 5];
        assert_eq!(seed_of(&points), Err(TriangulationError::DegenerateInput));
    }

    #[test]
    fn test_f32_points() {
        let points = vec![
            Point2::new(0.0_f32, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 2.0),
        ];
        let center = Point2::new(1.0, 1.0);
        let seed = select_seed(&points, center, 1e14).unwrap();
        let mut sorted = seed.vertices;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2]);
    }
}
