//! Insertion order for the sweep.

use crate::primitives::Point2;
use crate::scalar::CoordinateScalar;

/// Point indices sorted by squared distance from `center`, nearest first.
///
/// The sort is stable, so equidistant points keep their input order and
/// repeated runs over the same input insert in the same sequence.
pub(crate) fn order_by_distance<F: CoordinateScalar>(
    points: &[Point2<F>],
    center: Point2<f64>,
) -> Vec<usize> {
    let dists = F::squared_distances(points, center);
    let mut ids: Vec<usize> = (0..points.len()).collect();
    ids.sort_by(|&i, &j| dists[i].total_cmp(&dists[j]));
    ids
}
