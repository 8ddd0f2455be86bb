//! Property-based tests for `Delaunay` on random point clouds.
//!
//! Every successful triangulation must:
//! - Have symmetric half-edges and clockwise triangles
//! - Satisfy the Delaunay condition across every interior edge
//! - Have a closed hull whose area matches the summed triangle areas
//! - Be unchanged by exact duplicates of its input points

use std::collections::BTreeSet;

use proptest::prelude::*;
use triangulum::triangulation::{next_halfedge, INVALID_INDEX};
use triangulum::{Delaunay, Point2, TriangulationError};

// =============================================================================
// STRATEGIES
// =============================================================================

fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point_cloud(min: usize, max: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(
        (finite_coordinate(), finite_coordinate()).prop_map(|(x, y)| Point2::new(x, y)),
        min..=max,
    )
}

/// Triangles rotated to start at their smallest index, order-independent.
fn canonical_triangles(d: &Delaunay<f64>) -> BTreeSet<[usize; 3]> {
    d.triangles()
        .chunks_exact(3)
        .map(|t| match (0..3).min_by_key(|&i| t[i]).unwrap_or(0) {
            0 => [t[0], t[1], t[2]],
            1 => [t[1], t[2], t[0]],
            _ => [t[2], t[0], t[1]],
        })
        .collect()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// Property: construction succeeds or reports degenerate input, nothing else
    #[test]
    fn prop_only_degenerate_input_fails(points in point_cloud(0, 40)) {
        if let Err(err) = Delaunay::new(&points) {
            prop_assert_eq!(err, TriangulationError::DegenerateInput);
        }
    }

    /// Property: the result passes every structural and Delaunay check
    #[test]
    fn prop_triangulation_is_valid(points in point_cloud(3, 80)) {
        if let Ok(d) = Delaunay::new(&points) {
            let report = d.validate();
            prop_assert!(report.is_valid(), "invalid triangulation: {:?}", report);
        }
    }

    /// Property: opposite half-edges pair up and join the same two points
    #[test]
    fn prop_halfedges_are_symmetric(points in point_cloud(3, 80)) {
        if let Ok(d) = Delaunay::new(&points) {
            let triangles = d.triangles();
            let halfedges = d.halfedges();
            prop_assert_eq!(triangles.len(), halfedges.len());
            prop_assert_eq!(triangles.len() % 3, 0);

            for (e, &o) in halfedges.iter().enumerate() {
                if o != INVALID_INDEX {
                    prop_assert_eq!(halfedges[o], e);
                    prop_assert_eq!(triangles[e], triangles[next_halfedge(o)]);
                }
            }
        }
    }

    /// Property: the hull closes after exactly `hull().len()` steps, and
    /// `hull_prev` undoes `hull_next`
    #[test]
    fn prop_hull_is_closed(points in point_cloud(3, 80)) {
        if let Ok(d) = Delaunay::new(&points) {
            let hull = d.hull();
            prop_assert!(hull.len() >= 3);

            let mut v = d.hull_start();
            for (step, &expected) in hull.iter().enumerate() {
                prop_assert_eq!(v, expected, "hull diverged at step {}", step);
                let next = d.hull_next(v);
                prop_assert!(next.is_some());
                let next = next.unwrap_or(INVALID_INDEX);
                prop_assert_eq!(d.hull_prev(next), Some(v));
                v = next;
            }
            prop_assert_eq!(v, d.hull_start());
        }
    }

    /// Property: hull area equals summed triangle area
    #[test]
    fn prop_hull_area_matches_triangles(points in point_cloud(3, 80)) {
        if let Ok(d) = Delaunay::new(&points) {
            let hull = d.hull_area();
            let triangles = d.triangle_area_sum();
            prop_assert!(hull > 0.0);
            prop_assert!(
                ((hull - triangles) / hull).abs() < 1e-9,
                "hull area {} vs triangle area {}",
                hull,
                triangles
            );
        }
    }

    /// Property: repeating an input point changes nothing
    #[test]
    fn prop_duplicates_are_ignored(
        points in point_cloud(3, 40),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut with_dup = points.clone();
        with_dup.push(points[pick.index(points.len())]);

        match (Delaunay::new(&points), Delaunay::new(&with_dup)) {
            (Ok(a), Ok(b)) => {
                // Insertion order may differ with the hash size, the mesh may not
                prop_assert_eq!(canonical_triangles(&a), canonical_triangles(&b));
                let hull_a: BTreeSet<usize> = a.hull().into_iter().collect();
                let hull_b: BTreeSet<usize> = b.hull().into_iter().collect();
                prop_assert_eq!(hull_a, hull_b);
            }
            (Err(a), Err(b)) => {
                prop_assert_eq!(a, b);
            }
            (a, b) => {
                prop_assert!(false, "outcomes differ: {:?} vs {:?}", a.err(), b.err());
            }
        }
    }
}
