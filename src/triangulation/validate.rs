//! Structural and geometric self-checks of a finished triangulation.

use super::mesh::{next_halfedge, prev_halfedge, triangle_of_edge, INVALID_INDEX};
use super::options::DEFAULT_COLLINEARITY_RATIO;
use super::Delaunay;
use crate::scalar::CoordinateScalar;
use crate::tolerance::{in_circle, orient2d, Orientation};

/// A point found strictly inside the circumcircle of a neighbouring triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelaunayViolation {
    /// Half-edge shared by the two triangles; the circle belongs to its triangle.
    pub halfedge: usize,
    /// The offending point, opposite the shared edge.
    pub point: usize,
}

/// Outcome of [`Delaunay::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// `triangles` and `halfedges` have equal length, a multiple of three.
    pub shape_ok: bool,
    /// Half-edges referring to a point index out of range.
    pub invalid_vertices: Vec<usize>,
    /// Half-edges whose opposite does not point back, or joins different points.
    pub asymmetric_halfedges: Vec<usize>,
    /// Triangles wound counterclockwise.
    pub inverted_triangles: Vec<usize>,
    /// The hull walk returns to its start.
    pub hull_closed: bool,
    /// Every hull step `v -> next` is undone by `prev`.
    pub hull_links_ok: bool,
    /// Number of hull vertices.
    pub hull_len: usize,
    /// Number of half-edges without an opposite.
    pub boundary_edges: usize,
    /// Local Delaunay failures across interior edges.
    pub delaunay_violations: Vec<DelaunayViolation>,
}

impl ValidationReport {
    /// True when no check failed.
    pub fn is_valid(&self) -> bool {
        self.shape_ok
            && self.invalid_vertices.is_empty()
            && self.asymmetric_halfedges.is_empty()
            && self.inverted_triangles.is_empty()
            && self.hull_closed
            && self.hull_links_ok
            && self.boundary_edges == self.hull_len
            && self.delaunay_violations.is_empty()
    }
}

impl<F: CoordinateScalar> Delaunay<F> {
    /// Checks the mesh invariants and the local Delaunay condition.
    ///
    /// Every interior edge is tested once from each side, which is enough for
    /// the whole triangulation to be Delaunay. Runs in linear time.
    pub fn validate(&self) -> ValidationReport {
        let triangles = &self.mesh.triangles;
        let halfedges = &self.mesh.halfedges;
        let n = self.points.len();

        let mut report = ValidationReport {
            shape_ok: triangles.len() == halfedges.len() && triangles.len() % 3 == 0,
            ..ValidationReport::default()
        };
        if !report.shape_ok {
            return report;
        }

        report.invalid_vertices = (0..triangles.len()).filter(|&e| triangles[e] >= n).collect();
        if !report.invalid_vertices.is_empty() {
            return report;
        }

        for (e, &o) in halfedges.iter().enumerate() {
            if o == INVALID_INDEX {
                report.boundary_edges += 1;
                continue;
            }
            let symmetric = o < halfedges.len()
                && halfedges[o] == e
                && triangles[e] == triangles[next_halfedge(o)]
                && triangles[o] == triangles[next_halfedge(e)];
            if !symmetric {
                report.asymmetric_halfedges.push(e);
                continue;
            }

            let t = 3 * triangle_of_edge(e);
            let p = triangles[prev_halfedge(o)];
            if in_circle(
                self.coord(triangles[t]),
                self.coord(triangles[t + 1]),
                self.coord(triangles[t + 2]),
                self.coord(p),
            ) {
                report
                    .delaunay_violations
                    .push(DelaunayViolation { halfedge: e, point: p });
            }
        }

        report.inverted_triangles = triangles
            .chunks_exact(3)
            .enumerate()
            .filter(|(_, t)| {
                orient2d(
                    self.coord(t[0]),
                    self.coord(t[1]),
                    self.coord(t[2]),
                    DEFAULT_COLLINEARITY_RATIO,
                ) == Orientation::CounterClockwise
            })
            .map(|(i, _)| i)
            .collect();

        let start = self.hull.start();
        if start < n {
            report.hull_links_ok = true;
            let mut v = start;
            for _ in 0..n {
                report.hull_len += 1;
                let next = self.hull.next(v);
                if next >= n {
                    report.hull_links_ok = false;
                    break;
                }
                if self.hull.prev(next) != v {
                    report.hull_links_ok = false;
                }
                v = next;
                if v == start {
                    report.hull_closed = true;
                    break;
                }
            }
        }

        if !report.is_valid() {
            tracing::warn!(
                asymmetric = report.asymmetric_halfedges.len(),
                inverted = report.inverted_triangles.len(),
                violations = report.delaunay_violations.len(),
                hull_closed = report.hull_closed,
                "triangulation failed validation"
            );
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    fn fan() -> Delaunay<f64> {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.2),
            Point2::new(3.5, 2.5),
            Point2::new(1.0, 3.0),
            Point2::new(-1.0, 1.5),
            Point2::new(1.4, 1.2),
        ];
        Delaunay::new(&points).unwrap()
    }

    #[test]
    fn test_fresh_triangulation_is_valid() {
        let d = fan();
        let report = d.validate();
        assert!(report.is_valid(), "{:?}", report);
        assert_eq!(report.hull_len, 5);
        assert_eq!(report.boundary_edges, 5);
    }

    #[test]
    fn test_detects_broken_halfedge() {
        let mut d = fan();
        let e = (0..d.mesh.halfedges.len())
            .find(|&e| d.mesh.halfedges[e] != INVALID_INDEX)
            .unwrap();
        d.mesh.halfedges[e] = INVALID_INDEX;

        let report = d.validate();
        assert!(!report.is_valid());
        assert_eq!(report.asymmetric_halfedges.len(), 1);
        assert_eq!(report.boundary_edges, 6);
    }

    #[test]
    fn test_detects_inverted_triangle() {
        let mut d = fan();
        d.mesh.triangles.swap(0, 1);
        let report = d.validate();
        assert!(report.inverted_triangles.contains(&0));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_detects_delaunay_violation() {
        // The long diagonal of a thin rhombus, built by hand
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, -1.0),
        ];
        let mut d = Delaunay::new(&points).unwrap();
        d.mesh.triangles = vec![0, 1, 2, 0, 2, 3];
        d.mesh.halfedges = vec![INVALID_INDEX, INVALID_INDEX, 3, 2, INVALID_INDEX, INVALID_INDEX];

        let report = d.validate();
        assert!(report.asymmetric_halfedges.is_empty());
        assert_eq!(report.delaunay_violations.len(), 2);
        assert!(report
            .delaunay_violations
            .contains(&DelaunayViolation { halfedge: 2, point: 3 }));
    }

    #[test]
    fn test_detects_broken_hull_link() {
        let mut d = fan();
        let v = d.hull.start();
        let next = d.hull.next(v);
        d.hull.set_prev(next, next);
        let report = d.validate();
        assert!(report.hull_closed);
        assert!(!report.hull_links_ok);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_detects_bad_shape() {
        let mut d = fan();
        d.mesh.halfedges.pop();
        assert!(!d.validate().shape_ok);
    }
}
