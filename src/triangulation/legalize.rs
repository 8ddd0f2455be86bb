//! Delaunay edge flipping.

use super::hull::AdvancingHull;
use super::mesh::{MeshStore, INVALID_INDEX};
use crate::error::TriangulationError;
use crate::primitives::Point2;
use crate::scalar::{widen_point, CoordinateScalar};
use crate::tolerance::in_circle;

/// Restores the Delaunay condition around freshly added triangles.
///
/// Flips cascade through neighbouring edges. Pending edges live on an
/// explicit stack that is kept between calls, so deep cascades cost heap
/// space rather than call depth.
#[derive(Debug, Clone, Default)]
pub(crate) struct Legalizer {
    stack: Vec<usize>,
}

impl Legalizer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Flips half-edge `a` and everything its flips expose until all
    /// checked edges are legal.
    ///
    /// Returns the last half-edge `ar` examined, which is the edge the caller
    /// caches on the hull for the new point.
    ///
    /// ```text
    ///           pl                    pl
    ///          /||\                  /  \
    ///       al/ || \bl            al/    \a
    ///        /  ||  \              /      \
    ///       /  a||b  \    flip    /___ar___\
    ///     p0\   ||   /p1   =>   p0\---bl---/p1
    ///        \  ||  /              \      /
    ///       ar\ || /br             b\    /br
    ///          \||/                  \  /
    ///           pr                    pr
    /// ```
    pub(crate) fn legalize<F: CoordinateScalar>(
        &mut self,
        mut a: usize,
        mesh: &mut MeshStore,
        hull: &mut AdvancingHull,
        points: &[Point2<F>],
    ) -> Result<usize, TriangulationError> {
        self.stack.clear();
        let mut ar;

        loop {
            let b = mesh.halfedges[a];
            let a0 = a - a % 3;
            ar = a0 + (a + 2) % 3;

            if b == INVALID_INDEX {
                match self.stack.pop() {
                    Some(e) => {
                        a = e;
                        continue;
                    }
                    None => break,
                }
            }

            let b0 = b - b % 3;
            let al = a0 + (a + 1) % 3;
            let bl = b0 + (b + 2) % 3;

            let p0 = mesh.triangles[ar];
            let pr = mesh.triangles[a];
            let pl = mesh.triangles[al];
            let p1 = mesh.triangles[bl];

            let illegal = in_circle(
                widen_point(points[p0]),
                widen_point(points[pr]),
                widen_point(points[pl]),
                widen_point(points[p1]),
            );

            if !illegal {
                match self.stack.pop() {
                    Some(e) => {
                        a = e;
                        continue;
                    }
                    None => break,
                }
            }

            mesh.triangles[a] = p1;
            mesh.triangles[b] = p0;

            let hbl = mesh.halfedges[bl];

            // The flip moved an edge that sits on the hull; the hull cached
            // `bl` for one of its vertices and must now point at `a`.
            if hbl == INVALID_INDEX && !hull.repair_tri(bl, a) {
                tracing::trace!(bl, a, "flipped hull edge not cached on any hull vertex");
            }

            mesh.link(a, hbl)?;
            mesh.link(b, mesh.halfedges[ar])?;
            mesh.link(ar, bl)?;

            let br = b0 + (b + 1) % 3;
            self.stack.push(br);
        }

        Ok(ar)
    }
}
