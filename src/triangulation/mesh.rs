//! Flat triangle and half-edge storage.
//!
//! Triangle `t` occupies `triangles[3t..3t + 3]`. Half-edge `e` runs from
//! `triangles[e]` to `triangles[next_halfedge(e)]`, and `halfedges[e]` is the
//! opposite half-edge in the neighbouring triangle, or [`INVALID_INDEX`] on
//! the hull.

use crate::error::TriangulationError;

/// Sentinel for "no half-edge" and "no vertex".
///
/// Reads back as `-1` through the signed views, see [`to_signed_index`].
pub const INVALID_INDEX: usize = usize::MAX;

/// Next half-edge in the same triangle.
#[inline]
pub fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 {
        e - 2
    } else {
        e + 1
    }
}

/// Previous half-edge in the same triangle.
#[inline]
pub fn prev_halfedge(e: usize) -> usize {
    if e % 3 == 0 {
        e + 2
    } else {
        e - 1
    }
}

/// Triangle containing half-edge `e`.
#[inline]
pub fn triangle_of_edge(e: usize) -> usize {
    e / 3
}

/// Converts an index to the signed 32-bit form used at host boundaries.
///
/// [`INVALID_INDEX`] (and any index too large for `i32`) becomes `-1`.
///
/// ```
/// use triangulum::triangulation::{to_signed_index, INVALID_INDEX};
///
/// assert_eq!(to_signed_index(7), 7);
/// assert_eq!(to_signed_index(INVALID_INDEX), -1);
/// ```
#[inline]
pub fn to_signed_index(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(-1)
}

/// Append-only triangle store with symmetric half-edge links.
#[derive(Debug, Clone, Default)]
pub(crate) struct MeshStore {
    pub(crate) triangles: Vec<usize>,
    pub(crate) halfedges: Vec<usize>,
}

impl MeshStore {
    /// Reserves room for the `2n - 5` triangles a triangulation of `n`
    /// points can have.
    pub(crate) fn with_point_capacity(n: usize) -> Self {
        let max_triangles = if n < 3 { 1 } else { 2 * n - 5 };
        Self {
            triangles: Vec::with_capacity(max_triangles * 3),
            halfedges: Vec::with_capacity(max_triangles * 3),
        }
    }

    /// Appends triangle `(i0, i1, i2)` whose edges face half-edges `a`, `b`, `c`.
    ///
    /// Returns the index of the new triangle's first half-edge.
    pub(crate) fn add_triangle(
        &mut self,
        i0: usize,
        i1: usize,
        i2: usize,
        a: usize,
        b: usize,
        c: usize,
    ) -> Result<usize, TriangulationError> {
        let t = self.triangles.len();
        self.triangles.extend_from_slice(&[i0, i1, i2]);
        self.link(t, a)?;
        self.link(t + 1, b)?;
        self.link(t + 2, c)?;
        Ok(t)
    }

    /// Makes `a` and `b` opposite half-edges. `b` may be [`INVALID_INDEX`].
    pub(crate) fn link(&mut self, a: usize, b: usize) -> Result<(), TriangulationError> {
        self.write(a, b)?;
        if b != INVALID_INDEX {
            self.write(b, a)?;
        }
        Ok(())
    }

    // Only overwrites or appends; a write past the end means the caller's
    // indices are corrupt.
    fn write(&mut self, at: usize, value: usize) -> Result<(), TriangulationError> {
        let len = self.halfedges.len();
        if at == len {
            self.halfedges.push(value);
        } else if at < len {
            self.halfedges[at] = value;
        } else {
            return Err(TriangulationError::MeshInconsistency {
                reason: "cannot link half-edge beyond the end of the mesh",
            });
        }
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.triangles.len()
    }
}
