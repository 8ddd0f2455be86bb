//! Delaunay triangulation of planar point sets.
//!
//! The triangulation is built by a sweep that grows a convex hull outward
//! from a seed triangle. The result is stored as flat half-edge arrays:
//! `triangles[e]` is the point that half-edge `e` starts from, and
//! `halfedges[e]` is the opposite half-edge in the neighbouring triangle.

mod delaunay;
mod hash;
mod hull;
mod legalize;
mod mesh;
mod metrics;
mod options;
mod ordering;
mod seed;
mod validate;

pub use delaunay::{delaunay_triangulation, Delaunay, Triangle};
pub use mesh::{next_halfedge, prev_halfedge, to_signed_index, triangle_of_edge, INVALID_INDEX};
pub use options::{TriangulationOptions, DEFAULT_COINCIDENCE_RATIO, DEFAULT_COLLINEARITY_RATIO};
pub use validate::{DelaunayViolation, ValidationReport};
