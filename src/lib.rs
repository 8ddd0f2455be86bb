//! triangulum - Delaunay triangulation for planar point sets
//!
//! Builds the Delaunay triangulation of a point cloud with an advancing-hull
//! sweep. Output is a compact half-edge mesh that is cheap to walk and easy to
//! hand to a renderer or a mesh pipeline.
//!
//! Geometric predicates run in `f64` with explicit tolerances, whatever the
//! input coordinate type.
//!
//! # Example
//!
//! ```
//! use triangulum::{Delaunay, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let delaunay = Delaunay::new(&points).unwrap();
//! assert_eq!(delaunay.triangles().len(), 3);
//! ```

pub mod bounds;
pub mod error;
pub mod primitives;
pub mod scalar;
#[cfg(feature = "simd")]
pub mod simd;
pub mod tolerance;
pub mod triangulation;

pub use error::TriangulationError;
pub use primitives::{Point2, Vec2};
pub use scalar::CoordinateScalar;
pub use triangulation::{delaunay_triangulation, Delaunay, Triangle, INVALID_INDEX};
