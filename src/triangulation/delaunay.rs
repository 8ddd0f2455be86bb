//! Delaunay triangulation by sweeping an advancing convex hull.
//!
//! Points are inserted in order of distance from the circumcenter of a
//! small seed triangle. Each new point lies outside the current hull, so it
//! is attached by fanning triangles to the hull edges it can see, after which
//! edge flips restore the Delaunay property.
//!
//! # Algorithm
//!
//! 1. Pick a seed triangle near the center of the input
//! 2. Sort the remaining points by distance from the seed's circumcenter
//! 3. For each point, find a visible hull edge through an angular hash
//! 4. Fan new triangles over every visible hull edge, legalizing each
//! 5. Splice the point into the hull
//!
//! # Complexity
//!
//! - Time: O(n log n) expected
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use triangulum::triangulation::Delaunay;
//! use triangulum::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.5),
//! ];
//!
//! let delaunay = Delaunay::new(&points).unwrap();
//!
//! // Square with center point: four triangles around the center
//! assert_eq!(delaunay.triangle_count(), 4);
//! assert_eq!(delaunay.hull().len(), 4);
//! assert!((delaunay.hull_area() / 2.0 - 1.0).abs() < 1e-12);
//! ```

use super::hash::AngularHash;
use super::hull::AdvancingHull;
use super::legalize::Legalizer;
use super::mesh::{next_halfedge, to_signed_index, MeshStore, INVALID_INDEX};
use super::options::TriangulationOptions;
use super::ordering::order_by_distance;
use super::seed::select_seed;
use crate::bounds::Aabb2;
use crate::error::TriangulationError;
use crate::primitives::Point2;
use crate::scalar::{widen_point, CoordinateScalar};
use crate::tolerance::{is_counterclockwise, points_coincide, points_nearly_equal};

/// A triangle represented by indices into a point array.
///
/// Vertices are stored in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the three edges of this triangle as pairs of indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }
}

/// A finished Delaunay triangulation.
///
/// Owns a copy of its input points. Built once by [`Delaunay::new`] and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Delaunay<F> {
    pub(super) points: Vec<Point2<F>>,
    pub(super) mesh: MeshStore,
    pub(super) hull: AdvancingHull,
    pub(super) seed: [usize; 3],
    pub(super) center: Point2<f64>,
}

impl<F: CoordinateScalar> Delaunay<F> {
    /// Triangulates `points` with the default tolerances.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::DegenerateInput`] for fewer than 3 points or
    ///   when all distinct points are collinear
    /// - [`TriangulationError::NonFiniteCoordinate`] when a coordinate is NaN
    ///   or infinite
    pub fn new(points: &[Point2<F>]) -> Result<Self, TriangulationError> {
        Self::with_options(points, TriangulationOptions::default())
    }

    /// Triangulates `points` with explicit tolerances.
    ///
    /// Points that coincide with an earlier point (within the tolerances) are
    /// left out of the mesh; the first occurrence wins.
    pub fn with_options(
        points: &[Point2<F>],
        options: TriangulationOptions,
    ) -> Result<Self, TriangulationError> {
        let n = points.len();
        if n < 3 {
            tracing::debug!(n, "need at least 3 points to triangulate");
            return Err(TriangulationError::DegenerateInput);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            tracing::warn!(index, "rejecting point with non-finite coordinate");
            return Err(TriangulationError::NonFiniteCoordinate { index });
        }

        let bbox = Aabb2::from_points(points.iter().map(|&p| widen_point(p)))
            .ok_or(TriangulationError::DegenerateInput)?;
        let span = bbox.diagonal_squared();

        let seed = select_seed(points, bbox.center(), options.collinearity_ratio)?;
        let [i0, i1, i2] = seed.vertices;
        tracing::debug!(n, i0, i1, i2, center = ?seed.center, "seed triangle selected");

        let mut builder = Builder {
            points,
            options,
            span,
            hash: AngularHash::new(n, seed.center),
            hull: AdvancingHull::new(n),
            mesh: MeshStore::with_point_capacity(n),
            legalizer: Legalizer::new(),
        };
        builder.place_seed(i0, i1, i2)?;

        let ids = order_by_distance(points, seed.center);
        let mut previous: Option<Point2<f64>> = None;
        let mut skipped = 0usize;

        for i in ids {
            let p = widen_point(points[i]);

            if previous.is_some_and(|q| points_nearly_equal(p, q, options.duplicate_epsilon)) {
                tracing::trace!(i, "skipping duplicate point");
                skipped += 1;
                continue;
            }
            previous = Some(p);

            if i == i0 || i == i1 || i == i2 {
                continue;
            }

            if !builder.insert(i, p)? {
                tracing::trace!(i, "skipping point coincident with the hull");
                skipped += 1;
            }
        }

        let Builder { mesh, hull, .. } = builder;
        tracing::debug!(
            triangles = mesh.len() / 3,
            hull_start = hull.start(),
            skipped,
            "triangulation complete"
        );

        Ok(Self {
            points: points.to_vec(),
            mesh,
            hull,
            seed: [i0, i1, i2],
            center: seed.center,
        })
    }

    /// The input points, in input order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Point indices, three per triangle, each triangle clockwise.
    #[inline]
    pub fn triangles(&self) -> &[usize] {
        &self.mesh.triangles
    }

    /// Opposite half-edge for every entry of [`triangles`](Self::triangles),
    /// or [`INVALID_INDEX`] on the hull.
    #[inline]
    pub fn halfedges(&self) -> &[usize] {
        &self.mesh.halfedges
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.mesh.len() / 3
    }

    /// The triangles as index records.
    pub fn triangle_list(&self) -> Vec<Triangle> {
        self.mesh
            .triangles
            .chunks_exact(3)
            .map(|t| Triangle::new(t[0], t[1], t[2]))
            .collect()
    }

    /// Opposite of half-edge `e`, or `None` on the hull.
    #[inline]
    pub fn opposite(&self, e: usize) -> Option<usize> {
        match self.mesh.halfedges.get(e) {
            Some(&o) if o != INVALID_INDEX => Some(o),
            _ => None,
        }
    }

    /// Half-edges pointing into the vertex that `start` points into, visited
    /// by rotating around it.
    ///
    /// Stops early at the hull, so for a hull vertex the walk only covers the
    /// edges on one side of `start`.
    pub fn edges_around_point(&self, start: usize) -> Vec<usize> {
        let mut result = Vec::new();
        let mut incoming = start;
        loop {
            result.push(incoming);
            let outgoing = next_halfedge(incoming);
            incoming = self.mesh.halfedges[outgoing];
            if incoming == INVALID_INDEX || incoming == start {
                break;
            }
        }
        result
    }

    /// Hull vertex indices, walking the hull from its start vertex.
    ///
    /// The hull runs clockwise, the same way as the triangles.
    pub fn hull(&self) -> Vec<usize> {
        self.hull.iter().collect()
    }

    /// First vertex of [`hull`](Self::hull).
    #[inline]
    pub fn hull_start(&self) -> usize {
        self.hull.start()
    }

    /// Successor of `i` on the hull, if `i` is a hull vertex.
    pub fn hull_next(&self, i: usize) -> Option<usize> {
        (i < self.points.len() && self.hull.is_live(i)).then(|| self.hull.next(i))
    }

    /// Predecessor of `i` on the hull, if `i` is a hull vertex.
    pub fn hull_prev(&self, i: usize) -> Option<usize> {
        (i < self.points.len() && self.hull.is_live(i)).then(|| self.hull.prev(i))
    }

    /// The seed triangle, in clockwise order.
    #[inline]
    pub fn seed(&self) -> [usize; 3] {
        self.seed
    }

    /// Circumcenter of the seed triangle, the origin of the sweep.
    #[inline]
    pub fn center(&self) -> Point2<f64> {
        self.center
    }

    /// [`triangles`](Self::triangles) as signed 32-bit indices.
    pub fn triangles_i32(&self) -> Vec<i32> {
        self.mesh.triangles.iter().map(|&i| to_signed_index(i)).collect()
    }

    /// [`halfedges`](Self::halfedges) as signed 32-bit indices, hull edges
    /// reading `-1`.
    pub fn halfedges_i32(&self) -> Vec<i32> {
        self.mesh.halfedges.iter().map(|&i| to_signed_index(i)).collect()
    }

    /// [`hull`](Self::hull) as signed 32-bit indices.
    pub fn hull_i32(&self) -> Vec<i32> {
        self.hull.iter().map(to_signed_index).collect()
    }

    #[inline]
    pub(super) fn coord(&self, i: usize) -> Point2<f64> {
        widen_point(self.points[i])
    }
}

/// Mutable state of one construction pass.
struct Builder<'a, F> {
    points: &'a [Point2<F>],
    options: TriangulationOptions,
    span: f64,
    hash: AngularHash,
    hull: AdvancingHull,
    mesh: MeshStore,
    legalizer: Legalizer,
}

impl<F: CoordinateScalar> Builder<'_, F> {
    #[inline]
    fn coord(&self, i: usize) -> Point2<f64> {
        widen_point(self.points[i])
    }

    #[inline]
    fn ccw(&self, p: Point2<f64>, a: usize, b: usize) -> bool {
        is_counterclockwise(p, self.coord(a), self.coord(b), self.options.collinearity_ratio)
    }

    fn place_seed(&mut self, i0: usize, i1: usize, i2: usize) -> Result<(), TriangulationError> {
        self.hull.init_seed(i0, i1, i2);
        for i in [i0, i1, i2] {
            let p = self.coord(i);
            self.hash.insert(p, i);
        }
        self.mesh
            .add_triangle(i0, i1, i2, INVALID_INDEX, INVALID_INDEX, INVALID_INDEX)?;
        Ok(())
    }

    fn legalize(&mut self, e: usize) -> Result<usize, TriangulationError> {
        self.legalizer
            .legalize(e, &mut self.mesh, &mut self.hull, self.points)
    }

    /// Walks the hull from `start` to the first edge `e -> next(e)` that `p`
    /// sees from outside.
    ///
    /// Returns `None` when `p` coincides with a hull vertex on the way, or
    /// when no edge is visible.
    fn find_visible_edge(&self, p: Point2<f64>, start: usize) -> Option<usize> {
        let mut e = start;
        loop {
            let q = self.hull.next(e);
            if points_coincide(p, self.coord(e), self.span, self.options.coincidence_ratio)
                || points_coincide(p, self.coord(q), self.span, self.options.coincidence_ratio)
            {
                return None;
            }
            if self.ccw(p, e, q) {
                return Some(e);
            }
            e = q;
            if e == start {
                return None;
            }
        }
    }

    /// Adds point `i` at `p` to the triangulation.
    ///
    /// Returns `false` if the point was skipped as a near-duplicate.
    fn insert(&mut self, i: usize, p: Point2<f64>) -> Result<bool, TriangulationError> {
        let key = self.hash.key(p);
        let start = self.hash.find_live(key, &self.hull).ok_or(
            TriangulationError::MeshInconsistency {
                reason: "angular hash holds no live hull vertex",
            },
        )?;
        let start = self.hull.prev(start);

        let Some(mut e) = self.find_visible_edge(p, start) else {
            return Ok(false);
        };

        // First triangle of the fan, over the visible edge
        let mut t = self
            .mesh
            .add_triangle(e, i, self.hull.next(e), INVALID_INDEX, INVALID_INDEX, self.hull.tri(e))?;
        let ar = self.legalize(t + 2)?;
        self.hull.set_tri(i, ar);
        self.hull.set_tri(e, t);

        // Forward: swallow hull vertices while the next edge is still visible
        let mut next = self.hull.next(e);
        loop {
            let q = self.hull.next(next);
            if !self.ccw(p, next, q) {
                break;
            }
            t = self
                .mesh
                .add_triangle(next, i, q, self.hull.tri(i), INVALID_INDEX, self.hull.tri(next))?;
            let ar = self.legalize(t + 2)?;
            self.hull.set_tri(i, ar);
            self.hull.remove(next);
            next = q;
        }

        // Backward: only possible when the walk stopped on its first edge
        if e == start {
            loop {
                let q = self.hull.prev(e);
                if !self.ccw(p, q, e) {
                    break;
                }
                t = self
                    .mesh
                    .add_triangle(q, i, e, INVALID_INDEX, self.hull.tri(e), self.hull.tri(q))?;
                self.legalize(t + 2)?;
                self.hull.set_tri(q, t);
                self.hull.remove(e);
                e = q;
            }
        }

        self.hull.set_prev(i, e);
        self.hull.set_start(e);
        self.hull.set_prev(next, i);
        self.hull.set_next(e, i);
        self.hull.set_next(i, next);

        self.hash.set(key, i);
        let pe = self.coord(e);
        self.hash.insert(pe, e);

        Ok(true)
    }
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Convenience wrapper over [`Delaunay::new`] returning only the triangles.
///
/// # Example
///
/// ```
/// use triangulum::triangulation::delaunay_triangulation;
/// use triangulum::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let triangles = delaunay_triangulation(&points).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn delaunay_triangulation<F: CoordinateScalar>(
    points: &[Point2<F>],
) -> Result<Vec<Triangle>, TriangulationError> {
    Ok(Delaunay::new(points)?.triangle_list())
}
