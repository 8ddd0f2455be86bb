//! Area measures of a finished triangulation.

use super::Delaunay;
use crate::scalar::CoordinateScalar;
use crate::tolerance::CompensatedSum;

impl<F: CoordinateScalar> Delaunay<F> {
    /// Twice the signed area of the hull polygon.
    ///
    /// Positive for the clockwise hull produced here; divide by two for the
    /// actual area. Accumulated with compensated summation.
    ///
    /// # Example
    ///
    /// ```
    /// use triangulum::triangulation::Delaunay;
    /// use triangulum::Point2;
    ///
    /// let points: Vec<Point2<f64>> = vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(2.0, 0.0),
    ///     Point2::new(2.0, 3.0),
    ///     Point2::new(0.0, 3.0),
    /// ];
    /// let delaunay = Delaunay::new(&points).unwrap();
    /// assert!((delaunay.hull_area() - 12.0).abs() < 1e-12);
    /// ```
    pub fn hull_area(&self) -> f64 {
        let mut sum = CompensatedSum::new();
        for e in self.hull.iter() {
            let p = self.coord(e);
            let q = self.coord(self.hull.prev(e));
            sum.add((p.x - q.x) * (p.y + q.y));
        }
        sum.value()
    }

    /// Twice the summed absolute area of all triangles.
    ///
    /// Should agree with [`hull_area`](Self::hull_area); useful as a
    /// cross-check rather than in production paths.
    pub fn triangle_area_sum(&self) -> f64 {
        let mut sum = CompensatedSum::new();
        for t in self.mesh.triangles.chunks_exact(3) {
            let a = self.coord(t[0]);
            let b = self.coord(t[1]);
            let c = self.coord(t[2]);
            sum.add(((b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)).abs());
        }
        sum.value()
    }
}
