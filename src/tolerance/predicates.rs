//! Geometric predicates with explicit tolerance.
//!
//! These are plain floating-point predicates, not exact ones. The orientation
//! test carries a relative collinearity cutoff instead, which keeps nearly
//! collinear triples from flipping sign under rounding.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear, or too close to collinear to be given an orientation.
    Collinear,
}

/// Computes the orientation of three points with a relative collinearity cutoff.
///
/// The sign of the cross product of `b - a` and `c - a` decides the
/// orientation. When the summed squared edge lengths exceed the magnitude of
/// the cross product by more than `collinearity_ratio`, the triple is reported
/// as [`Orientation::Collinear`] regardless of the sign.
///
/// # Arguments
///
/// * `a`, `b`, `c` - The three points to test
/// * `collinearity_ratio` - Largest accepted `(|b - a|² + |c - a|²) / |cross|`
#[inline]
pub fn orient2d<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    collinearity_ratio: F,
) -> Orientation {
    let v0 = b - a;
    let v1 = c - a;
    let det = v0.cross(v1);
    if det == F::zero() {
        return Orientation::Collinear;
    }

    let dist = v0.magnitude_squared() + v1.magnitude_squared();
    if (dist / det).abs() > collinearity_ratio {
        return Orientation::Collinear;
    }

    if det < F::zero() {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Returns `true` if `a`, `b`, `c` are clearly clockwise.
#[inline]
pub fn is_clockwise<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, collinearity_ratio: F) -> bool {
    orient2d(a, b, c, collinearity_ratio) == Orientation::Clockwise
}

/// Returns `true` if `a`, `b`, `c` are clearly counter-clockwise.
#[inline]
pub fn is_counterclockwise<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    collinearity_ratio: F,
) -> bool {
    orient2d(a, b, c, collinearity_ratio) == Orientation::CounterClockwise
}

/// Squared radius of the circle through `a`, `b`, `c`.
///
/// Returns `F::infinity()` when either edge from `a` has zero length or the
/// edge vectors are parallel, which is how collinear triples are signalled.
pub fn circumradius_squared<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    let d = b - a;
    let e = c - a;

    let bl = d.magnitude_squared();
    let cl = e.magnitude_squared();
    let det = d.cross(e);

    if bl == F::zero() || cl == F::zero() || det == F::zero() {
        return F::infinity();
    }

    let half = F::from(0.5).unwrap_or_else(|| F::one() / (F::one() + F::one()));
    let x = (e.y * bl - d.y * cl) * half / det;
    let y = (d.x * cl - e.x * bl) * half / det;

    x * x + y * y
}

/// Center of the circle through `a`, `b`, `c`.
///
/// Returns `None` when the three points are collinear (zero determinant) or
/// the division overflows to a non-finite coordinate.
pub fn circumcenter<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<Point2<F>> {
    let d = b - a;
    let e = c - a;

    let bl = d.magnitude_squared();
    let cl = e.magnitude_squared();
    let det = d.cross(e);
    if det == F::zero() {
        return None;
    }

    let half = F::from(0.5)?;
    let center = Point2::new(
        a.x + (e.y * bl - d.y * cl) * half / det,
        a.y + (d.x * cl - e.x * bl) * half / det,
    );

    center.is_finite().then_some(center)
}

/// Tests whether `p` lies strictly inside the circle through `a`, `b`, `c`.
///
/// The triangle `a`, `b`, `c` must be in clockwise order; for a
/// counter-clockwise triangle the result is inverted.
///
/// # Example
///
/// ```
/// use triangulum::tolerance::in_circle;
/// use triangulum::Point2;
///
/// // Clockwise right triangle; its circumcircle has the hypotenuse as diameter.
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(0.0, 1.0);
/// let c = Point2::new(1.0, 0.0);
///
/// assert!(in_circle(a, b, c, Point2::new(0.4, 0.4)));
/// assert!(!in_circle(a, b, c, Point2::new(2.0, 2.0)));
/// ```
#[inline]
pub fn in_circle<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, p: Point2<F>) -> bool {
    let d = a - p;
    let e = b - p;
    let f = c - p;

    let ap = d.magnitude_squared();
    let bp = e.magnitude_squared();
    let cp = f.magnitude_squared();

    let det = d.x * (e.y * cp - bp * f.y) - d.y * (e.x * cp - bp * f.x) + ap * (e.x * f.y - e.y * f.x);

    det < F::zero()
}

/// Monotonic surrogate for the angle of `(dx, dy)`, in `[0, 1)`.
///
/// Increases with the true angle but needs no trigonometry. Only meant for
/// bucketing directions; the zero vector yields NaN.
#[inline]
pub fn pseudo_angle<F: Float>(dx: F, dy: F) -> F {
    let one = F::one();
    let three = one + one + one;
    let four = three + one;

    let p = dx / (dx.abs() + dy.abs());
    if dy > F::zero() {
        (three - p) / four
    } else {
        (one + p) / four
    }
}

/// Returns `true` if every coordinate of `a` and `b` differs by at most `eps`.
#[inline]
pub fn points_nearly_equal<F: Float>(a: Point2<F>, b: Point2<F>, eps: F) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Returns `true` if `a` and `b` are indistinguishable at the scale `span`.
///
/// `span` is a squared length (typically the squared diagonal of the input's
/// bounding box); the points coincide when `|a - b|² / span < ratio`.
#[inline]
pub fn points_coincide<F: Float>(a: Point2<F>, b: Point2<F>, span: F, ratio: F) -> bool {
    a.distance_squared(b) / span < ratio
}
