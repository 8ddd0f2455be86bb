//! Axis-aligned bounding box of a point set.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// The triangulator uses it twice: its center picks the first seed vertex,
/// and its squared diagonal sets the scale for coincidence tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Smallest x and y.
    pub min: Point2<F>,
    /// Largest x and y.
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a box from its corners. `min <= max` is not checked.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Tightest box around `points`, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self::new(p, p),
                Some(b) => b.grow(p),
            })
        })
    }

    #[inline]
    fn grow(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Width and height.
    #[inline]
    pub fn extent(self) -> (F, F) {
        (self.max.x - self.min.x, self.max.y - self.min.y)
    }

    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Squared length of the diagonal, the "span" of the point set.
    #[inline]
    pub fn diagonal_squared(self) -> F {
        let (w, h) = self.extent();
        w * w + h * h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min, Point2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));
        assert_eq!(aabb.center(), Point2::new(0.5, 2.0));
    }

    #[test]
    fn test_empty_input() {
        assert!(Aabb2::<f64>::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_span() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_eq!(aabb.extent(), (3.0, 4.0));
        assert_eq!(aabb.diagonal_squared(), 25.0);
    }

    #[test]
    fn test_single_point_has_zero_span() {
        let aabb = Aabb2::from_points([Point2::new(2.0_f32, 3.0)]).unwrap();
        assert_eq!(aabb.diagonal_squared(), 0.0);
        assert_eq!(aabb.center(), Point2::new(2.0, 3.0));
    }
}
