//! 2D displacement vectors.

use num_traits::Float;

/// Displacement between two points, as produced by `Point2 - Point2`.
///
/// Carries only what the predicates need: dot and cross products and the
/// squared length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Z-component of the cross product with `other`.
    ///
    /// Negative when turning from `self` to `other` is clockwise.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Squared length.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let a: Vec2<f64> = Vec2::new(2.0, -1.0);
        assert_eq!(a.dot(Vec2::new(0.5, 3.0)), -2.0);
        assert_eq!(a.magnitude_squared(), 5.0);
    }

    #[test]
    fn test_cross_sign_follows_turn() {
        let east: Vec2<f64> = Vec2::new(1.0, 0.0);
        let north = Vec2::new(0.0, 1.0);
        let south = Vec2::new(0.0, -1.0);
        assert!(east.cross(north) > 0.0);
        assert!(east.cross(south) < 0.0);
        assert_eq!(east.cross(Vec2::new(-3.0, 0.0)), 0.0);
    }
}
