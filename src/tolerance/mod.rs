//! Epsilon-aware geometric predicates and numerics.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod predicates;
mod summation;

pub use predicates::{
    circumcenter, circumradius_squared, in_circle, is_clockwise, is_counterclockwise, orient2d,
    points_coincide, points_nearly_equal, pseudo_angle, Orientation,
};
pub use summation::{neumaier_sum, CompensatedSum};
