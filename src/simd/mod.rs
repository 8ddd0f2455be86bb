//! SIMD-accelerated operations.
//!
//! Batched squared distances used when ordering points for insertion.
//!
//! Enable with the `simd` feature flag:
//! ```toml
//! triangulum = { version = "0.1", features = ["simd"] }
//! ```

mod distance;
mod point;

pub use distance::distances_squared_to_point;
pub use point::Point2x4;
