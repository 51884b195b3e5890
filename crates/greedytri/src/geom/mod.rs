//! Planar geometry: points, canvas rectangles and the crossing predicate.
//!
//! Purpose
//! - Keep the point type a plain `nalgebra::Vector2<f64>` so callers can use
//!   the usual vector arithmetic.
//! - Provide the strict (open) segment crossing test the selector relies on.
//!
//! Numerics
//! - No epsilons anywhere. Products of signed areas are compared exactly
//!   against zero, so touching, collinear and shared-endpoint configurations
//!   never count as crossings.

mod predicates;
pub mod rand;
mod types;

pub use predicates::{crosses, parallelogram_area};
pub use types::{CanvasCfg, Rect, Size};

/// 2D point (also used for raw locations such as cursor positions).
pub type Point = nalgebra::Vector2<f64>;

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).norm()
}
