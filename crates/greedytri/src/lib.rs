//! Greedy non-crossing edge selection over a live planar point set.
//!
//! Pipeline
//! - `edges::build_candidates`: every unordered point pair, points visited in
//!   stable ascending-x order.
//! - `edges::select`: candidates by ascending rounded length; each one is
//!   accepted iff it properly crosses no previously accepted segment.
//! - `controller::PointSet`: owns the points and reruns the full pipeline after
//!   every mutation.
//!
//! Persistence (`persist`) and random generation (`geom::rand`) sit at the
//! boundary: both are plain functions over point slices.

pub mod api;
pub mod controller;
pub mod edges;
pub mod geom;
pub mod persist;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use controller::{Change, PointSet};
pub use edges::{build_candidates, select, triangulate, EdgeSet, Segment};
pub use geom::{crosses, CanvasCfg, Point, Rect, Size};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::controller::{Change, PointSet};
    pub use crate::edges::{build_candidates, select, triangulate, EdgeSet, PointId, Segment};
    pub use crate::geom::rand::{draw_points, ReplayToken};
    pub use crate::geom::{crosses, distance, CanvasCfg, Point, Rect, Size};
    pub use nalgebra::Vector2 as Vec2;
}
