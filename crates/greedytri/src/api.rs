//! Curated API for callers that drive the engine from outside (CLI, viewers).
//!
//! This is a convenience surface; the modules themselves stay the source of
//! truth and may be used directly.

// Geometry
pub use crate::geom::{crosses, distance, parallelogram_area, CanvasCfg, Point, Rect, Size};
// Random point sets
pub use crate::geom::rand::{draw_points, ReplayToken};
// Edge pipeline
pub use crate::edges::{build_candidates, select, triangulate, EdgeSet, PointId, Segment};
// Live point set
pub use crate::controller::{Change, PointSet};
// Files
pub use crate::persist::{
    denormalize, load, normalize, read_points, save, write_points, PersistError,
};
