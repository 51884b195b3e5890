//! Candidate edges and greedy non-crossing selection.
//!
//! Purpose
//! - `build_candidates` emits one segment per unordered point pair, visiting
//!   points in stable ascending-x order so rebuilds of identical inputs give
//!   identical candidate sequences.
//! - `select` stably sorts candidates by rounded length and accepts each one
//!   that properly crosses none of the segments accepted before it. There is
//!   no backtracking: a rejected segment stays rejected.
//!
//! Cost
//! - `n(n-1)/2` candidates, each checked against every accepted segment so
//!   far. Quartic in the worst case; fine for interactive sizes.
//!
//! The result is *a* non-crossing edge set, not a maximal or minimum-weight
//! triangulation.

mod build;
mod select;
mod types;

pub use build::build_candidates;
pub use select::{select, triangulate};
pub use types::{EdgeSet, PointId, Segment};

#[cfg(test)]
mod tests;
