//! Greedy selection over a candidate set.

use crate::geom::{crosses, Point};

use super::build::build_candidates;
use super::types::{EdgeSet, Segment};

/// Classify `candidates` (built from `points`) as accepted or rejected.
///
/// Candidates are stably sorted by `length`; the first one is always
/// accepted, every later one iff it properly crosses no accepted segment.
pub fn select(points: &[Point], mut candidates: Vec<Segment>) -> EdgeSet {
    if candidates.is_empty() {
        return EdgeSet::default();
    }
    candidates.sort_by_key(|s| s.length);
    let mut taken: Vec<(Point, Point)> = Vec::new();
    for seg in candidates.iter_mut() {
        let (p, q) = seg.endpoints(points);
        seg.accepted = !taken.iter().any(|&(a, b)| crosses(p, q, a, b));
        if seg.accepted {
            taken.push((p, q));
        }
    }
    tracing::debug!(
        candidates = candidates.len(),
        accepted = taken.len(),
        "greedy selection"
    );
    EdgeSet::from_evaluated(candidates)
}

/// Full pipeline: `build_candidates` then `select`.
pub fn triangulate(points: &[Point]) -> EdgeSet {
    select(points, build_candidates(points))
}
