//! Candidate construction (all unordered pairs).

use crate::geom::Point;

use super::types::{PointId, Segment};

/// Build the complete candidate set: one segment per unordered pair.
///
/// Points are visited in ascending `x` (stable, ties keep input order) and
/// each segment runs from the earlier to the later point in that order.
/// Fewer than two points give no candidates.
pub fn build_candidates(points: &[Point]) -> Vec<Segment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let mut order: Vec<PointId> = (0..n).map(PointId).collect();
    order.sort_by(|a, b| {
        points[a.0]
            .x
            .partial_cmp(&points[b.0].x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut out = Vec::with_capacity(n * (n - 1) / 2);
    for (i, &a) in order.iter().enumerate() {
        for &b in &order[i + 1..] {
            out.push(Segment::new(points, a, b));
        }
    }
    out
}
