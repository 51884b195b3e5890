//! Segment and edge-set types.
//!
//! Segments refer to points by index into the owning slice; they are rebuilt
//! from scratch on every pass and never outlive it.

use crate::geom::{distance, Point};

/// Index of a point in the slice a segment was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// Candidate connection between two points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub a: PointId,
    pub b: PointId,
    /// Euclidean length rounded to the nearest integer (ties to even).
    pub length: u64,
    pub accepted: bool,
}

impl Segment {
    /// New, not yet accepted segment between `points[a]` and `points[b]`.
    pub fn new(points: &[Point], a: PointId, b: PointId) -> Self {
        let length = distance(points[a.0], points[b.0]).round_ties_even() as u64;
        Self {
            a,
            b,
            length,
            accepted: false,
        }
    }

    #[inline]
    pub fn endpoints(&self, points: &[Point]) -> (Point, Point) {
        (points[self.a.0], points[self.b.0])
    }

    /// Unordered pair key (`min`, `max`) of the endpoint indices.
    #[inline]
    pub fn key(&self) -> (PointId, PointId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

/// Output of one selection pass: every candidate in evaluation order
/// (ascending length, stable) with its `accepted` flag set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeSet {
    segments: Vec<Segment>,
}

impl EdgeSet {
    pub(crate) fn from_evaluated(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All candidates, in evaluation order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Accepted segments, in acceptance order (non-decreasing length).
    pub fn accepted(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(|s| s.accepted)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(|s| !s.accepted)
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted().count()
    }

    pub fn rejected_count(&self) -> usize {
        self.len() - self.accepted_count()
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}
