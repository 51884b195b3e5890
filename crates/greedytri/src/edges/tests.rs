use super::*;
use crate::geom::{crosses, Point};
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;

fn pair_keys(segs: &[Segment]) -> HashSet<(PointId, PointId)> {
    segs.iter().map(Segment::key).collect()
}

fn assert_pairwise_non_crossing(points: &[Point], edges: &EdgeSet) {
    let acc: Vec<_> = edges.accepted().map(|s| s.endpoints(points)).collect();
    for (i, &(a, b)) in acc.iter().enumerate() {
        for &(c, d) in &acc[i + 1..] {
            assert!(!crosses(a, b, c, d), "accepted {a:?}-{b:?} crosses {c:?}-{d:?}");
        }
    }
}

#[test]
fn fewer_than_two_points_give_nothing() {
    assert!(build_candidates(&[]).is_empty());
    assert!(build_candidates(&[vector![1.0, 2.0]]).is_empty());
    assert!(triangulate(&[vector![1.0, 2.0]]).is_empty());
    assert!(select(&[], Vec::new()).is_empty());
}

#[test]
fn two_points_one_accepted_segment() {
    let pts = [vector![0.0, 0.0], vector![3.0, 4.0]];
    let edges = triangulate(&pts);
    assert_eq!(edges.len(), 1);
    let s = edges.segments()[0];
    assert_eq!(s.length, 5);
    assert!(s.accepted);
}

#[test]
fn right_triangle_all_accepted() {
    let pts = [vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]];
    let edges = triangulate(&pts);
    let lengths: Vec<u64> = edges.segments().iter().map(|s| s.length).collect();
    assert_eq!(lengths, vec![3, 4, 5]);
    assert_eq!(edges.accepted_count(), 3);
    assert_eq!(edges.rejected_count(), 0);
}

#[test]
fn square_rejects_one_diagonal() {
    let pts = [
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![0.0, 10.0],
        vector![10.0, 10.0],
    ];
    let edges = triangulate(&pts);
    assert_eq!(edges.len(), 6);
    assert_eq!(edges.accepted_count(), 5);
    assert_eq!(edges.rejected_count(), 1);
    // Both diagonals round to 14; the one generated first (from (0,0)) wins.
    let rejected = edges.rejected().next().copied().unwrap();
    assert_eq!(rejected.length, 14);
    assert_eq!(rejected.key(), (PointId(1), PointId(2)));
    let diag = edges.accepted().find(|s| s.length == 14).unwrap();
    assert_eq!(diag.key(), (PointId(0), PointId(3)));
}

#[test]
fn candidates_follow_stable_x_order() {
    // Two points share x = 1; input order decides which comes first.
    let pts = [vector![5.0, 0.0], vector![1.0, 9.0], vector![1.0, 2.0]];
    let c = build_candidates(&pts);
    let pairs: Vec<(usize, usize)> = c.iter().map(|s| (s.a.0, s.b.0)).collect();
    assert_eq!(pairs, vec![(1, 2), (1, 0), (2, 0)]);
    assert!(c.iter().all(|s| !s.accepted));
}

#[test]
fn length_rounds_ties_to_even() {
    let pts = [vector![0.0, 0.0], vector![2.5, 0.0], vector![0.0, 3.5]];
    let c = build_candidates(&pts);
    let by_pair = |a: usize, b: usize| {
        c.iter()
            .find(|s| s.key() == (PointId(a), PointId(b)))
            .map(|s| s.length)
            .unwrap()
    };
    assert_eq!(by_pair(0, 1), 2);
    assert_eq!(by_pair(0, 2), 4);
}

#[test]
fn coincident_points_flow_through() {
    let pts = [vector![2.0, 2.0], vector![2.0, 2.0], vector![8.0, 2.0]];
    let edges = triangulate(&pts);
    assert_eq!(edges.len(), 3);
    let first = edges.segments()[0];
    assert_eq!(first.length, 0);
    assert!(first.accepted);
    assert_eq!(edges.accepted_count(), 3);
}

#[test]
fn equal_lengths_keep_generation_order() {
    let pts = [
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![0.0, 10.0],
        vector![10.0, 10.0],
    ];
    let cands = build_candidates(&pts);
    let edges = select(&pts, cands.clone());
    let tens_in: Vec<_> = cands.iter().filter(|s| s.length == 10).map(Segment::key).collect();
    let tens_out: Vec<_> = edges
        .segments()
        .iter()
        .filter(|s| s.length == 10)
        .map(Segment::key)
        .collect();
    assert_eq!(tens_in, tens_out);
}

#[test]
fn random_cloud_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    let pts: Vec<Point> = (0..40)
        .map(|_| vector![rng.gen_range(0.0..500.0), rng.gen_range(0.0..500.0)])
        .collect();
    let edges = triangulate(&pts);
    assert_eq!(edges.len(), 40 * 39 / 2);
    assert_pairwise_non_crossing(&pts, &edges);
    // A planar straight-line graph on n points has at most 3n - 6 edges.
    assert!(edges.accepted_count() <= 3 * 40 - 6);
}

fn cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(
        (0.0..200.0f64, 0.0..200.0f64).prop_map(|(x, y)| vector![x, y]),
        0..14,
    )
}

proptest! {
    #[test]
    fn candidate_count_and_uniqueness(pts in cloud()) {
        let n = pts.len();
        let c = build_candidates(&pts);
        prop_assert_eq!(c.len(), n * n.saturating_sub(1) / 2);
        prop_assert_eq!(pair_keys(&c).len(), c.len());
        prop_assert!(c.iter().all(|s| s.a != s.b));
    }

    #[test]
    fn selection_is_idempotent(pts in cloud()) {
        prop_assert_eq!(triangulate(&pts), triangulate(&pts));
    }

    #[test]
    fn acceptance_order_is_non_decreasing(pts in cloud()) {
        let edges = triangulate(&pts);
        let lens: Vec<u64> = edges.accepted().map(|s| s.length).collect();
        prop_assert!(lens.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn accepted_segments_never_cross(pts in cloud()) {
        let edges = triangulate(&pts);
        assert_pairwise_non_crossing(&pts, &edges);
        if !edges.is_empty() {
            prop_assert!(edges.segments()[0].accepted);
        }
    }

    #[test]
    fn rejected_segments_cross_some_accepted(pts in cloud()) {
        let edges = triangulate(&pts);
        let acc: Vec<_> = edges.accepted().map(|s| s.endpoints(&pts)).collect();
        for s in edges.rejected() {
            let (p, q) = s.endpoints(&pts);
            prop_assert!(acc.iter().any(|&(a, b)| crosses(p, q, a, b)));
        }
    }
}
