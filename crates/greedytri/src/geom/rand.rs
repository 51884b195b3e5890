//! Random point sets (uniform in a rectangle + replay tokens).
//!
//! Model
//! - Each coordinate is drawn independently and uniformly from the half-open
//!   extent of the target rectangle.
//! - The random source is always injected; `ReplayToken` gives a reproducible
//!   `StdRng` for callers that want indexable draws.

use super::{Point, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Token for the next draw in the same sequence.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `count` independent uniform points inside `area`.
///
/// Returns an empty vector when `area` has no interior (nothing fits).
pub fn draw_points<R: Rng + ?Sized>(count: usize, area: Rect, rng: &mut R) -> Vec<Point> {
    if area.is_empty() {
        if count > 0 {
            tracing::warn!(count, ?area, "no room to place points");
        }
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            Point::new(
                rng.gen_range(area.left..area.right),
                rng.gen_range(area.top..area.bottom),
            )
        })
        .collect()
}
