//! Clock and randomness sources consumed by the generator.
//!
//! The generator never touches the wall clock or a global rng directly;
//! both are reached through these traits so tests can pin them.

use chrono::Utc;
use rand::rngs::ThreadRng;
use rand::Rng;

/// A source of epoch-millisecond timestamps.
pub trait Clock {
    /// Milliseconds elapsed since 1970-01-01T00:00:00Z.
    fn now_millis(&self) -> u64;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // Pre-epoch clocks clamp to zero.
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> u64,
{
    fn now_millis(&self) -> u64 {
        self()
    }
}

/// A source of uniformly distributed indices.
///
/// Implementations are not required to be cryptographically secure.
pub trait RandomSource {
    /// Returns a value in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
///
/// Wrap a seeded `StdRng` for reproducible sequences, or use
/// [`ThreadRandom`] for the thread-local generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// The thread-local rng from `rand`.
pub type ThreadRandom = RngSource<ThreadRng>;

impl Default for ThreadRandom {
    fn default() -> Self {
        Self(rand::rng())
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each draw is reduced modulo the requested bound. An empty list always
/// yields zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedDraws {
    draws: Vec<usize>,
    pos: usize,
}

impl FixedDraws {
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        Self {
            draws: draws.into(),
            pos: 0,
        }
    }
}

impl RandomSource for FixedDraws {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.draws.is_empty() {
            return 0;
        }
        let draw = self.draws[self.pos % self.draws.len()];
        self.pos = self.pos.wrapping_add(1);
        draw % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_system_clock_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(42).now_millis(), 42);
    }

    #[test]
    fn test_closure_clock() {
        let clock = || 1_725_026_144_072_u64;
        assert_eq!(clock.now_millis(), 1_725_026_144_072);
    }

    #[test]
    fn test_fixed_draws_cycle() {
        let mut draws = FixedDraws::new(vec![1, 2, 40]);
        assert_eq!(draws.next_index(36), 1);
        assert_eq!(draws.next_index(36), 2);
        assert_eq!(draws.next_index(36), 4);
        assert_eq!(draws.next_index(36), 1);
    }

    #[test]
    fn test_fixed_draws_empty() {
        let mut draws = FixedDraws::default();
        assert_eq!(draws.next_index(36), 0);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = RngSource::new(StdRng::seed_from_u64(7));
        let mut b = RngSource::new(StdRng::seed_from_u64(7));
        let xs: Vec<_> = (0..32).map(|_| a.next_index(36)).collect();
        let ys: Vec<_> = (0..32).map(|_| b.next_index(36)).collect();
        assert_eq!(xs, ys);
    }

    proptest! {
        #[test]
        fn prop_thread_random_within_bound(bound in 1usize..1000) {
            let mut rng = ThreadRandom::default();
            for _ in 0..16 {
                prop_assert!(rng.next_index(bound) < bound);
            }
        }
    }
}
