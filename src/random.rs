//! Random draws used by the anchor attempt.
//!
//! The system never touches a global RNG; it owns a `RandomSource`, which is
//! either a seedable `rand` generator or a fixed script of draws for tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// `RandomSource` backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Deterministic generator; the same seed yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the thread-local RNG.
    pub fn from_thread_rng() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Scripted draws, repeated cyclically.
///
/// # Example
///
/// ```rust
/// use double_track::random::{FixedDraws, RandomSource};
///
/// let mut draws = FixedDraws::new([0.5, 0.9]);
/// assert_eq!(draws.next_unit(), 0.5);
/// assert_eq!(draws.next_unit(), 0.9);
/// assert_eq!(draws.next_unit(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct FixedDraws {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedDraws {
    /// # Panics
    ///
    /// Panics if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        assert!(!values.is_empty(), "FixedDraws needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "draws must lie in [0, 1)"
        );
        Self { values, cursor: 0 }
    }
}

impl RandomSource for FixedDraws {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
