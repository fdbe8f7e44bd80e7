//! Builder for constructing a `RadicalAgnosticismSystem`.

use crate::random::{RandomSource, RngSource};
use crate::system::error::BuildError;
use crate::system::machine::{RadicalAgnosticismSystem, Settings};
use crate::tracks::PhilosophicalTrack;
use std::time::Duration;

/// Builder for the system with a fluent API.
///
/// Every setting has a default; `build` validates the combination.
///
/// # Example
///
/// ```rust
/// use double_track::random::FixedDraws;
/// use double_track::system::SystemBuilder;
///
/// let system = SystemBuilder::new()
///     .initial_entropy(10.0)
///     .initial_pain(0.0)
///     .random_source(FixedDraws::new([0.9]))
///     .build()
///     .unwrap();
///
/// assert_eq!(system.entropy(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct SystemBuilder<R = RngSource> {
    settings: Settings,
    rng: R,
}

impl SystemBuilder<RngSource> {
    /// Create a builder with default settings and a thread-seeded RNG.
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            rng: RngSource::from_thread_rng(),
        }
    }

    /// Use a deterministic RNG seeded with `seed`.
    pub fn seed(self, seed: u64) -> Self {
        self.random_source(RngSource::seeded(seed))
    }
}

impl Default for SystemBuilder<RngSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> SystemBuilder<R> {
    pub fn initial_entropy(mut self, entropy: f64) -> Self {
        self.settings.entropy = entropy;
        self
    }

    pub fn initial_pain(mut self, intensity: f64) -> Self {
        self.settings.pain = intensity;
        self
    }

    /// Pain must strictly exceed this value to paralyze the system.
    pub fn paralysis_threshold(mut self, threshold: f64) -> Self {
        self.settings.paralysis_threshold = threshold;
        self
    }

    /// Probability that an anchor attempt slips.
    pub fn anchor_failure_probability(mut self, probability: f64) -> Self {
        self.settings.anchor_failure_probability = probability;
        self
    }

    /// Pause the philosophical track takes before each rejection.
    pub fn deliberation(mut self, pause: Duration) -> Self {
        self.settings.philosophical = PhilosophicalTrack::with_deliberation(pause);
        self
    }

    /// Replace the random source driving anchor attempts.
    pub fn random_source<R2: RandomSource>(self, rng: R2) -> SystemBuilder<R2> {
        SystemBuilder {
            settings: self.settings,
            rng,
        }
    }

    /// Build the system.
    /// Returns an error if any setting is out of range.
    pub fn build(self) -> Result<RadicalAgnosticismSystem<R>, BuildError> {
        let s = &self.settings;
        for (field, value) in [
            ("initial_entropy", s.entropy),
            ("initial_pain", s.pain),
            ("paralysis_threshold", s.paralysis_threshold),
            ("anchor_failure_probability", s.anchor_failure_probability),
        ] {
            if !value.is_finite() {
                return Err(BuildError::NonFinite { field });
            }
        }

        if s.pain < 0.0 {
            return Err(BuildError::NegativePain(s.pain));
        }
        if s.paralysis_threshold <= 0.0 {
            return Err(BuildError::InvalidThreshold(s.paralysis_threshold));
        }
        if !(0.0..=1.0).contains(&s.anchor_failure_probability) {
            return Err(BuildError::ProbabilityOutOfRange(
                s.anchor_failure_probability,
            ));
        }

        Ok(RadicalAgnosticismSystem::from_settings(self.settings, self.rng))
    }
}
