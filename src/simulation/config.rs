//! In-code run configuration.

use std::thread;
use std::time::Duration;

/// Cosmetic delays between narrated steps.
///
/// Pacing never changes results; `Pacing::none()` runs instantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pacing {
    /// After the opening banner.
    pub intro: Duration,
    /// After each processed event.
    pub per_event: Duration,
    /// Inside each premise audit.
    pub per_premise: Duration,
}

impl Pacing {
    pub fn none() -> Self {
        Self::default()
    }

    /// Delays suited to a person reading along.
    pub fn realtime() -> Self {
        Self {
            intro: Duration::from_secs(2),
            per_event: Duration::from_secs(1),
            per_premise: Duration::from_millis(200),
        }
    }

    pub(crate) fn pause(delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Settings for one run of the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationConfig {
    pub pacing: Pacing,
    /// Seed for anchor draws; thread-seeded when `None`.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Paced configuration used by the binary.
    pub fn interactive() -> Self {
        Self {
            pacing: Pacing::realtime(),
            seed: None,
        }
    }
}
