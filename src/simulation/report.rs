//! Final state analysis of a run.

use crate::core::{Integrity, State, StateHistory};
use crate::random::RandomSource;
use crate::system::RadicalAgnosticismSystem;
use serde::{Deserialize, Serialize};
use std::fmt;

const RULE_WIDTH: usize = 70;

/// Snapshot of the system once the scenario is over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub entropy: f64,
    pub pain_intensity: f64,
    pub integrity: Integrity,
    pub events_processed: usize,
    pub history: StateHistory<Integrity>,
}

impl SimulationReport {
    pub fn from_system<R: RandomSource>(system: &RadicalAgnosticismSystem<R>) -> Self {
        Self {
            entropy: system.entropy(),
            pain_intensity: system.pain().intensity(),
            integrity: system.integrity(),
            events_processed: system.events_processed(),
            history: system.history().clone(),
        }
    }

    pub fn is_paralyzed(&self) -> bool {
        self.integrity == Integrity::Paralyzed
    }

    /// Names of the integrity states the run passed through, in order.
    pub fn integrity_path(&self) -> Vec<&str> {
        let path = self.history.get_path();
        if path.is_empty() {
            return vec![self.integrity.name()];
        }
        path.into_iter().map(|state| state.name()).collect()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let integrity = match self.integrity {
            Integrity::Normal => format!("{} (Mechanical)", self.integrity.label()),
            Integrity::Paralyzed => self.integrity.label().to_string(),
        };

        writeln!(f, "{rule}")?;
        writeln!(f, "Final State Analysis:")?;
        writeln!(f, "Entropy (Melting Standards): {:.1}%", self.entropy)?;
        writeln!(f, "Functional Integrity: {integrity}")?;
        writeln!(f, "Quote: 'Just moving. Pain and joy are just phenomena.'")?;
        write!(f, "{rule}")
    }
}

/// Opening banner printed before the first event.
pub(crate) fn banner() -> [String; 4] {
    let rule = "=".repeat(RULE_WIDTH);
    [
        rule.clone(),
        "Initializing RADICAL AGNOSTICISM SIMULATION".to_string(),
        "Mode: 'As If' (Operating without accepting premises)".to_string(),
        rule,
    ]
}
