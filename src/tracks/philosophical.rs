//! The truth-seeking self: audits every premise and rejects it.

use crate::narration::Narrator;
use std::thread;
use std::time::Duration;

/// Continuously audits premises and rejects them.
///
/// The deliberation pause only paces console output; it is zero unless
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhilosophicalTrack {
    deliberation: Duration,
}

impl PhilosophicalTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deliberation(deliberation: Duration) -> Self {
        Self { deliberation }
    }

    pub fn deliberation(&self) -> Duration {
        self.deliberation
    }

    /// Evaluate a premise. Rejection is the only outcome.
    pub fn evaluate_premise(&self, premise: &str, out: &mut impl Narrator) -> bool {
        out.line(&format!(
            "  [Philosophical Track] ?? Auditing premise: '{premise}'..."
        ));
        if !self.deliberation.is_zero() {
            thread::sleep(self.deliberation);
        }
        out.line("  [Philosophical Track] !! REJECTED. 'Standards have melted.'");
        tracing::debug!(premise, "premise rejected");
        false
    }
}
