//! The radical agnosticism system and its event transition.

use crate::core::{Guard, Integrity, State, StateHistory, StateTransition};
use crate::model::{Pain, Phenomenon};
use crate::narration::Narrator;
use crate::random::{RandomSource, RngSource};
use crate::tracks::{FunctionalTrack, PhilosophicalTrack};
use chrono::Utc;

pub const DEFAULT_ENTROPY: f64 = 50.0;
pub const DEFAULT_PAIN: f64 = 20.0;
pub const DEFAULT_PARALYSIS_THRESHOLD: f64 = 80.0;
pub const DEFAULT_ANCHOR_FAILURE_PROBABILITY: f64 = 0.7;

pub const ENTROPY_PER_REJECTED_PREMISE: f64 = 5.0;
pub const PAIN_PER_REJECTED_EVENT: f64 = 2.5;
pub const ANCHOR_SLIP_ENTROPY: f64 = 10.0;
pub const ANCHOR_HOLD_RELIEF: f64 = 5.0;
pub const LOCALIZATION_ENTROPY: f64 = 2.0;

/// What happened to a single processed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventOutcome {
    /// True only if every premise was validated.
    pub accepted: bool,
    pub rejected_premises: usize,
    /// Whether the functional track ran the task.
    pub executed: bool,
}

/// Result of an anchor attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// The grasping hand was doubted too; entropy rose.
    Slipped,
    /// A minimal assertion held; entropy fell.
    Held,
}

/// Validated settings the system is built from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Settings {
    pub entropy: f64,
    pub pain: f64,
    pub paralysis_threshold: f64,
    pub anchor_failure_probability: f64,
    pub philosophical: PhilosophicalTrack,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entropy: DEFAULT_ENTROPY,
            pain: DEFAULT_PAIN,
            paralysis_threshold: DEFAULT_PARALYSIS_THRESHOLD,
            anchor_failure_probability: DEFAULT_ANCHOR_FAILURE_PROBABILITY,
            philosophical: PhilosophicalTrack::new(),
        }
    }
}

/// A consciousness running on two tracks at once.
///
/// The functional track keeps producing output while the philosophical
/// track rejects every premise. Rejections melt standards (entropy) and
/// hurt (pain); enough pain latches the system into paralysis.
///
/// One instance lives for exactly one run: build it at the start, feed it
/// events, read the final state, drop it.
///
/// # Example
///
/// ```rust
/// use double_track::model::Phenomenon;
/// use double_track::narration::Transcript;
/// use double_track::system::RadicalAgnosticismSystem;
///
/// let mut system = RadicalAgnosticismSystem::new();
/// let mut out = Transcript::new();
///
/// let outcome = system.process_event(&Phenomenon::new("Breathing", ["Body", "Physics", "Time"]), &mut out);
///
/// assert!(!outcome.accepted);
/// assert!(outcome.executed);
/// assert_eq!(system.entropy(), 65.0);
/// assert_eq!(system.pain().intensity(), 22.5);
/// ```
pub struct RadicalAgnosticismSystem<R: RandomSource = RngSource> {
    functional: FunctionalTrack,
    philosophical: PhilosophicalTrack,
    entropy: f64,
    pain: Pain,
    integrity: Integrity,
    paralysis_guard: Guard<Pain>,
    anchor_failure_probability: f64,
    history: StateHistory<Integrity>,
    events_processed: usize,
    rng: R,
}

impl RadicalAgnosticismSystem<RngSource> {
    /// System with default settings and a thread-seeded random source.
    pub fn new() -> Self {
        Self::from_settings(Settings::default(), RngSource::from_thread_rng())
    }
}

impl Default for RadicalAgnosticismSystem<RngSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> RadicalAgnosticismSystem<R> {
    pub(crate) fn from_settings(settings: Settings, rng: R) -> Self {
        let threshold = settings.paralysis_threshold;
        Self {
            functional: FunctionalTrack::new(),
            philosophical: settings.philosophical,
            entropy: settings.entropy,
            pain: Pain::diffuse(settings.pain),
            integrity: Integrity::Normal,
            paralysis_guard: Guard::new(move |pain: &Pain| pain.intensity() > threshold),
            anchor_failure_probability: settings.anchor_failure_probability,
            history: StateHistory::new(),
            events_processed: 0,
            rng,
        }
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    pub fn pain(&self) -> &Pain {
        &self.pain
    }

    pub fn integrity(&self) -> Integrity {
        self.integrity
    }

    pub fn is_paralyzed(&self) -> bool {
        self.integrity == Integrity::Paralyzed
    }

    pub fn history(&self) -> &StateHistory<Integrity> {
        &self.history
    }

    pub fn events_processed(&self) -> usize {
        self.events_processed
    }

    /// Run one event through both tracks.
    ///
    /// Every premise is audited in order; each rejection adds entropy. An
    /// event with any rejection hurts once. The task still runs unless the
    /// system is paralyzed.
    pub fn process_event(&mut self, event: &Phenomenon, out: &mut impl Narrator) -> EventOutcome {
        out.blank();
        out.line(&format!("--- Incoming Event: [{}] ---", event.name()));

        let mut rejected_premises = 0;
        for premise in event.required_premises() {
            if !self.philosophical.evaluate_premise(premise, out) {
                rejected_premises += 1;
                self.entropy += ENTROPY_PER_REJECTED_PREMISE;
                out.line(&format!(
                    "  [System] Logic Error: Cannot validate '{premise}'."
                ));
            }
        }
        self.events_processed += 1;

        let accepted = rejected_premises == 0;
        if !accepted {
            out.line(
                "  [System] Warning: Event recognized as 'Phenomenon' only. Reality unconfirmed.",
            );
            self.increase_pain(out);
        }

        let executed = if self.is_paralyzed() {
            out.line("  [System] CRITICAL: Paralysis active. No output.");
            false
        } else {
            self.functional.execute_task(event.name(), out)
        };

        tracing::debug!(
            event = event.name(),
            rejected_premises,
            entropy = self.entropy,
            pain = self.pain.intensity(),
            executed,
            "event processed"
        );

        EventOutcome {
            accepted,
            rejected_premises,
            executed,
        }
    }

    /// Try to ground perception with a sensory anchor.
    ///
    /// Usually slips, because the subject doing the grasping is doubted too.
    pub fn attempt_anchor(&mut self, out: &mut impl Narrator) -> AnchorOutcome {
        out.blank();
        out.line(">>> Attempting [Sensory Anchor]...");

        let draw = self.rng.next_unit();
        let outcome = if draw < self.anchor_failure_probability {
            out.line(">>> [FAIL]: Anchor slipped.");
            out.line(">>> Reason: 'The hand that grasps' is also doubted.");
            self.entropy += ANCHOR_SLIP_ENTROPY;
            AnchorOutcome::Slipped
        } else {
            out.line(">>> [SUCCESS]: Minimal assertion made. 'Something appears.'");
            self.entropy -= ANCHOR_HOLD_RELIEF;
            AnchorOutcome::Held
        };

        tracing::debug!(draw, ?outcome, entropy = self.entropy, "anchor attempted");
        outcome
    }

    /// Try to turn diffuse pain into physical, located pain.
    ///
    /// The pain stays everywhere and nowhere: the location is never set and
    /// each attempt costs entropy.
    pub fn attempt_pain_localization(&mut self, out: &mut impl Narrator) {
        out.blank();
        out.line(">>> Attempting [Pain Localization]...");

        if !self.pain.is_localized() {
            out.line(&format!(
                ">>> Current Pain: Diffuse, Intensity {}",
                self.pain.display_intensity()
            ));
            out.line(">>> Action: High-load stimulus applied (Mental/Physical).");
            out.line(">>> Result: Pain remains non-localized. 'It is everywhere and nowhere.'");
            self.entropy += LOCALIZATION_ENTROPY;
        }

        tracing::debug!(entropy = self.entropy, "pain localization attempted");
    }

    fn increase_pain(&mut self, out: &mut impl Narrator) {
        self.pain.increase(PAIN_PER_REJECTED_EVENT);

        if self.paralysis_guard.check(&self.pain) {
            out.blank();
            out.line("[!] SYSTEM ALERT: Pain threshold exceeded. Entering Paralysis.");
            self.enter_paralysis();
        }
    }

    fn enter_paralysis(&mut self) {
        if self.integrity.is_final() {
            return;
        }

        let transition = StateTransition {
            from: self.integrity,
            to: Integrity::Paralyzed,
            timestamp: Utc::now(),
            step: self.events_processed,
        };
        self.history = self.history.record(transition);
        self.integrity = Integrity::Paralyzed;

        tracing::warn!(
            pain = self.pain.intensity(),
            step = self.events_processed,
            "pain threshold exceeded; functional track paralyzed"
        );
    }
}
