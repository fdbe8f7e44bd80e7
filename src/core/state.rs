//! Core State trait and the integrity state of the simulated consciousness.
//!
//! States are plain values with pure inspection methods. The simulation has
//! exactly one state machine: `Integrity`, which starts `Normal` and latches
//! into `Paralyzed` once accumulated pain crosses the threshold.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Example
///
/// ```rust
/// use double_track::core::{Integrity, State};
///
/// assert_eq!(Integrity::Normal.name(), "Normal");
/// assert!(!Integrity::Normal.is_final());
/// assert!(Integrity::Paralyzed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states are never left once entered.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Functional integrity of the system.
///
/// `Normal -> Paralyzed` is the only transition; `Paralyzed` is terminal
/// for the rest of the run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Integrity {
    /// The functional track still executes tasks.
    #[default]
    Normal,
    /// Pain exceeded the threshold; no further task output.
    Paralyzed,
}

impl Integrity {
    /// Label printed in the final report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Maintained",
            Self::Paralyzed => "Compromised",
        }
    }
}

impl State for Integrity {
    fn name(&self) -> &str {
        match self {
            Self::Normal => "Normal",
            Self::Paralyzed => "Paralyzed",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Paralyzed)
    }
}
