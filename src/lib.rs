//! Double Track: a narrative state machine of radical agnosticism
//!
//! A consciousness runs on two tracks at once. The functional track keeps
//! executing tasks "as if" their premises held; the philosophical track
//! audits every premise and rejects it. Each rejection melts standards
//! (entropy) and hurts (pain). Enough pain latches the system into
//! paralysis, after which the functional track produces nothing.
//!
//! # Core Concepts
//!
//! - **State**: `Integrity` (`Normal` / `Paralyzed`) via the `State` trait
//! - **Guards**: the paralysis threshold as a pure predicate over `Pain`
//! - **History**: immutable record of integrity transitions
//! - **Narration**: all output goes through a `Narrator`, so runs are testable
//!
//! # Example
//!
//! ```rust
//! use double_track::narration::Transcript;
//! use double_track::simulation::{run_simulation, SimulationConfig};
//!
//! let mut out = Transcript::new();
//! let report = run_simulation(&SimulationConfig::default(), &mut out).unwrap();
//!
//! assert_eq!(report.entropy, 97.0);
//! assert_eq!(report.pain_intensity, 27.5);
//! assert!(!report.is_paralyzed());
//! ```

pub mod core;
pub mod logging;
pub mod model;
pub mod narration;
pub mod random;
pub mod simulation;
pub mod system;
pub mod tracks;

// Re-export commonly used types
pub use crate::core::{Guard, Integrity, State, StateHistory, StateTransition};
pub use model::{Pain, Phenomenon};
pub use simulation::{run_simulation, SimulationConfig, SimulationReport};
pub use system::{RadicalAgnosticismSystem, SystemBuilder};
