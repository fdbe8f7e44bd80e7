//! Core state machine types.
//!
//! This module contains the pure part of the simulation:
//! - State definitions via the `State` trait, and the `Integrity` latch
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! Nothing in here narrates or draws random numbers.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{Integrity, State};
