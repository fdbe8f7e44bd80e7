//! The two tracks of consciousness.
//!
//! - **Functional**: mechanical execution that always succeeds
//! - **Philosophical**: premise auditing that always rejects
//!
//! Both narrate through the `Narrator` they are handed and keep no state
//! between calls.

mod functional;
mod philosophical;

pub use functional::FunctionalTrack;
pub use philosophical::PhilosophicalTrack;
