//! The radical agnosticism system.
//!
//! Owns entropy, pain and the integrity latch, and wires the two tracks
//! together:
//!
//! - **Machine**: `process_event`, `attempt_anchor`, `attempt_pain_localization`
//! - **Builder**: validated construction with in-code settings
//! - **Errors**: what `build` can reject

pub mod builder;
pub mod error;
pub mod machine;

pub use builder::SystemBuilder;
pub use error::BuildError;
pub use machine::{AnchorOutcome, EventOutcome, RadicalAgnosticismSystem};
