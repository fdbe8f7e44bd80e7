//! Value types flowing through the simulation.

mod pain;
mod phenomenon;

pub use pain::{Pain, PainError};
pub use phenomenon::Phenomenon;
