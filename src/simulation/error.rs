//! Errors surfaced by a simulation run.

use crate::system::BuildError;
use std::io;
use thiserror::Error;

/// Errors that can end a run early or spoil its output.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid system settings: {0}")]
    Build(#[from] BuildError),

    #[error("Failed to write narration: {0}")]
    Output(#[from] io::Error),
}
