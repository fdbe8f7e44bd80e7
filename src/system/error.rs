//! Build errors for the system builder.

use thiserror::Error;

/// Errors that can occur when building a `RadicalAgnosticismSystem`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Setting '{field}' must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Initial pain intensity must be non-negative, got {0}")]
    NegativePain(f64),

    #[error("Paralysis threshold must be positive, got {0}")]
    InvalidThreshold(f64),

    #[error("Anchor failure probability must lie in [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
}
