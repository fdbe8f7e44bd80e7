//! The automated self: runs tasks "as if" their premises held.

use crate::narration::Narrator;

/// Executes tasks regardless of their truth value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionalTrack;

impl FunctionalTrack {
    pub fn new() -> Self {
        Self
    }

    /// Execute a task. Always succeeds.
    pub fn execute_task(&self, task_name: &str, out: &mut impl Narrator) -> bool {
        tracing::debug!(task = task_name, "functional track executing");
        out.line(&format!(
            "  [Functional Track] >> Executing '{task_name}'... (Mode: As-If)"
        ));
        out.line("  [Functional Track] >> Output generated. (Internal belief: None)");
        true
    }
}
