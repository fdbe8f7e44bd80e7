//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over some subject value. The system uses
//! one to decide when pain has become severe enough to paralyze it.

use std::fmt;

/// Pure predicate that determines if a transition can fire.
///
/// # Example
///
/// ```rust
/// use double_track::core::Guard;
/// use double_track::model::Pain;
///
/// let severe = Guard::new(|pain: &Pain| pain.intensity() > 80.0);
///
/// assert!(!severe.check(&Pain::diffuse(80.0)));
/// assert!(severe.check(&Pain::diffuse(80.5)));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this subject.
    pub fn check(&self, subject: &T) -> bool {
        (self.predicate)(subject)
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Integrity, State};
    use crate::model::Pain;

    #[test]
    fn guard_allows_matching_subjects() {
        let guard = Guard::new(|s: &Integrity| matches!(s, Integrity::Normal));

        assert!(guard.check(&Integrity::Normal));
        assert!(!guard.check(&Integrity::Paralyzed));
    }

    #[test]
    fn guard_checks_non_final_states() {
        let guard = Guard::new(|s: &Integrity| !s.is_final());

        assert!(guard.check(&Integrity::Normal));
        assert!(!guard.check(&Integrity::Paralyzed));
    }

    #[test]
    fn threshold_guard_is_strict() {
        let guard = Guard::new(|p: &Pain| p.intensity() > 80.0);

        assert!(!guard.check(&Pain::diffuse(79.9)));
        assert!(!guard.check(&Pain::diffuse(80.0)));
        assert!(guard.check(&Pain::diffuse(82.5)));
    }

    #[test]
    fn guard_is_deterministic() {
        let pain = Pain::diffuse(42.0);
        let guard = Guard::new(|p: &Pain| p.intensity() > 40.0);

        assert_eq!(guard.check(&pain), guard.check(&pain));
    }
}
