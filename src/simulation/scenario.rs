//! The fixed scenario: one ordinary stretch of a double-track life.

use crate::model::Phenomenon;

/// Ordered events plus the step after which pain localization is tried.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    events: Vec<Phenomenon>,
    localize_after: Option<usize>,
}

impl Scenario {
    pub fn new(events: Vec<Phenomenon>, localize_after: Option<usize>) -> Self {
        Self {
            events,
            localize_after,
        }
    }

    /// Work email, breathing, self-reflection; localization after breathing.
    pub fn double_track_life() -> Self {
        Self::new(
            vec![
                Phenomenon::new("Work Email", ["Language", "Social Norms", "Time"]),
                Phenomenon::new("Breathing", ["Body", "Physics", "Time"]),
                Phenomenon::new("Self-Reflection", ["Self", "Memory", "Truth"]),
            ],
            Some(1),
        )
    }

    pub fn events(&self) -> &[Phenomenon] {
        &self.events
    }

    /// Whether pain localization runs after the event at `step` (zero-based).
    pub fn localizes_after(&self, step: usize) -> bool {
        self.localize_after == Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_track_life_has_three_events_in_order() {
        let scenario = Scenario::double_track_life();
        let names: Vec<&str> = scenario.events().iter().map(|e| e.name()).collect();

        assert_eq!(names, ["Work Email", "Breathing", "Self-Reflection"]);
        assert!(scenario
            .events()
            .iter()
            .all(|e| e.required_premises().len() == 3));
    }

    #[test]
    fn localization_only_after_second_event() {
        let scenario = Scenario::double_track_life();

        assert!(!scenario.localizes_after(0));
        assert!(scenario.localizes_after(1));
        assert!(!scenario.localizes_after(2));
    }
}
