//! Property-based tests for the system's transition rules.
//!
//! These tests use proptest to verify the entropy, pain and paralysis
//! rules hold across many randomly generated event sequences.

use double_track::core::Integrity;
use double_track::model::Phenomenon;
use double_track::narration::Transcript;
use double_track::random::FixedDraws;
use double_track::system::{AnchorOutcome, SystemBuilder};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_event()(
        name in "[A-Za-z ]{1,16}",
        premises in prop::collection::vec("[A-Za-z]{1,10}", 0..6),
    ) -> Phenomenon {
        Phenomenon::new(name, premises)
    }
}

proptest! {
    #[test]
    fn entropy_grows_five_per_premise(event in arbitrary_event(), start in -100.0f64..100.0) {
        let mut system = SystemBuilder::new().initial_entropy(start).build().unwrap();
        let mut out = Transcript::new();

        let outcome = system.process_event(&event, &mut out);

        let expected = start + 5.0 * event.required_premises().len() as f64;
        prop_assert!((system.entropy() - expected).abs() < 1e-9);
        prop_assert_eq!(outcome.rejected_premises, event.required_premises().len());
        prop_assert_eq!(outcome.accepted, event.required_premises().is_empty());
    }

    #[test]
    fn pain_grows_once_per_rejected_event(event in arbitrary_event(), start in 0.0f64..75.0) {
        let mut system = SystemBuilder::new().initial_pain(start).build().unwrap();
        let mut out = Transcript::new();

        system.process_event(&event, &mut out);

        let expected = if event.required_premises().is_empty() { start } else { start + 2.5 };
        prop_assert!((system.pain().intensity() - expected).abs() < 1e-9);
        prop_assert!(system.pain().location().is_none());
    }

    #[test]
    fn pain_never_decreases(events in prop::collection::vec(arbitrary_event(), 1..40)) {
        let mut system = SystemBuilder::new().build().unwrap();
        let mut out = Transcript::new();
        let mut previous = system.pain().intensity();

        for event in &events {
            system.process_event(event, &mut out);
            prop_assert!(system.pain().intensity() >= previous);
            previous = system.pain().intensity();
        }
    }

    #[test]
    fn paralysis_is_a_one_way_latch(
        events in prop::collection::vec(arbitrary_event(), 1..60),
        start in 50.0f64..80.0,
        draws in prop::collection::vec(0.0f64..1.0, 1..8),
    ) {
        let mut system = SystemBuilder::new()
            .initial_pain(start)
            .random_source(FixedDraws::new(draws))
            .build()
            .unwrap();
        let mut out = Transcript::new();
        let mut was_paralyzed = false;

        for event in &events {
            let outcome = system.process_event(event, &mut out);
            system.attempt_anchor(&mut out);
            system.attempt_pain_localization(&mut out);

            if was_paralyzed {
                prop_assert!(system.is_paralyzed());
            }
            prop_assert_eq!(system.is_paralyzed(), system.pain().intensity() > 80.0);
            prop_assert_eq!(outcome.executed, !system.is_paralyzed());
            was_paralyzed = system.is_paralyzed();
        }

        let transitions = system.history().transitions();
        prop_assert_eq!(transitions.len(), usize::from(system.is_paralyzed()));
        if let Some(transition) = transitions.first() {
            prop_assert_eq!(transition.to, Integrity::Paralyzed);
        }
    }

    #[test]
    fn anchor_branch_follows_draw(draw in 0.0f64..1.0) {
        let mut system = SystemBuilder::new()
            .random_source(FixedDraws::new([draw]))
            .build()
            .unwrap();
        let mut out = Transcript::new();

        let outcome = system.attempt_anchor(&mut out);

        if draw < 0.7 {
            prop_assert_eq!(outcome, AnchorOutcome::Slipped);
            prop_assert_eq!(system.entropy(), 60.0);
        } else {
            prop_assert_eq!(outcome, AnchorOutcome::Held);
            prop_assert_eq!(system.entropy(), 45.0);
        }
    }

    #[test]
    fn localization_is_repeatable(calls in 1usize..20) {
        let mut system = SystemBuilder::new().build().unwrap();
        let mut out = Transcript::new();

        for _ in 0..calls {
            system.attempt_pain_localization(&mut out);
        }

        prop_assert!((system.entropy() - (50.0 + 2.0 * calls as f64)).abs() < 1e-9);
        prop_assert!(!system.pain().is_localized());
    }
}
