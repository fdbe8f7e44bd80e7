//! Drives a system through a scenario.

use crate::narration::Narrator;
use crate::random::RandomSource;
use crate::simulation::config::{Pacing, SimulationConfig};
use crate::simulation::error::SimulationError;
use crate::simulation::report::{banner, SimulationReport};
use crate::simulation::scenario::Scenario;
use crate::system::{RadicalAgnosticismSystem, SystemBuilder};
use uuid::Uuid;

/// Build a fresh system from `config` and run the fixed scenario on it.
///
/// # Example
///
/// ```rust
/// use double_track::narration::Transcript;
/// use double_track::simulation::{run_simulation, SimulationConfig};
///
/// let mut out = Transcript::new();
/// let report = run_simulation(&SimulationConfig::default(), &mut out).unwrap();
///
/// assert_eq!(report.entropy, 97.0);
/// assert_eq!(report.integrity.label(), "Maintained");
/// ```
pub fn run_simulation<N: Narrator>(
    config: &SimulationConfig,
    out: &mut N,
) -> Result<SimulationReport, SimulationError> {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("simulation", %run_id);
    let _guard = span.enter();

    let builder = SystemBuilder::new().deliberation(config.pacing.per_premise);
    let builder = match config.seed {
        Some(seed) => builder.seed(seed),
        None => builder,
    };
    let mut system = builder.build()?;

    Ok(run_scenario(
        &mut system,
        &Scenario::double_track_life(),
        &config.pacing,
        out,
    ))
}

/// Feed every event of `scenario` through `system`, then report.
pub fn run_scenario<R: RandomSource, N: Narrator>(
    system: &mut RadicalAgnosticismSystem<R>,
    scenario: &Scenario,
    pacing: &Pacing,
    out: &mut N,
) -> SimulationReport {
    tracing::info!(events = scenario.events().len(), "scenario started");

    for line in banner() {
        out.line(&line);
    }
    Pacing::pause(pacing.intro);

    for (step, event) in scenario.events().iter().enumerate() {
        system.process_event(event, out);
        Pacing::pause(pacing.per_event);

        if scenario.localizes_after(step) {
            system.attempt_pain_localization(out);
        }
    }

    let report = SimulationReport::from_system(system);
    out.blank();
    for line in report.to_string().lines() {
        out.line(line);
    }

    tracing::info!(
        entropy = report.entropy,
        pain = report.pain_intensity,
        integrity = report.integrity.label(),
        path = ?report.integrity_path(),
        "scenario finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Phenomenon;
    use crate::narration::Transcript;
    use crate::random::FixedDraws;

    #[test]
    fn fixed_scenario_ends_maintained() {
        let mut out = Transcript::new();
        let report = run_simulation(&SimulationConfig::default(), &mut out).unwrap();

        assert_eq!(report.entropy, 97.0);
        assert_eq!(report.pain_intensity, 27.5);
        assert!(!report.is_paralyzed());
        assert_eq!(report.events_processed, 3);
        assert!(out.contains("Entropy (Melting Standards): 97.0%"));
        assert!(out.contains("Functional Integrity: Maintained"));
    }

    #[test]
    fn localization_runs_once_after_breathing() {
        let mut out = Transcript::new();
        run_simulation(&SimulationConfig::default(), &mut out).unwrap();

        assert_eq!(out.count("Attempting [Pain Localization]"), 1);

        let lines = out.lines();
        let position = |needle: &str| lines.iter().position(|l| l.contains(needle)).unwrap();
        let localization = position("Attempting [Pain Localization]");
        assert!(position("Incoming Event: [Breathing]") < localization);
        assert!(localization < position("Incoming Event: [Self-Reflection]"));
        assert!(out.contains("Current Pain: Diffuse, Intensity 25.0"));
    }

    #[test]
    fn seeded_runs_match() {
        let config = SimulationConfig {
            seed: Some(99),
            ..SimulationConfig::default()
        };
        let mut first = Transcript::new();
        let mut second = Transcript::new();

        let a = run_simulation(&config, &mut first).unwrap();
        let b = run_simulation(&config, &mut second).unwrap();

        assert_eq!(a.entropy, b.entropy);
        assert_eq!(first, second);
    }

    #[test]
    fn custom_scenario_can_paralyze() {
        let mut system = SystemBuilder::new()
            .initial_pain(79.0)
            .random_source(FixedDraws::new([0.5]))
            .build()
            .unwrap();
        let scenario = Scenario::new(
            vec![
                Phenomenon::new("Doubt", ["Self"]),
                Phenomenon::new("Work Email", ["Language"]),
            ],
            None,
        );
        let mut out = Transcript::new();

        let report = run_scenario(&mut system, &scenario, &Pacing::none(), &mut out);

        assert!(report.is_paralyzed());
        assert_eq!(report.entropy, 60.0);
        assert!(out.contains("Functional Integrity: Compromised"));
        assert!(!out.contains("Executing"));
        assert!(!out.contains("Pain Localization"));
    }
}
