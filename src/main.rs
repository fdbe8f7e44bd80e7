use double_track::narration::ConsoleNarrator;
use double_track::simulation::{run_simulation, SimulationConfig, SimulationError};
use std::process::ExitCode;

fn main() -> ExitCode {
    double_track::logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "simulation failed");
            eprintln!("double-track: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SimulationError> {
    let mut narrator = ConsoleNarrator::stdout();
    run_simulation(&SimulationConfig::interactive(), &mut narrator)?;
    narrator.finish()?;
    Ok(())
}
