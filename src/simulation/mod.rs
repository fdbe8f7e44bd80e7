//! Scenario driver and run reporting.
//!
//! This is the imperative shell around the system: it builds one system
//! per run, paces the narration, feeds the fixed scenario and summarizes
//! the end state.

mod config;
mod driver;
mod error;
mod report;
mod scenario;

pub use config::{Pacing, SimulationConfig};
pub use driver::{run_scenario, run_simulation};
pub use error::SimulationError;
pub use report::SimulationReport;
pub use scenario::Scenario;
