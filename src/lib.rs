pub mod components;
pub mod report;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    AircraftConfig, AircraftModel, DerivedCoefficients, StateVector, TrimState,
};
pub use resources::{
    History, IntegrationMethod, RunOutcome, RunParameters, Scenario, ScenarioMode,
};
pub use systems::{run_simulation, run_sweep, SimulationFault};
