pub mod controller;
pub mod run;
pub mod scenario;

pub use controller::ControllerGains;
pub use run::{IntegrationMethod, RunParameters, ScenarioMode};
pub use scenario::{Scenario, GAIN_FACTORS};
