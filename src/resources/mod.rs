pub mod config;
mod history;

pub use config::{
    ControllerGains, IntegrationMethod, RunParameters, Scenario, ScenarioMode, GAIN_FACTORS,
};
pub use history::{History, RunOutcome, Sample};
