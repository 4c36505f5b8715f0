use std::fmt;
use std::str::FromStr;

use crate::components::{ConfigError, StateVector};
use crate::resources::config::{IntegrationMethod, RunParameters, ScenarioMode};

/// Preset study cases, each expanding to one or more labelled run parameter sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scenario {
    /// Free aircraft after a 1° angle of attack disturbance, Euler, 15 s.
    FreeFlightEuler,
    /// As [`Scenario::FreeFlightEuler`] with RK4.
    FreeFlightRk4,
    /// Controlled flight from trim with the given step size.
    StepSize(f64),
    /// Controlled flight at reduced, nominal and increased speed gain.
    GainComparison,
    /// Controlled flight with the airspeed sensor failing at 20 s.
    SensorFailure,
    /// Response to a fixed −2° elevator deflection, 15 s.
    ElevatorStep,
}

pub const GAIN_FACTORS: [(&str, f64); 3] = [("reduced", 0.5), ("nominal", 1.0), ("increased", 2.0)];

impl Scenario {
    pub fn all() -> Vec<Scenario> {
        vec![
            Scenario::FreeFlightEuler,
            Scenario::FreeFlightRk4,
            Scenario::StepSize(0.01),
            Scenario::StepSize(0.001),
            Scenario::StepSize(0.5),
            Scenario::GainComparison,
            Scenario::SensorFailure,
            Scenario::ElevatorStep,
        ]
    }

    /// Labelled run parameters making up this scenario.
    pub fn runs(&self) -> Vec<(String, RunParameters)> {
        let controlled = RunParameters::default()
            .with_mode(ScenarioMode::Controlled)
            .with_method(IntegrationMethod::Rk4)
            .with_initial_state(StateVector::default());

        match *self {
            Scenario::FreeFlightEuler => vec![(
                "free flight (Euler, dt=0.01s)".to_string(),
                RunParameters::default()
                    .with_method(IntegrationMethod::Euler)
                    .with_t_end(15.0),
            )],
            Scenario::FreeFlightRk4 => vec![(
                "free flight (RK4, dt=0.01s)".to_string(),
                RunParameters::default()
                    .with_method(IntegrationMethod::Rk4)
                    .with_t_end(15.0),
            )],
            Scenario::StepSize(dt) => vec![(
                format!("step size dt={}s", dt),
                controlled.with_dt(dt),
            )],
            Scenario::GainComparison => GAIN_FACTORS
                .iter()
                .map(|(name, factor)| {
                    (
                        format!("{} (k_v factor={})", name, factor),
                        controlled.clone().with_gain_factor(*factor),
                    )
                })
                .collect(),
            Scenario::SensorFailure => vec![(
                "speed sensor failure at 20s".to_string(),
                controlled.with_failure_at(20.0),
            )],
            Scenario::ElevatorStep => vec![(
                "elevator step -2 deg".to_string(),
                RunParameters::default()
                    .with_mode(ScenarioMode::SpecialRv)
                    .with_initial_state(StateVector::default())
                    .with_t_end(15.0),
            )],
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::FreeFlightEuler => write!(f, "free-flight-euler"),
            Scenario::FreeFlightRk4 => write!(f, "free-flight-rk4"),
            Scenario::StepSize(dt) => write!(f, "step-size:{}", dt),
            Scenario::GainComparison => write!(f, "gain-comparison"),
            Scenario::SensorFailure => write!(f, "sensor-failure"),
            Scenario::ElevatorStep => write!(f, "elevator-step"),
        }
    }
}

impl FromStr for Scenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(dt) = s.strip_prefix("step-size:") {
            let dt: f64 = dt.parse().map_err(|_| {
                ConfigError::ValidationError(format!("invalid step size '{}'", dt))
            })?;
            if !(dt.is_finite() && dt > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "step size must be positive, got {}",
                    dt
                )));
            }
            return Ok(Scenario::StepSize(dt));
        }
        match s {
            "free-flight-euler" => Ok(Scenario::FreeFlightEuler),
            "free-flight-rk4" => Ok(Scenario::FreeFlightRk4),
            "gain-comparison" => Ok(Scenario::GainComparison),
            "sensor-failure" => Ok(Scenario::SensorFailure),
            "elevator-step" => Ok(Scenario::ElevatorStep),
            other => Err(ConfigError::ValidationError(format!(
                "unknown scenario '{}'",
                other
            ))),
        }
    }
}
