use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::{ConfigError, StateVector};
use crate::resources::config::ControllerGains;
use crate::utils::grid_len;

/// Fixed-step explicit integration scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    Euler,
    #[default]
    Rk4,
}

/// Forcing applied to the aircraft for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioMode {
    /// No elevator or throttle input.
    #[default]
    FreeFlight,
    /// Altitude hold on the elevator and speed hold on the throttle.
    Controlled,
    /// Fixed elevator deflection with the speed held at trim.
    SpecialRv,
}

/// Everything a single simulation run needs besides the aircraft model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParameters {
    /// Integration step (s).
    pub dt: f64,
    pub method: IntegrationMethod,
    pub mode: ScenarioMode,
    /// Simulated duration (s).
    #[serde(alias = "T_end")]
    pub t_end: f64,
    /// Initial state `[ΔV, α, ω_z, θ, ΔH]`.
    pub y0: StateVector,
    /// Multiplier on the proportional speed gain.
    pub gain_factor: f64,
    /// Freeze the airspeed sensor from `failure_time` onwards.
    pub failure: bool,
    pub failure_time: f64,
    pub gains: ControllerGains,
    /// Elevator deflection held in `special_rv` mode (deg).
    pub elevator_step_deg: f64,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            dt: 0.01,
            method: IntegrationMethod::Rk4,
            mode: ScenarioMode::FreeFlight,
            t_end: 100.0,
            y0: StateVector::alpha_perturbation(1.0),
            gain_factor: 1.0,
            failure: false,
            failure_time: 20.0,
            gains: ControllerGains::default(),
            elevator_step_deg: -2.0,
        }
    }
}

impl RunParameters {
    pub fn with_mode(mut self, mode: ScenarioMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_method(mut self, method: IntegrationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_t_end(mut self, t_end: f64) -> Self {
        self.t_end = t_end;
        self
    }

    pub fn with_initial_state(mut self, y0: StateVector) -> Self {
        self.y0 = y0;
        self
    }

    pub fn with_gain_factor(mut self, gain_factor: f64) -> Self {
        self.gain_factor = gain_factor;
        self
    }

    pub fn with_failure_at(mut self, failure_time: f64) -> Self {
        self.failure = true;
        self.failure_time = failure_time;
        self
    }

    /// Number of steps on the grid `0, dt, ...` below `t_end`.
    pub fn step_count(&self) -> usize {
        grid_len(self.t_end, self.dt)
    }

    /// Whether the airspeed sensor is failed at time `t`.
    pub fn sensor_failed(&self, t: f64) -> bool {
        self.failure && t >= self.failure_time
    }

    /// Proportional speed gain after applying the gain factor.
    pub fn effective_kv(&self) -> f64 {
        self.gains.kv * self.gain_factor
    }

    /// Rejects parameter sets that cannot describe a run.
    ///
    /// The engine itself does not call this; loading from a file does.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if !(self.t_end.is_finite() && self.t_end > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "t_end must be positive, got {}",
                self.t_end
            )));
        }
        if !self.y0.is_finite() {
            return Err(ConfigError::ValidationError(
                "y0 must be finite".to_string(),
            ));
        }
        if self.gains.t_dv <= 0.0 || self.gains.tv_dot <= 0.0 {
            return Err(ConfigError::ValidationError(
                "controller time constants must be positive".to_string(),
            ));
        }
        if self.gains.fv_limit < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "fv_limit must not be negative, got {}",
                self.gains.fv_limit
            )));
        }
        Ok(())
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_yaml::from_str(contents)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads parameters from a `.json` file, or YAML for any other extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}
