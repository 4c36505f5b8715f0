use serde::{Deserialize, Serialize};

/// Gains and limits of the altitude and speed hold loops used in controlled flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerGains {
    /// Proportional gain on speed error, before the run's gain factor.
    pub kv: f64,
    /// Gain on the speed error rate feeding the derivative filter.
    pub kv_dot: f64,
    /// Time constant of the throttle integrator (s).
    pub t_dv: f64,
    /// Time constant of the derivative filter (s).
    pub tv_dot: f64,
    /// Saturation of the throttle rate demand.
    pub fv_limit: f64,
    /// Commanded velocity deviation (m/s).
    pub speed_target: f64,
    /// Elevator degrees per metre of altitude deviation.
    pub kh: f64,
    /// Elevator degrees per m/s of climb rate.
    pub kh_dot: f64,
}

impl Default for ControllerGains {
    fn default() -> Self {
        Self {
            kv: 5.0,
            kv_dot: 3.6,
            t_dv: 1.0,
            tv_dot: 2.0,
            fv_limit: 5.5,
            speed_target: 10.0,
            kh: 0.1,
            kh_dot: 0.4,
        }
    }
}
