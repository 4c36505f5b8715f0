use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

use crate::utils::deg_to_rad;

/// Perturbation state of the longitudinal model.
///
/// Serialized as the array `[ΔV, α, ω_z, θ, ΔH]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 5]", into = "[f64; 5]")]
pub struct StateVector {
    /// Velocity deviation from trim airspeed (m/s).
    pub delta_v: f64,
    /// Angle of attack (rad).
    pub alpha: f64,
    /// Pitch rate (rad/s).
    pub omega_z: f64,
    /// Pitch angle (rad).
    pub theta: f64,
    /// Altitude deviation from trim altitude (m).
    pub delta_h: f64,
}

/// Time derivative of a [`StateVector`], component for component.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StateDerivative {
    pub delta_v: f64,
    pub alpha: f64,
    pub omega_z: f64,
    pub theta: f64,
    pub delta_h: f64,
}

impl StateVector {
    pub fn new(delta_v: f64, alpha: f64, omega_z: f64, theta: f64, delta_h: f64) -> Self {
        Self {
            delta_v,
            alpha,
            omega_z,
            theta,
            delta_h,
        }
    }

    /// Trimmed flight with only the angle of attack disturbed.
    pub fn alpha_perturbation(alpha_deg: f64) -> Self {
        Self {
            alpha: deg_to_rad(alpha_deg),
            ..Self::default()
        }
    }

    /// Returns `self + h * derivative` without touching `self`.
    #[inline]
    pub fn offset(&self, derivative: &StateDerivative, h: f64) -> Self {
        Self {
            delta_v: self.delta_v + h * derivative.delta_v,
            alpha: self.alpha + h * derivative.alpha,
            omega_z: self.omega_z + h * derivative.omega_z,
            theta: self.theta + h * derivative.theta,
            delta_h: self.delta_h + h * derivative.delta_h,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|x| x.is_finite())
    }

    pub fn to_array(&self) -> [f64; 5] {
        [
            self.delta_v,
            self.alpha,
            self.omega_z,
            self.theta,
            self.delta_h,
        ]
    }
}

impl From<[f64; 5]> for StateVector {
    fn from(y: [f64; 5]) -> Self {
        Self::new(y[0], y[1], y[2], y[3], y[4])
    }
}

impl From<StateVector> for [f64; 5] {
    fn from(state: StateVector) -> Self {
        state.to_array()
    }
}

impl Add for StateDerivative {
    type Output = StateDerivative;

    fn add(self, rhs: StateDerivative) -> StateDerivative {
        StateDerivative {
            delta_v: self.delta_v + rhs.delta_v,
            alpha: self.alpha + rhs.alpha,
            omega_z: self.omega_z + rhs.omega_z,
            theta: self.theta + rhs.theta,
            delta_h: self.delta_h + rhs.delta_h,
        }
    }
}

impl Mul<StateDerivative> for f64 {
    type Output = StateDerivative;

    fn mul(self, rhs: StateDerivative) -> StateDerivative {
        StateDerivative {
            delta_v: self * rhs.delta_v,
            alpha: self * rhs.alpha,
            omega_z: self * rhs.omega_z,
            theta: self * rhs.theta,
            delta_h: self * rhs.delta_h,
        }
    }
}
