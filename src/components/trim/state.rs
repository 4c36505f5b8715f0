use serde::{Deserialize, Serialize};

use crate::utils::rad_to_deg;

/// Static equilibrium of the aircraft at the trim condition.
///
/// A reference value only; it never enters the dynamic state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrimState {
    /// Trimmed angle of attack (rad).
    pub alpha: f64,
    /// Trimmed elevator deflection (rad).
    pub elevator: f64,
}

impl TrimState {
    pub fn alpha_deg(&self) -> f64 {
        rad_to_deg(self.alpha)
    }

    pub fn elevator_deg(&self) -> f64 {
        rad_to_deg(self.elevator)
    }
}
