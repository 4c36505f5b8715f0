use serde::{Deserialize, Serialize};

use crate::utils::REFERENCE_CG_FRACTION;

/// Physical constants and trim flight condition of the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// The total wing area of the aircraft (m²).
    pub wing_area: f64,
    /// The mean aerodynamic chord of the aircraft (m).
    pub mac: f64,
    /// Aircraft weight, in the same force units as `gravity * mass`.
    pub weight: f64,
    /// Moment of inertia about the lateral (pitch) axis (kg·m²).
    pub iz: f64,
    /// Centre of gravity position as a fraction of the MAC.
    pub cg_fraction: f64,
    /// Trim airspeed (m/s).
    pub airspeed: f64,
    /// Trim altitude (m).
    pub altitude: f64,
    /// Air density at the trim altitude (kg/m³).
    pub air_density: f64,
    /// Local speed of sound at the trim altitude (m/s).
    pub sound_speed: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
}

impl PhysicalConstants {
    /// Mass derived from weight and gravitational acceleration.
    pub fn mass(&self) -> f64 {
        self.weight / self.gravity
    }

    pub fn mach(&self) -> f64 {
        self.airspeed / self.sound_speed
    }

    /// Dynamic pressure at the trim condition (Pa).
    pub fn dynamic_pressure(&self) -> f64 {
        0.5 * self.air_density * self.airspeed.powi(2)
    }

    /// Lift coefficient required to balance the weight in level flight.
    pub fn trim_lift_coefficient(&self) -> f64 {
        (2.0 * self.weight) / (self.wing_area * self.air_density * self.airspeed.powi(2))
    }

    /// Offset of the CG from the position the aerodynamic data refers to.
    pub fn cg_offset(&self) -> f64 {
        self.cg_fraction - REFERENCE_CG_FRACTION
    }

    /// Mid-size transport at 6300 m and 190 m/s.
    pub fn reference_transport() -> Self {
        Self {
            wing_area: 201.45,
            mac: 5.285,
            weight: 73000.0,
            iz: 660000.0,
            cg_fraction: 0.24,
            airspeed: 190.0,
            altitude: 6300.0,
            air_density: 0.0636,
            sound_speed: 314.34,
            gravity: 9.81,
        }
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::reference_transport()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_transport_derived_values() {
        let constants = PhysicalConstants::reference_transport();
        assert_relative_eq!(constants.mass(), 73000.0 / 9.81);
        assert_relative_eq!(constants.mach(), 190.0 / 314.34);
        assert_relative_eq!(constants.trim_lift_coefficient(), 0.31566, epsilon = 1e-4);
        assert_eq!(constants.cg_offset(), 0.0);
    }

    #[test]
    fn test_trim_lift_balances_weight() {
        let constants = PhysicalConstants::reference_transport();
        let lift = constants.trim_lift_coefficient()
            * constants.dynamic_pressure()
            * constants.wing_area;
        assert_relative_eq!(lift, constants.weight, max_relative = 1e-12);
    }
}
