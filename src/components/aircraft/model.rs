use crate::components::aircraft::coefficients::DerivedCoefficients;
use crate::components::aircraft::config::PhysicalConstants;
use crate::components::trim::TrimState;

/// Read-only dynamics context shared by every simulation run.
///
/// Assembled once from derived coefficients; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftModel {
    name: String,
    constants: PhysicalConstants,
    coefficients: DerivedCoefficients,
    trim: TrimState,
}

impl AircraftModel {
    /// Assembles a model from already derived coefficients and trim.
    pub fn from_parts(
        constants: PhysicalConstants,
        coefficients: DerivedCoefficients,
        trim: TrimState,
    ) -> Self {
        Self {
            name: String::from("Custom"),
            constants,
            coefficients,
            trim,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn coefficients(&self) -> &DerivedCoefficients {
        &self.coefficients
    }

    pub fn trim(&self) -> &TrimState {
        &self.trim
    }

    pub fn airspeed(&self) -> f64 {
        self.constants.airspeed
    }

    pub fn gravity(&self) -> f64 {
        self.constants.gravity
    }
}
