pub mod aircraft;
pub mod controller;
pub mod trim;

pub use aircraft::{
    AeroCoefficients, AircraftConfig, AircraftModel, AircraftSource, AircraftType,
    CoefficientTag, ConfigError, DerivedCoefficients, PhysicalConstants, PitchDampers,
    RawAircraftConfig, StateDerivative, StateVector,
};
pub use controller::{ControlCommand, ControllerState};
pub use trim::TrimState;
