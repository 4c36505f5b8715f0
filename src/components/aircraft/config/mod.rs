mod aero_coef;
mod aircraft;
mod constants;
mod loader;

pub use aero_coef::{
    AeroCoefficients, DragCoefficients, LiftCoefficients, MachCoefficients, PitchCoefficients,
    PitchDampers, PropulsionCoefficients,
};
pub use aircraft::{AircraftConfig, AircraftSource, AircraftType};
pub use constants::PhysicalConstants;
pub use loader::{ConfigError, RawAircraftConfig};
