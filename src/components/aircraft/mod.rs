pub mod coefficients;
pub mod config;
pub mod model;
pub mod state;

pub use coefficients::{CoefficientTag, DerivedCoefficients};
pub use config::{
    AeroCoefficients, AircraftConfig, AircraftSource, AircraftType, ConfigError,
    PhysicalConstants, PitchDampers, RawAircraftConfig,
};
pub use model::AircraftModel;
pub use state::{StateDerivative, StateVector};
