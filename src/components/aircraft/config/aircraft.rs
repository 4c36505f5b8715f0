use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::components::aircraft::config::{
    AeroCoefficients, ConfigError, PhysicalConstants, PitchDampers, RawAircraftConfig,
};

/// The full aircraft configuration: physical constants, aerodynamic data and damper setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Name of the aircraft, defaults to type name.
    pub name: String,
    /// Type of aircraft, a programmed preset or a custom description.
    pub ac_type: AircraftType,
    /// Geometry, mass and trim flight condition.
    pub constants: PhysicalConstants,
    /// Aerodynamic coefficients as measured, before damper selection.
    pub aero_coef: AeroCoefficients,
    /// Active pitch dampers.
    pub dampers: PitchDampers,
}

impl Default for AircraftConfig {
    /// The reference transport is the only programmed data set.
    fn default() -> Self {
        Self::from_programmed(AircraftType::ReferenceTransport)
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` enum specifying if the configuration is hardcoded
    ///              (`Programmed`) or loaded from a file (`File`).
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::ReferenceTransport => Self {
                name: "ReferenceTransport".to_string(),
                ac_type: AircraftType::ReferenceTransport,
                constants: PhysicalConstants::reference_transport(),
                aero_coef: AeroCoefficients::reference_transport(),
                dampers: PitchDampers::default(),
            },
            AircraftType::Custom(name) => Self {
                name: name.clone(),
                ac_type: AircraftType::Custom(name),
                constants: PhysicalConstants::reference_transport(),
                aero_coef: AeroCoefficients::reference_transport(),
                dampers: PitchDampers::default(),
            },
        }
    }

    /// Creates an aircraft configuration by reading from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading aircraft config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawAircraftConfig = serde_yaml::from_str(contents)?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawAircraftConfig) -> Result<Self, ConfigError> {
        let aero_coef = AeroCoefficients::from_raw(&raw)?;
        Ok(Self {
            ac_type: AircraftType::Custom(raw.name.clone()),
            constants: raw.constants(),
            dampers: raw.dampers,
            name: raw.name,
            aero_coef,
        })
    }

    pub fn reference_transport() -> Self {
        Self::from_programmed(AircraftType::ReferenceTransport)
    }

    pub fn with_dampers(mut self, dampers: PitchDampers) -> Self {
        self.dampers = dampers;
        self
    }

    pub fn with_cg_fraction(mut self, cg_fraction: f64) -> Self {
        self.constants.cg_fraction = cg_fraction;
        self
    }

    /// Aerodynamic data with the damper selection applied.
    pub fn effective_aero(&self) -> AeroCoefficients {
        self.aero_coef.with_dampers(self.dampers)
    }
}

/// Source for aircraft configuration.
/// Can either be a hardcoded configuration (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

/// Enumeration of available aircraft types.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    ReferenceTransport,
    Custom(String),
}
