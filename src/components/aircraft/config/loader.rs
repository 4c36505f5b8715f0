use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::aircraft::config::aero_coef::{
    AeroCoefficients, DragCoefficients, LiftCoefficients, MachCoefficients, PitchCoefficients,
    PitchDampers, PropulsionCoefficients,
};
use crate::components::aircraft::config::constants::PhysicalConstants;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Flat aircraft description as written in YAML files.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,

    /// Geometry and mass
    pub S: f64,
    pub bA: f64,
    pub G: f64,
    pub Iz: f64,
    pub X_t: f64,

    /// Flight condition
    pub V0: f64,
    pub H0: f64,
    pub rho_H: f64,
    pub a_H: f64,
    #[serde(default = "default_gravity")]
    pub g: f64,

    /// Lift coefficients
    pub c_y_alpha: f64,
    pub c_y_deltae: f64,
    pub c_y_0: f64,

    /// Drag coefficients
    pub c_x_alpha: f64,
    pub c_x_trim: f64,

    /// Pitch coefficients
    pub m_z_wz: f64,
    pub m_z_alpha: f64,
    pub m_z_alpha_dot: f64,
    pub m_z_deltae: f64,
    pub m_z_0: f64,

    /// Engine
    pub n_engines: f64,
    pub P_deltat: f64,
    pub P_v: f64,
    pub Y_engine: f64,

    /// Compressibility
    #[serde(default)]
    pub c_x_M: f64,
    #[serde(default)]
    pub c_y_M: f64,
    #[serde(default)]
    pub m_z_M: f64,

    #[serde(default)]
    pub dampers: PitchDampers,
}

fn default_gravity() -> f64 {
    crate::utils::GRAVITY
}

impl RawAircraftConfig {
    /// Checks the quantities the coefficient model divides by.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("S", self.S),
            ("bA", self.bA),
            ("G", self.G),
            ("Iz", self.Iz),
            ("V0", self.V0),
            ("rho_H", self.rho_H),
            ("a_H", self.a_H),
            ("g", self.g),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if self.c_y_alpha == 0.0 {
            return Err(ConfigError::ValidationError(
                "c_y_alpha must be non-zero".to_string(),
            ));
        }
        if self.m_z_deltae == 0.0 {
            return Err(ConfigError::ValidationError(
                "m_z_deltae must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn constants(&self) -> PhysicalConstants {
        PhysicalConstants {
            wing_area: self.S,
            mac: self.bA,
            weight: self.G,
            iz: self.Iz,
            cg_fraction: self.X_t,
            airspeed: self.V0,
            altitude: self.H0,
            air_density: self.rho_H,
            sound_speed: self.a_H,
            gravity: self.g,
        }
    }
}

impl AeroCoefficients {
    pub fn from_raw(raw: &RawAircraftConfig) -> Result<Self, ConfigError> {
        raw.validate()?;
        Ok(AeroCoefficients {
            lift: LiftCoefficients {
                c_y_alpha: raw.c_y_alpha,
                c_y_deltae: raw.c_y_deltae,
                c_y_0: raw.c_y_0,
            },
            drag: DragCoefficients {
                c_x_alpha: raw.c_x_alpha,
                c_x_trim: raw.c_x_trim,
            },
            pitch: PitchCoefficients {
                m_z_wz: raw.m_z_wz,
                m_z_alpha: raw.m_z_alpha,
                m_z_alpha_dot: raw.m_z_alpha_dot,
                m_z_deltae: raw.m_z_deltae,
                m_z_0: raw.m_z_0,
            },
            propulsion: PropulsionCoefficients {
                engine_count: raw.n_engines,
                thrust_per_throttle: raw.P_deltat,
                thrust_per_speed: raw.P_v,
                thrust_offset: raw.Y_engine,
            },
            mach: MachCoefficients {
                c_x_mach: raw.c_x_M,
                c_y_mach: raw.c_y_M,
                m_z_mach: raw.m_z_M,
            },
        })
    }
}
