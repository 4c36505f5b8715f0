use serde::{Deserialize, Serialize};

/// Aerodynamic and engine data for the longitudinal model.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub lift: LiftCoefficients,
    pub drag: DragCoefficients,
    pub pitch: PitchCoefficients,
    pub propulsion: PropulsionCoefficients,
    pub mach: MachCoefficients,
}

/// Lift coefficients for the longitudinal model
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftCoefficients {
    /// Lift-curve slope with respect to angle of attack (per rad).
    pub c_y_alpha: f64,
    /// Lift coefficient due to elevator deflection (per rad).
    pub c_y_deltae: f64,
    /// Base lift coefficient (zero angle of attack).
    pub c_y_0: f64,
}

/// Drag coefficients for the longitudinal model
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragCoefficients {
    /// Drag coefficient with respect to angle of attack (α).
    pub c_x_alpha: f64,
    /// Drag coefficient at the trim condition.
    pub c_x_trim: f64,
}

/// Pitching moment coefficients for the longitudinal model
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchCoefficients {
    /// Pitch damping, moment due to pitch rate (ω_z).
    pub m_z_wz: f64,
    /// Static stability, moment due to angle of attack (α).
    pub m_z_alpha: f64,
    /// Moment due to angle of attack rate (α̇).
    pub m_z_alpha_dot: f64,
    /// Elevator effectiveness, moment due to elevator deflection.
    pub m_z_deltae: f64,
    /// Base pitching moment coefficient (zero angle of attack).
    pub m_z_0: f64,
}

/// Engine thrust parameters
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropulsionCoefficients {
    /// Number of engines.
    pub engine_count: f64,
    /// Thrust change per unit throttle command, per engine.
    pub thrust_per_throttle: f64,
    /// Thrust change per unit airspeed change, per engine.
    pub thrust_per_speed: f64,
    /// Vertical offset of the thrust line from the CG (m).
    pub thrust_offset: f64,
}

/// Compressibility derivatives. All zero for the reference transport.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachCoefficients {
    pub c_x_mach: f64,
    pub c_y_mach: f64,
    pub m_z_mach: f64,
}

/// Selects which pitch rate dampers are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchDampers {
    /// Damping from pitch rate, feeds c1.
    pub pitch_rate: bool,
    /// Damping from angle of attack rate, feeds c5.
    pub alpha_rate: bool,
}

impl Default for PitchDampers {
    fn default() -> Self {
        Self {
            pitch_rate: true,
            alpha_rate: true,
        }
    }
}

impl PitchDampers {
    pub fn disabled() -> Self {
        Self {
            pitch_rate: false,
            alpha_rate: false,
        }
    }
}

impl AeroCoefficients {
    pub fn new(
        lift: LiftCoefficients,
        drag: DragCoefficients,
        pitch: PitchCoefficients,
        propulsion: PropulsionCoefficients,
        mach: MachCoefficients,
    ) -> Self {
        AeroCoefficients {
            lift,
            drag,
            pitch,
            propulsion,
            mach,
        }
    }

    pub fn reference_transport() -> AeroCoefficients {
        AeroCoefficients::new(
            LiftCoefficients::reference_transport(),
            DragCoefficients::reference_transport(),
            PitchCoefficients::reference_transport(),
            PropulsionCoefficients::reference_transport(),
            MachCoefficients::default(),
        )
    }

    /// Returns a copy with the inactive dampers zeroed.
    pub fn with_dampers(mut self, dampers: PitchDampers) -> Self {
        if !dampers.pitch_rate {
            self.pitch.m_z_wz = 0.0;
        }
        if !dampers.alpha_rate {
            self.pitch.m_z_alpha_dot = 0.0;
        }
        self
    }
}

impl LiftCoefficients {
    pub fn reference_transport() -> Self {
        Self {
            c_y_alpha: 5.90,
            c_y_deltae: 0.2865,
            c_y_0: -0.28,
        }
    }
}

impl DragCoefficients {
    pub fn reference_transport() -> Self {
        Self {
            c_x_alpha: 0.336,
            c_x_trim: 0.0275,
        }
    }
}

impl PitchCoefficients {
    pub fn reference_transport() -> Self {
        Self {
            m_z_wz: -13.4,
            m_z_alpha: -1.95,
            m_z_alpha_dot: -4.0,
            m_z_deltae: -0.92,
            m_z_0: 0.22,
        }
    }
}

impl PropulsionCoefficients {
    pub fn reference_transport() -> Self {
        Self {
            engine_count: 3.0,
            thrust_per_throttle: 4011.0,
            thrust_per_speed: -5.4,
            thrust_offset: 0.5,
        }
    }
}
