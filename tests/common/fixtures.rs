use longsim::{
    components::{AircraftConfig, AircraftModel, DerivedCoefficients, StateVector},
    resources::{IntegrationMethod, RunParameters, ScenarioMode},
    systems::build_model,
};

/// Reference transport with both rate dampers engaged.
pub fn reference_model() -> AircraftModel {
    build_model(&AircraftConfig::reference_transport())
}

/// Reference transport with the pitch rate damping term reversed in sign and amplified,
/// so any disturbance grows without bound.
pub fn unstable_model() -> AircraftModel {
    let model = reference_model();
    let coefficients = DerivedCoefficients {
        c1: -20.0,
        ..*model.coefficients()
    };
    AircraftModel::from_parts(*model.constants(), coefficients, *model.trim())
}

pub fn free_flight(method: IntegrationMethod, dt: f64, t_end: f64) -> RunParameters {
    RunParameters::default()
        .with_method(method)
        .with_dt(dt)
        .with_t_end(t_end)
}

pub fn controlled_from_trim() -> RunParameters {
    RunParameters::default()
        .with_mode(ScenarioMode::Controlled)
        .with_initial_state(StateVector::default())
}

/// Minimal aircraft file matching the reference transport data.
pub const REFERENCE_AIRCRAFT_YAML: &str = r#"
name: FileTransport
S: 201.45
bA: 5.285
G: 73000.0
Iz: 660000.0
X_t: 0.24
V0: 190.0
H0: 6300.0
rho_H: 0.0636
a_H: 314.34
c_y_alpha: 5.90
c_y_deltae: 0.2865
c_y_0: -0.28
c_x_alpha: 0.336
c_x_trim: 0.0275
m_z_wz: -13.4
m_z_alpha: -1.95
m_z_alpha_dot: -4.0
m_z_deltae: -0.92
m_z_0: 0.22
n_engines: 3
P_deltat: 4011.0
P_v: -5.4
Y_engine: 0.5
"#;
