use crate::components::{
    AeroCoefficients, DerivedCoefficients, PhysicalConstants, TrimState,
};
use crate::systems::solve_trim;
use crate::utils::DEG_PER_RAD;

// --- Pure Calculation Logic ---

/// Derives the longitudinal dynamics coefficients and the trim state.
///
/// # Arguments
/// * `constants` - Geometry, mass and trim flight condition.
/// * `aero` - Aerodynamic and engine data, with the damper selection already applied.
///
/// # Returns
/// A tuple containing: `(coefficients, trim)`
pub fn compute(
    constants: &PhysicalConstants,
    aero: &AeroCoefficients,
) -> (DerivedCoefficients, TrimState) {
    (
        compute_coefficients(constants, aero),
        solve_trim(constants, aero),
    )
}

/// Scales the non-dimensional derivatives into the coefficients of the state equations.
///
/// Moment coefficients are divided by `2 Iz`, force coefficients by `2 m`. The CG offset
/// terms `c17` and `c18` vanish when the CG sits at the reference fraction.
pub fn compute_coefficients(
    constants: &PhysicalConstants,
    aero: &AeroCoefficients,
) -> DerivedCoefficients {
    let rho = constants.air_density;
    let v0 = constants.airspeed;
    let s = constants.wing_area;
    let b_a = constants.mac;
    let iz = constants.iz;
    let g = constants.gravity;
    let m = constants.mass();
    let c_y_trim = constants.trim_lift_coefficient();
    let cg_offset = constants.cg_offset();

    // Common dynamic scaling groups
    let moment_rate = rho * v0 * s * b_a.powi(2) / (2.0 * iz);
    let moment_static = rho * v0.powi(2) * s * b_a / (2.0 * iz);
    let force_rate = rho * v0 * s / (2.0 * m);

    let lift = &aero.lift;
    let drag = &aero.drag;
    let pitch = &aero.pitch;
    let propulsion = &aero.propulsion;

    DerivedCoefficients {
        c1: -pitch.m_z_wz * moment_rate,
        c2: -pitch.m_z_alpha * moment_static,
        c3: -pitch.m_z_deltae * moment_static,
        c4: (lift.c_y_alpha + drag.c_x_trim) * force_rate,
        c5: -pitch.m_z_alpha_dot * moment_rate,
        c6: v0 / DEG_PER_RAD,
        c7: g / DEG_PER_RAD,
        c8: ((drag.c_x_alpha - c_y_trim) * rho * v0.powi(2) * s) / (2.0 * m * DEG_PER_RAD),
        c9: lift.c_y_deltae * force_rate,
        c16: v0 / (DEG_PER_RAD * g),
        c17: -lift.c_y_alpha * cg_offset * moment_static,
        c18: -lift.c_y_deltae * cg_offset * moment_static,
        c19: -propulsion.engine_count * propulsion.thrust_per_throttle / (DEG_PER_RAD * m),
        e1: (rho * v0 / m) * s * drag.c_x_trim,
        e2: (DEG_PER_RAD * rho / m) * s * c_y_trim,
        e3: 0.0,
    }
}
