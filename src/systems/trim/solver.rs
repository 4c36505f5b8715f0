use crate::components::{AeroCoefficients, PhysicalConstants, TrimState};

/// Solves the static trim equations of the longitudinal model.
///
/// Lift balance gives the angle of attack, `α = (Cy_trim - Cy_0) / Cy_α`.
/// Moment balance about the CG then gives the elevator,
/// `δ = -(m_z0 + m_zα α + Cy_trim ΔX) / m_zδ`.
pub fn solve_trim(constants: &PhysicalConstants, aero: &AeroCoefficients) -> TrimState {
    let c_y_trim = constants.trim_lift_coefficient();
    let alpha = (c_y_trim - aero.lift.c_y_0) / aero.lift.c_y_alpha;

    let moment =
        aero.pitch.m_z_0 + aero.pitch.m_z_alpha * alpha + c_y_trim * constants.cg_offset();
    let elevator = -moment / aero.pitch.m_z_deltae;

    TrimState { alpha, elevator }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_trim() {
        let trim = solve_trim(
            &PhysicalConstants::reference_transport(),
            &AeroCoefficients::reference_transport(),
        );
        assert_relative_eq!(trim.alpha, 0.10096, epsilon = 1e-4);
        assert_relative_eq!(trim.elevator, 0.025140, epsilon = 1e-5);
    }

    #[test]
    fn test_trim_zeroes_pitch_moment() {
        let mut constants = PhysicalConstants::reference_transport();
        constants.cg_fraction = 0.28;
        let aero = AeroCoefficients::reference_transport();
        let trim = solve_trim(&constants, &aero);
        let residual = aero.pitch.m_z_0
            + aero.pitch.m_z_alpha * trim.alpha
            + aero.pitch.m_z_deltae * trim.elevator
            + constants.trim_lift_coefficient() * constants.cg_offset();
        assert_relative_eq!(residual, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trim_alpha_balances_lift() {
        let constants = PhysicalConstants::reference_transport();
        let aero = AeroCoefficients::reference_transport();
        let trim = solve_trim(&constants, &aero);
        assert_relative_eq!(
            aero.lift.c_y_0 + aero.lift.c_y_alpha * trim.alpha,
            constants.trim_lift_coefficient(),
            epsilon = 1e-12
        );
    }
}
