use crate::components::{AircraftModel, DerivedCoefficients, StateDerivative, StateVector};
use crate::resources::ScenarioMode;
use crate::utils::{climb_rate, deg_to_rad, rad_to_deg};

/// Evaluates the longitudinal equations of motion.
///
/// # Arguments
/// * `model` - Read-only coefficients and trim condition.
/// * `state` - State to evaluate at. Never modified, so RK4 stage states can be passed directly.
/// * `elevator` - Elevator command (rad).
/// * `throttle` - Throttle command.
/// * `mode` - Scenario mode; `SpecialRv` freezes the speed.
///
/// # Returns
/// A tuple containing: `(derivative, alpha_rate)`. The angle of attack rate is returned
/// separately because the load factor needs it.
pub fn state_derivative(
    model: &AircraftModel,
    state: &StateVector,
    elevator: f64,
    throttle: f64,
    mode: ScenarioMode,
) -> (StateDerivative, f64) {
    let c = model.coefficients();

    // Flight path angle rate
    let gamma_rate = c.c4 * state.alpha + deg_to_rad(c.e2 * state.delta_v) + c.c9 * elevator;
    let alpha_rate = state.omega_z - gamma_rate;

    let delta_v_rate = match mode {
        ScenarioMode::SpecialRv => 0.0,
        ScenarioMode::FreeFlight | ScenarioMode::Controlled => speed_rate(c, state, throttle),
    };

    let omega_z_rate = -c.c1 * state.omega_z
        - (c.c2 + c.c17) * state.alpha
        - c.c5 * alpha_rate
        - deg_to_rad(c.e3 * state.delta_v)
        - (c.c3 + c.c18) * elevator;

    let derivative = StateDerivative {
        delta_v: delta_v_rate,
        alpha: alpha_rate,
        omega_z: omega_z_rate,
        theta: state.omega_z,
        delta_h: climb_rate(model.airspeed() + state.delta_v, state.theta, state.alpha),
    };

    (derivative, alpha_rate)
}

/// Rate of change of the velocity deviation from drag, gravity and thrust.
pub fn speed_rate(c: &DerivedCoefficients, state: &StateVector, throttle: f64) -> f64 {
    -c.e1 * state.delta_v
        - c.c8 * rad_to_deg(state.alpha)
        - c.c7 * rad_to_deg(state.theta)
        - c.c19 * throttle
}

/// Normal load factor, `1 + (V0 / g)(ω_z - α̇)`.
pub fn load_factor(model: &AircraftModel, state: &StateVector, alpha_rate: f64) -> f64 {
    1.0 + (model.airspeed() / model.gravity()) * (state.omega_z - alpha_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::AircraftConfig;
    use crate::systems::build_model;
    use approx::assert_relative_eq;

    #[test]
    fn test_trim_is_equilibrium() {
        let model = build_model(&AircraftConfig::default());
        let trim = StateVector::default();
        let (derivative, alpha_rate) =
            state_derivative(&model, &trim, 0.0, 0.0, ScenarioMode::FreeFlight);
        assert_eq!(derivative, StateDerivative::default());
        assert_eq!(alpha_rate, 0.0);
        assert_eq!(load_factor(&model, &trim, alpha_rate), 1.0);
    }

    #[test]
    fn test_alpha_disturbance() {
        let model = build_model(&AircraftConfig::default());
        let c = *model.coefficients();
        let state = StateVector::alpha_perturbation(1.0);
        let (derivative, alpha_rate) =
            state_derivative(&model, &state, 0.0, 0.0, ScenarioMode::FreeFlight);

        assert_relative_eq!(alpha_rate, -c.c4 * state.alpha);
        assert_eq!(derivative.alpha, alpha_rate);
        assert_relative_eq!(derivative.delta_v, -c.c8, epsilon = 1e-12);
        assert_relative_eq!(
            derivative.omega_z,
            -c.c2 * state.alpha - c.c5 * alpha_rate,
            epsilon = 1e-12
        );
        assert_eq!(derivative.theta, 0.0);
        // Nose below the flight path means descending
        assert!(derivative.delta_h < 0.0);
    }

    #[test]
    fn test_special_mode_freezes_speed() {
        let model = build_model(&AircraftConfig::default());
        let state = StateVector::new(3.0, 0.05, 0.01, 0.1, 0.0);
        let (free, _) = state_derivative(&model, &state, -0.03, 0.0, ScenarioMode::FreeFlight);
        let (special, _) = state_derivative(&model, &state, -0.03, 0.0, ScenarioMode::SpecialRv);
        assert!(free.delta_v != 0.0);
        assert_eq!(special.delta_v, 0.0);
        assert_eq!(special.omega_z, free.omega_z);
        assert_eq!(special.delta_h, free.delta_h);
    }

    #[test]
    fn test_exact_climb_rate() {
        let model = build_model(&AircraftConfig::default());
        let state = StateVector::new(10.0, 0.0, 0.0, 0.5, 0.0);
        let (derivative, _) = state_derivative(&model, &state, 0.0, 0.0, ScenarioMode::FreeFlight);
        assert_relative_eq!(derivative.delta_h, 200.0 * 0.5_f64.sin());
    }

    #[test]
    fn test_throttle_accelerates() {
        let model = build_model(&AircraftConfig::default());
        let c = model.coefficients();
        assert!(speed_rate(c, &StateVector::default(), 1.0) > 0.0);
    }

    #[test]
    fn test_trailing_edge_up_elevator_pitches_up() {
        let model = build_model(&AircraftConfig::default());
        let (derivative, alpha_rate) = state_derivative(
            &model,
            &StateVector::default(),
            deg_to_rad(-2.0),
            0.0,
            ScenarioMode::FreeFlight,
        );
        assert!(derivative.omega_z > 0.0);
        assert!(alpha_rate > 0.0);
    }
}
