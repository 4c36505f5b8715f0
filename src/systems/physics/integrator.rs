use crate::components::{StateDerivative, StateVector};
use crate::resources::IntegrationMethod;

/// Advances `state` by one fixed step with the selected method.
///
/// # Arguments
/// - `method`: Integration scheme.
/// - `state`: State at the start of the step.
/// - `dt`: The timestep duration (in seconds).
/// - `f`: Derivative function. Commands must already be baked in: they stay
///   constant across all evaluations within the step.
pub fn integrate<F>(method: IntegrationMethod, state: &StateVector, dt: f64, f: F) -> StateVector
where
    F: Fn(&StateVector) -> StateDerivative,
{
    match method {
        IntegrationMethod::Euler => euler_step(state, dt, f),
        IntegrationMethod::Rk4 => rk4_step(state, dt, f),
    }
}

/// Forward Euler, `y + dt f(y)`.
pub fn euler_step<F>(state: &StateVector, dt: f64, f: F) -> StateVector
where
    F: Fn(&StateVector) -> StateDerivative,
{
    state.offset(&f(state), dt)
}

/// Classic four stage Runge-Kutta.
pub fn rk4_step<F>(state: &StateVector, dt: f64, f: F) -> StateVector
where
    F: Fn(&StateVector) -> StateDerivative,
{
    // k1 calculation
    let k1 = f(state);

    // k2 calculation (using k1)
    let k2 = f(&state.offset(&k1, dt / 2.0));

    // k3 calculation (using k2)
    let k3 = f(&state.offset(&k2, dt / 2.0));

    // k4 calculation (using k3)
    let k4 = f(&state.offset(&k3, dt));

    // Update state variables using weighted average of derivatives
    let slope = k1 + 2.0 * k2 + 2.0 * k3 + k4;
    state.offset(&slope, dt / 6.0)
}
