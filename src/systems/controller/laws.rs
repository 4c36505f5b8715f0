use crate::components::{AircraftModel, ControlCommand, ControllerState, StateVector};
use crate::resources::{ControllerGains, RunParameters, ScenarioMode};
use crate::systems::speed_rate;
use crate::utils::{climb_rate, deg_to_rad};

/// Computes the commands held over the step starting at time `t`.
///
/// In controlled flight this also advances the controller state by one forward Euler step
/// of `params.dt`, independently of the method used for the aircraft state.
///
/// # Arguments
/// * `model` - Read-only coefficients and trim condition.
/// * `params` - Run parameters; selects the control law and supplies the gains.
/// * `controller` - Speed loop state, updated in place.
/// * `state` - Aircraft state at the start of the step.
/// * `t` - Grid time at the start of the step (s).
pub fn control_command(
    model: &AircraftModel,
    params: &RunParameters,
    controller: &mut ControllerState,
    state: &StateVector,
    t: f64,
) -> ControlCommand {
    match params.mode {
        ScenarioMode::FreeFlight => ControlCommand::default(),
        ScenarioMode::SpecialRv => ControlCommand {
            elevator: deg_to_rad(params.elevator_step_deg),
            ..Default::default()
        },
        ScenarioMode::Controlled => {
            let elevator = altitude_hold(&params.gains, model.airspeed(), state);
            let (throttle, speed_error) = speed_hold(model, params, controller, state, t);
            ControlCommand {
                elevator,
                throttle,
                speed_error,
            }
        }
    }
}

/// Proportional feedback on altitude deviation and climb rate, returns elevator (rad).
///
/// The gains are in degrees of elevator per metre and per metre per second.
pub fn altitude_hold(gains: &ControllerGains, airspeed: f64, state: &StateVector) -> f64 {
    let climb = climb_rate(airspeed + state.delta_v, state.theta, state.alpha);
    deg_to_rad(gains.kh * state.delta_h + gains.kh_dot * climb)
}

/// PD speed hold driving an integrated throttle.
///
/// Returns `(throttle, speed_error)` where `speed_error` is the error seen by the
/// proportional term. Once the sensor has failed that error is zero, while the derivative
/// filter keeps following the true speed dynamics.
pub fn speed_hold(
    model: &AircraftModel,
    params: &RunParameters,
    controller: &mut ControllerState,
    state: &StateVector,
    t: f64,
) -> (f64, f64) {
    let gains = &params.gains;
    let dt = params.dt;

    let speed_error = if params.sensor_failed(t) {
        0.0
    } else {
        state.delta_v - gains.speed_target
    };

    // The set point is constant, so the error rate is the speed rate
    let error_rate = speed_rate(model.coefficients(), state, controller.throttle);
    let filter_rate = (gains.kv_dot * error_rate - controller.filter) / gains.tv_dot;
    controller.filter += filter_rate * dt;

    let demand = -(params.effective_kv() * speed_error + controller.filter);
    let throttle_rate = demand.clamp(-gains.fv_limit, gains.fv_limit) / gains.t_dv;
    controller.throttle += throttle_rate * dt;

    (controller.throttle, speed_error)
}
