use rayon::prelude::*;
use tracing::{info, warn};

use crate::components::{AircraftModel, ControllerState, StateVector};
use crate::resources::{History, RunOutcome, RunParameters, Sample};
use crate::systems::{
    control_command, ensure_finite, integrate, load_factor, state_derivative, SimulationFault,
};
use crate::utils::rad_to_deg;

/// Upper bound on the samples reserved up front; longer runs grow the history as they go.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 20;

/// Steps a single run over its time grid.
///
/// The model and parameters are borrowed read-only; the only mutable state is the
/// aircraft state vector, the controller state and the step counter.
#[derive(Debug, Clone)]
pub struct Simulator<'a> {
    model: &'a AircraftModel,
    params: &'a RunParameters,
    state: StateVector,
    controller: ControllerState,
    step: usize,
}

impl<'a> Simulator<'a> {
    pub fn new(model: &'a AircraftModel, params: &'a RunParameters) -> Self {
        Self {
            model,
            params,
            state: params.y0,
            controller: ControllerState::new(),
            step: 0,
        }
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    pub fn controller(&self) -> &ControllerState {
        &self.controller
    }

    /// Grid time at which the next step begins.
    pub fn time(&self) -> f64 {
        self.step as f64 * self.params.dt
    }

    /// Whether the whole grid has been stepped.
    pub fn is_finished(&self) -> bool {
        self.step >= self.params.step_count()
    }

    /// Advances one step and returns the sample it produced.
    ///
    /// On a fault the simulator is left at the last good state, so repeated calls keep
    /// reporting the same fault.
    pub fn step(&mut self) -> Result<Sample, SimulationFault> {
        let t = self.time();
        let dt = self.params.dt;
        let mode = self.params.mode;
        let model = self.model;

        let mut controller = self.controller;
        let command = control_command(model, self.params, &mut controller, &self.state, t);
        let elevator = ensure_finite(command.elevator, "elevator", t)?;
        let throttle = ensure_finite(command.throttle, "throttle", t)?;

        let next = integrate(self.params.method, &self.state, dt, |y| {
            state_derivative(model, y, elevator, throttle, mode).0
        });
        if !next.is_finite() {
            return Err(SimulationFault::NumericalInstability { time: t });
        }

        let (_, alpha_rate) = state_derivative(model, &next, elevator, throttle, mode);
        let ny = ensure_finite(load_factor(model, &next, alpha_rate), "load factor", t)?;

        self.state = next;
        self.controller = controller;
        self.step += 1;

        Ok(Sample {
            time: t,
            delta_v: next.delta_v,
            alpha_deg: rad_to_deg(next.alpha),
            delta_h: next.delta_h,
            load_factor: ny,
            elevator_deg: rad_to_deg(elevator),
            throttle,
            speed_error: command.speed_error,
        })
    }
}

/// Runs one scenario to the end of its grid or until the first fault.
///
/// Faults are not errors here: the returned outcome carries every sample produced before
/// the faulting step, and the fault itself.
pub fn run_simulation(model: &AircraftModel, params: &RunParameters) -> RunOutcome {
    let steps_requested = params.step_count();
    let mut history = History::with_capacity(steps_requested.min(MAX_PREALLOCATED_SAMPLES));
    let mut simulator = Simulator::new(model, params);
    let mut fault = None;

    info!(
        "Starting {:?} run with {:?}: dt={}, t_end={}, {} steps",
        params.mode, params.method, params.dt, params.t_end, steps_requested
    );

    while !simulator.is_finished() {
        match simulator.step() {
            Ok(sample) => history.push(sample),
            Err(e) => {
                warn!("Run truncated after {} samples: {}", history.len(), e);
                fault = Some(e);
                break;
            }
        }
    }

    if fault.is_none() {
        info!(
            "Completed {:?} run: {} samples, final ΔH={:.3} m",
            params.mode,
            history.len(),
            simulator.state().delta_h
        );
    }

    RunOutcome {
        history,
        fault,
        steps_requested,
    }
}

/// Runs independent scenarios in parallel. Outcomes come back in input order.
pub fn run_sweep(model: &AircraftModel, runs: &[RunParameters]) -> Vec<RunOutcome> {
    info!("Running sweep of {} scenarios", runs.len());
    runs.par_iter()
        .map(|params| run_simulation(model, params))
        .collect()
}
