pub mod aerodynamics;
pub mod controller;
pub mod physics;
mod simulation;
pub mod trim;

pub use aerodynamics::{build_model, compute, compute_coefficients, model_from_constants};
pub use controller::{altitude_hold, control_command, speed_hold};
pub use physics::{
    euler_step, integrate, load_factor, rk4_step, speed_rate, state_derivative, SimulationFault,
};
pub use simulation::{run_simulation, run_sweep, Simulator};
pub use trim::solve_trim;

pub(crate) use physics::ensure_finite;
