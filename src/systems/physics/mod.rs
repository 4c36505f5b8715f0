mod derivatives;
mod error;
mod integrator;

pub use derivatives::{load_factor, speed_rate, state_derivative};
pub(crate) use error::ensure_finite;
pub use error::SimulationFault;
pub use integrator::{euler_step, integrate, rk4_step};
