use serde::Serialize;
use thiserror::Error;

/// Reasons a run stops before the end of its time grid.
///
/// Both are ordinary run outcomes: the history up to the fault is still valid.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum SimulationFault {
    #[error("Numerical instability at t={time:.2}s: state became non-finite")]
    NumericalInstability { time: f64 },

    #[error("Domain error at t={time:.2}s: {quantity} is not a finite number")]
    DomainFault { time: f64, quantity: &'static str },
}

impl SimulationFault {
    /// Grid time of the step at which the fault occurred.
    pub fn time(&self) -> f64 {
        match self {
            SimulationFault::NumericalInstability { time } => *time,
            SimulationFault::DomainFault { time, .. } => *time,
        }
    }
}

/// Passes `value` through when finite, otherwise reports a domain fault for `quantity`.
pub(crate) fn ensure_finite(
    value: f64,
    quantity: &'static str,
    time: f64,
) -> Result<f64, SimulationFault> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimulationFault::DomainFault { time, quantity })
    }
}
