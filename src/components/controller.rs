use serde::{Deserialize, Serialize};

/// Internal state of the speed-hold loop, scoped to one controlled run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerState {
    /// Output of the first-order derivative filter on the speed error.
    pub filter: f64,
    /// Integrated throttle command.
    pub throttle: f64,
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finite(&self) -> bool {
        self.filter.is_finite() && self.throttle.is_finite()
    }
}

/// Commands applied to the aircraft for the duration of one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlCommand {
    /// Elevator deflection (rad).
    pub elevator: f64,
    /// Throttle command.
    pub throttle: f64,
    /// Speed error fed to the proportional term of the speed loop (m/s).
    pub speed_error: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_state_detected() {
        let state = ControllerState {
            filter: 1.5,
            throttle: f64::NAN,
        };
        assert!(!state.is_finite());
        assert!(ControllerState::new().is_finite());
    }

    #[test]
    fn test_neutral_command() {
        let command = ControlCommand::default();
        assert_eq!(command.elevator, 0.0);
        assert_eq!(command.throttle, 0.0);
        assert_eq!(command.speed_error, 0.0);
    }
}
