mod laws;

pub use laws::{altitude_hold, control_command, speed_hold};
