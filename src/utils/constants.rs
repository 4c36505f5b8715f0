pub const GRAVITY: f64 = 9.81; // m/s^2

/// Degrees per radian as used by the coefficient scaling of the longitudinal model.
pub const DEG_PER_RAD: f64 = 57.3;

/// CG position (fraction of MAC) the aerodynamic data was measured at.
pub const REFERENCE_CG_FRACTION: f64 = 0.24;

/// Sampling interval of the history report table (s).
pub const REPORT_INTERVAL: f64 = 0.1;
