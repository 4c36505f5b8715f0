use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Rate of change of altitude for a given airspeed, pitch angle and angle of attack.
///
/// Uses the exact kinematic relation `V sin(θ - α)` rather than the small angle form.
#[inline]
pub fn climb_rate(airspeed: f64, theta: f64, alpha: f64) -> f64 {
    airspeed * (theta - alpha).sin()
}

/// Number of samples on the grid `0, dt, 2dt, ...` strictly below `t_end`.
pub fn grid_len(t_end: f64, dt: f64) -> usize {
    if !dt.is_finite() || !t_end.is_finite() || dt <= 0.0 || t_end <= 0.0 {
        return 0;
    }
    // Guard against representation error, e.g. 15.0 / 0.01 = 1500.0000000000002
    ((t_end / dt) - 1e-9).ceil().max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_conversion() {
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(rad_to_deg(deg_to_rad(-2.0)), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_climb_rate_level_flight() {
        assert_eq!(climb_rate(190.0, 0.0, 0.0), 0.0);
        assert!(climb_rate(190.0, 0.1, 0.0) > 0.0);
    }

    #[test]
    fn test_grid_len() {
        assert_eq!(grid_len(100.0, 0.01), 10_000);
        assert_eq!(grid_len(15.0, 0.01), 1_500);
        assert_eq!(grid_len(100.0, 0.5), 200);
        assert_eq!(grid_len(1.05, 0.1), 11);
        assert_eq!(grid_len(0.0, 0.1), 0);
        assert_eq!(grid_len(1.0, -0.1), 0);
    }
}
