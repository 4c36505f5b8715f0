use approx::assert_relative_eq;
use longsim::resources::{History, Sample};

/// Assert that every recorded quantity of a sample is a finite number
#[track_caller]
pub fn assert_sample_finite(sample: &Sample) {
    assert!(sample.time.is_finite(), "time is not finite");
    assert!(
        sample.delta_v.is_finite(),
        "ΔV at t={} is not finite",
        sample.time
    );
    assert!(
        sample.alpha_deg.is_finite(),
        "α at t={} is not finite",
        sample.time
    );
    assert!(
        sample.delta_h.is_finite(),
        "ΔH at t={} is not finite",
        sample.time
    );
    assert!(
        sample.load_factor.is_finite(),
        "ny at t={} is not finite",
        sample.time
    );
}

#[track_caller]
pub fn assert_history_finite(history: &History) {
    for sample in history {
        assert_sample_finite(sample);
    }
}

/// Assert that sample `i` carries the grid time `i * dt`
#[track_caller]
pub fn assert_time_grid(history: &History, dt: f64) {
    for (i, sample) in history.iter().enumerate() {
        assert_relative_eq!(sample.time, i as f64 * dt, epsilon = 1e-9);
    }
}
