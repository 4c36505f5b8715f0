use crate::components::AircraftModel;
use crate::resources::{History, RunOutcome};
use crate::utils::REPORT_INTERVAL;

/// Number of samples between printed history rows for step size `dt`.
///
/// Truncates, so a step that does not divide the interval prints slightly more often.
pub fn report_stride(dt: f64) -> usize {
    let stride = (REPORT_INTERVAL / dt).trunc();
    if stride.is_finite() && stride >= 1.0 {
        stride as usize
    } else {
        1
    }
}

/// Tabulates the populated dynamics coefficients and the trim elevator deflection.
pub fn coefficient_table(model: &AircraftModel) -> String {
    let mut out = format!("Coefficients for {}\n", model.name());
    out.push_str(&format!("{:<6} {:>14}\n", "tag", "value"));
    for (tag, value) in model.coefficients().iter() {
        let label = tag.to_string();
        out.push_str(&format!("{:<6} {:>14.6}\n", label, value));
    }
    out.push_str(&format!(
        "trim elevator: {:.4} deg\n",
        model.trim().elevator_deg()
    ));
    out
}

/// Tabulates a history at the reporting interval.
pub fn history_table(history: &History, dt: f64) -> String {
    let mut out = format!(
        "{:>8} {:>12} {:>12} {:>10} {:>10}\n",
        "t [s]", "dV [m/s]", "dH [m]", "a [deg]", "ny"
    );
    for sample in history.decimated(report_stride(dt)) {
        out.push_str(&format!(
            "{:>8.1} {:>12.4} {:>12.4} {:>10.4} {:>10.4}\n",
            sample.time, sample.delta_v, sample.delta_h, sample.alpha_deg, sample.load_factor
        ));
    }
    out
}

/// One-line summary of a run.
pub fn summary_line(outcome: &RunOutcome) -> String {
    let final_time = outcome.history.last().map_or(0.0, |s| s.time);
    let mut line = format!(
        "{}/{} samples, final t={:.2}s",
        outcome.history.len(),
        outcome.steps_requested,
        final_time
    );
    if let Some(fault) = &outcome.fault {
        line.push_str(&format!(", stopped: {}", fault));
    }
    line
}
