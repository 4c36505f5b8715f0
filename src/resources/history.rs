use serde::Serialize;

use crate::systems::SimulationFault;

/// One recorded point of a run, taken after a successfully completed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Grid time at which the producing step began (s).
    pub time: f64,
    /// Velocity deviation (m/s).
    pub delta_v: f64,
    /// Angle of attack (deg).
    pub alpha_deg: f64,
    /// Altitude deviation (m).
    pub delta_h: f64,
    /// Normal load factor.
    pub load_factor: f64,
    /// Elevator command held during the step (deg).
    pub elevator_deg: f64,
    /// Throttle command held during the step.
    pub throttle: f64,
    /// Speed error seen by the proportional speed term (m/s).
    pub speed_error: f64,
}

/// Time-ordered samples of a single run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    samples: Vec<Sample>,
}

impl History {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.column(|s| s.time)
    }

    pub fn delta_v(&self) -> Vec<f64> {
        self.column(|s| s.delta_v)
    }

    pub fn alpha_deg(&self) -> Vec<f64> {
        self.column(|s| s.alpha_deg)
    }

    pub fn delta_h(&self) -> Vec<f64> {
        self.column(|s| s.delta_h)
    }

    pub fn load_factor(&self) -> Vec<f64> {
        self.column(|s| s.load_factor)
    }

    fn column<F: Fn(&Sample) -> f64>(&self, f: F) -> Vec<f64> {
        self.samples.iter().map(f).collect()
    }

    /// Every `stride`-th sample, starting with the first.
    pub fn decimated(&self, stride: usize) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter().step_by(stride.max(1))
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Result of a run: the history and, when the run stopped early, why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    pub history: History,
    /// Set when the run halted before reaching the end of the grid.
    pub fault: Option<SimulationFault>,
    /// Number of steps on the full grid.
    pub steps_requested: usize,
}

impl RunOutcome {
    pub fn is_complete(&self) -> bool {
        self.fault.is_none() && self.history.len() == self.steps_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: f64) -> Sample {
        Sample {
            time,
            delta_v: time * 2.0,
            alpha_deg: 1.0,
            delta_h: -time,
            load_factor: 1.0,
            elevator_deg: 0.0,
            throttle: 0.0,
            speed_error: 0.0,
        }
    }

    #[test]
    fn test_columns_have_equal_length() {
        let mut history = History::with_capacity(4);
        for i in 0..4 {
            history.push(sample(i as f64 * 0.5));
        }
        assert_eq!(history.times(), vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(history.delta_v(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(history.delta_h().len(), 4);
        assert_eq!(history.alpha_deg().len(), 4);
        assert_eq!(history.load_factor().len(), 4);
    }

    #[test]
    fn test_decimated() {
        let mut history = History::default();
        for i in 0..25 {
            history.push(sample(i as f64));
        }
        let times: Vec<f64> = history.decimated(10).map(|s| s.time).collect();
        assert_eq!(times, vec![0.0, 10.0, 20.0]);
        assert_eq!(history.decimated(0).count(), 25);
    }
}
