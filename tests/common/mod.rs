#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_history_finite, assert_sample_finite, assert_time_grid};
pub use fixtures::*;
