//! Plain-text rendering of coefficients and run histories.

mod tables;

pub use tables::{coefficient_table, history_table, report_stride, summary_line};
