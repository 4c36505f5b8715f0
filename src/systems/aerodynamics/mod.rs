mod coefficients;
mod model;

pub use coefficients::{compute, compute_coefficients};
pub use model::{build_model, model_from_constants};
