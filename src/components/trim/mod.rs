mod state;

pub use state::TrimState;
