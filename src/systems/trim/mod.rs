mod solver;

pub use solver::solve_trim;
