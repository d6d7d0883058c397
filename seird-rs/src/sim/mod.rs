//! Scenario configuration, the integration driver and the dense trajectory.
mod scenario;
mod solver;
mod trajectory;

pub use scenario::*;
pub use solver::*;
pub use trajectory::*;
