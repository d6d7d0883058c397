pub use crate::epidemic::*;
pub use crate::error::{SimError, SimResult};
pub use crate::params::SeirdParams;
pub use crate::sim::{integrate, Scenario, Trajectory};
pub use crate::utils::{moving_average, DatedSeries};

/// Basic representation of time. This crate measures time in days.
pub type Time = f64;

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;
