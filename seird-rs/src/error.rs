//! Errors shared across the crate.
//!
//! Every computation here is deterministic, so a failed operation fails again
//! with the same inputs and nothing is retryable.

use crate::prelude::Real;
use std::error::Error;
use std::fmt;

/// Crate-wide result alias for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Unified error type covering scenario validation, the distancing table,
/// the smoothing transform and the ODE solver.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Population must be strictly positive and finite.
    NonPositivePopulation { population: Real },

    /// An initial compartment holds a negative or non-finite count.
    InvalidCompartment {
        compartment: &'static str,
        value: Real,
    },

    /// Initial compartments add up to more than the population.
    PopulationOverflow { total: Real, population: Real },

    /// A parameter that must be strictly positive and finite is not.
    NonPositiveParameter { name: &'static str, value: Real },

    /// Death rate must lie in [0, 1].
    DeathRateOutOfRange { value: Real },

    /// Contact rate must be non-negative and finite.
    InvalidContactRate { value: Real },

    /// The distancing table holds no control points.
    EmptyDistancingTable,

    /// Breakpoints and factors differ in length.
    DistancingTableMismatch { times: usize, factors: usize },

    /// A breakpoint is non-finite or does not increase on its predecessor.
    InvalidBreakpoint { index: usize, value: Real },

    /// A distancing factor lies outside [0, 1].
    FactorOutOfRange { index: usize, value: Real },

    /// Moving-average windows must hold at least one sample.
    ZeroWindow,

    /// Window and exclusion leave nothing to average.
    WindowTooLarge {
        window: usize,
        exclude: usize,
        len: usize,
    },

    /// The ODE solver reported a failure.
    SolverFailure { reason: String },

    /// The run left the model's domain: a non-finite state, or the dead
    /// compartment reaching the whole population.
    Diverged { time: Real },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NonPositivePopulation { population } => {
                write!(f, "population must be positive, got {}", population)
            }
            SimError::InvalidCompartment { compartment, value } => write!(
                f,
                "initial {} must be a non-negative count, got {}",
                compartment, value
            ),
            SimError::PopulationOverflow { total, population } => write!(
                f,
                "initial compartments sum to {} with a population of only {}",
                total, population
            ),
            SimError::NonPositiveParameter { name, value } => {
                write!(f, "{} must be positive, got {}", name, value)
            }
            SimError::DeathRateOutOfRange { value } => {
                write!(f, "death rate must lie in [0, 1], got {}", value)
            }
            SimError::InvalidContactRate { value } => {
                write!(f, "contact rate must be non-negative, got {}", value)
            }
            SimError::EmptyDistancingTable => {
                write!(f, "distancing table holds no control points")
            }
            SimError::DistancingTableMismatch { times, factors } => write!(
                f,
                "distancing table has {} breakpoints but {} factors",
                times, factors
            ),
            SimError::InvalidBreakpoint { index, value } => write!(
                f,
                "breakpoint {} ({}) must be finite and increase on its predecessor",
                index, value
            ),
            SimError::FactorOutOfRange { index, value } => write!(
                f,
                "distancing factor {} ({}) must lie in [0, 1]",
                index, value
            ),
            SimError::ZeroWindow => {
                write!(f, "moving-average window must hold at least one sample")
            }
            SimError::WindowTooLarge {
                window,
                exclude,
                len,
            } => write!(
                f,
                "window of {} with {} excluded leaves nothing to average over {} observations",
                window, exclude, len
            ),
            SimError::SolverFailure { reason } => write!(f, "ode solver failed: {}", reason),
            SimError::Diverged { time } => {
                write!(f, "solution left the model domain at t = {}", time)
            }
        }
    }
}

impl Error for SimError {}
