use super::constants as cte;
use crate::prelude::Real;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// Stores the rate constants of one simulation run.
///
/// The record is immutable for the duration of a run; a new scenario builds a
/// new record. `mu` is not independent: it derives from the death rate and
/// the recovery rate, see [`SeirdParams::from_durations`].
#[derive(CopyGetters, Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[serde(default)]
#[getset(get_copy = "pub")]
pub struct SeirdParams {
    /// Contact/transmission rate.
    beta: Real,
    /// Inverse of the average incubation period.
    alpha: Real,
    /// Mean recovery rate, inverse of the time spent sick.
    gamma: Real,
    /// Mortality rate of infected individuals.
    mu: Real,
    /// Size of the closed population, living and dead.
    population: Real,
}

impl SeirdParams {
    pub fn new(beta: Real, alpha: Real, gamma: Real, mu: Real, population: Real) -> Self {
        SeirdParams {
            beta,
            alpha,
            gamma,
            mu,
            population,
        }
    }

    /// Build the rates from the durations quoted in epidemiological reports:
    /// the incubation period in days, the time sick in days and the fraction
    /// of the sick that die.
    pub fn from_durations(
        beta: Real,
        incubation_time: Real,
        time_sick: Real,
        death_rate: Real,
        population: Real,
    ) -> Self {
        let alpha = 1.0 / incubation_time;
        let gamma = 1.0 / time_sick;
        let mu = death_rate * gamma;
        SeirdParams::new(beta, alpha, gamma, mu, population)
    }

    /// Basic reproduction number with no distancing in effect.
    pub fn r0(&self) -> Real {
        self.alpha / (self.alpha + self.mu) * self.beta / (self.mu + self.gamma)
    }
}

impl Default for SeirdParams {
    fn default() -> Self {
        SeirdParams::from_durations(
            cte::BETA,
            cte::INCUBATION_TIME,
            cte::TIME_SICK,
            cte::DEATH_RATE,
            cte::POPULATION,
        )
    }
}
