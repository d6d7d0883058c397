use crate::epidemic::{Distancing, State};
use crate::error::{SimError, SimResult};
use crate::params::{self, SeirdParams};
use crate::prelude::Real;
use getset::{CopyGetters, Getters, Setters};
use serde::{Deserialize, Serialize};

/// Full configuration surface of one simulation run.
///
/// Defaults reproduce the Sweden 2020 outbreak scenario. The record loads
/// from TOML; [`Scenario::validate`] runs before any integration touches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CopyGetters, Getters, Setters)]
#[serde(default)]
#[getset(set = "pub")]
pub struct Scenario {
    /// Size of the closed population.
    #[getset(get_copy = "pub")]
    population: Real,

    #[getset(get_copy = "pub")]
    initial_exposed: Real,

    #[getset(get_copy = "pub")]
    initial_infected: Real,

    #[getset(get_copy = "pub")]
    initial_recovered: Real,

    #[getset(get_copy = "pub")]
    initial_dead: Real,

    /// Days before an exposed individual turns infectious.
    #[getset(get_copy = "pub")]
    incubation_time: Real,

    /// Days an individual stays sick.
    #[getset(get_copy = "pub")]
    time_sick: Real,

    /// Fraction of the sick that die.
    #[getset(get_copy = "pub")]
    death_rate: Real,

    /// Contact rate.
    #[getset(get_copy = "pub")]
    beta: Real,

    /// Integration horizon in days.
    #[getset(get_copy = "pub")]
    days: Real,

    /// Step of the evaluation grid.
    #[getset(get_copy = "pub")]
    dt: Real,

    #[getset(get = "pub")]
    distancing_times: Vec<Real>,

    #[getset(get = "pub")]
    distancing_factors: Vec<Real>,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            population: params::POPULATION,
            initial_exposed: params::INITIAL_EXPOSED,
            initial_infected: params::INITIAL_INFECTED,
            initial_recovered: params::INITIAL_RECOVERED,
            initial_dead: params::INITIAL_DEAD,
            incubation_time: params::INCUBATION_TIME,
            time_sick: params::TIME_SICK,
            death_rate: params::DEATH_RATE,
            beta: params::BETA,
            days: params::DAYS,
            dt: params::DT,
            distancing_times: params::DISTANCING_TIMES.to_vec(),
            distancing_factors: params::DISTANCING_FACTORS.to_vec(),
        }
    }
}

impl Scenario {
    /// Susceptible individuals left once the seeded compartments are set.
    pub fn initial_susceptible(&self) -> Real {
        self.population
            - self.initial_exposed
            - self.initial_infected
            - self.initial_recovered
            - self.initial_dead
    }

    /// Initial state vector (S, E, I, R, D).
    pub fn initial_state(&self) -> State {
        State::new(
            self.initial_susceptible(),
            self.initial_exposed,
            self.initial_infected,
            self.initial_recovered,
            self.initial_dead,
        )
    }

    /// The immutable rate-constant record derived from this scenario.
    pub fn params(&self) -> SeirdParams {
        SeirdParams::from_durations(
            self.beta,
            self.incubation_time,
            self.time_sick,
            self.death_rate,
            self.population,
        )
    }

    /// The distancing forcing function, validated.
    pub fn distancing(&self) -> SimResult<Distancing> {
        Distancing::new(
            self.distancing_times.clone(),
            self.distancing_factors.clone(),
        )
    }

    /// Number of steps on the evaluation grid; the grid holds one more point.
    pub fn steps(&self) -> usize {
        (self.days / self.dt).floor() as usize
    }

    /// Reject configurations the model has no defined behavior for.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.population > 0.0) || !self.population.is_finite() {
            return Err(SimError::NonPositivePopulation {
                population: self.population,
            });
        }
        let compartments = [
            ("exposed", self.initial_exposed),
            ("infected", self.initial_infected),
            ("recovered", self.initial_recovered),
            ("dead", self.initial_dead),
        ];
        for &(compartment, value) in compartments.iter() {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(SimError::InvalidCompartment { compartment, value });
            }
        }
        let seeded = self.initial_exposed
            + self.initial_infected
            + self.initial_recovered
            + self.initial_dead;
        if seeded > self.population {
            return Err(SimError::PopulationOverflow {
                total: seeded,
                population: self.population,
            });
        }
        let positive = [
            ("incubation_time", self.incubation_time),
            ("time_sick", self.time_sick),
            ("days", self.days),
            ("dt", self.dt),
        ];
        for &(name, value) in positive.iter() {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SimError::NonPositiveParameter { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.death_rate) {
            return Err(SimError::DeathRateOutOfRange {
                value: self.death_rate,
            });
        }
        if !(self.beta >= 0.0) || !self.beta.is_finite() {
            return Err(SimError::InvalidContactRate { value: self.beta });
        }
        self.distancing()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_is_valid() {
        let scenario = Scenario::default();
        assert!(scenario.validate().is_ok());
        assert_eq!(scenario.initial_susceptible(), 9_999_850.0);
        assert_eq!(scenario.steps(), 3650);
    }

    #[test]
    fn rejects_bad_configurations() {
        let mut s = Scenario::default();
        s.set_population(-1.0);
        assert!(matches!(
            s.validate().unwrap_err(),
            SimError::NonPositivePopulation { .. }
        ));

        let mut s = Scenario::default();
        s.set_initial_infected(-5.0);
        assert!(matches!(
            s.validate().unwrap_err(),
            SimError::InvalidCompartment {
                compartment: "infected",
                ..
            }
        ));

        let mut s = Scenario::default();
        s.set_initial_exposed(s.population());
        s.set_initial_infected(1.0);
        assert!(matches!(
            s.validate().unwrap_err(),
            SimError::PopulationOverflow { .. }
        ));

        let mut s = Scenario::default();
        s.set_death_rate(1.5);
        assert!(matches!(
            s.validate().unwrap_err(),
            SimError::DeathRateOutOfRange { .. }
        ));

        let mut s = Scenario::default();
        s.set_dt(0.0);
        assert!(matches!(
            s.validate().unwrap_err(),
            SimError::NonPositiveParameter { name: "dt", .. }
        ));

        let mut s = Scenario::default();
        s.set_distancing_factors(vec![2.0; s.distancing_times().len()]);
        assert!(matches!(
            s.validate().unwrap_err(),
            SimError::FactorOutOfRange { .. }
        ));
    }

    #[test]
    fn roundtrip() {
        let scenario = Scenario::default();
        let data = toml::to_string(&scenario).unwrap();
        let scenario_: Scenario = toml::from_str(&data).unwrap();
        assert_eq!(scenario, scenario_);
    }
}
