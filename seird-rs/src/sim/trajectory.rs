use crate::epidemic::{SeirdModel, State};
use crate::error::{SimError, SimResult};
use crate::prelude::{Real, Time};
use getset::{CopyGetters, Getters};
use ndarray::Array1;

/// Dense solution of one run: the evaluation grid plus one series per
/// compartment, all aligned. Owned by the caller and read-only once produced.
#[derive(Debug, Clone, PartialEq, CopyGetters, Getters)]
pub struct Trajectory {
    #[getset(get = "pub")]
    t: Array1<Time>,

    #[getset(get = "pub")]
    susceptible: Array1<Real>,

    #[getset(get = "pub")]
    exposed: Array1<Real>,

    #[getset(get = "pub")]
    infected: Array1<Real>,

    #[getset(get = "pub")]
    recovered: Array1<Real>,

    #[getset(get = "pub")]
    dead: Array1<Real>,

    #[getset(get_copy = "pub")]
    dt: Real,

    #[getset(get_copy = "pub")]
    population: Real,
}

impl Trajectory {
    /// Collect solver samples into aligned compartment series.
    ///
    /// Any non-finite sample voids the whole run.
    pub(crate) fn from_samples(
        t: &[Time],
        states: &[State],
        dt: Real,
        population: Real,
    ) -> SimResult<Self> {
        for (x, u) in t.iter().zip(states) {
            if u.iter().any(|v| !v.is_finite()) {
                return Err(SimError::Diverged { time: *x });
            }
        }
        let column = |c: usize| -> Array1<Real> { states.iter().map(|u| u[c]).collect() };
        Ok(Trajectory {
            t: t.iter().copied().collect(),
            susceptible: column(SeirdModel::S),
            exposed: column(SeirdModel::E),
            infected: column(SeirdModel::I),
            recovered: column(SeirdModel::R),
            dead: column(SeirdModel::D),
            dt,
            population,
        })
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// State vector at the i-th grid point.
    pub fn state(&self, i: usize) -> Option<[Real; 5]> {
        if i >= self.len() {
            return None;
        }
        Some([
            self.susceptible[i],
            self.exposed[i],
            self.infected[i],
            self.recovered[i],
            self.dead[i],
        ])
    }

    /// Grid index of a given day, if the horizon covers it.
    pub fn day_index(&self, day: Real) -> Option<usize> {
        let i = (day / self.dt).round() as usize;
        if i < self.len() {
            Some(i)
        } else {
            None
        }
    }

    /// Cumulative deaths at the end of the horizon.
    pub fn death_toll(&self) -> Real {
        self.dead[self.len() - 1]
    }

    /// Fraction of the population still susceptible at the end.
    pub fn susceptible_fraction(&self) -> Real {
        self.susceptible[self.len() - 1] / self.population
    }

    /// New deaths per day: forward difference of the dead series, one sample
    /// shorter than the grid and aligned to its front.
    pub fn daily_deaths(&self) -> Array1<Real> {
        (1..self.len())
            .map(|i| (self.dead[i] - self.dead[i - 1]) / self.dt)
            .collect()
    }

    /// Total individuals across all compartments at the i-th grid point.
    pub fn total(&self, i: usize) -> Real {
        self.susceptible[i] + self.exposed[i] + self.infected[i] + self.recovered[i] + self.dead[i]
    }

    /// Render the grid and all compartments as CSV data.
    pub fn render_csv(&self, head: &str, sep: char) -> String {
        let mut data = head.to_string();
        for i in 0..self.len() {
            data.push('\n');
            data.push_str(&format!(
                "{}{}{}{}{}{}{}{}{}{}{}",
                self.t[i],
                sep,
                self.susceptible[i],
                sep,
                self.exposed[i],
                sep,
                self.infected[i],
                sep,
                self.recovered[i],
                sep,
                self.dead[i]
            ));
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn linear_deaths() -> Trajectory {
        let t: Vec<Time> = (0..5).map(|i| i as Real * 0.5).collect();
        let states: Vec<State> = (0..5)
            .map(|i| State::new(100.0 - i as Real, 0.0, 0.0, 0.0, i as Real * 2.0))
            .collect();
        Trajectory::from_samples(&t, &states, 0.5, 100.0).unwrap()
    }

    #[test]
    fn daily_deaths_is_the_scaled_forward_difference() {
        let traj = linear_deaths();
        let rate = traj.daily_deaths();
        assert_eq!(rate.len(), traj.len() - 1);
        for r in rate.iter() {
            // two deaths per half-day step
            assert_approx_eq!(*r, 4.0, 1e-12);
        }
    }

    #[test]
    fn rejects_non_finite_samples() {
        let t = [0.0, 0.1];
        let states = [
            State::new(1.0, 0.0, 0.0, 0.0, 0.0),
            State::new(Real::NAN, 0.0, 0.0, 0.0, 0.0),
        ];
        assert_eq!(
            Trajectory::from_samples(&t, &states, 0.1, 1.0).unwrap_err(),
            SimError::Diverged { time: 0.1 }
        );
    }

    #[test]
    fn day_index_respects_the_horizon() {
        let traj = linear_deaths();
        assert_eq!(traj.day_index(1.0), Some(2));
        assert_eq!(traj.day_index(9.0), None);
    }

    #[test]
    fn renders_one_row_per_grid_point() {
        let traj = linear_deaths();
        let csv = traj.render_csv("t,S,E,I,R,D", ',');
        assert_eq!(csv.lines().count(), traj.len() + 1);
        assert!(csv.starts_with("t,S,E,I,R,D\n0,"));
    }
}
