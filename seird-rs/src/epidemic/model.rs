use crate::epidemic::Distancing;
use crate::params::SeirdParams;
use crate::prelude::{Real, Time};
use ode_solvers::Vector5;

/// State vector of the compartments, ordered (S, E, I, R, D).
pub type State = Vector5<Real>;

/// The SEIRD compartment dynamics, forced by a distancing table.
///
/// Transmission pressure scales with the living population `N - D`, not the
/// nominal one. `gamma` and `mu` are competing outflows from the infected
/// compartment.
#[derive(Debug, Clone)]
pub struct SeirdModel {
    params: SeirdParams,
    distancing: Distancing,
}

impl SeirdModel {
    pub const S: usize = 0;
    pub const E: usize = 1;
    pub const I: usize = 2;
    pub const R: usize = 3;
    pub const D: usize = 4;
    pub const CSV_HEADER: &'static str = "S,E,I,R,D";

    pub fn new(params: SeirdParams, distancing: Distancing) -> Self {
        SeirdModel { params, distancing }
    }

    pub fn params(&self) -> &SeirdParams {
        &self.params
    }

    pub fn distancing(&self) -> &Distancing {
        &self.distancing
    }
}

impl ode_solvers::System<Time, State> for SeirdModel {
    fn system(&self, t: Time, y: &State, dy: &mut State) {
        let p = &self.params;
        let living = p.population() - y[Self::D];
        let exposure = p.beta() * self.distancing.factor(t) * y[Self::S] * y[Self::I] / living;

        dy[Self::S] = -exposure;
        dy[Self::E] = exposure - p.alpha() * y[Self::E];
        dy[Self::I] = p.alpha() * y[Self::E] - (p.gamma() + p.mu()) * y[Self::I];
        dy[Self::R] = p.gamma() * y[Self::I];
        dy[Self::D] = p.mu() * y[Self::I];
    }

    /// Abort the run once the dead compartment swallows the population; the
    /// transmission term is undefined there.
    fn solout(&mut self, _t: Time, y: &State, _dy: &State) -> bool {
        y[Self::D] >= self.params.population()
    }
}
