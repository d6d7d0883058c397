use crate::epidemic::SeirdModel;
use crate::error::{SimError, SimResult};
use crate::prelude::Real;
use crate::sim::{Scenario, Trajectory};
use ode_solvers::dopri5::Dopri5;

/// Relative error control of the adaptive stepper.
pub const RTOL: Real = 1e-6;
/// Absolute error control of the adaptive stepper.
pub const ATOL: Real = 1e-6;

/// Integrate a scenario from `t = 0` to `t = days` and evaluate the dense
/// solution on the uniform grid of `steps() + 1` points.
///
/// The configuration is validated first. A solver failure, an aborted run or
/// a non-finite sample surfaces as an error; no partial trajectory is ever
/// returned.
pub fn integrate(scenario: &Scenario) -> SimResult<Trajectory> {
    scenario.validate()?;

    let params = scenario.params();
    let population = params.population();
    let model = SeirdModel::new(params, scenario.distancing()?);
    let points = scenario.steps() + 1;

    // The horizon is padded by one output step: the dense-output cursor
    // accumulates dt, and rounding could otherwise drop the final grid point.
    let mut stepper = Dopri5::new(
        model,
        0.0,
        scenario.days() + scenario.dt(),
        scenario.dt(),
        scenario.initial_state(),
        RTOL,
        ATOL,
    );
    let stats = stepper
        .integrate()
        .map_err(|err| SimError::SolverFailure {
            reason: err.to_string(),
        })?;
    log::debug!(
        "dopri5: {} evaluations, {} steps accepted, {} rejected",
        stats.num_eval,
        stats.accepted_steps,
        stats.rejected_steps
    );

    let t = stepper.x_out();
    let y = stepper.y_out();
    if t.len() < points {
        // solout stopped the run: the dead compartment reached the population
        let reached = t.last().copied().unwrap_or(0.0);
        return Err(SimError::Diverged { time: reached });
    }
    Trajectory::from_samples(&t[..points], &y[..points], scenario.dt(), population)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn no_distancing() -> Scenario {
        let mut scenario = Scenario::default();
        scenario.set_distancing_times(vec![0.0]);
        scenario.set_distancing_factors(vec![1.0]);
        scenario
    }

    #[test]
    fn starts_exactly_at_the_initial_state() {
        let traj = integrate(&no_distancing()).unwrap();
        assert_eq!(traj.state(0).unwrap(), [9_999_850.0, 50.0, 100.0, 0.0, 0.0]);
        assert_eq!(traj.t()[0], 0.0);
    }

    #[test]
    fn grid_has_steps_plus_one_points() {
        let scenario = no_distancing();
        let traj = integrate(&scenario).unwrap();
        assert_eq!(traj.len(), scenario.steps() + 1);
        assert_approx_eq!(traj.t()[traj.len() - 1], scenario.days(), 1e-6);
        assert_approx_eq!(traj.t()[1] - traj.t()[0], scenario.dt(), 1e-9);
    }

    #[test]
    fn conserves_the_population() {
        let traj = integrate(&no_distancing()).unwrap();
        for i in 0..traj.len() {
            assert_approx_eq!(traj.total(i) / traj.population(), 1.0, 1e-6);
        }
    }

    #[test]
    fn compartments_move_the_right_way() {
        let traj = integrate(&no_distancing()).unwrap();
        let n = traj.len();
        let eps = traj.population() * 1e-7;
        for i in 1..n {
            assert!(traj.dead()[i] >= traj.dead()[i - 1] - eps);
            assert!(traj.recovered()[i] >= traj.recovered()[i - 1] - eps);
            assert!(traj.susceptible()[i] <= traj.susceptible()[i - 1] + eps);
        }
        assert!(traj.death_toll() > 0.0);
        assert!(traj.susceptible()[n - 1] < traj.susceptible()[0]);
    }

    #[test]
    fn identical_runs_produce_identical_trajectories() {
        let scenario = Scenario::default();
        let a = integrate(&scenario).unwrap();
        let b = integrate(&scenario).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distanced_runs_kill_fewer_people() {
        let full = integrate(&no_distancing()).unwrap();
        let distanced = integrate(&Scenario::default()).unwrap();
        assert!(distanced.death_toll() < full.death_toll());
    }

    #[test]
    fn refuses_invalid_configuration() {
        let mut scenario = Scenario::default();
        scenario.set_population(-10.0);
        assert!(matches!(
            integrate(&scenario).unwrap_err(),
            SimError::NonPositivePopulation { .. }
        ));
    }
}
