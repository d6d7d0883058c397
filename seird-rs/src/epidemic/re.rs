use crate::epidemic::Distancing;
use crate::params::SeirdParams;
use crate::prelude::{Real, Time};
use ndarray::Array1;

/// Effective reproduction number at time `t`.
///
/// The epidemiological factor `alpha/(alpha+mu) * beta/(mu+gamma)` is a fixed
/// property of the parameter set; distancing rescales it over time. Nothing
/// here depends on the integrated state.
pub fn reproduction_number(params: &SeirdParams, distancing: &Distancing, t: Time) -> Real {
    distancing.factor(t) * params.r0()
}

/// Effective reproduction number over a whole evaluation grid.
pub fn reproduction_series(
    params: &SeirdParams,
    distancing: &Distancing,
    times: &Array1<Time>,
) -> Array1<Real> {
    times.mapv(|t| reproduction_number(params, distancing, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DISTANCING_FACTORS, DISTANCING_TIMES};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn rescales_the_distancing_curve() {
        let params = SeirdParams::default();
        let d = Distancing::new(DISTANCING_TIMES.to_vec(), DISTANCING_FACTORS.to_vec()).unwrap();
        let grid = Array1::linspace(0.0, 400.0, 401);
        let re = reproduction_series(&params, &d, &grid);
        let factors = d.sample(&grid);
        for (r, m) in re.iter().zip(factors.iter()) {
            assert_approx_eq!(*r, m * params.r0(), 1e-9);
        }
    }

    #[test]
    fn undistanced_value_is_r0() {
        let params = SeirdParams::default();
        let d = Distancing::constant(1.0).unwrap();
        assert_approx_eq!(reproduction_number(&params, &d, 123.0), 4.7366863, 1e-6);
    }
}
