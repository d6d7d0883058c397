use crate::error::{SimError, SimResult};
use crate::prelude::{Real, Time};
use ndarray::Array1;

/// Piecewise-linear contact-rate modifier over a table of control points.
///
/// Each control point pairs a time breakpoint with the fraction of normal
/// contact still happening at that time. Queries between breakpoints
/// interpolate linearly; queries outside the table clamp to the first/last
/// factor. The curve is a pure function of its table.
#[derive(Debug, Clone, PartialEq)]
pub struct Distancing {
    times: Vec<Real>,
    factors: Vec<Real>,
}

impl Distancing {
    /// Build a table from parallel breakpoint/factor sequences.
    ///
    /// Breakpoints must increase strictly and factors must lie in [0, 1].
    pub fn new(times: Vec<Real>, factors: Vec<Real>) -> SimResult<Self> {
        if times.is_empty() {
            return Err(SimError::EmptyDistancingTable);
        }
        if times.len() != factors.len() {
            return Err(SimError::DistancingTableMismatch {
                times: times.len(),
                factors: factors.len(),
            });
        }
        for (i, &t) in times.iter().enumerate() {
            let increasing = i == 0 || t > times[i - 1];
            if !t.is_finite() || !increasing {
                return Err(SimError::InvalidBreakpoint { index: i, value: t });
            }
        }
        for (i, &v) in factors.iter().enumerate() {
            if !(0.0..=1.0).contains(&v) {
                return Err(SimError::FactorOutOfRange { index: i, value: v });
            }
        }
        Ok(Distancing { times, factors })
    }

    /// A table with no behavioral change: the factor is `value` at all times.
    pub fn constant(value: Real) -> SimResult<Self> {
        Distancing::new(vec![0.0], vec![value])
    }

    /// Contact factor at time `t`.
    ///
    /// Defined for any real `t`, in any call order; adaptive solvers evaluate
    /// out of order for step control.
    pub fn factor(&self, t: Time) -> Real {
        let last = self.times.len() - 1;
        if t <= self.times[0] {
            return self.factors[0];
        }
        if t >= self.times[last] {
            return self.factors[last];
        }
        let mut i = 0;
        while t >= self.times[i + 1] {
            i += 1;
        }
        let w = (t - self.times[i]) / (self.times[i + 1] - self.times[i]);
        self.factors[i] + w * (self.factors[i + 1] - self.factors[i])
    }

    /// Contact factor over a whole evaluation grid.
    pub fn sample(&self, times: &Array1<Time>) -> Array1<Real> {
        times.mapv(|t| self.factor(t))
    }
}
