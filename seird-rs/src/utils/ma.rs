use crate::error::{SimError, SimResult};
use crate::prelude::Real;
use crate::utils::DatedSeries;

/// Average `series` over sliding windows of `window` samples, dropping the
/// `exclude` most recent observations entirely (the latest reports are not
/// yet stable).
///
/// The output keeps the input's index, truncated to the output length:
/// `floor(window/2)` zero placeholders come first, so each average sits near
/// the center of its window, followed by one average per valid window start.
/// The entry at offset `floor(window/2)` is the raw first observation, not an
/// average; downstream comparisons align on that seam.
pub fn moving_average(
    series: &DatedSeries,
    window: usize,
    exclude: usize,
) -> SimResult<DatedSeries> {
    if window == 0 {
        return Err(SimError::ZeroWindow);
    }
    let len = series.len();
    let windows = len as i64 - window as i64 + 1 - exclude as i64;
    if windows < 1 {
        return Err(SimError::WindowTooLarge {
            window,
            exclude,
            len,
        });
    }

    let half = window / 2;
    let values = series.values();
    let mut averages = vec![0.0; half];
    for i in 0..windows as usize {
        let total: Real = values[i..i + window].iter().sum();
        averages.push(total / window as Real);
    }
    averages[half] = values[0];

    let index = series.index()[..averages.len()].to_vec();
    Ok(DatedSeries::new("Average", index, averages))
}
