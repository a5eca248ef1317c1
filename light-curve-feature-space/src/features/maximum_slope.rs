use crate::evaluator::*;

use itertools::Itertools;

/// Maximum slope between two sub-sequential observations
///
/// $$
/// \mathrm{maximum~slope} \equiv \max_{i=0..N-2}\left|\frac{m_{i+1} - m_i}{t_{i+1} - t_i}\right|
/// $$
///
/// Observations are expected to be sorted by time.
///
/// - Depends on: **time**, **magnitude**
/// - Minimum number of observations: **2**
/// - Number of features: **1**
///
/// D’Isanto et al. 2016 [DOI:10.1093/mnras/stw157](https://doi.org/10.1093/mnras/stw157)
#[derive(Clone, Default, Debug)]
pub struct MaximumSlope {}

impl MaximumSlope {
    pub fn new() -> Self {
        Self {}
    }
}

lazy_info!(
    MAXIMUM_SLOPE_INFO,
    size: 1,
    min_ts_length: 2,
    channels: [Magnitude, Time],
);

from_no_parameters!(MaximumSlope);

impl<T> FeatureEvaluator<T> for MaximumSlope
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let t = ds.slice(Channel::Time)?;
        let m = ds.slice(Channel::Magnitude)?;
        t.iter()
            .tuple_windows()
            .map(|(&t1, &t2)| t2 - t1)
            .zip(m.iter().tuple_windows().map(|(&m1, &m2)| m2 - m1))
            .map(|(dt, dm)| T::abs(dm / dt))
            .filter(|&x| x.is_finite())
            .max_by(|a, b| a.partial_cmp(b).unwrap())
            .map(Value::Scalar)
            .ok_or(EvaluatorError::ZeroDivision(
                "all observations have the same time",
            ))
    }

    scalar_feature_names!(
        MAXIMUM_SLOPE_INFO,
        "maximum_slope",
        "maximum slope of time-series",
    );
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        maximum_slope_positive,
        MaximumSlope::new(),
        [1.0],
        [0.0, 0.5, 1.0, 0.0, 0.5, 1.0],
        [0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
    );

    feature_test!(
        maximum_slope_negative,
        MaximumSlope::new(),
        [1.0],
        [1.0, 0.0, 0.5, 1.0, 0.0, 0.5],
        [0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
    );

    feature_test!(
        maximum_slope_skips_simultaneous_observations,
        MaximumSlope::new(),
        [2.0],
        [0.0, 5.0, 1.0, 3.0],
        [0.0, 0.0, 2.0, 3.0],
    );
}
