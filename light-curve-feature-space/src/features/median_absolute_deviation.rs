use crate::evaluator::*;
use crate::statistics::Statistics;

/// Median of the absolute value of the difference between magnitude and its median
///
/// $$
/// \mathrm{median~absolute~deviation} \equiv \mathrm{Median}\left(|m_i - \mathrm{Median}(m)|\right).
/// $$
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **1**
/// - Number of features: **1**
///
/// D’Isanto et al. 2016 [DOI:10.1093/mnras/stw157](https://doi.org/10.1093/mnras/stw157)
#[derive(Clone, Default, Debug)]
pub struct MedianAbsoluteDeviation {}

lazy_info!(
    MEDIAN_ABSOLUTE_DEVIATION_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Magnitude],
);

impl MedianAbsoluteDeviation {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(MedianAbsoluteDeviation);

impl<T> FeatureEvaluator<T> for MedianAbsoluteDeviation
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        let m_median = m.get_median();
        let deviation: Vec<_> = m
            .as_slice()
            .iter()
            .map(|&y| T::abs(y - m_median))
            .collect();
        Ok(Value::Scalar(deviation[..].median()))
    }

    scalar_feature_names!(
        MEDIAN_ABSOLUTE_DEVIATION_INFO,
        "median_absolute_deviation",
        "median of absolute magnitude deviation from its median",
    );
}
