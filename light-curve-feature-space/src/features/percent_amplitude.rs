use crate::evaluator::*;

/// Maximum deviation of magnitude from its median
///
/// $$
/// \mathrm{percent~amplitude} \equiv \max_i\left|m_i - \mathrm{Median}(m)\right|
///     = \max\\{\max(m) - \mathrm{Median}(m), \mathrm{Median}(m) - \min(m)\\}.
/// $$
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **1**
/// - Number of features: **1**
///
/// D’Isanto et al. 2016 [DOI:10.1093/mnras/stw157](https://doi.org/10.1093/mnras/stw157)
#[derive(Clone, Default, Debug)]
pub struct PercentAmplitude {}

lazy_info!(
    PERCENT_AMPLITUDE_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Magnitude],
);

impl PercentAmplitude {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(PercentAmplitude);

impl<T> FeatureEvaluator<T> for PercentAmplitude
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        let m_min = m.get_min();
        let m_max = m.get_max();
        let m_median = m.get_median();
        Ok(Value::Scalar(T::max(m_max - m_median, m_median - m_min)))
    }

    scalar_feature_names!(
        PERCENT_AMPLITUDE_INFO,
        "percent_amplitude",
        "maximum absolute deviation of magnitude from its median",
    );
}
