use crate::evaluator::*;

/// Standard deviation to mean ratio
///
/// $$
/// \frac{\sigma_m}{\langle m \rangle}
/// $$
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **2**
/// - Number of features: **1**
#[derive(Clone, Default, Debug)]
pub struct MeanVariance {}

lazy_info!(
    MEAN_VARIANCE_INFO,
    size: 1,
    min_ts_length: 2,
    channels: [Magnitude],
);

impl MeanVariance {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(MeanVariance);

impl<T> FeatureEvaluator<T> for MeanVariance
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        let m_mean = m.get_mean();
        if m_mean.is_zero() {
            return Err(EvaluatorError::ZeroDivision("mean magnitude is zero"));
        }
        Ok(Value::Scalar(m.get_std() / m_mean))
    }

    scalar_feature_names!(
        MEAN_VARIANCE_INFO,
        "mean_variance",
        "standard deviation of magnitude to its mean value ratio",
    );
}
