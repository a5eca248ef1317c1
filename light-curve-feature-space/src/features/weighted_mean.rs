use crate::evaluator::*;

/// Weighted mean magnitude
///
/// $$
/// \bar{m} \equiv \frac{\sum_i m_i / \delta_i^2}{\sum_i 1 / \delta_i^2}.
/// $$
/// See [Mean](crate::Mean) for non-weighted mean.
///
/// - Depends on: **magnitude**, **magnitude error**
/// - Minimum number of observations: **1**
/// - Number of features: **1**
#[derive(Clone, Default, Debug)]
pub struct WeightedMean {}

impl WeightedMean {
    pub fn new() -> Self {
        Self {}
    }
}

lazy_info!(
    WEIGHTED_MEAN_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Magnitude, Error],
);

from_no_parameters!(WeightedMean);

impl<T> FeatureEvaluator<T> for WeightedMean
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        Ok(Value::Scalar(ds.get_m_weighted_mean()?))
    }

    scalar_feature_names!(
        WEIGHTED_MEAN_INFO,
        "weighted_mean",
        "magnitude mean weighted by inverse square error",
    );
}
