use crate::evaluator::*;

/// Time-series duration
///
/// $$
/// \max_i t_i - \min_i t_i.
/// $$
///
/// - Depends on: **time**
/// - Minimum number of observations: **1**
/// - Number of features: **1**
#[derive(Clone, Default, Debug)]
pub struct Duration {}

impl Duration {
    pub fn new() -> Self {
        Self {}
    }
}

lazy_info!(
    DURATION_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Time],
);

from_no_parameters!(Duration);

impl<T> FeatureEvaluator<T> for Duration
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let t = ds.sample(Channel::Time)?;
        Ok(Value::Scalar(t.get_max() - t.get_min()))
    }

    scalar_feature_names!(DURATION_INFO, "duration", "time-series duration");
}
