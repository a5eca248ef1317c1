use crate::evaluator::*;

/// Number of observations
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **1**
/// - Number of features: **1**
#[derive(Clone, Default, Debug)]
pub struct ObservationCount {}

impl ObservationCount {
    pub fn new() -> Self {
        Self {}
    }
}

lazy_info!(
    OBSERVATION_COUNT_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Magnitude],
);

from_no_parameters!(ObservationCount);

impl<T> FeatureEvaluator<T> for ObservationCount
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        Ok(Value::Scalar(ds.sample(Channel::Magnitude)?.lenf()))
    }

    scalar_feature_names!(
        OBSERVATION_COUNT_INFO,
        "observation_count",
        "number of observations",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        observation_count,
        ObservationCount::new(),
        [7.0],
        [0.0; 7],
    );
}
