use crate::evaluator::*;

/// Unbiased sample standard deviation of magnitude, the $N - 1$ normalized one
///
/// Requires at least two observations.
#[derive(Clone, Default, Debug)]
pub struct StandardDeviation {}

lazy_info!(
    STANDARD_DEVIATION_INFO,
    size: 1,
    min_ts_length: 2,
    channels: [Magnitude],
);

impl StandardDeviation {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(StandardDeviation);

impl<T> FeatureEvaluator<T> for StandardDeviation
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        Ok(Value::Scalar(ds.sample(Channel::Magnitude)?.get_std()))
    }

    scalar_feature_names!(
        STANDARD_DEVIATION_INFO,
        "standard_deviation",
        "standard deviation of magnitude sample",
    );
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        standard_deviation,
        StandardDeviation::new(),
        [1.5811388300841898],
        [0.0, 1.0, 2.0, 3.0, 4.0],
    );
}
