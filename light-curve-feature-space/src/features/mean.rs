use crate::evaluator::*;

/// Arithmetic mean of magnitude
///
/// Errors are ignored, see [WeightedMean](crate::WeightedMean) for the inverse-variance
/// weighted one.
#[derive(Clone, Default, Debug)]
pub struct Mean {}

lazy_info!(
    MEAN_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Magnitude],
);

impl Mean {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(Mean);

impl<T> FeatureEvaluator<T> for Mean
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        Ok(Value::Scalar(ds.sample(Channel::Magnitude)?.get_mean()))
    }

    scalar_feature_names!(MEAN_INFO, "mean", "mean magnitude");
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        mean,
        Mean::new(),
        [14.0],
        [1.0, 1.0, 1.0, 1.0, 5.0, 6.0, 6.0, 6.0, 99.0],
    );
}
