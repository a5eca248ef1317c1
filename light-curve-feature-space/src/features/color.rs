use crate::evaluator::*;

/// Difference of mean magnitudes in two passbands
///
/// $$
/// \mathrm{color} \equiv \langle m \rangle - \langle m_2 \rangle.
/// $$
/// Passbands may be observed at different moments and have different number of observations.
///
/// - Depends on: **magnitude**, **second magnitude**
/// - Minimum number of observations: **1**
/// - Number of features: **1**
#[derive(Clone, Default, Debug)]
pub struct Color {}

lazy_info!(
    COLOR_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Magnitude, Magnitude2],
);

impl Color {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(Color);

impl<T> FeatureEvaluator<T> for Color
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let mean = ds.sample(Channel::Magnitude)?.get_mean();
        let mean2 = ds.sample(Channel::Magnitude2)?.get_mean();
        Ok(Value::Scalar(mean - mean2))
    }

    scalar_feature_names!(
        COLOR_INFO,
        "color",
        "difference of mean magnitudes of two passbands",
    );
}
