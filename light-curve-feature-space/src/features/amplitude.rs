use crate::evaluator::*;

/// Half of the magnitude range, $(\max m - \min m) / 2$
#[derive(Clone, Default, Debug)]
pub struct Amplitude {}

impl Amplitude {
    pub fn new() -> Self {
        Self {}
    }
}

lazy_info!(
    AMPLITUDE_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Magnitude],
);

from_no_parameters!(Amplitude);

impl<T> FeatureEvaluator<T> for Amplitude
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        Ok(Value::Scalar(T::half() * (m.get_max() - m.get_min())))
    }

    scalar_feature_names!(AMPLITUDE_INFO, "amplitude", "half amplitude of magnitude");
}
