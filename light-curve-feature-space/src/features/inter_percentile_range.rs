use crate::evaluator::*;
use crate::parameters::check_quantile;

/// Inter-percentile range
///
/// $$
/// \mathrm{inter~percentile~range} \equiv Q(1 - p) - Q(p),
/// $$
/// where $Q(p)$ is the $p$th quantile of the magnitude distribution.
///
/// Special case of the [interquartile range](https://en.wikipedia.org/wiki/Interquartile_range)
/// is $p = 0.25$.
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **1**
/// - Number of features: **1**
/// - Parameters: `[quantile]`, default `[0.25]`
#[derive(Clone, Debug)]
pub struct InterPercentileRange {
    quantile: f32,
}

lazy_info!(
    INTER_PERCENTILE_RANGE_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Magnitude],
);

impl InterPercentileRange {
    pub fn new(quantile: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            quantile: check_quantile("quantile", quantile)?,
        })
    }

    #[inline]
    pub fn default_quantile() -> f32 {
        0.25
    }
}

impl Default for InterPercentileRange {
    fn default() -> Self {
        Self {
            quantile: Self::default_quantile(),
        }
    }
}

impl FromParameters for InterPercentileRange {
    fn from_parameters(parameters: &Parameters) -> Result<Self, ParameterError> {
        parameters.check_len(1)?;
        Self::new(parameters.get_or(0, Self::default_quantile().into()))
    }
}

impl<T> FeatureEvaluator<T> for InterPercentileRange
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m_sorted = ds.sample(Channel::Magnitude)?.get_sorted();
        Ok(Value::Scalar(
            m_sorted.ppf(1.0 - self.quantile) - m_sorted.ppf(self.quantile),
        ))
    }

    scalar_feature_names!(
        INTER_PERCENTILE_RANGE_INFO,
        "inter_percentile_range",
        "range between symmetric quantiles of magnitude distribution",
    );
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        inter_percentile_range,
        InterPercentileRange::default(),
        [5.5],
        (0..11).map(f64::from).collect::<Vec<_>>(),
    );

    feature_test!(
        inter_percentile_range_tenth,
        InterPercentileRange::new(0.1).unwrap(),
        [8.8],
        (0..11).map(f64::from).collect::<Vec<_>>(),
        (0..11).map(f64::from).collect::<Vec<_>>(),
        [1.0; 11],
        1e-5,
    );
}
