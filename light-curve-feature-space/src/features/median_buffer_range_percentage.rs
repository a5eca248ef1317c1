use crate::evaluator::*;

use conv::ConvUtil;

/// Fraction of observations inside $\mathrm{Median}(m) \pm q \times (\max(m) - \min(m))$ interval
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **1**
/// - Number of features: **1**
/// - Parameters: `[fraction]`, default `[0.1]`
///
/// D’Isanto et al. 2016 [DOI:10.1093/mnras/stw157](https://doi.org/10.1093/mnras/stw157)
#[derive(Clone, Debug)]
pub struct MedianBufferRangePercentage {
    fraction: f64,
}

impl MedianBufferRangePercentage {
    pub fn new(fraction: f64) -> Result<Self, ParameterError> {
        if fraction > 0.0 && fraction <= 1.0 {
            Ok(Self { fraction })
        } else {
            Err(ParameterError::Invalid {
                name: "fraction",
                value: fraction,
                reason: "should be in (0, 1] interval",
            })
        }
    }

    #[inline]
    pub fn default_fraction() -> f64 {
        0.1
    }
}

impl Default for MedianBufferRangePercentage {
    fn default() -> Self {
        Self {
            fraction: Self::default_fraction(),
        }
    }
}

impl FromParameters for MedianBufferRangePercentage {
    fn from_parameters(parameters: &Parameters) -> Result<Self, ParameterError> {
        parameters.check_len(1)?;
        Self::new(parameters.get_or(0, Self::default_fraction()))
    }
}

lazy_info!(
    MEDIAN_BUFFER_RANGE_PERCENTAGE_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Magnitude],
);

impl<T> FeatureEvaluator<T> for MedianBufferRangePercentage
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        let m_median = m.get_median();
        let threshold = (m.get_max() - m.get_min()) * self.fraction.approx_as::<T>().unwrap();
        let count = m
            .as_slice()
            .iter()
            .filter(|&&y| T::abs(y - m_median) < threshold)
            .count();
        Ok(Value::Scalar(count.value_as::<T>().unwrap() / m.lenf()))
    }

    scalar_feature_names!(
        MEDIAN_BUFFER_RANGE_PERCENTAGE_INFO,
        "median_buffer_range_percentage",
        "fraction of observations close to the median magnitude",
    );
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        median_buffer_range_percentage,
        MedianBufferRangePercentage::default(),
        [0.5],
        [1.0, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0, 11.0],
    );

    feature_test!(
        median_buffer_range_percentage_wide,
        MedianBufferRangePercentage::new(0.5).unwrap(),
        [0.875],
        [1.0, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0, 11.0],
    );

    #[test]
    fn median_buffer_range_percentage_invalid_fraction() {
        assert!(MedianBufferRangePercentage::from_parameters(&vec![0.0].into()).is_err());
        assert!(MedianBufferRangePercentage::from_parameters(&vec![1.5].into()).is_err());
    }
}
