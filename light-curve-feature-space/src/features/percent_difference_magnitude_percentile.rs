use crate::evaluator::*;
use crate::parameters::check_quantile;

/// Ratio of $p$th inter-percentile range to the median
///
/// $$
/// p\mathrm{~percent~difference~magnitude~percentile} \equiv \frac{Q(1-p) - Q(p)}{\mathrm{Median}(m)}.
/// $$
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **1**
/// - Number of features: **1**
/// - Parameters: `[quantile]`, default `[0.05]`
///
/// D’Isanto et al. 2016 [DOI:10.1093/mnras/stw157](https://doi.org/10.1093/mnras/stw157)
#[derive(Clone, Debug)]
pub struct PercentDifferenceMagnitudePercentile {
    quantile: f32,
}

lazy_info!(
    PERCENT_DIFFERENCE_MAGNITUDE_PERCENTILE_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [Magnitude],
);

impl PercentDifferenceMagnitudePercentile {
    pub fn new(quantile: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            quantile: check_quantile("quantile", quantile)?,
        })
    }

    #[inline]
    pub fn default_quantile() -> f32 {
        0.05
    }
}

impl Default for PercentDifferenceMagnitudePercentile {
    fn default() -> Self {
        Self {
            quantile: Self::default_quantile(),
        }
    }
}

impl FromParameters for PercentDifferenceMagnitudePercentile {
    fn from_parameters(parameters: &Parameters) -> Result<Self, ParameterError> {
        parameters.check_len(1)?;
        Self::new(parameters.get_or(0, Self::default_quantile().into()))
    }
}

impl<T> FeatureEvaluator<T> for PercentDifferenceMagnitudePercentile
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        let median = m.get_median();
        if median.is_zero() {
            return Err(EvaluatorError::ZeroDivision("median magnitude is zero"));
        }
        let m_sorted = m.get_sorted();
        let range = m_sorted.ppf(1.0 - self.quantile) - m_sorted.ppf(self.quantile);
        Ok(Value::Scalar(range / median))
    }

    scalar_feature_names!(
        PERCENT_DIFFERENCE_MAGNITUDE_PERCENTILE_INFO,
        "percent_difference_magnitude_percentile",
        "ratio of inter-percentile magnitude range to the median magnitude",
    );
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        percent_difference_magnitude_percentile,
        PercentDifferenceMagnitudePercentile::default(),
        [0.17181818181818187],
        (0..21).map(|i| 10.0 + 0.1 * f64::from(i)).collect::<Vec<_>>(),
    );

    #[test]
    fn percent_difference_magnitude_percentile_invalid_quantile() {
        assert!(PercentDifferenceMagnitudePercentile::from_parameters(&vec![0.7].into()).is_err());
        assert!(PercentDifferenceMagnitudePercentile::from_parameters(&vec![0.1, 0.2].into()).is_err());
    }
}
