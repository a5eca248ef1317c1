use crate::evaluator::*;
use crate::parameters::check_quantile;
use crate::sorted_vec::SortedVec;

/// Inter-percentile range of the color of simultaneous observations
///
/// $$
/// Q_c(1 - p) - Q_c(p),
/// $$
/// where $Q_c(p)$ is the $p$th quantile of the $m - m_2$ distribution, taken over observations
/// aligned in time.
///
/// - Depends on: **aligned magnitude**, **aligned second magnitude**
/// - Minimum number of observations: **1**
/// - Number of features: **1**
/// - Parameters: `[quantile]`, default `[0.25]`
#[derive(Clone, Debug)]
pub struct InterPercentileRangeColor {
    quantile: f32,
}

lazy_info!(
    INTER_PERCENTILE_RANGE_COLOR_INFO,
    size: 1,
    min_ts_length: 1,
    channels: [AlignedMagnitude, AlignedMagnitude2],
);

impl InterPercentileRangeColor {
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

impl Default for InterPercentileRangeColor {
    fn default() -> Self {
        Self {
            quantile: Self::default_quantile(),
        }
    }
}

impl FromParameters for InterPercentileRangeColor {
    fn from_parameters(parameters: &Parameters) -> Result<Self, ParameterError> {
        parameters.check_len(1)?;
        Self::new(parameters.get_or(0, Self::default_quantile().into()))
    }
}

impl<T> FeatureEvaluator<T> for InterPercentileRangeColor
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let color: SortedVec<T> = ds
            .slice(Channel::AlignedMagnitude)?
            .iter()
            .zip(ds.slice(Channel::AlignedMagnitude2)?.iter())
            .map(|(&m, &m2)| m - m2)
            .collect::<Vec<_>>()
            .into();
        Ok(Value::Scalar(
            color.ppf(1.0 - self.quantile) - color.ppf(self.quantile),
        ))
    }

    scalar_feature_names!(
        INTER_PERCENTILE_RANGE_COLOR_INFO,
        "inter_percentile_range_color",
        "range between symmetric quantiles of aligned color distribution",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn inter_percentile_range_color() {
        let m = [1.0, 2.0, 3.0, 4.0];
        let m2 = [0.0, 1.5, 0.5, 3.5];
        let mut ds = DataSet::new()
            .with_channel(Channel::AlignedMagnitude, &m)
            .unwrap()
            .with_channel(Channel::AlignedMagnitude2, &m2)
            .unwrap();
        let actual = InterPercentileRangeColor::default()
            .eval(&mut ds)
            .unwrap()
            .flatten();
        all_close(&actual, &[1.25], 1e-6);
    }

    #[test]
    fn inter_percentile_range_color_ignores_unaligned_magnitude() {
        let m = [1.0, 2.0, 3.0, 4.0];
        let mut ds = DataSet::new()
            .with_channel(Channel::Magnitude, &m)
            .unwrap()
            .with_channel(Channel::Magnitude2, &m)
            .unwrap();
        assert_eq!(
            InterPercentileRangeColor::default().eval(&mut ds),
            Err(EvaluatorError::MissingChannel(Channel::AlignedMagnitude))
        );
    }
}
