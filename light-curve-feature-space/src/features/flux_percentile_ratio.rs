use crate::evaluator::*;

const WIDTHS: [u8; 5] = [20, 35, 50, 65, 80];

lazy_info!(
    FLUX_PERCENTILE_RATIO_INFO,
    size: 5,
    min_ts_length: 1,
    channels: [Magnitude],
);

/// Ratios of magnitude inter-percentile ranges
///
/// $$
/// \mathrm{flux~percentile~ratio}~w \equiv \frac{Q(0.5 + w/200) - Q(0.5 - w/200)}{Q(0.95) - Q(0.05)},
/// $$
/// for $w \in \\{20, 35, 50, 65, 80\\}$, where $Q(p)$ is the $p$th quantile of the magnitude
/// distribution.
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **1**
/// - Number of features: **5**
///
/// D’Isanto et al. 2016 [DOI:10.1093/mnras/stw157](https://doi.org/10.1093/mnras/stw157)
#[derive(Clone, Debug)]
pub struct FluxPercentileRatio {
    names: Vec<String>,
    descriptions: Vec<String>,
}

impl FluxPercentileRatio {
    pub fn new() -> Self {
        Self {
            names: WIDTHS
                .iter()
                .map(|w| format!("flux_percentile_ratio_mid{}", w))
                .collect(),
            descriptions: WIDTHS
                .iter()
                .map(|w| {
                    format!(
                        "ratio of {}% and 90% ranges around the median of magnitude distribution",
                        w
                    )
                })
                .collect(),
        }
    }
}

impl Default for FluxPercentileRatio {
    fn default() -> Self {
        Self::new()
    }
}

from_no_parameters!(FluxPercentileRatio);

impl<T> FeatureEvaluator<T> for FluxPercentileRatio
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m_sorted = ds.sample(Channel::Magnitude)?.get_sorted();
        let denominator = m_sorted.ppf(0.95) - m_sorted.ppf(0.05);
        if denominator.is_zero() {
            return Err(EvaluatorError::FlatTimeSeries);
        }
        Ok(WIDTHS
            .iter()
            .map(|&w| {
                let half = f32::from(w) / 200.0;
                Value::Scalar((m_sorted.ppf(0.5 + half) - m_sorted.ppf(0.5 - half)) / denominator)
            })
            .collect())
    }

    fn get_info(&self) -> &EvaluatorInfo {
        &FLUX_PERCENTILE_RATIO_INFO
    }

    fn get_names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    fn get_descriptions(&self) -> Vec<&str> {
        self.descriptions.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        flux_percentile_ratio,
        FluxPercentileRatio::new(),
        [
            0.2222222222222222,
            0.38888888888888895,
            0.5555555555555556,
            0.7222222222222222,
            0.8888888888888892,
        ],
        (0..21).map(f64::from).collect::<Vec<_>>(),
        (0..21).map(f64::from).collect::<Vec<_>>(),
        [1.0; 21],
        1e-5,
    );

    #[test]
    fn flux_percentile_ratio_names() {
        let fe = FluxPercentileRatio::new();
        assert_eq!(
            FeatureEvaluator::<f64>::get_names(&fe),
            [
                "flux_percentile_ratio_mid20",
                "flux_percentile_ratio_mid35",
                "flux_percentile_ratio_mid50",
                "flux_percentile_ratio_mid65",
                "flux_percentile_ratio_mid80",
            ]
        );
    }

    #[test]
    fn flux_percentile_ratio_plateau() {
        let m = [3.0_f32; 8];
        let mut ds = DataSet::new().with_channel(Channel::Magnitude, &m).unwrap();
        assert_eq!(
            FluxPercentileRatio::new().eval(&mut ds),
            Err(EvaluatorError::FlatTimeSeries)
        );
    }
}
