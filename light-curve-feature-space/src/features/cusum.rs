use crate::evaluator::*;
use crate::statistics::Statistics;

/// Range of cumulative sums
///
/// $$
/// \mathrm{cusum} \equiv \max(S) - \min(S),
/// $$
/// $$
/// S_j \equiv \frac1{N\,\sigma_m} \sum_{i=0}^j{\left(m\_i - \langle m \rangle\right)},
/// $$
/// where $N$ is the number of observations,
/// $\langle m \rangle$ is the mean magnitude
/// and $\sigma_m = \sqrt{\sum_i (m_i - \langle m \rangle)^2 / (N-1)}$ is the magnitude standard deviation.
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **2**
/// - Number of features: **1**
///
/// Kim et al. 2014, [DOI:10.1051/0004-6361/201323252](https://doi.org/10.1051/0004-6361/201323252)
#[derive(Clone, Default, Debug)]
pub struct Cusum {}

impl Cusum {
    pub fn new() -> Self {
        Self {}
    }
}

lazy_info!(
    CUSUM_INFO,
    size: 1,
    min_ts_length: 2,
    channels: [Magnitude],
);

from_no_parameters!(Cusum);

impl<T> FeatureEvaluator<T> for Cusum
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m_std = get_nonzero_m_std(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        let m_mean = m.get_mean();
        let cumsum: Vec<_> = m
            .as_slice()
            .iter()
            .scan(T::zero(), |sum, &y| {
                *sum += y - m_mean;
                Some(*sum)
            })
            .collect();
        Ok(Value::Scalar(
            (cumsum[..].maximum() - cumsum[..].minimum()) / (m_std * m.lenf()),
        ))
    }

    scalar_feature_names!(CUSUM_INFO, "cusum", "range of cumulative sums of magnitude");
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        cusum,
        Cusum::new(),
        [0.3589213],
        [1.0, 1.0, 1.0, 5.0, 8.0, 20.0],
    );

    #[test]
    fn cusum_plateau() {
        let m = [1.0_f64; 5];
        let mut ds = DataSet::new().with_channel(Channel::Magnitude, &m).unwrap();
        assert_eq!(
            Cusum::new().eval(&mut ds),
            Err(EvaluatorError::FlatTimeSeries)
        );
    }
}
