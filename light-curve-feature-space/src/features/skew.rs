use crate::evaluator::*;

/// Skewness of magnitude $G_1$
///
/// $$
/// G_1 \equiv \frac{N}{(N - 1)(N - 2)} \frac{\sum_i(m_i - \langle m \rangle)^3}{\sigma_m^3},
/// $$
/// where $N$ is the number of observations,
/// $\langle m \rangle$ is the mean magnitude,
/// $\sigma_m = \sqrt{\sum_i (m_i - \langle m \rangle)^2 / (N-1)}$ is the magnitude standard deviation.
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **3**
/// - Number of features: **1**
///
/// [Wikipedia](https://en.wikipedia.org/wiki/Skewness#Sample_skewness)
#[derive(Clone, Default, Debug)]
pub struct Skew {}

lazy_info!(
    SKEW_INFO,
    size: 1,
    min_ts_length: 3,
    channels: [Magnitude],
);

impl Skew {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(Skew);

impl<T> FeatureEvaluator<T> for Skew
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m_std = get_nonzero_m_std(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        let m_mean = m.get_mean();
        let n = m.lenf();
        let n_1 = n - T::one();
        let n_2 = n_1 - T::one();
        let third_moment = m
            .as_slice()
            .iter()
            .fold(T::zero(), |sum, &y| sum + (y - m_mean).powi(3));
        Ok(Value::Scalar(third_moment / m_std.powi(3) * n / (n_1 * n_2)))
    }

    scalar_feature_names!(SKEW_INFO, "skew", "skew of magnitude sample");
}
