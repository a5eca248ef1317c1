use crate::evaluator::*;

/// Excess kurtosis of magnitude
///
/// $$
/// G_2 \equiv \frac{N\\,(N + 1)}{(N - 1)(N - 2)(N - 3)} \frac{\sum_i(m_i - \langle m \rangle)^4}{\sigma_m^4}
/// \- 3\frac{(N - 1)^2}{(N - 2)(N - 3)},
/// $$
/// where $N$ is the number of observations,
/// $\langle m \rangle$ is the mean magnitude,
/// $\sigma_m = \sqrt{\sum_i (m_i - \langle m \rangle)^2 / (N-1)}$ is the magnitude standard deviation.
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **4**
/// - Number of features: **1**
///
/// [Wikipedia](https://en.wikipedia.org/wiki/Kurtosis#Estimators_of_population_kurtosis)
#[derive(Clone, Default, Debug)]
pub struct Kurtosis {}

lazy_info!(
    KURTOSIS_INFO,
    size: 1,
    min_ts_length: 4,
    channels: [Magnitude],
);

impl Kurtosis {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(Kurtosis);

impl<T> FeatureEvaluator<T> for Kurtosis
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m_std2 = get_nonzero_m_std2(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        let m_mean = m.get_mean();
        let n = m.lenf();
        let n1 = n + T::one();
        let n_1 = n - T::one();
        let n_2 = n - T::two();
        let n_3 = n - T::three();
        let forth_moment = m
            .as_slice()
            .iter()
            .fold(T::zero(), |sum, &y| sum + (y - m_mean).powi(4));
        let value = forth_moment / m_std2.powi(2) * n * n1 / (n_1 * n_2 * n_3)
            - T::three() * n_1.powi(2) / (n_2 * n_3);
        Ok(Value::Scalar(value))
    }

    scalar_feature_names!(
        KURTOSIS_INFO,
        "kurtosis",
        "unbiased excess kurtosis of magnitudes",
    );
}
