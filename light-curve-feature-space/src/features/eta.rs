use crate::evaluator::*;

use itertools::Itertools;

/// Von Neummann $\eta$
///
/// $$
/// \eta \equiv \frac1{(N - 1)\\,\sigma_m^2} \sum_{i=0}^{N-2}(m_{i+1} - m_i)^2,
/// $$
/// where $N$ is the number of observations,
/// $\sigma_m = \sqrt{\sum_i (m_i - \langle m \rangle)^2 / (N-1)}$ is the magnitude standard deviation.
///
/// Observations are expected to be sorted by time.
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **2**
/// - Number of features: **1**
///
/// Kim et al. 2014, [DOI:10.1051/0004-6361/201323252](https://doi.org/10.1051/0004-6361/201323252)
#[derive(Clone, Default, Debug)]
pub struct Eta {}

impl Eta {
    pub fn new() -> Self {
        Self {}
    }
}

lazy_info!(
    ETA_INFO,
    size: 1,
    min_ts_length: 2,
    channels: [Magnitude],
);

from_no_parameters!(Eta);

impl<T> FeatureEvaluator<T> for Eta
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m_std2 = get_nonzero_m_std2(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        let value = m
            .as_slice()
            .iter()
            .tuple_windows()
            .map(|(&a, &b)| (b - a).powi(2))
            .sum::<T>()
            / (m.lenf() - T::one())
            / m_std2;
        Ok(Value::Scalar(value))
    }

    scalar_feature_names!(
        ETA_INFO,
        "eta",
        "Von Neummann eta-coefficient for magnitude sample",
    );
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        eta,
        Eta::new(),
        [3.142857142857143],
        [1.0, 2.0, 0.0, 3.0, -1.0, 4.0],
    );
}
