use crate::evaluator::*;

/// Measure of the variability amplitude
///
/// $$
/// \frac{\sigma_m^2 - \langle \delta^2 \rangle}{\langle m \rangle^2},
/// $$
/// where $\langle \delta^2 \rangle$ is the mean of squared error,
/// $\sigma_m$ is the magnitude standard deviation.
/// Note that this definition differs from
/// [Sánchez et al. 2017](https://doi.org/10.3847/1538-4357/aa9188)
///
/// - Depends on: **magnitude**, **magnitude error**
/// - Minimum number of observations: **2**
/// - Number of features: **1**
#[derive(Clone, Default, Debug)]
pub struct ExcessVariance {}

lazy_info!(
    EXCESS_VARIANCE_INFO,
    size: 1,
    min_ts_length: 2,
    channels: [Magnitude, Error],
);

impl ExcessVariance {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(ExcessVariance);

impl<T> FeatureEvaluator<T> for ExcessVariance
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let err = ds.sample(Channel::Error)?;
        let mean_err2 = err.as_slice().iter().map(|&e| e.powi(2)).sum::<T>() / err.lenf();
        let m = ds.sample(Channel::Magnitude)?;
        let m_mean = m.get_mean();
        if m_mean.is_zero() {
            return Err(EvaluatorError::ZeroDivision("magnitude mean is zero"));
        }
        Ok(Value::Scalar((m.get_std2() - mean_err2) / m_mean.powi(2)))
    }

    scalar_feature_names!(
        EXCESS_VARIANCE_INFO,
        "excess_variance",
        "magnitude variance excess over mean squared error, normalized by squared mean",
    );
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        excess_variance,
        ExcessVariance::new(),
        [0.013990292602750132],
        [12.77883145, 18.89988406, 17.55633632, 18.36073996, 11.83854198],
        [0.0, 1.0, 2.0, 3.0, 4.0],
        [7.7973377_f64, 9.45495344, 3.11500361, 7.71464925, 9.30566326]
            .iter()
            .map(|x| x.sqrt())
            .collect::<Vec<_>>(),
    );

    #[test]
    fn excess_variance_zero_mean() {
        let m = [-1.0, 1.0, -1.0, 1.0];
        let err = [0.1; 4];
        let mut ds = DataSet::new()
            .with_channel(Channel::Magnitude, &m)
            .unwrap()
            .with_channel(Channel::Error, &err)
            .unwrap();
        assert!(matches!(
            ExcessVariance::new().eval(&mut ds),
            Err(EvaluatorError::ZeroDivision(_))
        ));
    }
}
