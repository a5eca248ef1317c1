use crate::evaluator::*;

use conv::ConvUtil;

/// Fraction of observations beyond $n\\,\sigma\_m$ from the mean magnitude $\langle m \rangle$
///
/// $$
/// \mathrm{beyond}~n\\,\sigma\_m \equiv \frac{\sum\_i I\_{|m - \langle m \rangle| > n\\,\sigma\_m}(m_i)}{N},
/// $$
/// where $I$ is the [indicator function](https://en.wikipedia.org/wiki/Indicator_function),
/// $N$ is the number of observations,
/// $\langle m \rangle$ is the mean magnitude
/// and $\sigma_m = \sqrt{\sum_i (m_i - \langle m \rangle)^2 / (N-1)}$ is the magnitude standard deviation.
///
/// - Depends on: **magnitude**
/// - Minimum number of observations: **2**
/// - Number of features: **1**
/// - Parameters: `[nstd]`, default `[1.0]`
///
/// D’Isanto et al. 2016 [DOI:10.1093/mnras/stw157](https://doi.org/10.1093/mnras/stw157)
#[derive(Clone, Debug)]
pub struct BeyondNStd {
    nstd: f64,
}

impl BeyondNStd {
    pub fn new(nstd: f64) -> Result<Self, ParameterError> {
        if nstd > 0.0 {
            Ok(Self { nstd })
        } else {
            Err(ParameterError::Invalid {
                name: "nstd",
                value: nstd,
                reason: "should be positive",
            })
        }
    }

    #[inline]
    pub fn default_nstd() -> f64 {
        1.0
    }
}

impl Default for BeyondNStd {
    fn default() -> Self {
        Self {
            nstd: Self::default_nstd(),
        }
    }
}

impl FromParameters for BeyondNStd {
    fn from_parameters(parameters: &Parameters) -> Result<Self, ParameterError> {
        parameters.check_len(1)?;
        Self::new(parameters.get_or(0, Self::default_nstd()))
    }
}

lazy_info!(
    BEYOND_N_STD_INFO,
    size: 1,
    min_ts_length: 2,
    channels: [Magnitude],
);

impl<T> FeatureEvaluator<T> for BeyondNStd
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let m = ds.sample(Channel::Magnitude)?;
        let m_mean = m.get_mean();
        let threshold = m.get_std() * self.nstd.approx_as::<T>().unwrap();
        let count_beyond = m
            .as_slice()
            .iter()
            .filter(|&&y| T::abs(y - m_mean) > threshold)
            .count();
        Ok(Value::Scalar(count_beyond.value_as::<T>().unwrap() / m.lenf()))
    }

    scalar_feature_names!(
        BEYOND_N_STD_INFO,
        "beyond_n_std",
        "fraction of observations which magnitudes are beyond n standard deviations from the \
        mean magnitude",
    );
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;
    use crate::tests::*;

    feature_test!(
        beyond_n_std,
        BeyondNStd::default(),
        [0.2],
        [1.0, 2.0, 3.0, 4.0, 100.0],
    );

    feature_test!(
        beyond_2_std,
        BeyondNStd::new(2.0).unwrap(),
        [0.0],
        [1.0, 2.0, 3.0, 4.0, 100.0],
    );

    #[test]
    fn beyond_n_std_parameters() {
        let fe = BeyondNStd::from_parameters(&vec![2.0].into()).unwrap();
        assert_eq!(fe.nstd, 2.0);
        assert!(BeyondNStd::from_parameters(&vec![-1.0].into()).is_err());
        assert_eq!(
            BeyondNStd::from_parameters(&vec![1.0, 2.0].into()).unwrap_err(),
            ParameterError::TooMany {
                maximum: 1,
                actual: 2
            }
        );
    }
}
