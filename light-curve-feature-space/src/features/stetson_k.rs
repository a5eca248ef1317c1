use crate::evaluator::*;

/// Stetson $K$ coefficient described light curve shape
///
/// $$
/// \mathrm{Stetson}~K \equiv \frac{\sum_i\left|\frac{m_i - \bar{m}}{\delta_i}\right|}{\sqrt{N\\,\chi^2}},
/// $$
/// where N is the number of observations,
/// $\bar{m}$ is the weighted mean magnitude
/// and $\chi^2 = \sum_i\left(\frac{m_i - \langle m \rangle}{\delta_i}\right)^2$.
///
/// - Depends on: **magnitude**, **error**
/// - Minimum number of observations: **2**
/// - Number of features: **1**
///
/// P. B. Stetson, 1996. [DOI:10.1086/133808](https://doi.org/10.1086/133808)
#[derive(Clone, Default, Debug)]
pub struct StetsonK {}

lazy_info!(
    STETSON_K_INFO,
    size: 1,
    min_ts_length: 2,
    channels: [Magnitude, Error],
);

impl StetsonK {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(StetsonK);

impl<T> FeatureEvaluator<T> for StetsonK
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let n = ds.sample(Channel::Magnitude)?.lenf();
        let chi2 = get_nonzero_reduced_chi2(ds)? * (n - T::one());
        let mean = ds.get_m_weighted_mean()?;
        let value = ds
            .slice(Channel::Magnitude)?
            .iter()
            .zip(ds.slice(Channel::Error)?.iter())
            .fold(T::zero(), |acc, (&y, &err)| acc + T::abs(y - mean) / err)
            / T::sqrt(n * chi2);
        Ok(Value::Scalar(value))
    }

    scalar_feature_names!(
        STETSON_K_INFO,
        "stetson_k",
        "normalized weighted deviation of magnitude from its weighted mean",
    );
}
