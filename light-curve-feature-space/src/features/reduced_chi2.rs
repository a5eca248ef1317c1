use crate::evaluator::*;

/// Reduced $\chi^2$ of magnitude measurements
///
/// $$
/// \mathrm{reduced~}\chi^2 \equiv \frac1{N-1} \sum_i\left(\frac{m_i - \bar{m}}{\delta\_i}\right)^2,
/// $$
/// where $N$ is the number of observations,
/// and $\bar{m}$ is the weighted mean magnitude.
///
/// - Depends on: **magnitude**, **magnitude error**
/// - Minimum number of observations: **2**
/// - Number of features: **1**
#[derive(Clone, Default, Debug)]
pub struct ReducedChi2 {}

lazy_info!(
    REDUCED_CHI2_INFO,
    size: 1,
    min_ts_length: 2,
    channels: [Magnitude, Error],
);

impl ReducedChi2 {
    pub fn new() -> Self {
        Self {}
    }
}

from_no_parameters!(ReducedChi2);

impl<T> FeatureEvaluator<T> for ReducedChi2
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        Ok(Value::Scalar(ds.get_m_reduced_chi2()?))
    }

    scalar_feature_names!(
        REDUCED_CHI2_INFO,
        "reduced_chi2",
        "reduced chi-squared of magnitude relative to its weighted mean",
    );
}
