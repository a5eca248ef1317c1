use crate::evaluator::*;

/// The slope and its error of the light curve in the linear fit
///
/// Least squares fit of the linear stochastic model with Gaussian noise described by observation
/// errors $\\{\delta_i\\}$ ignored:
/// $$
/// m_i = c + \mathrm{slope}\\,t_i + \delta_i \varepsilon_i,
/// $$
/// where $c$ is a constant,
/// $\\{\varepsilon_i\\}$ are standard distributed random variables.
///
/// - Depends on: **time**, **magnitude**
/// - Minimum number of observations: **3**
/// - Number of features: **2**
#[derive(Clone, Default, Debug)]
pub struct LinearTrend {}

impl LinearTrend {
    pub fn new() -> Self {
        Self {}
    }
}

lazy_info!(
    LINEAR_TREND_INFO,
    size: 2,
    min_ts_length: 3,
    channels: [Magnitude, Time],
);

from_no_parameters!(LinearTrend);

// See Press et al. sec. 15.2 Fitting Data to a Straight Line, p. 661
impl<T> FeatureEvaluator<T> for LinearTrend
where
    T: Float,
{
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError> {
        self.check_data_set(ds)?;
        let t_mean = ds.sample(Channel::Time)?.get_mean();
        let t = ds.slice(Channel::Time)?;
        let m = ds.slice(Channel::Magnitude)?;
        let m_sample = ds.sample(Channel::Magnitude)?;
        let n = m_sample.lenf();
        let m_mean = m_sample.get_mean();
        let (stt, sty) = t
            .iter()
            .zip(m.iter())
            .fold((T::zero(), T::zero()), |(stt, sty), (&x, &y)| {
                let dt = x - t_mean;
                (stt + dt.powi(2), sty + dt * y)
            });
        if stt.is_zero() {
            return Err(EvaluatorError::ZeroDivision(
                "all observations have the same time",
            ));
        }
        let slope = sty / stt;
        let intercept = m_mean - slope * t_mean;
        let chi2 = t
            .iter()
            .zip(m.iter())
            .fold(T::zero(), |chi2, (&x, &y)| {
                chi2 + (y - intercept - slope * x).powi(2)
            });
        let slope_sigma = T::sqrt(chi2 / (n - T::two()) / stt);
        Ok(Value::flat(vec![slope, slope_sigma]))
    }

    fn get_info(&self) -> &EvaluatorInfo {
        &LINEAR_TREND_INFO
    }

    fn get_names(&self) -> Vec<&str> {
        vec!["linear_trend", "linear_trend_sigma"]
    }

    fn get_descriptions(&self) -> Vec<&str> {
        vec![
            "linear trend without respect to observation errors",
            "error of slope of linear fit without respect to observation errors",
        ]
    }
}
