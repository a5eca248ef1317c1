pub use crate::channel::{Channel, ChannelSet};
pub use crate::data_set::DataSet;
pub use crate::error::{EvaluatorError, ParameterError};
pub use crate::float_trait::Float;
pub use crate::parameters::{FromParameters, Parameters};
pub use crate::value::Value;

pub use lazy_static::lazy_static;

use dyn_clonable::*;

/// Static properties of a feature evaluator
#[derive(Clone, Debug)]
pub struct EvaluatorInfo {
    pub size: usize,
    pub min_ts_length: usize,
    pub channels: ChannelSet,
}

/// The trait each feature should implement
#[clonable]
pub trait FeatureEvaluator<T: Float>: Send + Sync + Clone {
    /// Should return the nested feature values. The flattened length and order should
    /// correspond to `get_names()` output
    fn eval(&self, ds: &mut DataSet<T>) -> Result<Value<T>, EvaluatorError>;

    fn get_info(&self) -> &EvaluatorInfo;

    /// Should return the vector of feature names. The length and feature order should
    /// correspond to `eval()` output
    fn get_names(&self) -> Vec<&str>;

    /// Should return the vector of feature descriptions. The length and feature order should
    /// correspond to `eval()` output
    fn get_descriptions(&self) -> Vec<&str>;

    /// Size of the flattened vectors returned by `eval()`, `get_names()` and
    /// `get_descriptions()`
    fn size_hint(&self) -> usize {
        self.get_info().size
    }

    fn min_ts_length(&self) -> usize {
        self.get_info().min_ts_length
    }

    fn required_channels(&self) -> ChannelSet {
        self.get_info().channels
    }

    /// Checks that every required channel is present, long enough and has no NaN
    fn check_data_set(&self, ds: &DataSet<T>) -> Result<(), EvaluatorError> {
        let minimum = self.min_ts_length();
        for channel in self.required_channels().iter() {
            let sample = ds.slice(channel)?;
            if sample.len() < minimum {
                return Err(EvaluatorError::ShortTimeSeries {
                    channel,
                    actual: sample.len(),
                    minimum,
                });
            }
            if sample.iter().any(|x| x.is_nan()) {
                return Err(EvaluatorError::NaN(channel));
            }
        }
        Ok(())
    }
}

pub fn get_nonzero_m_std<T: Float>(ds: &mut DataSet<T>) -> Result<T, EvaluatorError> {
    let std = ds.sample(Channel::Magnitude)?.get_std();
    if std.is_zero() {
        Err(EvaluatorError::FlatTimeSeries)
    } else {
        Ok(std)
    }
}

pub fn get_nonzero_m_std2<T: Float>(ds: &mut DataSet<T>) -> Result<T, EvaluatorError> {
    let std2 = ds.sample(Channel::Magnitude)?.get_std2();
    if std2.is_zero() {
        Err(EvaluatorError::FlatTimeSeries)
    } else {
        Ok(std2)
    }
}

pub fn get_nonzero_reduced_chi2<T: Float>(ds: &mut DataSet<T>) -> Result<T, EvaluatorError> {
    let reduced_chi2 = ds.get_m_reduced_chi2()?;
    if reduced_chi2.is_zero() {
        Err(EvaluatorError::FlatTimeSeries)
    } else {
        Ok(reduced_chi2)
    }
}
