use crate::error::ParameterError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;

/// Positional construction parameters of a feature
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(pub Vec<f64>);

/// Construction parameters keyed by feature name
pub type ParameterMap = BTreeMap<String, Parameters>;

impl Parameters {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn empty() -> Self {
        Self(vec![])
    }

    /// Fails if more than `maximum` parameters are given
    pub fn check_len(&self, maximum: usize) -> Result<(), ParameterError> {
        if self.len() > maximum {
            Err(ParameterError::TooMany {
                maximum,
                actual: self.len(),
            })
        } else {
            Ok(())
        }
    }

    /// `index`-th parameter or `default` if it is not given
    pub fn get_or(&self, index: usize, default: f64) -> f64 {
        self.0.get(index).copied().unwrap_or(default)
    }
}

impl From<Vec<f64>> for Parameters {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for Parameters {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl Deref for Parameters {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Construction of a feature from [Parameters]
pub trait FromParameters: Sized {
    fn from_parameters(parameters: &Parameters) -> Result<Self, ParameterError>;
}

/// Implements [FromParameters] for features without parameters
macro_rules! from_no_parameters {
    ($($feature: ty),* $(,)?) => {
        $(
            impl $crate::parameters::FromParameters for $feature {
                fn from_parameters(
                    parameters: &$crate::parameters::Parameters,
                ) -> Result<Self, $crate::error::ParameterError> {
                    parameters.check_len(0)?;
                    Ok(Self::default())
                }
            }
        )*
    };
}

/// Checks that a quantile lies inside the open interval (0, 0.5)
pub(crate) fn check_quantile(name: &'static str, value: f64) -> Result<f32, ParameterError> {
    if value > 0.0 && value < 0.5 {
        Ok(value as f32)
    } else {
        Err(ParameterError::Invalid {
            name,
            value,
            reason: "should be between zero and one half",
        })
    }
}
