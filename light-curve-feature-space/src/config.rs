use crate::channel::{ChannelSet, ChannelSpec};
use crate::error::ConfigError;
use crate::parameters::{ParameterMap, Parameters};
use crate::selector::UnknownFeaturePolicy;

use serde::{Deserialize, Serialize};

/// Configuration of a [FeatureSpace](crate::FeatureSpace)
///
/// ```json
/// {
///     "channels": ["magnitude", "time"],
///     "exclude": ["skew"],
///     "parameters": {"beyond_n_std": [2.0]},
///     "unknown_features": "skip"
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureSpaceConfig {
    /// Available data channels, `"all"` or a list of channel names
    #[serde(default)]
    pub channels: Option<ChannelSpec>,
    /// Explicit feature names
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Construction parameters keyed by feature name
    #[serde(default)]
    pub parameters: ParameterMap,
    #[serde(default)]
    pub unknown_features: UnknownFeaturePolicy,
}

impl FeatureSpaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_channels(mut self, channels: impl Into<ChannelSet>) -> Self {
        self.channels = Some(ChannelSpec::Set(channels.into()));
        self
    }

    pub fn with_all_channels(mut self) -> Self {
        self.channels = Some(ChannelSpec::All);
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = Some(features.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = exclude.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parameters(mut self, feature: &str, parameters: impl Into<Parameters>) -> Self {
        self.parameters.insert(feature.to_owned(), parameters.into());
        self
    }

    pub fn with_unknown_features(mut self, policy: UnknownFeaturePolicy) -> Self {
        self.unknown_features = policy;
        self
    }
}
