use crate::channel::Channel;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EvaluatorError {
    #[error("{channel} length {actual} is smaller than the minimum required length {minimum}")]
    ShortTimeSeries {
        channel: Channel,
        actual: usize,
        minimum: usize,
    },

    #[error("feature value is undefined for a flat time series")]
    FlatTimeSeries,

    #[error("zero division: {0}")]
    ZeroDivision(&'static str),

    #[error("channel {0} is required but absent in the data set")]
    MissingChannel(Channel),

    #[error("channel {0} contains NaN")]
    NaN(Channel),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParameterError {
    #[error("at most {maximum} parameters are accepted, {actual} given")]
    TooMany { maximum: usize, actual: usize },

    #[error("parameter {name} = {value} is invalid: {reason}")]
    Invalid {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegistryError {
    #[error("feature {0} is not registered")]
    NotFound(String),

    #[error("feature {0} is already registered")]
    Duplicate(String),

    #[error("default construction of feature {name} failed: {source}")]
    Construction {
        name: String,
        source: ParameterError,
    },

    #[error("feature {0} declares no outputs")]
    EmptyOutput(String),

    #[error("scalar feature {name} names its output {output}")]
    ScalarName { name: String, output: String },

    #[error("feature {name} has {outputs} outputs, but {descriptions} descriptions")]
    DescriptionMismatch {
        name: String,
        outputs: usize,
        descriptions: usize,
    },
}

/// Fatal problems of a feature space configuration
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigurationError {
    #[error("could not find feature {0}")]
    UnknownFeature(String),

    #[error("invalid parameters of feature {feature}: {source}")]
    InvalidParameters {
        feature: String,
        source: ParameterError,
    },

    #[error("feature {feature} declares {expected} outputs, but its instance has {actual}")]
    OutputMismatch {
        feature: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FeatureSpaceError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("error in feature {feature}: {source}")]
    Evaluation {
        feature: String,
        source: EvaluatorError,
    },

    #[error("feature {feature} returned {actual} values instead of {expected}")]
    OutputSize {
        feature: String,
        expected: usize,
        actual: usize,
    },

    #[error("features are not computed yet")]
    NotComputed,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DataSetError {
    #[error("data set accepts at most {maximum} rows, {actual} given")]
    TooManyRows { maximum: usize, actual: usize },

    #[error("{channel} has length {actual}, but {reference} has length {expected}")]
    LengthMismatch {
        channel: Channel,
        reference: Channel,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("channel specification should be \"all\" or a list of channels, not \"{0}\"")]
    InvalidChannelSpec(String),
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown channel {0}")]
pub struct ChannelParseError(pub String);
