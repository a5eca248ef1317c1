//! Registry-driven selection and extraction of time-series features
//!
//! A [FeatureSpace] selects features from a [Registry] according to a [FeatureSpaceConfig],
//! evaluates them on a [DataSet] and presents the result as an array, a name-keyed map or a list
//! of names.


#[macro_use]
mod macros;

#[macro_use]
mod parameters;
pub use parameters::{FromParameters, ParameterMap, Parameters};

mod channel;
pub use channel::{display_channels, Channel, ChannelSet, ChannelSpec};

mod config;
pub use config::FeatureSpaceConfig;

mod data_set;
pub use data_set::{DataSample, DataSet};

mod error;
pub use error::{
    ChannelParseError, ConfigError, ConfigurationError, DataSetError, EvaluatorError,
    FeatureSpaceError, ParameterError, RegistryError,
};

mod evaluator;
pub use evaluator::{EvaluatorInfo, FeatureEvaluator};

pub mod features;
pub use features::*;

mod float_trait;
pub use float_trait::Float;

mod registry;
pub use registry::{construct, Constructor, Descriptor, Registry};

mod selector;
pub use selector::{FeatureSelector, Selection, SkipReason, SkippedFeature, UnknownFeaturePolicy};

mod sorted_vec;

mod space;
pub use space::{FeatureMap, FeatureSpace, Presentation, PresentationMethod};

mod statistics;

mod value;
pub use value::{flatten, Value};
