use crate::config::FeatureSpaceConfig;
use crate::data_set::DataSet;
use crate::error::{ConfigurationError, FeatureSpaceError};
use crate::evaluator::FeatureEvaluator;
use crate::float_trait::Float;
use crate::registry::Registry;
use crate::selector::{FeatureSelector, Selection};

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;
use tracing::{debug, warn};

/// Shape of the output of [FeatureSpace::present]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationMethod {
    /// Values ordered like [PresentationMethod::Features]
    Array,
    /// Name to value mapping
    Dict,
    /// Flattened output names
    Features,
    /// Values in evaluation order
    Raw,
}

impl FromStr for PresentationMethod {
    type Err = Infallible;

    /// Any string other than `array`, `dict` or `features` means [PresentationMethod::Raw]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "array" => Self::Array,
            "dict" => Self::Dict,
            "features" => Self::Features,
            _ => Self::Raw,
        })
    }
}

impl From<&str> for PresentationMethod {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(method) => method,
            Err(infallible) => match infallible {},
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Presentation<T> {
    Array(Vec<T>),
    Dict(FeatureMap<T>),
    Features(Vec<String>),
    Raw(Vec<T>),
}

/// Feature values keyed by output name, keeping insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureMap<T> {
    names: Vec<String>,
    values: Vec<T>,
}

impl<T> FeatureMap<T>
where
    T: Copy,
{
    pub fn get(&self, name: &str) -> Option<T> {
        self.names
            .iter()
            .position(|x| x == name)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn keys(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<T> FromIterator<(String, T)> for FeatureMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let (names, values) = iter.into_iter().unzip();
        Self { names, values }
    }
}

impl<T> Serialize for FeatureMap<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.names.len()))?;
        for (name, value) in self.names.iter().zip(self.values.iter()) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[derive(Clone)]
struct Plan<T: Float> {
    feature: String,
    evaluator: Box<dyn FeatureEvaluator<T>>,
}

impl<T> Plan<T>
where
    T: Float,
{
    fn evaluate(&self, ds: &mut DataSet<T>) -> Result<Vec<T>, FeatureSpaceError> {
        let evaluation_error = |source| FeatureSpaceError::Evaluation {
            feature: self.feature.clone(),
            source,
        };
        self.evaluator
            .check_data_set(ds)
            .map_err(evaluation_error)?;
        let value = self.evaluator.eval(ds).map_err(evaluation_error)?;
        let expected = self.evaluator.size_hint();
        if value.len() != expected {
            return Err(FeatureSpaceError::OutputSize {
                feature: self.feature.clone(),
                expected,
                actual: value.len(),
            });
        }
        Ok(value.flatten())
    }
}

/// Selected and configured features, and the result of their latest evaluation
///
/// Evaluation mutates the space, clone it to compute in several threads
#[derive(Clone)]
pub struct FeatureSpace<T: Float> {
    selection: Selection,
    plans: Vec<Plan<T>>,
    result: Option<Vec<T>>,
}

impl<T> FeatureSpace<T>
where
    T: Float,
{
    /// Feature space over the built-in features
    ///
    /// Requested names absent in the registry fail construction unless the configuration
    /// skips unknown features
    pub fn new(config: &FeatureSpaceConfig) -> Result<Self, ConfigurationError> {
        Self::with_registry(T::builtin_registry(), config)
    }

    pub fn with_registry(
        registry: &Registry<T>,
        config: &FeatureSpaceConfig,
    ) -> Result<Self, ConfigurationError> {
        let selection = FeatureSelector::new(registry)
            .with_unknown_features(config.unknown_features)
            .select(
                config.channels.as_ref(),
                config.features.as_deref(),
                &config.exclude,
                &config.parameters,
            )?;
        let plans = selection
            .features()
            .iter()
            .map(|feature| {
                let descriptor = registry
                    .lookup(feature)
                    .map_err(|_| ConfigurationError::UnknownFeature(feature.clone()))?;
                let evaluator = descriptor
                    .instantiate(config.parameters.get(feature))
                    .map_err(|source| ConfigurationError::InvalidParameters {
                        feature: feature.clone(),
                        source,
                    })?;
                if evaluator.size_hint() != descriptor.arity() {
                    return Err(ConfigurationError::OutputMismatch {
                        feature: feature.clone(),
                        expected: descriptor.arity(),
                        actual: evaluator.size_hint(),
                    });
                }
                Ok(Plan {
                    feature: feature.clone(),
                    evaluator,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            selection,
            plans,
            result: None,
        })
    }

    /// Evaluates every feature, an error of any of them fails the whole call
    pub fn compute(&mut self, ds: &mut DataSet<T>) -> Result<&mut Self, FeatureSpaceError> {
        self.result = None;
        let mut values = Vec::with_capacity(self.selection.output_names().len());
        for plan in self.plans.iter() {
            values.extend(plan.evaluate(ds)?);
        }
        debug!(
            features = self.plans.len(),
            outputs = values.len(),
            "features computed"
        );
        self.result = Some(values);
        Ok(self)
    }

    /// Evaluates every feature, outputs of failed features are filled with `fill_value`
    pub fn compute_or_fill(&mut self, ds: &mut DataSet<T>, fill_value: T) -> &mut Self {
        let mut values = Vec::with_capacity(self.selection.output_names().len());
        for plan in self.plans.iter() {
            match plan.evaluate(ds) {
                Ok(v) => values.extend(v),
                Err(error) => {
                    warn!(feature = %plan.feature, %error, "feature outputs are filled");
                    values.extend(std::iter::repeat(fill_value).take(plan.evaluator.size_hint()));
                }
            }
        }
        self.result = Some(values);
        self
    }

    pub fn present(
        &self,
        method: impl Into<PresentationMethod>,
    ) -> Result<Presentation<T>, FeatureSpaceError> {
        Ok(match method.into() {
            PresentationMethod::Array => Presentation::Array(self.array()?),
            PresentationMethod::Dict => Presentation::Dict(self.dict()?),
            PresentationMethod::Features => Presentation::Features(self.features()),
            PresentationMethod::Raw => Presentation::Raw(self.raw()?.to_vec()),
        })
    }

    /// Values ordered like [features](FeatureSpace::features)
    pub fn array(&self) -> Result<Vec<T>, FeatureSpaceError> {
        let raw = self.raw()?;
        Ok(self
            .selection
            .presentation_index()
            .into_iter()
            .map(|i| raw[i])
            .collect())
    }

    pub fn dict(&self) -> Result<FeatureMap<T>, FeatureSpaceError> {
        Ok(self.features().into_iter().zip(self.array()?).collect())
    }

    /// Flattened output names, alphabetical if features were sorted by declaration order
    pub fn features(&self) -> Vec<String> {
        let names = self.selection.output_names();
        self.selection
            .presentation_index()
            .into_iter()
            .map(|i| names[i].clone())
            .collect()
    }

    /// Values in evaluation order, aligned with [Selection::output_names]
    pub fn raw(&self) -> Result<&[T], FeatureSpaceError> {
        self.result
            .as_deref()
            .ok_or(FeatureSpaceError::NotComputed)
    }

    /// Selected feature names in evaluation order
    pub fn feature_list(&self) -> &[String] {
        self.selection.features()
    }

    /// Output descriptions ordered like [features](FeatureSpace::features)
    ///
    /// Outputs of an instance without a description get an empty one
    pub fn descriptions(&self) -> Vec<&str> {
        let descriptions: Vec<&str> = self
            .plans
            .iter()
            .flat_map(|plan| {
                let mut descriptions = plan.evaluator.get_descriptions();
                descriptions.resize(plan.evaluator.size_hint(), "");
                descriptions
            })
            .collect();
        self.selection
            .presentation_index()
            .into_iter()
            .map(|i| descriptions[i])
            .collect()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

impl<T> fmt::Debug for FeatureSpace<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureSpace")
            .field("selection", &self.selection)
            .field("result", &self.result)
            .finish()
    }
}
