use crate::channel::ChannelSet;
use crate::error::{ParameterError, RegistryError};
use crate::evaluator::FeatureEvaluator;
use crate::features::*;
use crate::float_trait::Float;
use crate::parameters::{FromParameters, Parameters};

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

/// Builds a feature instance from its construction parameters
pub type Constructor<T> = fn(&Parameters) -> Result<Box<dyn FeatureEvaluator<T>>, ParameterError>;

/// [Constructor] of any feature implementing [FromParameters]
pub fn construct<T, F>(parameters: &Parameters) -> Result<Box<dyn FeatureEvaluator<T>>, ParameterError>
where
    T: Float,
    F: FromParameters + FeatureEvaluator<T> + 'static,
{
    Ok(Box::new(F::from_parameters(parameters)?))
}

/// Registered feature: its name, declared channels and outputs, and how to build it
///
/// Channels, output names and descriptions are taken from the default instance
#[derive(Clone)]
pub struct Descriptor<T> {
    name: String,
    required_channels: ChannelSet,
    output_names: Vec<String>,
    descriptions: Vec<String>,
    declaration_order: usize,
    constructor: Constructor<T>,
}

impl<T> Descriptor<T>
where
    T: Float,
{
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_channels(&self) -> ChannelSet {
        self.required_channels
    }

    pub fn output_names(&self) -> &[String] {
        &self.output_names
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// Position of the feature in the registration sequence
    pub fn declaration_order(&self) -> usize {
        self.declaration_order
    }

    /// Number of flattened outputs
    pub fn arity(&self) -> usize {
        self.output_names.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.arity() == 1
    }

    /// New instance, default constructed if `parameters` is `None`
    pub fn instantiate(
        &self,
        parameters: Option<&Parameters>,
    ) -> Result<Box<dyn FeatureEvaluator<T>>, ParameterError> {
        match parameters {
            Some(parameters) => (self.constructor)(parameters),
            None => (self.constructor)(&Parameters::empty()),
        }
    }
}

impl<T> fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("required_channels", &self.required_channels)
            .field("output_names", &self.output_names)
            .field("declaration_order", &self.declaration_order)
            .finish()
    }
}

/// Catalog of features keyed by unique name
///
/// Keeps two orders: declaration order, the order features were registered in, and discovery
/// order, byte-wise ascending by name
#[derive(Clone, Debug)]
pub struct Registry<T> {
    entries: Vec<Descriptor<T>>,
    index: HashMap<String, usize>,
    discovery: Vec<usize>,
}

impl<T> Registry<T>
where
    T: Float,
{
    pub fn new() -> Self {
        Self {
            entries: vec![],
            index: HashMap::new(),
            discovery: vec![],
        }
    }

    /// Static catalog of the built-in features
    pub fn builtin() -> &'static Self {
        T::builtin_registry()
    }

    /// Adds a feature, probing its default instance for channels and outputs
    pub fn register(
        &mut self,
        name: &str,
        constructor: Constructor<T>,
    ) -> Result<&mut Self, RegistryError> {
        if self.index.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_owned()));
        }
        let instance =
            constructor(&Parameters::empty()).map_err(|source| RegistryError::Construction {
                name: name.to_owned(),
                source,
            })?;
        let output_names: Vec<String> = instance
            .get_names()
            .into_iter()
            .map(str::to_owned)
            .collect();
        match output_names.as_slice() {
            [] => return Err(RegistryError::EmptyOutput(name.to_owned())),
            [output] if output != name => {
                return Err(RegistryError::ScalarName {
                    name: name.to_owned(),
                    output: output.clone(),
                })
            }
            _ => {}
        }
        let descriptions: Vec<String> = instance
            .get_descriptions()
            .into_iter()
            .map(str::to_owned)
            .collect();
        if descriptions.len() != output_names.len() {
            return Err(RegistryError::DescriptionMismatch {
                name: name.to_owned(),
                outputs: output_names.len(),
                descriptions: descriptions.len(),
            });
        }

        let declaration_order = self.entries.len();
        self.entries.push(Descriptor {
            name: name.to_owned(),
            required_channels: instance.required_channels(),
            output_names,
            descriptions,
            declaration_order,
            constructor,
        });
        self.index.insert(name.to_owned(), declaration_order);
        let entries = &self.entries;
        let position = self
            .discovery
            .partition_point(|&i| entries[i].name.as_bytes() < name.as_bytes());
        self.discovery.insert(position, declaration_order);
        Ok(self)
    }

    /// Registers a feature built by [FromParameters]
    pub fn register_feature<F>(&mut self, name: &str) -> Result<&mut Self, RegistryError>
    where
        F: FromParameters + FeatureEvaluator<T> + 'static,
    {
        self.register(name, construct::<T, F>)
    }

    pub fn lookup(&self, name: &str) -> Result<&Descriptor<T>, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_owned()))
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor<T>> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Descriptors in declaration order
    pub fn all(&self) -> &[Descriptor<T>] {
        &self.entries
    }

    /// Descriptors in discovery order
    pub fn discover(&self) -> impl Iterator<Item = &Descriptor<T>> + '_ {
        self.discovery.iter().map(move |&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Registry<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_catalog<T: Float>() -> Result<Registry<T>, RegistryError> {
    let mut registry = Registry::new();
    registry
        .register_feature::<Amplitude>("amplitude")?
        .register_feature::<Cusum>("cusum")?
        .register_feature::<StetsonK>("stetson_k")?
        .register_feature::<MeanVariance>("mean_variance")?
        .register_feature::<BeyondNStd>("beyond_n_std")?
        .register_feature::<Kurtosis>("kurtosis")?
        .register_feature::<StandardDeviation>("standard_deviation")?
        .register_feature::<Skew>("skew")?
        .register_feature::<MaximumSlope>("maximum_slope")?
        .register_feature::<MedianAbsoluteDeviation>("median_absolute_deviation")?
        .register_feature::<MedianBufferRangePercentage>("median_buffer_range_percentage")?
        .register_feature::<PercentAmplitude>("percent_amplitude")?
        .register_feature::<LinearTrend>("linear_trend")?
        .register_feature::<Eta>("eta")?
        .register_feature::<Mean>("mean")?
        .register_feature::<InterPercentileRange>("inter_percentile_range")?
        .register_feature::<WeightedMean>("weighted_mean")?
        .register_feature::<ReducedChi2>("reduced_chi2")?
        .register_feature::<FluxPercentileRatio>("flux_percentile_ratio")?
        .register_feature::<PercentDifferenceMagnitudePercentile>(
            "percent_difference_magnitude_percentile",
        )?
        .register_feature::<ExcessVariance>("excess_variance")?
        .register_feature::<Color>("color")?
        .register_feature::<InterPercentileRangeColor>("inter_percentile_range_color")?
        .register_feature::<Duration>("duration")?
        .register_feature::<ObservationCount>("observation_count")?;
    Ok(registry)
}

lazy_static! {
    pub(crate) static ref BUILTIN_F32: Registry<f32> =
        builtin_catalog().expect("built-in feature catalog should be consistent");
    pub(crate) static ref BUILTIN_F64: Registry<f64> =
        builtin_catalog().expect("built-in feature catalog should be consistent");
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::channel::Channel;
    use crate::evaluator::{EvaluatorInfo, Value};
    use crate::DataSet;
    use crate::EvaluatorError;

    use lazy_static::lazy_static;

    lazy_static! {
        static ref SILENT_INFO: EvaluatorInfo = EvaluatorInfo {
            size: 0,
            min_ts_length: 0,
            channels: Channel::Magnitude.into(),
        };
    }

    #[derive(Clone, Default)]
    struct Silent {}

    from_no_parameters!(Silent);

    impl FeatureEvaluator<f64> for Silent {
        fn eval(&self, _ds: &mut DataSet<f64>) -> Result<Value<f64>, EvaluatorError> {
            Ok(Value::Sequence(vec![]))
        }

        fn get_info(&self) -> &EvaluatorInfo {
            &SILENT_INFO
        }

        fn get_names(&self) -> Vec<&str> {
            vec![]
        }

        fn get_descriptions(&self) -> Vec<&str> {
            vec![]
        }
    }

    lazy_static! {
        static ref UNDESCRIBED_INFO: EvaluatorInfo = EvaluatorInfo {
            size: 2,
            min_ts_length: 1,
            channels: Channel::Magnitude.into(),
        };
    }

    #[derive(Clone, Default)]
    struct Undescribed {}

    from_no_parameters!(Undescribed);

    impl FeatureEvaluator<f64> for Undescribed {
        fn eval(&self, _ds: &mut DataSet<f64>) -> Result<Value<f64>, EvaluatorError> {
            Ok(Value::flat(vec![0.0, 1.0]))
        }

        fn get_info(&self) -> &EvaluatorInfo {
            &UNDESCRIBED_INFO
        }

        fn get_names(&self) -> Vec<&str> {
            vec!["undescribed_0", "undescribed_1"]
        }

        fn get_descriptions(&self) -> Vec<&str> {
            vec![]
        }
    }

    fn failing(_parameters: &Parameters) -> Result<Box<dyn FeatureEvaluator<f64>>, ParameterError> {
        Err(ParameterError::Invalid {
            name: "x",
            value: 0.0,
            reason: "always fails",
        })
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        let registry = Registry::<f64>::builtin();
        assert_eq!(registry.len(), 25);
        assert_eq!(Registry::<f32>::builtin().len(), registry.len());
        for (i, descriptor) in registry.all().iter().enumerate() {
            assert_eq!(descriptor.declaration_order(), i);
            assert_eq!(descriptor.arity(), descriptor.descriptions().len());
            assert!(!descriptor.required_channels().is_empty());
            if descriptor.is_scalar() {
                assert_eq!(descriptor.output_names(), [descriptor.name()]);
            }
        }
    }

    #[test]
    fn builtin_declaration_order() {
        let names: Vec<_> = Registry::<f64>::builtin()
            .all()
            .iter()
            .take(3)
            .map(Descriptor::name)
            .collect();
        assert_eq!(names, ["amplitude", "cusum", "stetson_k"]);
    }

    #[test]
    fn discovery_is_alphabetical() {
        let names: Vec<_> = Registry::<f64>::builtin()
            .discover()
            .map(Descriptor::name)
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 25);
    }

    #[test]
    fn builtin_multi_output() {
        let registry = Registry::<f64>::builtin();
        assert_eq!(
            registry.lookup("linear_trend").unwrap().output_names(),
            ["linear_trend", "linear_trend_sigma"]
        );
        assert_eq!(registry.lookup("flux_percentile_ratio").unwrap().arity(), 5);
        assert_eq!(
            registry
                .lookup("inter_percentile_range_color")
                .unwrap()
                .required_channels(),
            Channel::AlignedMagnitude | Channel::AlignedMagnitude2
        );
    }

    #[test]
    fn lookup_unknown() {
        assert_eq!(
            Registry::<f64>::builtin().lookup("period").unwrap_err(),
            RegistryError::NotFound("period".to_owned())
        );
    }

    #[test]
    fn instantiate_with_parameters() {
        let descriptor = Registry::<f64>::builtin().lookup("beyond_n_std").unwrap();
        assert!(descriptor.instantiate(None).is_ok());
        assert!(descriptor.instantiate(Some(&vec![2.0].into())).is_ok());
        assert_eq!(
            descriptor.instantiate(Some(&vec![2.0, 3.0].into())).err(),
            Some(ParameterError::TooMany {
                maximum: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn register_duplicate() {
        let mut registry = Registry::<f64>::new();
        registry.register_feature::<Mean>("mean").unwrap();
        assert_eq!(
            registry.register_feature::<Mean>("mean").unwrap_err(),
            RegistryError::Duplicate("mean".to_owned())
        );
    }

    #[test]
    fn register_scalar_with_wrong_name() {
        let mut registry = Registry::<f64>::new();
        assert_eq!(
            registry.register_feature::<Mean>("average").unwrap_err(),
            RegistryError::ScalarName {
                name: "average".to_owned(),
                output: "mean".to_owned()
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn register_empty_output() {
        let mut registry = Registry::<f64>::new();
        assert_eq!(
            registry.register_feature::<Silent>("silent").unwrap_err(),
            RegistryError::EmptyOutput("silent".to_owned())
        );
    }

    #[test]
    fn register_without_descriptions() {
        let mut registry = Registry::<f64>::new();
        assert_eq!(
            registry
                .register_feature::<Undescribed>("undescribed")
                .unwrap_err(),
            RegistryError::DescriptionMismatch {
                name: "undescribed".to_owned(),
                outputs: 2,
                descriptions: 0,
            }
        );
        assert!(!registry.contains("undescribed"));
    }

    #[test]
    fn register_failing_construction() {
        let mut registry = Registry::<f64>::new();
        assert!(matches!(
            registry.register("failing", failing),
            Err(RegistryError::Construction { .. })
        ));
    }

    #[test]
    fn discovery_differs_from_declaration() {
        let mut registry = Registry::<f64>::new();
        registry
            .register_feature::<Skew>("skew")
            .unwrap()
            .register_feature::<Amplitude>("amplitude")
            .unwrap()
            .register_feature::<Mean>("mean")
            .unwrap();
        let declared: Vec<_> = registry.all().iter().map(Descriptor::name).collect();
        let discovered: Vec<_> = registry.discover().map(Descriptor::name).collect();
        assert_eq!(declared, ["skew", "amplitude", "mean"]);
        assert_eq!(discovered, ["amplitude", "mean", "skew"]);
    }
}
