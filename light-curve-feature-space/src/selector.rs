use crate::channel::{display_channels, ChannelSet, ChannelSpec};
use crate::error::ConfigurationError;
use crate::float_trait::Float;
use crate::parameters::ParameterMap;
use crate::registry::{Descriptor, Registry};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// What to do with feature names absent in the registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFeaturePolicy {
    /// Drop the name with a warning and record it in [Selection::skipped]
    Skip,
    /// Fail with [ConfigurationError::UnknownFeature]
    Error,
}

/// Unknown names are fatal unless [UnknownFeaturePolicy::Skip] is chosen explicitly
impl Default for UnknownFeaturePolicy {
    fn default() -> Self {
        Self::Error
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SkipReason {
    MissingChannels {
        required: ChannelSet,
        missing: ChannelSet,
    },
    Unknown,
}

/// Feature left out of a [Selection]
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedFeature {
    pub feature: String,
    pub reason: SkipReason,
}

/// Ordered subset of a registry chosen for one configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    features: Vec<String>,
    output_names: Vec<String>,
    sorted: bool,
    alphabetical: Vec<usize>,
    skipped: Vec<SkippedFeature>,
}

impl Selection {
    fn new<T: Float>(descriptors: Vec<&Descriptor<T>>, sorted: bool, skipped: Vec<SkippedFeature>) -> Self {
        let features = descriptors.iter().map(|d| d.name().to_owned()).collect();
        let output_names: Vec<String> = descriptors
            .iter()
            .flat_map(|d| d.output_names().iter().cloned())
            .collect();
        let mut alphabetical: Vec<usize> = (0..output_names.len()).collect();
        alphabetical.sort_by(|&a, &b| output_names[a].cmp(&output_names[b]));
        Self {
            features,
            output_names,
            sorted,
            alphabetical,
            skipped,
        }
    }

    /// Selected feature names in evaluation order
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Flattened output names, aligned with the raw evaluation result
    pub fn output_names(&self) -> &[String] {
        &self.output_names
    }

    /// Whether features were sorted by declaration order, which makes presentation alphabetical
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Permutation of the flattened outputs sorting them by name
    pub fn alphabetical_index(&self) -> &[usize] {
        &self.alphabetical
    }

    /// Positions of the flattened outputs in presentation order
    pub fn presentation_index(&self) -> Vec<usize> {
        if self.sorted {
            self.alphabetical.clone()
        } else {
            (0..self.output_names.len()).collect()
        }
    }

    pub fn skipped(&self) -> &[SkippedFeature] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Decides which registered features apply to the available channels and requested names
#[derive(Clone, Copy, Debug)]
pub struct FeatureSelector<'r, T> {
    registry: &'r Registry<T>,
    unknown_features: UnknownFeaturePolicy,
}

impl<'r, T> FeatureSelector<'r, T>
where
    T: Float,
{
    pub fn new(registry: &'r Registry<T>) -> Self {
        Self {
            registry,
            unknown_features: UnknownFeaturePolicy::default(),
        }
    }

    pub fn with_unknown_features(mut self, policy: UnknownFeaturePolicy) -> Self {
        self.unknown_features = policy;
        self
    }

    /// Selects features
    ///
    /// - `All` channels without a list: every registered feature except excluded ones, sorted
    ///   by declaration order
    /// - `All` channels with a list: listed features sorted by declaration order, the exclude
    ///   list is ignored
    /// - concrete channels without a list: features which instances need only available channels,
    ///   in discovery order
    /// - concrete channels with a list: listed features which need only available channels, in
    ///   the given order
    /// - no channels: listed features in the given order
    pub fn select(
        &self,
        channels: Option<&ChannelSpec>,
        features: Option<&[String]>,
        exclude: &[String],
        parameters: &ParameterMap,
    ) -> Result<Selection, ConfigurationError> {
        let mut skipped = vec![];
        let (descriptors, sorted) = match (channels, features) {
            (Some(ChannelSpec::All), None) => {
                let descriptors: Vec<_> = self
                    .registry
                    .all()
                    .iter()
                    .filter(|d| !exclude.iter().any(|name| name == d.name()))
                    .collect();
                (descriptors, true)
            }
            (Some(ChannelSpec::All), Some(features)) => {
                if !exclude.is_empty() {
                    debug!(
                        exclude = ?exclude,
                        "exclude list is ignored when all channels are available and features are listed"
                    );
                }
                let mut descriptors = self.resolve(features, &mut skipped)?;
                descriptors.sort_by_key(|d| d.declaration_order());
                (descriptors, true)
            }
            (Some(&ChannelSpec::Set(available)), None) => {
                let mut descriptors = vec![];
                for descriptor in self.registry.discover() {
                    if exclude.iter().any(|name| name == descriptor.name()) {
                        continue;
                    }
                    let instance = descriptor
                        .instantiate(parameters.get(descriptor.name()))
                        .map_err(|source| ConfigurationError::InvalidParameters {
                            feature: descriptor.name().to_owned(),
                            source,
                        })?;
                    let required = instance.required_channels();
                    if available.contains(required) {
                        descriptors.push(descriptor);
                    } else {
                        skipped.push(skip_missing_channels(descriptor.name(), required, available));
                    }
                }
                (descriptors, false)
            }
            (Some(&ChannelSpec::Set(available)), Some(features)) => {
                let descriptors: Vec<_> = self
                    .resolve(features, &mut skipped)?
                    .into_iter()
                    .filter(|descriptor| {
                        let required = descriptor.required_channels();
                        if available.contains(required) {
                            true
                        } else {
                            skipped.push(skip_missing_channels(descriptor.name(), required, available));
                            false
                        }
                    })
                    .collect();
                (descriptors, false)
            }
            (None, Some(features)) => (self.resolve(features, &mut skipped)?, false),
            (None, None) => (vec![], false),
        };
        let selection = Selection::new(descriptors, sorted, skipped);
        debug!(
            features = ?selection.features(),
            outputs = selection.output_names().len(),
            skipped = selection.skipped().len(),
            sorted = selection.is_sorted(),
            "features selected"
        );
        Ok(selection)
    }

    /// Descriptors of listed features in the given order, repeated names are taken once
    fn resolve(
        &self,
        features: &[String],
        skipped: &mut Vec<SkippedFeature>,
    ) -> Result<Vec<&'r Descriptor<T>>, ConfigurationError> {
        let mut seen = HashSet::new();
        let mut descriptors = vec![];
        for name in features {
            if !seen.insert(name.as_str()) {
                continue;
            }
            match self.registry.get(name) {
                Some(descriptor) => descriptors.push(descriptor),
                None => match self.unknown_features {
                    UnknownFeaturePolicy::Skip => {
                        warn!(feature = %name, "unknown feature is skipped");
                        skipped.push(SkippedFeature {
                            feature: name.clone(),
                            reason: SkipReason::Unknown,
                        });
                    }
                    UnknownFeaturePolicy::Error => {
                        return Err(ConfigurationError::UnknownFeature(name.clone()))
                    }
                },
            }
        }
        Ok(descriptors)
    }
}

fn skip_missing_channels(feature: &str, required: ChannelSet, available: ChannelSet) -> SkippedFeature {
    let missing = required & !available;
    warn!(
        feature,
        missing = %display_channels(missing),
        "feature is skipped, required channels are not available"
    );
    SkippedFeature {
        feature: feature.to_owned(),
        reason: SkipReason::MissingChannels { required, missing },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Channel;
    use crate::tests::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn abc_magnitude_only() {
        let registry = abc_registry();
        let channels = ChannelSpec::from(Channel::Magnitude);
        let selection = FeatureSelector::new(&registry)
            .select(Some(&channels), None, &[], &ParameterMap::new())
            .unwrap();
        assert_eq!(selection.features(), ["A", "C"]);
        assert_eq!(selection.output_names(), ["A", "C1", "C2"]);
        assert!(!selection.is_sorted());
        assert_eq!(
            selection.skipped(),
            [SkippedFeature {
                feature: "B".to_owned(),
                reason: SkipReason::MissingChannels {
                    required: Channel::Magnitude | Channel::Time,
                    missing: Channel::Time.into(),
                },
            }]
        );
    }

    #[test]
    fn one_warning_per_skipped_feature() {
        let registry = abc_registry();
        let channels = ChannelSpec::from(Channel::Magnitude);
        let (selection, warnings) = count_warnings(|| {
            FeatureSelector::new(&registry)
                .select(Some(&channels), None, &[], &ParameterMap::new())
                .unwrap()
        });
        assert_eq!(selection.skipped().len(), 1);
        assert_eq!(warnings, 1);

        let (_, warnings) = count_warnings(|| {
            FeatureSelector::new(&registry)
                .select(Some(&ChannelSpec::All), None, &[], &ParameterMap::new())
                .unwrap()
        });
        assert_eq!(warnings, 0);
    }

    #[test]
    fn all_without_list_is_registry_minus_exclude() {
        let registry = abc_registry();
        let selection = FeatureSelector::new(&registry)
            .select(Some(&ChannelSpec::All), None, &names(&["B"]), &ParameterMap::new())
            .unwrap();
        assert_eq!(selection.features(), ["A", "C"]);
        assert!(selection.is_sorted());
        assert!(selection.skipped().is_empty());
    }

    #[test]
    fn all_with_list_ignores_exclude() {
        let registry = abc_registry();
        let features = names(&["C", "A"]);
        let selection = FeatureSelector::new(&registry)
            .select(
                Some(&ChannelSpec::All),
                Some(&features),
                &names(&["A"]),
                &ParameterMap::new(),
            )
            .unwrap();
        assert_eq!(selection.features(), ["A", "C"]);
        assert!(selection.is_sorted());
    }

    #[test]
    fn reversed_declaration_is_sorted_alphabetically() {
        let registry = reversed_registry();
        let selection = FeatureSelector::new(&registry)
            .select(Some(&ChannelSpec::All), None, &[], &ParameterMap::new())
            .unwrap();
        assert_eq!(selection.features(), ["Z", "Y", "X"]);
        assert_eq!(selection.alphabetical_index(), [2, 1, 0]);
        assert_eq!(selection.presentation_index(), [2, 1, 0]);
    }

    #[test]
    fn concrete_channels_use_discovery_order() {
        let registry = reversed_registry();
        let channels = ChannelSpec::from(Channel::Magnitude);
        let selection = FeatureSelector::new(&registry)
            .select(Some(&channels), None, &[], &ParameterMap::new())
            .unwrap();
        assert_eq!(selection.features(), ["X", "Y", "Z"]);
        assert_eq!(selection.presentation_index(), [0, 1, 2]);
    }

    #[test]
    fn concrete_channels_with_list_keep_given_order() {
        let registry = abc_registry();
        let channels = ChannelSpec::from(Channel::Magnitude);
        let features = names(&["C", "B", "A"]);
        let selection = FeatureSelector::new(&registry)
            .select(Some(&channels), Some(&features), &names(&["A"]), &ParameterMap::new())
            .unwrap();
        assert_eq!(selection.features(), ["C", "A"]);
        assert_eq!(selection.output_names(), ["C1", "C2", "A"]);
        assert_eq!(selection.skipped().len(), 1);
        assert!(!selection.is_sorted());
    }

    #[test]
    fn no_channels() {
        let registry = abc_registry();
        let features = names(&["B", "A", "B"]);
        let selector = FeatureSelector::new(&registry);
        let selection = selector
            .select(None, Some(&features), &[], &ParameterMap::new())
            .unwrap();
        assert_eq!(selection.features(), ["B", "A"]);
        assert!(selector
            .select(None, None, &[], &ParameterMap::new())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn unknown_feature_is_fatal_by_default() {
        let registry = abc_registry();
        let features = names(&["A", "D"]);
        for channels in [None, Some(ChannelSpec::All)] {
            let err = FeatureSelector::new(&registry)
                .select(channels.as_ref(), Some(&features), &[], &ParameterMap::new())
                .unwrap_err();
            assert_eq!(err, ConfigurationError::UnknownFeature("D".to_owned()));
        }
    }

    #[test]
    fn unknown_feature_skipped() {
        let registry = abc_registry();
        let features = names(&["A", "D"]);
        let selection = FeatureSelector::new(&registry)
            .with_unknown_features(UnknownFeaturePolicy::Skip)
            .select(None, Some(&features), &[], &ParameterMap::new())
            .unwrap();
        assert_eq!(selection.features(), ["A"]);
        assert_eq!(selection.skipped()[0].reason, SkipReason::Unknown);
    }

    #[test]
    fn builtin_subset_invariant() {
        let registry = Registry::<f64>::builtin();
        for available in [
            ChannelSet::from(Channel::Magnitude),
            Channel::Magnitude | Channel::Time,
            Channel::Magnitude | Channel::Error,
            Channel::Time.into(),
            Channel::AlignedMagnitude | Channel::AlignedMagnitude2,
        ] {
            let selection = FeatureSelector::new(registry)
                .select(Some(&available.into()), None, &[], &ParameterMap::new())
                .unwrap();
            for name in selection.features() {
                let required = registry.lookup(name).unwrap().required_channels();
                assert!(available.contains(required));
            }
            assert_eq!(selection.len() + selection.skipped().len(), registry.len());
            for skipped in selection.skipped() {
                assert_eq!(
                    selection
                        .skipped()
                        .iter()
                        .filter(|s| s.feature == skipped.feature)
                        .count(),
                    1
                );
            }
        }
    }

    #[test]
    fn concrete_channels_invalid_parameters() {
        let registry = Registry::<f64>::builtin();
        let mut parameters = ParameterMap::new();
        parameters.insert("beyond_n_std".to_owned(), vec![-1.0].into());
        let err = FeatureSelector::new(registry)
            .select(
                Some(&Channel::Magnitude.into()),
                None,
                &[],
                &parameters,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidParameters { ref feature, .. } if feature == "beyond_n_std"
        ));
    }
}
