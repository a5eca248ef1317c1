/// Helper for static EvaluatorInfo creation
#[macro_export]
macro_rules! lazy_info {
    (
        $name: ident,
        size: $size: expr,
        min_ts_length: $len: expr,
        channels: [$($channel: ident),+ $(,)?] $(,)?
    ) => {
        lazy_static! {
            static ref $name: EvaluatorInfo = EvaluatorInfo {
                size: $size,
                min_ts_length: $len,
                channels: ChannelSet::empty() $(| Channel::$channel)+,
            };
        }
    };
}

/// Implements [FeatureEvaluator](crate::FeatureEvaluator) getters for a single-valued feature
/// with fixed name and description
macro_rules! scalar_feature_names {
    ($info: ident, $name: expr, $description: expr $(,)?) => {
        fn get_info(&self) -> &EvaluatorInfo {
            &$info
        }

        fn get_names(&self) -> Vec<&str> {
            vec![$name]
        }

        fn get_descriptions(&self) -> Vec<&str> {
            vec![$description]
        }
    };
}
