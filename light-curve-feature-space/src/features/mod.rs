mod amplitude;
pub use amplitude::Amplitude;

mod beyond_n_std;
pub use beyond_n_std::BeyondNStd;

mod color;
pub use color::Color;

mod cusum;
pub use cusum::Cusum;

mod duration;
pub use duration::Duration;

mod eta;
pub use eta::Eta;

mod excess_variance;
pub use excess_variance::ExcessVariance;

mod flux_percentile_ratio;
pub use flux_percentile_ratio::FluxPercentileRatio;

mod inter_percentile_range;
pub use inter_percentile_range::InterPercentileRange;

mod inter_percentile_range_color;
pub use inter_percentile_range_color::InterPercentileRangeColor;

mod kurtosis;
pub use kurtosis::Kurtosis;

mod linear_trend;
pub use linear_trend::LinearTrend;

mod maximum_slope;
pub use maximum_slope::MaximumSlope;

mod mean;
pub use mean::Mean;

mod mean_variance;
pub use mean_variance::MeanVariance;

mod median_absolute_deviation;
pub use median_absolute_deviation::MedianAbsoluteDeviation;

mod median_buffer_range_percentage;
pub use median_buffer_range_percentage::MedianBufferRangePercentage;

mod observation_count;
pub use observation_count::ObservationCount;

mod percent_amplitude;
pub use percent_amplitude::PercentAmplitude;

mod percent_difference_magnitude_percentile;
pub use percent_difference_magnitude_percentile::PercentDifferenceMagnitudePercentile;

mod reduced_chi2;
pub use reduced_chi2::ReducedChi2;

mod skew;
pub use skew::Skew;

mod standard_deviation;
pub use standard_deviation::StandardDeviation;

mod stetson_k;
pub use stetson_k::StetsonK;

mod weighted_mean;
pub use weighted_mean::WeightedMean;
