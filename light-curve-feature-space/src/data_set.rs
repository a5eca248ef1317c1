use crate::channel::{Channel, ChannelSet};
use crate::error::{DataSetError, EvaluatorError};
use crate::float_trait::Float;
use crate::sorted_vec::SortedVec;
use crate::statistics::Statistics;

use conv::prelude::*;

/// Single channel of a [DataSet] with lazily evaluated statistics
#[derive(Clone, Debug)]
pub struct DataSample<'a, T>
where
    T: Float,
{
    sample: &'a [T],
    sorted: Option<SortedVec<T>>,
    min: Option<T>,
    max: Option<T>,
    mean: Option<T>,
    median: Option<T>,
    std2: Option<T>,
}

macro_rules! data_sample_getter {
    ($attr: ident, $getter: ident, $method: ident, $method_sorted: ident) => {
        pub fn $getter(&mut self) -> T {
            match self.$attr {
                Some(x) => x,
                None => {
                    let x = match self.sorted.as_ref() {
                        Some(sorted) => sorted.$method_sorted(),
                        None => self.sample.$method(),
                    };
                    self.$attr = Some(x);
                    x
                }
            }
        }
    };
    ($attr: ident, $getter: ident, $func: expr) => {
        pub fn $getter(&mut self) -> T {
            match self.$attr {
                Some(x) => x,
                None => {
                    let x = $func(self);
                    self.$attr = Some(x);
                    x
                }
            }
        }
    };
}

impl<'a, T> DataSample<'a, T>
where
    T: Float,
{
    fn new(sample: &'a [T]) -> Self {
        Self {
            sample,
            sorted: None,
            min: None,
            max: None,
            mean: None,
            median: None,
            std2: None,
        }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.sample
    }

    pub fn len(&self) -> usize {
        self.sample.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    pub fn lenf(&self) -> T {
        self.len().value_as::<T>().unwrap()
    }

    pub fn get_sorted(&mut self) -> &SortedVec<T> {
        let sample = self.sample;
        self.sorted.get_or_insert_with(|| sample.into())
    }

    data_sample_getter!(min, get_min, minimum, minimum);
    data_sample_getter!(max, get_max, maximum, maximum);
    data_sample_getter!(median, get_median, |ds: &mut DataSample<'a, T>| {
        ds.get_sorted().median()
    });
    data_sample_getter!(mean, get_mean, |ds: &mut DataSample<'a, T>| {
        ds.sample.mean()
    });
    data_sample_getter!(std2, get_std2, |ds: &mut DataSample<'a, T>| {
        let mean = ds.get_mean();
        ds.sample.iter().map(|&x| (x - mean).powi(2)).sum::<T>() / (ds.lenf() - T::one())
    });

    /// Unbiased sample standard deviation
    pub fn get_std(&mut self) -> T {
        self.get_std2().sqrt()
    }
}

/// Input data of a feature space: a borrowed array for each available [Channel]
///
/// `time` and `error` must have the same length as `magnitude`, all `aligned_*` channels must
/// have the same length. `magnitude2` is not checked.
#[derive(Clone, Debug)]
pub struct DataSet<'a, T>
where
    T: Float,
{
    samples: [Option<DataSample<'a, T>>; Channel::COUNT],
    weight_sum: Option<T>,
    m_weighted_mean: Option<T>,
    m_reduced_chi2: Option<T>,
}

macro_rules! data_set_getter {
    ($attr: ident, $getter: ident, $func: expr) => {
        pub fn $getter(&mut self) -> Result<T, EvaluatorError> {
            match self.$attr {
                Some(x) => Ok(x),
                None => {
                    let x = $func(self)?;
                    self.$attr = Some(x);
                    Ok(x)
                }
            }
        }
    };
}

impl<'a, T> DataSet<'a, T>
where
    T: Float,
{
    pub fn new() -> Self {
        Self {
            samples: Default::default(),
            weight_sum: None,
            m_weighted_mean: None,
            m_reduced_chi2: None,
        }
    }

    /// Builds a data set from rows in [Channel] declaration order: magnitude, time, error,
    /// magnitude2, aligned magnitude, aligned magnitude2, aligned time, aligned error and
    /// aligned error2
    pub fn from_rows(rows: &[&'a [T]]) -> Result<Self, DataSetError> {
        if rows.len() > Channel::COUNT {
            return Err(DataSetError::TooManyRows {
                maximum: Channel::COUNT,
                actual: rows.len(),
            });
        }
        rows.iter()
            .zip(Channel::iter())
            .try_fold(Self::new(), |ds, (&row, channel)| ds.with_channel(channel, row))
    }

    pub fn with_channel(mut self, channel: Channel, sample: &'a [T]) -> Result<Self, DataSetError> {
        self.set_channel(channel, sample)?;
        Ok(self)
    }

    pub fn set_channel(&mut self, channel: Channel, sample: &'a [T]) -> Result<(), DataSetError> {
        if let Some((reference, expected)) = self
            .length_peers(channel)
            .find(|&(_, len)| len != sample.len())
        {
            return Err(DataSetError::LengthMismatch {
                channel,
                reference,
                expected,
                actual: sample.len(),
            });
        }
        self.samples[channel.index()] = Some(DataSample::new(sample));
        self.weight_sum = None;
        self.m_weighted_mean = None;
        self.m_reduced_chi2 = None;
        Ok(())
    }

    /// Other present channels which must have the same length as `channel`
    fn length_peers(&self, channel: Channel) -> impl Iterator<Item = (Channel, usize)> + '_ {
        let group = match channel {
            Channel::Magnitude | Channel::Time | Channel::Error => {
                Channel::Magnitude | Channel::Time | Channel::Error
            }
            Channel::Magnitude2 => ChannelSet::empty(),
            _ => ChannelSet::all()
                .iter()
                .filter(|c| c.is_aligned())
                .collect(),
        };
        group
            .iter()
            .filter(move |&peer| peer != channel)
            .filter_map(move |peer| self.len(peer).map(|len| (peer, len)))
    }

    pub fn available_channels(&self) -> ChannelSet {
        Channel::iter()
            .filter(|channel| self.samples[channel.index()].is_some())
            .collect()
    }

    pub fn len(&self, channel: Channel) -> Option<usize> {
        self.samples[channel.index()].as_ref().map(DataSample::len)
    }

    pub fn sample(&mut self, channel: Channel) -> Result<&mut DataSample<'a, T>, EvaluatorError> {
        self.samples[channel.index()]
            .as_mut()
            .ok_or(EvaluatorError::MissingChannel(channel))
    }

    pub fn slice(&self, channel: Channel) -> Result<&'a [T], EvaluatorError> {
        self.samples[channel.index()]
            .as_ref()
            .map(DataSample::as_slice)
            .ok_or(EvaluatorError::MissingChannel(channel))
    }

    /// Iterator over magnitude and inverse squared error pairs
    fn m_w_iter(&self) -> Result<impl Iterator<Item = (T, T)> + 'a, EvaluatorError> {
        let m = self.slice(Channel::Magnitude)?;
        let err = self.slice(Channel::Error)?;
        Ok(m.iter()
            .zip(err.iter())
            .map(|(&m, &err)| (m, err.powi(-2))))
    }

    data_set_getter!(weight_sum, get_weight_sum, |ds: &mut DataSet<T>| {
        ds.m_w_iter().map(|it| it.map(|(_, w)| w).sum::<T>())
    });

    data_set_getter!(m_weighted_mean, get_m_weighted_mean, |ds: &mut DataSet<T>| {
        let weight_sum = ds.get_weight_sum()?;
        ds.m_w_iter()
            .map(|it| it.map(|(m, w)| m * w).sum::<T>() / weight_sum)
    });

    data_set_getter!(m_reduced_chi2, get_m_reduced_chi2, |ds: &mut DataSet<T>| {
        let mean = ds.get_m_weighted_mean()?;
        let n = ds.sample(Channel::Magnitude)?.lenf();
        ds.m_w_iter()
            .map(|it| it.map(|(m, w)| (m - mean).powi(2) * w).sum::<T>() / (n - T::one()))
    });
}

impl<'a, T> Default for DataSet<'a, T>
where
    T: Float,
{
    fn default() -> Self {
        Self::new()
    }
}
