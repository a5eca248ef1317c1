use crate::error::{ChannelParseError, ConfigError};

use enumflags2::{bitflags, BitFlags};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Semantic role of an input array
///
/// Declaration order is the row order used by [DataSet::from_rows](crate::DataSet::from_rows)
#[bitflags]
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Magnitude,
    Time,
    Error,
    Magnitude2,
    AlignedMagnitude,
    AlignedMagnitude2,
    AlignedTime,
    AlignedError,
    AlignedError2,
}

/// Set of channels, either available in the data or required by a feature
pub type ChannelSet = BitFlags<Channel>;

impl Channel {
    pub const COUNT: usize = 9;

    /// Position of the channel in declaration order
    #[inline]
    pub fn index(self) -> usize {
        (self as u16).trailing_zeros() as usize
    }

    /// All channels in declaration order
    pub fn iter() -> impl Iterator<Item = Channel> {
        ChannelSet::all().iter()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Magnitude => "magnitude",
            Self::Time => "time",
            Self::Error => "error",
            Self::Magnitude2 => "magnitude2",
            Self::AlignedMagnitude => "aligned_magnitude",
            Self::AlignedMagnitude2 => "aligned_magnitude2",
            Self::AlignedTime => "aligned_time",
            Self::AlignedError => "aligned_error",
            Self::AlignedError2 => "aligned_error2",
        }
    }

    /// Channels recorded simultaneously for two passbands
    pub fn is_aligned(self) -> bool {
        matches!(
            self,
            Self::AlignedMagnitude
                | Self::AlignedMagnitude2
                | Self::AlignedTime
                | Self::AlignedError
                | Self::AlignedError2
        )
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ChannelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| ChannelParseError(s.to_owned()))
    }
}

/// Formats a channel set as `{magnitude, time}`
pub fn display_channels(channels: ChannelSet) -> String {
    format!("{{{}}}", channels.iter().map(Channel::as_str).collect::<Vec<_>>().join(", "))
}

/// Channels available for the feature selection
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChannelSpecRepr", into = "ChannelSpecRepr")]
pub enum ChannelSpec {
    /// Every feature is considered available, no channel filtering is done
    All,
    Set(ChannelSet),
}

impl ChannelSpec {
    pub fn from_channels<I>(channels: I) -> Self
    where
        I: IntoIterator<Item = Channel>,
    {
        Self::Set(channels.into_iter().collect())
    }
}

impl From<ChannelSet> for ChannelSpec {
    fn from(channels: ChannelSet) -> Self {
        Self::Set(channels)
    }
}

impl From<Channel> for ChannelSpec {
    fn from(channel: Channel) -> Self {
        Self::Set(channel.into())
    }
}

impl FromStr for ChannelSpec {
    type Err = ChannelParseError;

    /// Parses `all` or comma-separated channel names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            return Ok(Self::All);
        }
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Channel::from_str)
            .collect::<Result<ChannelSet, _>>()
            .map(Self::Set)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ChannelSpecRepr {
    Keyword(String),
    List(Vec<Channel>),
}

impl TryFrom<ChannelSpecRepr> for ChannelSpec {
    type Error = ConfigError;

    fn try_from(repr: ChannelSpecRepr) -> Result<Self, Self::Error> {
        match repr {
            ChannelSpecRepr::Keyword(keyword) if keyword == "all" => Ok(Self::All),
            ChannelSpecRepr::Keyword(keyword) => Err(ConfigError::InvalidChannelSpec(keyword)),
            ChannelSpecRepr::List(channels) => Ok(Self::from_channels(channels)),
        }
    }
}

impl From<ChannelSpec> for ChannelSpecRepr {
    fn from(spec: ChannelSpec) -> Self {
        match spec {
            ChannelSpec::All => Self::Keyword("all".to_owned()),
            ChannelSpec::Set(channels) => Self::List(channels.iter().collect()),
        }
    }
}
