use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{FlatcolorError, FlatcolorResult};

/// Identifier of one scalar image channel.
///
/// Id 0 is [`Channel::NONE`]: it is never part of a [`ChannelSet`] and is never
/// written by any operation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Channel(u8);

impl Channel {
    /// Number of addressable channel ids (including `NONE`).
    pub const COUNT: usize = 64;

    /// No channel.
    pub const NONE: Self = Self(0);
    /// `rgba.red`.
    pub const RED: Self = Self(1);
    /// `rgba.green`.
    pub const GREEN: Self = Self(2);
    /// `rgba.blue`.
    pub const BLUE: Self = Self(3);
    /// `rgba.alpha`.
    pub const ALPHA: Self = Self(4);
    /// Depth channel written by the shading compositor.
    pub const DEPTH: Self = Self(5);
    /// `mask.a`.
    pub const MASK: Self = Self(6);
    /// `forward.u` motion vector component.
    pub const FORWARD_U: Self = Self(7);
    /// `forward.v` motion vector component.
    pub const FORWARD_V: Self = Self(8);
    /// `backward.u` motion vector component.
    pub const BACKWARD_U: Self = Self(9);
    /// `backward.v` motion vector component.
    pub const BACKWARD_V: Self = Self(10);

    const NAMED: [(Channel, &'static str); 11] = [
        (Self::NONE, "none"),
        (Self::RED, "rgba.red"),
        (Self::GREEN, "rgba.green"),
        (Self::BLUE, "rgba.blue"),
        (Self::ALPHA, "rgba.alpha"),
        (Self::DEPTH, "depth.Z"),
        (Self::MASK, "mask.a"),
        (Self::FORWARD_U, "forward.u"),
        (Self::FORWARD_V, "forward.v"),
        (Self::BACKWARD_U, "backward.u"),
        (Self::BACKWARD_V, "backward.v"),
    ];

    /// Channel for a raw id, if it is addressable.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            u8::try_from(index).ok().map(Self)
        } else {
            None
        }
    }

    /// Raw id of the channel.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// True for [`Channel::NONE`].
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    fn known_name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(c, _)| *c == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "chan{}", self.0),
        }
    }
}

impl FromStr for Channel {
    type Err = FlatcolorError;

    fn from_str(s: &str) -> FlatcolorResult<Self> {
        if let Some((c, _)) = Self::NAMED.iter().find(|(_, name)| *name == s) {
            return Ok(*c);
        }
        s.strip_prefix("chan")
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(Self::from_index)
            .ok_or_else(|| FlatcolorError::validation(format!("unknown channel '{s}'")))
    }
}

impl TryFrom<String> for Channel {
    type Error = FlatcolorError;

    fn try_from(s: String) -> FlatcolorResult<Self> {
        s.parse()
    }
}

impl From<Channel> for String {
    fn from(c: Channel) -> Self {
        c.to_string()
    }
}

/// Fixed-size set of channels, one bit per channel id.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<Channel>", into = "Vec<Channel>")]
pub struct ChannelSet(u64);

impl ChannelSet {
    /// Set with no channels.
    pub const EMPTY: Self = Self(0);

    /// Red, green, blue and alpha.
    pub fn rgba() -> Self {
        [Channel::RED, Channel::GREEN, Channel::BLUE, Channel::ALPHA]
            .into_iter()
            .collect()
    }

    /// Every addressable channel except `NONE`.
    pub fn all() -> Self {
        Self(!1)
    }

    /// Adds `channel`; `Channel::NONE` is ignored.
    pub fn insert(&mut self, channel: Channel) {
        if !channel.is_none() {
            self.0 |= 1u64 << channel.index();
        }
    }

    /// Removes `channel`; `Channel::NONE` is ignored.
    pub fn remove(&mut self, channel: Channel) {
        if !channel.is_none() {
            self.0 &= !(1u64 << channel.index());
        }
    }

    /// True if `channel` is in the set. Never true for `NONE`.
    pub fn contains(self, channel: Channel) -> bool {
        !channel.is_none() && self.0 & (1u64 << channel.index()) != 0
    }

    /// Channels in either set.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Channels in both sets.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// True if the set holds no channels.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of channels in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Channels in ascending id order.
    pub fn iter(self) -> impl Iterator<Item = Channel> {
        (1..Channel::COUNT)
            .filter_map(Channel::from_index)
            .filter(move |c| self.contains(*c))
    }
}

impl fmt::Debug for ChannelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|c| c.to_string()))
            .finish()
    }
}

impl FromIterator<Channel> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl From<Vec<Channel>> for ChannelSet {
    fn from(channels: Vec<Channel>) -> Self {
        channels.into_iter().collect()
    }
}

impl From<ChannelSet> for Vec<Channel> {
    fn from(set: ChannelSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/channel.rs"]
mod tests;
