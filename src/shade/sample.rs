use std::ops::{Index, IndexMut};

use crate::foundation::channel::{Channel, ChannelSet};

/// What the renderer knows about the sample being shaded.
pub trait SampleContext {
    /// Whether the enclosing scene renders transparency.
    fn transparency(&self) -> bool;

    /// Depth value written into [`Channel::DEPTH`].
    fn w(&self) -> f32;
}

/// Plain [`SampleContext`] for hosts that already have both values at hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexContext {
    /// Scene renders transparency.
    pub transparency: bool,
    /// Depth of the sample.
    pub w: f32,
}

impl VertexContext {
    /// Context from both values.
    pub fn new(transparency: bool, w: f32) -> Self {
        Self { transparency, w }
    }
}

impl SampleContext for VertexContext {
    fn transparency(&self) -> bool {
        self.transparency
    }

    fn w(&self) -> f32 {
        self.w
    }
}

/// One shaded sample: an accumulator per channel id.
#[derive(Clone, Debug, PartialEq)]
pub struct Pixel {
    channels: ChannelSet,
    values: [f32; Channel::COUNT],
}

impl Pixel {
    /// Sample carrying `channels`, all zero.
    pub fn new(channels: ChannelSet) -> Self {
        Self {
            channels,
            values: [0.0; Channel::COUNT],
        }
    }

    /// Channels the sample carries.
    pub fn channels(&self) -> ChannelSet {
        self.channels
    }

    /// Value of [`Channel::DEPTH`].
    pub fn depth(&self) -> f32 {
        self[Channel::DEPTH]
    }
}

impl Default for Pixel {
    fn default() -> Self {
        let mut channels = ChannelSet::rgba();
        channels.insert(Channel::DEPTH);
        Self::new(channels)
    }
}

impl Index<Channel> for Pixel {
    type Output = f32;

    fn index(&self, channel: Channel) -> &f32 {
        &self.values[channel.index()]
    }
}

impl IndexMut<Channel> for Pixel {
    fn index_mut(&mut self, channel: Channel) -> &mut f32 {
        self.channels.insert(channel);
        &mut self.values[channel.index()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shade/sample.rs"]
mod tests;
