use crate::foundation::channel::{Channel, ChannelSet};

/// Output side of one scanline as seen by a row filler.
pub trait RowSink {
    /// Writable values of `channel` for pixels `[x, r)`. Empty when `x >= r`,
    /// in which case the channel keeps its state.
    fn writable(&mut self, channel: Channel, x: i32, r: i32) -> &mut [f32];

    /// Mark `channel` as carrying no contribution for this row.
    fn erase(&mut self, channel: Channel);
}

/// State of one channel of a [`Row`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowChannel<'a> {
    /// Nothing was produced for the channel.
    Absent,
    /// Explicitly erased; reads as zero when blended.
    Erased,
    /// Values for the row's full extent.
    Filled(&'a [f32]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlaneState {
    Absent,
    Erased,
    Filled,
}

#[derive(Clone, Debug)]
struct Plane {
    state: PlaneState,
    data: Vec<f32>,
}

/// Reusable scanline storage over pixels `[x, r)`.
///
/// Buffers are kept across [`Row::reset`], so a row can be driven over many
/// scanlines without reallocating.
#[derive(Clone, Debug)]
pub struct Row {
    x: i32,
    r: i32,
    planes: Vec<Plane>,
}

impl Row {
    /// Empty row over pixels `[x, r)`; an inverted range becomes empty.
    pub fn new(x: i32, r: i32) -> Self {
        let r = r.max(x);
        Self {
            x,
            r,
            planes: vec![
                Plane {
                    state: PlaneState::Absent,
                    data: Vec::new(),
                };
                Channel::COUNT
            ],
        }
    }

    /// First pixel of the row.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// One past the last pixel of the row.
    pub fn r(&self) -> i32 {
        self.r
    }

    /// Number of pixels in the row.
    pub fn width(&self) -> usize {
        span_len(self.x, self.r)
    }

    /// Forget every channel's state, keeping allocations.
    pub fn reset(&mut self) {
        for plane in &mut self.planes {
            plane.state = PlaneState::Absent;
        }
    }

    /// Current state of `channel`.
    pub fn channel(&self, channel: Channel) -> RowChannel<'_> {
        if channel.is_none() {
            return RowChannel::Absent;
        }
        let plane = &self.planes[channel.index()];
        match plane.state {
            PlaneState::Absent => RowChannel::Absent,
            PlaneState::Erased => RowChannel::Erased,
            PlaneState::Filled => RowChannel::Filled(&plane.data),
        }
    }

    /// Value at pixel `x`, with erased or absent channels reading as zero.
    pub fn value(&self, channel: Channel, x: i32) -> f32 {
        match self.channel(channel) {
            RowChannel::Filled(data) if self.x <= x && x < self.r => {
                data[span_len(self.x, x)]
            }
            _ => 0.0,
        }
    }

    /// Channels that are erased or filled.
    pub fn present(&self) -> ChannelSet {
        self.planes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.state != PlaneState::Absent)
            .filter_map(|(i, _)| Channel::from_index(i))
            .collect()
    }
}

impl RowSink for Row {
    fn writable(&mut self, channel: Channel, x: i32, r: i32) -> &mut [f32] {
        let x = x.clamp(self.x, self.r);
        let r = r.clamp(x, self.r);
        // Empty windows leave the channel's state alone.
        if channel.is_none() || x == r {
            return &mut [];
        }
        let width = self.width();
        let start = span_len(self.x, x);
        let plane = &mut self.planes[channel.index()];
        if plane.state != PlaneState::Filled {
            plane.data.clear();
            plane.data.resize(width, 0.0);
            plane.state = PlaneState::Filled;
        }
        &mut plane.data[start..start + span_len(x, r)]
    }

    fn erase(&mut self, channel: Channel) {
        if !channel.is_none() {
            self.planes[channel.index()].state = PlaneState::Erased;
        }
    }
}

/// Number of pixels in `[x, r)`; zero when `x >= r`.
pub(crate) fn span_len(x: i32, r: i32) -> usize {
    usize::try_from(i64::from(r) - i64::from(x)).unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/row.rs"]
mod tests;
