use crate::engine::row::RowSink;
use crate::foundation::channel::ChannelSet;
use crate::params::knobs::ChannelSlot;

/// Write the slot colors into `row` for pixels `[x, r)`.
///
/// Only slots whose channel is in `channels` are touched. A zero color erases
/// its channel instead of writing zeros, even for an empty span; a non-zero
/// color on an empty span leaves the row untouched. Slots are
/// visited from last to first, so when two slots share a channel the lower
/// slot decides the result.
pub fn fill_span(
    slots: &[ChannelSlot; 4],
    x: i32,
    r: i32,
    channels: ChannelSet,
    row: &mut dyn RowSink,
) {
    for slot in slots.iter().rev() {
        if !channels.contains(slot.channel) {
            continue;
        }
        if slot.color == 0.0 {
            row.erase(slot.channel);
        } else if x < r {
            row.writable(slot.channel, x, r).fill(slot.color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/fill.rs"]
mod tests;
