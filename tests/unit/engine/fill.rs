use super::*;
use crate::engine::row::{Row, RowChannel};
use crate::foundation::channel::Channel;

#[derive(Default)]
struct RecordingSink {
    buffer: Vec<f32>,
    calls: Vec<(Channel, &'static str, usize)>,
}

impl RowSink for RecordingSink {
    fn writable(&mut self, channel: Channel, x: i32, r: i32) -> &mut [f32] {
        let len = usize::try_from(r - x).unwrap_or(0);
        self.calls.push((channel, "writable", len));
        self.buffer = vec![f32::NAN; len];
        &mut self.buffer
    }

    fn erase(&mut self, channel: Channel) {
        self.calls.push((channel, "erase", 0));
    }
}

fn slots(color: [f32; 4]) -> [ChannelSlot; 4] {
    [
        ChannelSlot::new(Channel::RED, color[0]),
        ChannelSlot::new(Channel::GREEN, color[1]),
        ChannelSlot::new(Channel::BLUE, color[2]),
        ChannelSlot::new(Channel::ALPHA, color[3]),
    ]
}

#[test]
fn non_zero_channel_gets_exactly_span_len_values() {
    let mut sink = RecordingSink::default();
    let mask: ChannelSet = [Channel::GREEN].into_iter().collect();
    fill_span(&slots([0.0, 0.7, 0.0, 0.0]), 3, 10, mask, &mut sink);
    assert_eq!(sink.calls, vec![(Channel::GREEN, "writable", 7)]);
    assert_eq!(sink.buffer, vec![0.7; 7]);
}

#[test]
fn zero_channel_is_erased_without_writes() {
    let mut sink = RecordingSink::default();
    fill_span(&slots([0.0; 4]), 0, 16, ChannelSet::rgba(), &mut sink);
    assert_eq!(sink.calls.len(), 4);
    assert!(sink.calls.iter().all(|(_, kind, _)| *kind == "erase"));
    assert!(sink.buffer.is_empty());
}

#[test]
fn channels_outside_mask_are_untouched() {
    let mut row = Row::new(0, 4);
    let mask: ChannelSet = [Channel::RED, Channel::ALPHA].into_iter().collect();
    fill_span(&slots([0.1, 0.2, 0.3, 0.0]), 0, 4, mask, &mut row);
    assert_eq!(row.channel(Channel::RED), RowChannel::Filled(&[0.1; 4]));
    assert_eq!(row.channel(Channel::GREEN), RowChannel::Absent);
    assert_eq!(row.channel(Channel::BLUE), RowChannel::Absent);
    assert_eq!(row.channel(Channel::ALPHA), RowChannel::Erased);
}

#[test]
fn empty_and_inverted_spans_write_nothing() {
    for (x, r) in [(5, 5), (9, 2)] {
        let mut sink = RecordingSink::default();
        fill_span(&slots([1.0, 0.0, 0.0, 0.0]), x, r, ChannelSet::rgba(), &mut sink);
        assert!(sink.buffer.is_empty());
        assert!(sink.calls.iter().all(|(_, _, len)| *len == 0));
    }
}

#[test]
fn partial_span_leaves_rest_of_row_alone() {
    let mut row = Row::new(0, 6);
    row.writable(Channel::RED, 0, 6).fill(0.25);
    let mask: ChannelSet = [Channel::RED].into_iter().collect();
    fill_span(&slots([1.0, 0.0, 0.0, 0.0]), 2, 4, mask, &mut row);
    assert_eq!(
        row.channel(Channel::RED),
        RowChannel::Filled(&[0.25, 0.25, 1.0, 1.0, 0.25, 0.25])
    );
}

#[test]
fn lower_slot_wins_on_shared_channel() {
    let shared = [
        ChannelSlot::new(Channel::RED, 0.5),
        ChannelSlot::new(Channel::GREEN, 0.0),
        ChannelSlot::new(Channel::BLUE, 0.0),
        ChannelSlot::new(Channel::RED, 0.9),
    ];
    let mut row = Row::new(0, 2);
    fill_span(&shared, 0, 2, ChannelSet::rgba(), &mut row);
    assert_eq!(row.channel(Channel::RED), RowChannel::Filled(&[0.5, 0.5]));

    let erased_last = [
        ChannelSlot::new(Channel::RED, 0.0),
        ChannelSlot::new(Channel::GREEN, 0.0),
        ChannelSlot::new(Channel::BLUE, 0.0),
        ChannelSlot::new(Channel::RED, 0.9),
    ];
    let mut row = Row::new(0, 2);
    fill_span(&erased_last, 0, 2, ChannelSet::rgba(), &mut row);
    assert_eq!(row.channel(Channel::RED), RowChannel::Erased);
}

#[test]
fn none_slots_are_skipped() {
    let mut sink = RecordingSink::default();
    let none = [ChannelSlot::new(Channel::NONE, 1.0); 4];
    fill_span(&none, 0, 4, ChannelSet::all(), &mut sink);
    assert!(sink.calls.is_empty());
}

#[test]
fn empty_span_leaves_real_row_unchanged() {
    let mut row = Row::new(0, 4);
    row.erase(Channel::RED);
    let mask: ChannelSet = [Channel::RED, Channel::GREEN].into_iter().collect();
    for (x, r) in [(2, 2), (3, 1)] {
        fill_span(&slots([1.0, 1.0, 0.0, 0.0]), x, r, mask, &mut row);
        assert_eq!(row.channel(Channel::RED), RowChannel::Erased);
        assert_eq!(row.channel(Channel::GREEN), RowChannel::Absent);
    }
}
