use crate::foundation::channel::ChannelSet;
use crate::foundation::core::{Format, FormatPair, FrameRange, IBox};
use crate::params::knobs::ConstantParams;

/// Image description published to the surrounding pipeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Metadata {
    /// Union of the four slot channels, whatever their color.
    pub channels: ChannelSet,
    /// Area with defined content. Always the active format's area.
    pub bbox: IBox,
    /// `true` when everything outside `bbox` reads as zero.
    pub black_outside: bool,
    /// Frame range, carried unvalidated.
    pub frames: FrameRange,
    /// Active working format.
    pub format: Format,
    /// Full-size format of the active one.
    pub full_size_format: Format,
}

impl Metadata {
    /// Record describing an empty image of `formats`.
    pub fn new(formats: FormatPair) -> Self {
        Self {
            channels: ChannelSet::EMPTY,
            bbox: formats.format.area,
            black_outside: true,
            frames: FrameRange::default(),
            format: formats.format,
            full_size_format: formats.full_size_format,
        }
    }

    /// The record's formats as a pair.
    pub fn formats(&self) -> FormatPair {
        FormatPair::new(self.format.clone()).with_full_size(self.full_size_format.clone())
    }
}

/// Derive metadata from `params`.
///
/// `fallback` is used when no explicit format is set: either the host's default
/// format, or a format the caller already chose and owns. It is never replaced
/// by anything but an explicit format parameter.
pub fn derive_metadata(params: &ConstantParams, fallback: &FormatPair) -> Metadata {
    let mut channels = ChannelSet::EMPTY;
    let mut non_zero = false;
    for slot in &params.slots {
        channels.insert(slot.channel);
        // NaN counts as a color, -0.0 does not.
        if slot.color != 0.0 {
            non_zero = true;
        }
    }

    let formats = params.format.as_ref().unwrap_or(fallback);

    let info = Metadata {
        channels,
        black_outside: !non_zero,
        // Full image area even for a constant: downstream ops depend on it.
        bbox: formats.format.area,
        frames: params.frames,
        format: formats.format.clone(),
        full_size_format: formats.full_size_format.clone(),
    };
    tracing::debug!(
        channels = ?info.channels,
        bbox = ?info.bbox,
        black_outside = info.black_outside,
        first = info.frames.first,
        last = info.frames.last,
        "derived constant metadata"
    );
    info
}

/// Rewrite a caller-owned record in full, keeping its formats unless `params`
/// carries an explicit one.
pub fn validate_into(params: &ConstantParams, info: &mut Metadata) {
    let owned = info.formats();
    *info = derive_metadata(params, &owned);
}

#[cfg(test)]
#[path = "../../tests/unit/info/metadata.rs"]
mod tests;
