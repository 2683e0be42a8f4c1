use crate::engine::fill::fill_span;
use crate::engine::row::RowSink;
use crate::foundation::channel::ChannelSet;
use crate::foundation::core::FormatPair;
use crate::info::metadata::{Metadata, derive_metadata, validate_into};
use crate::params::knobs::ConstantParams;
use crate::shade::compositor::{ColorState, shade_gl, shade_sample};
use crate::shade::sample::{Pixel, SampleContext};

/// Produces the image description for the pipeline.
pub trait MetadataProvider {
    /// Full metadata; `fallback` supplies the format when none is set explicitly.
    fn validate(&self, fallback: &FormatPair) -> Metadata;

    /// Rewrite a caller-owned record, keeping its formats when none is set explicitly.
    fn validate_into(&self, info: &mut Metadata);
}

/// Produces pixel values one scanline span at a time.
pub trait RowFiller {
    /// Write pixels `[x, r)` of the `channels` present in `row`.
    fn fill(&self, x: i32, r: i32, channels: ChannelSet, row: &mut dyn RowSink);
}

/// Shades individual samples of a 3D render.
pub trait SampleShader {
    /// Blend into one sample.
    fn shade(&self, ctx: &dyn SampleContext, out: &mut Pixel);

    /// Set the immediate-mode drawing color. Returns `true` when handled.
    fn shade_gl(&self, state: &mut dyn ColorState) -> bool;
}

/// Static description of an operator type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpDescription {
    /// Class name the host registers.
    pub class: &'static str,
    /// Menu path.
    pub menu: &'static str,
    /// One-line help text.
    pub help: &'static str,
    /// Relative cost hint; 0 means cheaper to recompute than to cache.
    pub slowness: u32,
}

const CONSTANT_HELP: &str = "Produces an image where every pixel is the same color. \
This includes pixels outside the image area as well as inside it.\n\n\
The first and last frame set the length of the clip for operators that want \
that information.";

/// Operator that produces a single color everywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Constant {
    params: ConstantParams,
}

impl Constant {
    /// Description shared by every instance.
    pub const DESCRIPTION: OpDescription = OpDescription {
        class: "Constant",
        menu: "Image/Constant",
        help: CONSTANT_HELP,
        slowness: 0,
    };

    /// Operator over `params`.
    pub fn new(params: ConstantParams) -> Self {
        Self { params }
    }

    /// Current parameter set.
    pub fn params(&self) -> &ConstantParams {
        &self.params
    }

    /// Replace the parameter set, as the host does after a knob change.
    pub fn set_params(&mut self, params: ConstantParams) {
        self.params = params;
    }

    /// Static description of the operator type.
    pub fn describe(&self) -> OpDescription {
        Self::DESCRIPTION
    }
}

impl MetadataProvider for Constant {
    fn validate(&self, fallback: &FormatPair) -> Metadata {
        derive_metadata(&self.params, fallback)
    }

    fn validate_into(&self, info: &mut Metadata) {
        validate_into(&self.params, info);
    }
}

impl RowFiller for Constant {
    fn fill(&self, x: i32, r: i32, channels: ChannelSet, row: &mut dyn RowSink) {
        fill_span(&self.params.slots, x, r, channels, row);
    }
}

impl SampleShader for Constant {
    fn shade(&self, ctx: &dyn SampleContext, out: &mut Pixel) {
        shade_sample(&self.params.slots, ctx, out);
    }

    fn shade_gl(&self, state: &mut dyn ColorState) -> bool {
        shade_gl(&self.params.slots, state)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/op/constant.rs"]
mod tests;
