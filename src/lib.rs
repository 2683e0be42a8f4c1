//! flatcolor is a constant-color image operator for scanline compositing pipelines.
//!
//! One small parameter set (four channel/color slots, a frame range and an optional
//! format) drives three capabilities a host invokes through traits:
//!
//! 1. **Metadata** ([`MetadataProvider`]): channels, bounding box, frame range and the
//!    "black outside" flag the pipeline uses to plan its own work.
//! 2. **Scanline fill** ([`RowFiller`]): writes the constant into a [`RowSink`] span,
//!    or erases channels whose color is zero.
//! 3. **Sample shading** ([`SampleShader`]): blends the constant into one 3D sample
//!    using the opaque, partial or transparent policy.
//!
//! The core operations are total: inputs are trusted and nothing is validated.
//! Only the parameter decoder ([`ConstantParams::from_json_str`]) and the plane
//! renderer ([`render_rgba32f`]) can fail.
//!
//! # Concurrency
//!
//! [`Constant`] is `Send + Sync` and every capability takes `&self`, so hosts may
//! fill disjoint scanlines or shade disjoint samples from many threads.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod engine;
mod foundation;
mod info;
mod op;
mod params;
mod render;
mod shade;

pub use engine::fill::fill_span;
pub use engine::row::{Row, RowChannel, RowSink};
pub use foundation::channel::{Channel, ChannelSet};
pub use foundation::core::{Format, FormatPair, FrameRange, IBox};
pub use foundation::error::{FlatcolorError, FlatcolorResult};
pub use info::metadata::{Metadata, derive_metadata, validate_into};
pub use op::constant::{Constant, MetadataProvider, OpDescription, RowFiller, SampleShader};
pub use params::formats::{format_to_string, parse_format, standard_format, standard_format_names};
pub use params::knobs::{ChannelSlot, ConstantParams, layer_channels};
pub use params::legacy::{LEGACY_KNOBS, LegacyAction, LegacyKnob, apply_legacy_knobs};
pub use render::plane::{PlaneThreading, render_rgba32f};
pub use shade::compositor::{
    ColorState, DEPTH_WRITE_MIN_ALPHA, ShadePath, shade_gl, shade_path, shade_sample,
};
pub use shade::sample::{Pixel, SampleContext, VertexContext};
