use crate::foundation::channel::Channel;
use crate::params::knobs::ChannelSlot;
use crate::shade::sample::{Pixel, SampleContext};

/// Alpha at or below this leaves depth alone on the partial path.
pub const DEPTH_WRITE_MIN_ALPHA: f32 = 0.0001;

/// Blending policy picked for one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadePath {
    /// Overwrite the slot channels and depth.
    Opaque,
    /// `out * (1 - alpha) + color` per slot.
    Partial,
    /// Add the first three slot colors.
    Transparent,
}

/// Select the blending policy for `slots` in `ctx`.
pub fn shade_path(slots: &[ChannelSlot; 4], ctx: &dyn SampleContext) -> ShadePath {
    let alpha = slots[3];
    if !ctx.transparency() || alpha.channel != Channel::ALPHA || alpha.color >= 1.0 {
        ShadePath::Opaque
    } else if alpha.color > 0.0 {
        ShadePath::Partial
    } else {
        // Also taken for a NaN alpha.
        ShadePath::Transparent
    }
}

/// Composite the constant into `out`.
///
/// The partial path adds the color unscaled by alpha. Renders depend on that
/// exact formula, so it is kept as is.
pub fn shade_sample(slots: &[ChannelSlot; 4], ctx: &dyn SampleContext, out: &mut Pixel) {
    let alpha = slots[3].color;
    match shade_path(slots, ctx) {
        ShadePath::Opaque => {
            for slot in slots.iter().filter(|s| !s.channel.is_none()) {
                out[slot.channel] = slot.color;
            }
            out[Channel::DEPTH] = ctx.w();
        }
        ShadePath::Partial => {
            for slot in slots.iter().filter(|s| !s.channel.is_none()) {
                out[slot.channel] = out[slot.channel] * (1.0 - alpha) + slot.color;
            }
            if alpha > DEPTH_WRITE_MIN_ALPHA {
                out[Channel::DEPTH] = ctx.w();
            }
        }
        ShadePath::Transparent => {
            for slot in slots[..3].iter().filter(|s| !s.channel.is_none()) {
                out[slot.channel] += slot.color;
            }
        }
    }
}

/// Immediate-mode color state of the host's rasterizer.
pub trait ColorState {
    /// Set the current drawing color. Display transforms are the host's job.
    fn set_color(&mut self, rgba: [f32; 4]);
}

/// Push the four slot colors as the current drawing color.
pub fn shade_gl(slots: &[ChannelSlot; 4], state: &mut dyn ColorState) -> bool {
    state.set_color(slots.map(|s| s.color));
    true
}

#[cfg(test)]
#[path = "../../tests/unit/shade/compositor.rs"]
mod tests;
