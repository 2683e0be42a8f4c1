use serde_json::{Map, Value};

use crate::foundation::channel::Channel;
use crate::foundation::core::{Format, FormatPair, FrameRange, IBox};
use crate::foundation::error::{FlatcolorError, FlatcolorResult};
use crate::params::formats::{format_to_string, parse_format};
use crate::params::legacy::apply_legacy_knobs;

/// One of the four (channel, color) pairs of the operator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelSlot {
    /// Channel the color is written to.
    pub channel: Channel,
    /// Constant value for the channel.
    pub color: f32,
}

impl ChannelSlot {
    /// Slot writing `color` into `channel`.
    pub fn new(channel: Channel, color: f32) -> Self {
        Self { channel, color }
    }
}

/// Full parameter set of the constant operator.
///
/// Values are trusted: colors may be any float (NaN included) and the frame
/// range may be inverted.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantParams {
    /// The four (channel, color) pairs, in slot order.
    pub slots: [ChannelSlot; 4],
    /// Explicit format; `None` defers to the format supplied by the host.
    pub format: Option<FormatPair>,
    /// Frame range reported in the metadata.
    pub frames: FrameRange,
}

impl Default for ConstantParams {
    fn default() -> Self {
        Self {
            slots: [
                ChannelSlot::new(Channel::RED, 0.0),
                ChannelSlot::new(Channel::GREEN, 0.0),
                ChannelSlot::new(Channel::BLUE, 0.0),
                ChannelSlot::new(Channel::ALPHA, 0.0),
            ],
            format: None,
            frames: FrameRange::default(),
        }
    }
}

impl ConstantParams {
    /// Black rgba over frame 1, no explicit format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the four slot colors.
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        for (slot, c) in self.slots.iter_mut().zip(color) {
            slot.color = c;
        }
        self
    }

    /// Sets the four slot channels.
    pub fn with_channels(mut self, channels: [Channel; 4]) -> Self {
        for (slot, c) in self.slots.iter_mut().zip(channels) {
            slot.channel = c;
        }
        self
    }

    /// Sets an explicit format.
    pub fn with_format(mut self, format: impl Into<FormatPair>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the frame range.
    pub fn with_frames(mut self, first: i32, last: i32) -> Self {
        self.frames = FrameRange::new(first, last);
        self
    }

    /// Slot colors in slot order.
    pub fn colors(&self) -> [f32; 4] {
        self.slots.map(|s| s.color)
    }

    /// Slot channels in slot order.
    pub fn channels(&self) -> [Channel; 4] {
        self.slots.map(|s| s.channel)
    }

    /// Decode a saved parameter set (a JSON object of knob name to value).
    #[tracing::instrument(skip(text))]
    pub fn from_json_str(text: &str) -> FlatcolorResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    /// Decode a parameter object, applying the legacy knob table first.
    pub fn from_json_value(value: Value) -> FlatcolorResult<Self> {
        let Value::Object(mut knobs) = value else {
            return Err(FlatcolorError::serde("parameters must be a JSON object"));
        };
        apply_legacy_knobs(&mut knobs);
        let def: KnobsDef = serde_json::from_value(Value::Object(knobs))?;
        def.into_params()
    }

    /// Encode using current knob names only.
    pub fn to_json_value(&self) -> Value {
        let mut knobs = Map::new();
        knobs.insert(
            "channels".to_string(),
            Value::from(
                self.channels()
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>(),
            ),
        );
        knobs.insert("color".to_string(), Value::from(self.colors().to_vec()));
        if let Some(pair) = &self.format {
            knobs.insert(
                "format".to_string(),
                Value::from(format_to_string(&pair.format)),
            );
        }
        knobs.insert("first".to_string(), Value::from(self.frames.first));
        knobs.insert("last".to_string(), Value::from(self.frames.last));
        Value::Object(knobs)
    }
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct KnobsDef {
    #[serde(default)]
    channels: Option<ChannelsDef>,
    #[serde(default)]
    color: Option<ColorDef>,
    #[serde(default)]
    format: Option<FormatDef>,
    #[serde(default = "default_frame")]
    first: i32,
    #[serde(default = "default_frame")]
    last: i32,
}

fn default_frame() -> i32 {
    1
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ChannelsDef {
    Layer(String),
    List(Vec<String>),
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ColorDef {
    Scalar(f32),
    List(Vec<f32>),
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum FormatDef {
    Text(String),
    Object(FormatObjectDef),
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct FormatObjectDef {
    #[serde(default)]
    name: Option<String>,
    width: u32,
    height: u32,
    #[serde(default)]
    area: Option<IBox>,
    #[serde(default = "default_pixel_aspect")]
    pixel_aspect: f64,
}

fn default_pixel_aspect() -> f64 {
    1.0
}

impl KnobsDef {
    fn into_params(self) -> FlatcolorResult<ConstantParams> {
        let mut params = ConstantParams::default().with_frames(self.first, self.last);

        if let Some(channels) = self.channels {
            params = params.with_channels(channels.resolve()?);
        }
        if let Some(color) = self.color {
            params = params.with_color(color.resolve()?);
        }
        if let Some(format) = self.format {
            params = params.with_format(format.resolve()?);
        }
        Ok(params)
    }
}

impl ChannelsDef {
    fn resolve(self) -> FlatcolorResult<[Channel; 4]> {
        match self {
            Self::Layer(name) => layer_channels(&name)
                .ok_or_else(|| FlatcolorError::validation(format!("unknown layer '{name}'"))),
            Self::List(names) => {
                let channels = names
                    .iter()
                    .map(|n| n.parse::<Channel>())
                    .collect::<FlatcolorResult<Vec<_>>>()?;
                <[Channel; 4]>::try_from(channels).map_err(|v| {
                    FlatcolorError::validation(format!(
                        "channels must list exactly 4 entries, got {}",
                        v.len()
                    ))
                })
            }
        }
    }
}

impl ColorDef {
    fn resolve(self) -> FlatcolorResult<[f32; 4]> {
        match self {
            Self::Scalar(v) => Ok([v; 4]),
            Self::List(values) => <[f32; 4]>::try_from(values).map_err(|v| {
                FlatcolorError::validation(format!(
                    "color must have exactly 4 components, got {}",
                    v.len()
                ))
            }),
        }
    }
}

impl FormatDef {
    fn resolve(self) -> FlatcolorResult<Format> {
        match self {
            Self::Text(text) => parse_format(&text),
            Self::Object(def) => {
                if def.width == 0 || def.height == 0 {
                    return Err(FlatcolorError::validation(
                        "format width/height must be > 0",
                    ));
                }
                let mut format = Format::new(def.width, def.height)
                    .with_pixel_aspect(def.pixel_aspect);
                if let Some(area) = def.area {
                    format = format.with_area(area);
                }
                if let Some(name) = def.name {
                    format = format.named(name);
                }
                Ok(format)
            }
        }
    }
}

/// Slot assignment for a standard layer name.
pub fn layer_channels(name: &str) -> Option<[Channel; 4]> {
    const N: Channel = Channel::NONE;
    let channels = match name {
        "rgba" => [Channel::RED, Channel::GREEN, Channel::BLUE, Channel::ALPHA],
        "rgb" => [Channel::RED, Channel::GREEN, Channel::BLUE, N],
        "alpha" => [N, N, N, Channel::ALPHA],
        "depth" => [Channel::DEPTH, N, N, N],
        "mask" => [Channel::MASK, N, N, N],
        "forward" => [Channel::FORWARD_U, Channel::FORWARD_V, N, N],
        "backward" => [Channel::BACKWARD_U, Channel::BACKWARD_V, N, N],
        "motion" => [
            Channel::FORWARD_U,
            Channel::FORWARD_V,
            Channel::BACKWARD_U,
            Channel::BACKWARD_V,
        ],
        "none" => [N; 4],
        _ => return None,
    };
    Some(channels)
}

#[cfg(test)]
#[path = "../../tests/unit/params/knobs.rs"]
mod tests;
