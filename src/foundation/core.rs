/// Integer pixel rectangle. `r` and `t` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct IBox {
    /// Left edge.
    pub x: i32,
    /// Bottom edge.
    pub y: i32,
    /// Right edge, exclusive.
    pub r: i32,
    /// Top edge, exclusive.
    pub t: i32,
}

impl IBox {
    /// Box from its four edges.
    pub fn new(x: i32, y: i32, r: i32, t: i32) -> Self {
        Self { x, y, r, t }
    }

    /// Box anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            r: saturate_i32(width),
            t: saturate_i32(height),
        }
    }

    /// Horizontal extent; 0 when inverted.
    pub fn width(self) -> u32 {
        u32::try_from(i64::from(self.r) - i64::from(self.x)).unwrap_or(0)
    }

    /// Vertical extent; 0 when inverted.
    pub fn height(self) -> u32 {
        u32::try_from(i64::from(self.t) - i64::from(self.y)).unwrap_or(0)
    }

    /// True if the box covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// True if pixel `(x, y)` lies inside the box.
    pub fn contains(self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.r && self.y <= y && y < self.t
    }
}

fn saturate_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Clip length in frames, as the host sees it.
///
/// Never validated: an inverted range (`first > last`) is carried as-is and
/// consumers must tolerate either ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame.
    pub first: i32,
    /// Last frame, inclusive.
    pub last: i32,
}

impl FrameRange {
    /// Range from `first` to `last`.
    pub fn new(first: i32, last: i32) -> Self {
        Self { first, last }
    }

    /// True if `first > last`.
    pub fn is_inverted(self) -> bool {
        self.first > self.last
    }
}

impl Default for FrameRange {
    fn default() -> Self {
        Self { first: 1, last: 1 }
    }
}

/// Image format: full width/height, the image area inside it, and pixel aspect.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Format {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Standard format name, if any.
    pub name: Option<String>,
    /// Full width in pixels.
    pub width: u32,
    /// Full height in pixels.
    pub height: u32,
    /// Image area inside the full size, usually `(0, 0, width, height)`.
    pub area: IBox,
    /// Pixel width over pixel height.
    pub pixel_aspect: f64,
}

impl Format {
    /// Unnamed square-pixel format covering its full size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            name: None,
            width,
            height,
            area: IBox::from_size(width, height),
            pixel_aspect: 1.0,
        }
    }

    /// Sets the format name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the image area.
    pub fn with_area(mut self, area: IBox) -> Self {
        self.area = area;
        self
    }

    /// Sets the pixel aspect.
    pub fn with_pixel_aspect(mut self, pixel_aspect: f64) -> Self {
        self.pixel_aspect = pixel_aspect;
        self
    }
}

/// A working format together with the full-size format it was derived from.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormatPair {
    /// Working format.
    pub format: Format,
    /// Full-size format the working one was derived from.
    pub full_size_format: Format,
}

impl FormatPair {
    /// Pair whose full-size format equals `format`.
    pub fn new(format: Format) -> Self {
        Self {
            full_size_format: format.clone(),
            format,
        }
    }

    /// Sets the full-size format.
    pub fn with_full_size(mut self, full_size_format: Format) -> Self {
        self.full_size_format = full_size_format;
        self
    }
}

impl From<Format> for FormatPair {
    fn from(format: Format) -> Self {
        Self::new(format)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
