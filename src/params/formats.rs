//! Named standard formats and the textual format grammar.
//!
//! A format written as text is either the name of a standard format
//! (`"HD_1080"`) or `"W H [x y r t] [pixel_aspect] [name]"`, e.g.
//! `"2048 1556 0 0 2048 1556 1 2K_Super_35(full-ap)"`.

use crate::foundation::core::{Format, IBox};
use crate::foundation::error::{FlatcolorError, FlatcolorResult};

struct StandardFormat {
    name: &'static str,
    width: u32,
    height: u32,
    pixel_aspect: f64,
}

const fn std_format(name: &'static str, width: u32, height: u32, pixel_aspect: f64) -> StandardFormat {
    StandardFormat {
        name,
        width,
        height,
        pixel_aspect,
    }
}

const STANDARD_FORMATS: &[StandardFormat] = &[
    std_format("PC_Video", 640, 480, 1.0),
    std_format("NTSC", 720, 486, 0.91),
    std_format("PAL", 720, 576, 1.09),
    std_format("NTSC_16:9", 720, 486, 1.21),
    std_format("PAL_16:9", 720, 576, 1.46),
    std_format("HD_720", 1280, 720, 1.0),
    std_format("HD_1080", 1920, 1080, 1.0),
    std_format("UHD_4K", 3840, 2160, 1.0),
    std_format("1K_Super_35(full-ap)", 1024, 778, 1.0),
    std_format("1K_Cinemascope", 914, 778, 2.0),
    std_format("2K_Super_35(full-ap)", 2048, 1556, 1.0),
    std_format("2K_Cinemascope", 1828, 1556, 2.0),
    std_format("2K_DCP", 2048, 1080, 1.0),
    std_format("4K_Super_35(full-ap)", 4096, 3112, 1.0),
    std_format("4K_Cinemascope", 3656, 3112, 2.0),
    std_format("4K_DCP", 4096, 2160, 1.0),
    std_format("square_256", 256, 256, 1.0),
    std_format("square_512", 512, 512, 1.0),
    std_format("square_1K", 1024, 1024, 1.0),
    std_format("square_2K", 2048, 2048, 1.0),
];

/// Look up a standard format by name.
pub fn standard_format(name: &str) -> Option<Format> {
    STANDARD_FORMATS.iter().find(|f| f.name == name).map(|f| {
        Format::new(f.width, f.height)
            .with_pixel_aspect(f.pixel_aspect)
            .named(f.name)
    })
}

/// Names of every standard format, in table order.
pub fn standard_format_names() -> impl Iterator<Item = &'static str> {
    STANDARD_FORMATS.iter().map(|f| f.name)
}

/// Parse a standard format name or a `"W H [x y r t] [pixel_aspect] [name]"` string.
pub fn parse_format(text: &str) -> FlatcolorResult<Format> {
    let text = text.trim();
    if let Some(f) = standard_format(text) {
        return Ok(f);
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (width, height) = match tokens.as_slice() {
        [w, h, ..] => (parse_dim(w, text)?, parse_dim(h, text)?),
        _ => {
            return Err(FlatcolorError::validation(format!(
                "unknown format '{text}'"
            )));
        }
    };

    let mut format = Format::new(width, height);
    let mut rest = &tokens[2..];

    if rest.len() >= 4 {
        let area: Option<Vec<i32>> = rest[..4].iter().map(|t| t.parse().ok()).collect();
        if let Some(a) = area {
            format = format.with_area(IBox::new(a[0], a[1], a[2], a[3]));
            rest = &rest[4..];
        }
    }

    if let Some(pa) = rest.first().and_then(|t| t.parse::<f64>().ok()) {
        if !(pa.is_finite() && pa > 0.0) {
            return Err(FlatcolorError::validation(format!(
                "format '{text}' has invalid pixel aspect {pa}"
            )));
        }
        format = format.with_pixel_aspect(pa);
        rest = &rest[1..];
    }

    if !rest.is_empty() {
        format = format.named(rest.join(" "));
    }
    Ok(format)
}

fn parse_dim(token: &str, text: &str) -> FlatcolorResult<u32> {
    match token.parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(FlatcolorError::validation(format!(
            "format '{text}' must start with width and height > 0"
        ))),
    }
}

/// Inverse of [`parse_format`] for arbitrary formats (never emits a bare name).
pub fn format_to_string(format: &Format) -> String {
    let a = format.area;
    let mut s = format!(
        "{} {} {} {} {} {} {}",
        format.width, format.height, a.x, a.y, a.r, a.t, format.pixel_aspect
    );
    if let Some(name) = &format.name {
        s.push(' ');
        s.push_str(name);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/params/formats.rs"]
mod tests;
