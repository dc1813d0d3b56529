use image::{DynamicImage, Rgb, RgbImage};

use crate::domain::model::NamedColor;
use crate::utils::error::{Result, WallsyError};

/// Duotone mapping: grayscale the image, then interpolate shadows toward
/// `dark` and highlights toward `light`.
pub fn colorize(img: &DynamicImage, dark: &NamedColor, light: &NamedColor) -> DynamicImage {
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();

    let mut out = RgbImage::new(width, height);
    for (x, y, pixel) in luma.enumerate_pixels() {
        let t = pixel[0] as f32 / 255.0;
        out.put_pixel(
            x,
            y,
            Rgb([
                lerp(dark.rgb[0], light.rgb[0], t),
                lerp(dark.rgb[1], light.rgb[1], t),
                lerp(dark.rgb[2], light.rgb[2], t),
            ]),
        );
    }

    DynamicImage::ImageRgb8(out)
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Resolve a color argument: `#rrggbb`, `#rgb`, or a CSS color name.
pub fn parse_color(spec: &str) -> Result<NamedColor> {
    let trimmed = spec.trim();

    let rgb = if let Some(hex) = trimmed.strip_prefix('#') {
        parse_hex(hex).ok_or_else(|| invalid_color(spec, "malformed hex color"))?
    } else {
        named_rgb(trimmed).ok_or_else(|| invalid_color(spec, "unknown color name"))?
    };

    Ok(NamedColor {
        spec: trimmed.to_string(),
        rgb,
    })
}

fn invalid_color(spec: &str, reason: &str) -> WallsyError {
    WallsyError::InvalidConfigValueError {
        field: "color".to_string(),
        value: spec.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 16 + v;
            }
            Some(rgb)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some([r, g, b])
        }
        _ => None,
    }
}

fn named_rgb(name: &str) -> Option<[u8; 3]> {
    let name = name.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, rgb)| *rgb)
}

// The CSS names people actually reach for when theming a wallpaper.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("red", [255, 0, 0]),
    ("maroon", [128, 0, 0]),
    ("crimson", [220, 20, 60]),
    ("salmon", [250, 128, 114]),
    ("coral", [255, 127, 80]),
    ("orange", [255, 165, 0]),
    ("gold", [255, 215, 0]),
    ("yellow", [255, 255, 0]),
    ("khaki", [240, 230, 140]),
    ("olive", [128, 128, 0]),
    ("lime", [0, 255, 0]),
    ("green", [0, 128, 0]),
    ("forestgreen", [34, 139, 34]),
    ("darkgreen", [0, 100, 0]),
    ("seagreen", [46, 139, 87]),
    ("teal", [0, 128, 128]),
    ("turquoise", [64, 224, 208]),
    ("cyan", [0, 255, 255]),
    ("aqua", [0, 255, 255]),
    ("skyblue", [135, 206, 235]),
    ("steelblue", [70, 130, 180]),
    ("royalblue", [65, 105, 225]),
    ("blue", [0, 0, 255]),
    ("navy", [0, 0, 128]),
    ("midnightblue", [25, 25, 112]),
    ("indigo", [75, 0, 130]),
    ("purple", [128, 0, 128]),
    ("violet", [238, 130, 238]),
    ("orchid", [218, 112, 214]),
    ("plum", [221, 160, 221]),
    ("magenta", [255, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("pink", [255, 192, 203]),
    ("brown", [165, 42, 42]),
    ("chocolate", [210, 105, 30]),
    ("slategray", [112, 128, 144]),
    ("lavender", [230, 230, 250]),
    ("beige", [245, 245, 220]),
    ("ivory", [255, 255, 240]),
];
