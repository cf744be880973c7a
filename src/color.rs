//! Color derivation and validation.
//!
//! Every color read from an external source (cache file, editor settings)
//! must pass `validate_hex_color` before use. The manipulation helpers
//! return `None` on malformed input; callers treat that as "no color".

use md5::{Digest, Md5};

/// Golden-ratio conjugate. Multiplying hash seeds by it spreads successive
/// hues across the circle, so similar keys still get distinct colors.
const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

/// Dark background that `background_tint` blends toward.
const TINT_BASE: (u8, u8, u8) = (30, 30, 30);

/// Validate and normalize a hex color to lowercase `#rrggbb`.
///
/// Accepts exactly six hex digits with an optional leading `#`,
/// case-insensitively; surrounding whitespace is tolerated.
pub fn validate_hex_color(color: &str) -> Option<String> {
    let trimmed = color.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{}", hex.to_ascii_lowercase()))
    } else {
        None
    }
}

/// Parse a hex color into RGB channels; `None` when invalid.
pub fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let normalized = validate_hex_color(color)?;
    let hex = &normalized[1..];
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert HSL (h in 0..360, s and l in 0..100) to a hex color.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    rgb_to_hex(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    )
}

/// Derive a stable, distinctive color for a key. Deterministic and total:
/// the same key always maps to the same color, and the empty key maps to
/// the fixed sentinel `"default"`.
pub fn derive_color(key: &str) -> String {
    let key = if key.is_empty() { "default" } else { key };
    let digest = Md5::digest(key.as_bytes());
    let seed = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);

    let hue = (seed as f64 * GOLDEN_RATIO_CONJUGATE).fract() * 360.0;
    hsl_to_hex(hue, 70.0, 50.0)
}

/// Scale each channel toward black: 1.0 keeps the color, 0.0 is black.
pub fn mute_color(color: &str, factor: f64) -> Option<String> {
    let (r, g, b) = hex_to_rgb(color)?;
    Some(rgb_to_hex(
        (r as f64 * factor) as u8,
        (g as f64 * factor) as u8,
        (b as f64 * factor) as u8,
    ))
}

/// Blend a color toward the dark background base. Small factors give a
/// barely-perceptible wash rather than a loud fill.
pub fn background_tint(color: &str, factor: f64) -> Option<String> {
    let (r, g, b) = hex_to_rgb(color)?;
    let (br, bg, bb) = TINT_BASE;
    Some(rgb_to_hex(
        (br as f64 + (r as f64 - br as f64) * factor) as u8,
        (bg as f64 + (g as f64 - bg as f64) * factor) as u8,
        (bb as f64 + (b as f64 - bb as f64) * factor) as u8,
    ))
}
