//! RGB/HSV conversion with the same rounding behaviour as Python's `colorsys`.
//!
//! All channels are floats in `0.0..=1.0`. Hue wraps around, and values pushed
//! out of range by scaling are only clamped when encoded as hex.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Parse `rrggbb` (leading `#` optional). Returns `None` for anything else.
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok().map(|c| f64::from(c) / 255.0);
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Encode as `#rrggbb`, clamping each channel and truncating `c * 255`
pub fn to_hex(rgb: Rgb) -> String {
    let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", byte(rgb.r), byte(rgb.g), byte(rgb.b))
}

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;

    if min == max {
        return Hsv { h: 0.0, s: 0.0, v };
    }

    let range = max - min;
    let s = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hsv {
        h: (h / 6.0).rem_euclid(1.0),
        s,
        v,
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;
    if s == 0.0 {
        return Rgb { r: v, g: v, b: v };
    }

    let sector = (h * 6.0).trunc();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb { r, g, b }
}

/// Shorthand for `to_hex(hsv_to_rgb(..))`
pub fn hsv_hex(h: f64, s: f64, v: f64) -> String {
    to_hex(hsv_to_rgb(Hsv { h, s, v }))
}
