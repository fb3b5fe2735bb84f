//!
//! 16-colour terminal palettes derived from a single base colour.
//!
//! Two generators are available. `dank16` keeps red, green and yellow on fixed
//! hues and only borrows saturation and value from the base colour, so the
//! terminal stays readable whatever the wallpaper. `base16` rotates every hue
//! relative to the base colour.

use crate::utils::color::{Hsv, hsv_hex, parse_hex, rgb_to_hsv};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors produced while generating a palette
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Invalid hex colour '{value}': expected six hex digits like #1e66f5")]
    InvalidHex { value: String },
}

/// Which generator to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Dank16,
    Base16,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Dank16 => write!(f, "dank16"),
            Variant::Base16 => write!(f, "base16"),
        }
    }
}

/// The sixteen ANSI colours, as `#rrggbb`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    colors: [String; 16],
}

impl Palette {
    pub fn colors(&self) -> &[String; 16] {
        &self.colors
    }

    /// Ghostty config lines: `palette = N=#rrggbb`
    pub fn to_ghostty(&self) -> String {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, color)| format!("palette = {i}={color}\n"))
            .collect()
    }

    /// Kitty config lines: `colorN   #rrggbb`
    pub fn to_kitty(&self) -> String {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, color)| format!("color{i}   {color}\n"))
            .collect()
    }
}

fn parse_color(value: &str) -> Result<Hsv, PaletteError> {
    parse_hex(value).map(rgb_to_hsv).ok_or_else(|| PaletteError::InvalidHex {
        value: value.to_string(),
    })
}

/// Normalise a user supplied colour to lowercase `#rrggbb`
fn normalize_hex(value: &str) -> String {
    format!("#{}", value.trim_start_matches('#').to_ascii_lowercase())
}

/// Generate a palette from `base`.
///
/// `honor_primary` pins the magenta/cyan/bright blue slots to a given accent
/// colour; only the dank16 generator supports it.
pub fn generate_palette(
    base: &str,
    variant: Variant,
    light: bool,
    honor_primary: Option<&str>,
) -> Result<Palette, PaletteError> {
    let base = parse_color(base)?;
    let primary = match honor_primary {
        Some(value) => Some((parse_color(value)?, normalize_hex(value))),
        None => None,
    };

    let colors = match variant {
        Variant::Dank16 => dank16(base, light, primary),
        Variant::Base16 => {
            if primary.is_some() {
                log::warn!("honor-primary is not supported by the base16 palette and will be ignored");
            }
            base16(base, light)
        }
    };

    Ok(Palette { colors })
}

fn dank16(base: Hsv, light: bool, primary: Option<(Hsv, String)>) -> [String; 16] {
    let Hsv { h, s, v } = base;
    let red_h = 0.0;
    let green_h = 0.33;
    let yellow_h = 0.08;
    let magenta_h = if h >= 0.03 { h - 0.03 } else { h + 0.97 };
    let cyan_h = h + 0.08;

    if light {
        [
            "#f8f8f8".to_string(),
            hsv_hex(red_h, 0.75, 0.85),
            hsv_hex(green_h, (s * 0.9).max(0.75), v * 0.6),
            hsv_hex(yellow_h, (s * 0.85).max(0.7), v * 0.7),
            hsv_hex(h, (s * 0.9).max(0.7), v * 1.1),
            match &primary {
                Some((p, _)) => hsv_hex(p.h, (p.s * 0.9).max(0.7), p.v * 0.85),
                None => hsv_hex(magenta_h, (s * 0.75).max(0.6), v * 0.9),
            },
            match &primary {
                Some((_, hex)) => hex.clone(),
                None => hsv_hex(cyan_h, (s * 0.8).max(0.65), v * 1.05),
            },
            "#2e2e2e".to_string(),
            "#4a4a4a".to_string(),
            hsv_hex(red_h, 0.6, 0.9),
            hsv_hex(green_h, (s * 0.8).max(0.7), v * 0.65),
            hsv_hex(yellow_h, (s * 0.75).max(0.65), v * 0.75),
            match &primary {
                Some((p, _)) => hsv_hex(p.h, (p.s * 1.1).min(1.0), (p.v * 1.2).min(1.0)),
                None => hsv_hex(h, (s * 0.8).max(0.7), (v * 1.3).min(1.0)),
            },
            hsv_hex(magenta_h, (s * 0.9).max(0.75), (v * 1.25).min(1.0)),
            hsv_hex(cyan_h, (s * 0.75).max(0.65), (v * 1.25).min(1.0)),
            "#1a1a1a".to_string(),
        ]
    } else {
        let bright_cyan_h = if h + 0.02 <= 1.0 { h + 0.02 } else { h + 0.02 - 1.0 };
        [
            "#1a1a1a".to_string(),
            hsv_hex(red_h, 0.6, 0.8),
            hsv_hex(green_h, (s * 0.65).max(0.5), v * 0.9),
            hsv_hex(yellow_h, (s * 0.5).max(0.45), v * 1.4),
            hsv_hex(h, (s * 0.8).max(0.6), (v * 1.6).min(1.0)),
            match &primary {
                Some((p, _)) => hsv_hex(p.h, p.s * 0.8, p.v * 0.75),
                None => hsv_hex(magenta_h, (s * 0.7).max(0.6), v * 0.85),
            },
            match &primary {
                Some((_, hex)) => hex.clone(),
                None => hsv_hex(cyan_h, (s * 0.6).max(0.5), (v * 1.25).min(0.85)),
            },
            "#abb2bf".to_string(),
            "#5c6370".to_string(),
            hsv_hex(red_h, 0.45, 0.9),
            hsv_hex(green_h, (s * 0.5).max(0.4), (v * 1.5).min(0.9)),
            hsv_hex(yellow_h, (s * 0.4).max(0.35), (v * 1.6).min(0.95)),
            match &primary {
                Some((p, _)) => hsv_hex(p.h, (p.s * 1.2).min(1.0), (p.v * 1.1).min(1.0)),
                None => hsv_hex(h, (s * 0.6).max(0.5), (v * 1.5).min(0.9)),
            },
            hsv_hex(magenta_h, (s * 0.7).max(0.6), (v * 1.3).min(0.9)),
            hsv_hex(bright_cyan_h, (s * 0.6).max(0.5), (v * 1.2).min(0.85)),
            "#ffffff".to_string(),
        ]
    }
}

fn base16(base: Hsv, light: bool) -> [String; 16] {
    let Hsv { h, s, v } = base;
    let red_h = h * 0.15;
    let green_h = if h < 0.75 { h + 0.25 } else { h - 0.75 };
    let yellow_h = if h < 0.85 { h + 0.15 } else { h - 0.85 };
    let magenta_h = if h > 0.08 { h - 0.08 } else { h + 0.08 };
    let cyan_h = h + 0.08;

    let (background, white, bright_black, foreground) = if light {
        ("#f8f8f8", "#2e2e2e", "#4a4a4a", "#1a1a1a")
    } else {
        ("#1a1a1a", "#abb2bf", "#5c6370", "#ffffff")
    };

    [
        background.to_string(),
        hsv_hex(red_h, 0.5, 0.88),
        hsv_hex(green_h, s * 0.6, v * 1.1),
        hsv_hex(yellow_h, s * 0.5, v * 1.3),
        hsv_hex(h, s * 0.8, v * 1.2),
        hsv_hex(magenta_h, s * 0.9, v * 1.1),
        hsv_hex(cyan_h, s * 0.7, v * 1.15),
        white.to_string(),
        bright_black.to_string(),
        hsv_hex(red_h, 0.4, 0.94),
        hsv_hex(green_h, s * 0.5, v * 1.3),
        hsv_hex(yellow_h, s * 0.4, v * 1.4),
        hsv_hex(h, s * 0.7, (v * 1.4).min(1.0)),
        hsv_hex(magenta_h, s * 0.8, (v * 1.3).min(1.0)),
        hsv_hex(cyan_h, s * 0.6, (v * 1.3).min(1.0)),
        foreground.to_string(),
    ]
}
