//! HSL color values, the working representation of the palette pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{ColorRole, RgbColor};

/// Largest valid hue, in degrees.
pub const HUE_MAX: f32 = 360.0;
/// Largest valid saturation or lightness, in percent.
pub const PERCENT_MAX: f32 = 100.0;

/// Errors raised when colors are validated at the input boundary.
///
/// Validation never clamps: an out-of-range channel rejects the whole value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A channel lies outside its numeric range (or is NaN).
    #[error("invalid color range: {channel} = {value} (expected {min}..={max})")]
    InvalidColorRange {
        /// Channel name ("hue", "saturation", "lightness", "alpha").
        channel: &'static str,
        /// Offending value.
        value: f32,
        /// Inclusive lower bound.
        min: f32,
        /// Inclusive upper bound.
        max: f32,
    },
    /// A base color role holds an invalid color.
    #[error("{role} color is invalid")]
    InvalidRole {
        /// Role whose color failed validation.
        role: ColorRole,
        /// Underlying range error.
        #[source]
        source: Box<ColorError>,
    },
}

/// A color in HSL space with optional alpha.
///
/// Hue is in degrees (0-360), saturation and lightness in percent (0-100),
/// alpha in 0-1. Channels are stored as-is; call [`HslColor::validate`] on
/// anything that came from outside the program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees.
    pub h: f32,
    /// Saturation in percent.
    pub s: f32,
    /// Lightness in percent.
    pub l: f32,
    /// Optional alpha (0-1). `None` means fully opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f32>,
}

impl HslColor {
    /// Creates an opaque color.
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l, a: None }
    }

    /// Returns the same color with the given alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a: Some(a), ..self }
    }

    /// Returns the same hue, saturation and alpha with a different lightness.
    #[must_use]
    pub const fn with_lightness(self, l: f32) -> Self {
        Self { l, ..self }
    }

    /// Parses a `#RRGGBB` hex string into an opaque HSL color.
    pub fn from_hex(hex: &str) -> anyhow::Result<Self> {
        Ok(RgbColor::from_hex(hex)?.to_hsl_color())
    }

    /// Checks every channel against its range.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorRange`] for the first channel that is
    /// out of range or NaN.
    pub fn validate(&self) -> Result<(), ColorError> {
        check_range("hue", self.h, HUE_MAX)?;
        check_range("saturation", self.s, PERCENT_MAX)?;
        check_range("lightness", self.l, PERCENT_MAX)?;
        if let Some(a) = self.a {
            check_range("alpha", a, 1.0)?;
        }
        Ok(())
    }

    /// Converts to 8-bit RGB, dropping alpha.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from(*self)
    }

    /// Hex representation, "#RRGGBB" or "#RRGGBBAA" when alpha is set.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex_with_alpha(self.a)
    }

    /// CSS Color Level 4 notation, e.g. `hsl(210 50% 50%)` or
    /// `hsl(210 50% 50% / 0.8)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let h = format_channel(self.h);
        let s = format_channel(self.s);
        let l = format_channel(self.l);
        match self.a {
            Some(a) => format!("hsl({h} {s}% {l}% / {})", format_channel(a)),
            None => format!("hsl({h} {s}% {l}%)"),
        }
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<RgbColor> for HslColor {
    fn from(color: RgbColor) -> Self {
        color.to_hsl_color()
    }
}

fn check_range(channel: &'static str, value: f32, max: f32) -> Result<(), ColorError> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::InvalidColorRange {
            channel,
            value,
            min: 0.0,
            max,
        })
    }
}

/// Formats a channel with at most two decimals and no trailing zeros.
fn format_channel(value: f32) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
