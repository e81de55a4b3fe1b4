//! RGB color handling with hex parsing and HSL conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use std::fmt;

use super::HslColor;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// This is the form colors take at the edges of the program: hex input on the
/// command line and hex output in generated Tailwind configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use colorgen::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#3F7FBF").unwrap();
    /// assert_eq!(color, RgbColor::new(63, 127, 191));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a hex string, appending an alpha byte when
    /// `alpha` is present ("#RRGGBBAA").
    #[must_use]
    pub fn to_hex_with_alpha(&self, alpha: Option<f32>) -> String {
        match alpha {
            Some(a) => {
                let a = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
                format!("{}{:02X}", self.to_hex(), a)
            }
            None => self.to_hex(),
        }
    }

    /// Converts the RGB color to HSL.
    ///
    /// Returns `(h, s, l)` with hue in degrees (0.0-360.0, 0.0 for grays) and
    /// saturation/lightness in percent (0.0-100.0).
    ///
    /// # Examples
    ///
    /// ```
    /// use colorgen::models::RgbColor;
    ///
    /// let (h, s, l) = RgbColor::new(255, 0, 0).to_hsl();
    /// assert!(h.abs() < 0.01);
    /// assert!((s - 100.0).abs() < 0.01);
    /// assert!((l - 50.0).abs() < 0.01);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        let h = if delta == 0.0 {
            0.0 // Grayscale, hue is undefined
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        // Normalize hue to 0-360 range
        let h = if h < 0.0 { h + 360.0 } else { h };

        (h, (s * 100.0).min(100.0), l * 100.0)
    }

    /// Creates an `RgbColor` from HSL components.
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees (wrapped into 0.0-360.0)
    /// * `s` - Saturation in percent (0.0-100.0, will be clamped)
    /// * `l` - Lightness in percent (0.0-100.0, will be clamped)
    ///
    /// # Examples
    ///
    /// ```
    /// use colorgen::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsl(120.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
    /// assert_eq!(RgbColor::from_hsl(210.0, 50.0, 50.0), RgbColor::new(64, 128, 191));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 100.0) / 100.0;
        let l = l.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            g: ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            b: ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Converts to an opaque [`HslColor`].
    #[must_use]
    pub fn to_hsl_color(&self) -> HslColor {
        let (h, s, l) = self.to_hsl();
        HslColor::new(h, s, l)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<HslColor> for RgbColor {
    fn from(color: HslColor) -> Self {
        Self::from_hsl(color.h, color.s, color.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: RgbColor, b: RgbColor) {
        for (x, y, name) in [(a.r, b.r, "red"), (a.g, b.g, "green"), (a.b, b.b, "blue")] {
            assert!(
                (i16::from(x) - i16::from(y)).abs() <= 1,
                "{name} channel mismatch: {x} vs {y}"
            );
        }
    }

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00ff00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("  #3f7fbf  ").unwrap();
        assert_eq!(color, RgbColor::new(63, 127, 191));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#é1234").is_err());
    }

    #[test]
    fn test_to_hex_with_alpha() {
        let color = RgbColor::new(0, 128, 255);
        assert_eq!(color.to_hex(), "#0080FF");
        assert_eq!(color.to_hex_with_alpha(None), "#0080FF");
        assert_eq!(color.to_hex_with_alpha(Some(1.0)), "#0080FFFF");
        assert_eq!(color.to_hex_with_alpha(Some(0.5)), "#0080FF80");
    }

    #[test]
    fn test_to_hsl_primaries() {
        let (h, s, l) = RgbColor::new(0, 0, 255).to_hsl();
        assert!((h - 240.0).abs() < 0.01);
        assert!((s - 100.0).abs() < 0.01);
        assert!((l - 50.0).abs() < 0.01);

        let (h, s, l) = RgbColor::new(0, 255, 0).to_hsl();
        assert!((h - 120.0).abs() < 0.01);
        assert!((s - 100.0).abs() < 0.01);
        assert!((l - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_to_hsl_grayscale() {
        assert_eq!(RgbColor::new(0, 0, 0).to_hsl(), (0.0, 0.0, 0.0));

        let (h, s, l) = RgbColor::new(255, 255, 255).to_hsl();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_from_hsl_grayscale_ignores_hue() {
        assert_eq!(RgbColor::from_hsl(0.0, 0.0, 0.0), RgbColor::new(0, 0, 0));
        assert_eq!(RgbColor::from_hsl(0.0, 0.0, 100.0), RgbColor::new(255, 255, 255));
        assert_eq!(RgbColor::from_hsl(180.0, 0.0, 50.0), RgbColor::new(128, 128, 128));
    }

    #[test]
    fn test_from_hsl_wraps_hue() {
        assert_eq!(
            RgbColor::from_hsl(360.0, 100.0, 50.0),
            RgbColor::from_hsl(0.0, 100.0, 50.0)
        );
        assert_eq!(
            RgbColor::from_hsl(-120.0, 100.0, 50.0),
            RgbColor::from_hsl(240.0, 100.0, 50.0)
        );
    }

    #[test]
    fn test_hsl_roundtrip() {
        let colors = [
            RgbColor::new(255, 255, 0),
            RgbColor::new(255, 0, 255),
            RgbColor::new(0, 255, 255),
            RgbColor::new(128, 64, 192),
            RgbColor::new(200, 100, 50),
            RgbColor::new(17, 24, 39),
        ];

        for color in colors {
            let (h, s, l) = color.to_hsl();
            assert_close(color, RgbColor::from_hsl(h, s, l));
        }
    }
}
