//! Palette derivation.
//!
//! [`derive_palette`] turns a [`BaseColors`] into a [`Palette`] by
//! interpolating lightness: stops lighter than 500 move linearly toward white
//! (lightness 100), darker stops move linearly toward black (lightness 0).
//! Hue, saturation and alpha are held fixed. The function is pure; it does
//! not validate or clamp, so callers validate at the input boundary.

pub mod initial;
pub mod presets;

pub use initial::{base_colors_from_hue, generate_initial_base_colors, InitialSelection};
pub use presets::{builtin_presets, Preset};

use crate::models::{BaseColors, HslColor, Palette, RoleScale, Variant, BASE_LEVEL, SHADE_LEVELS};

/// Distance from 0 and 100 inside which every scale is strictly decreasing.
///
/// Closer to the extremes, f32 rounding can make neighbouring stops equal.
pub const STRICT_LIGHTNESS_MARGIN: f32 = 1e-3;

/// Interpolation weight of a shade level.
///
/// Negative weights move toward white, positive toward black; 500 is zero.
/// The magnitude is the fraction of the remaining distance covered.
#[must_use]
pub fn shade_weight(level: u16) -> f32 {
    match level {
        50 => -0.9,
        100 => -0.8,
        200 => -0.6,
        300 => -0.4,
        400 => -0.2,
        600 => 0.2,
        700 => 0.4,
        800 => 0.6,
        900 => 0.8,
        950 => 0.9,
        _ => 0.0,
    }
}

/// Computes one variant of `color` at `level`.
///
/// Level 500 (and any level outside [`SHADE_LEVELS`]) returns `color` unchanged.
#[must_use]
pub fn shade(color: HslColor, level: u16) -> HslColor {
    if level == BASE_LEVEL {
        return color;
    }
    let weight = shade_weight(level);
    let l = if weight < 0.0 {
        color.l + (100.0 - color.l) * -weight
    } else if weight > 0.0 {
        color.l * (1.0 - weight)
    } else {
        color.l
    };
    color.with_lightness(l)
}

/// Derives the full palette for `base`.
///
/// For every role the scale has one variant per [`SHADE_LEVELS`] entry; the
/// 500 variant equals the base color exactly. For any lightness in 0..=100
/// the variants stay in 0..=100 and never get lighter from 50 to 950. They
/// strictly decrease when the base lightness is at least
/// [`STRICT_LIGHTNESS_MARGIN`] away from both 0 and 100; nearer the extremes
/// neighbouring stops may be equal (at exactly 100 every lighter stop is 100).
#[must_use]
pub fn derive_palette(base: &BaseColors) -> Palette {
    let scales = base
        .iter()
        .map(|(role, color)| RoleScale {
            role,
            variants: SHADE_LEVELS
                .iter()
                .map(|&level| Variant {
                    level,
                    color: shade(color, level),
                })
                .collect(),
        })
        .collect();

    Palette { scales }
}
