//! Derived palette data structures.
//!
//! A [`Palette`] holds one [`RoleScale`] per color role, each with the Tailwind
//! shade levels 50 through 950. The 500 level is the base color itself.

use serde::Serialize;

use super::{ColorRole, HslColor};

/// Shade levels of every scale, from lightest to darkest.
pub const SHADE_LEVELS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// The level that reproduces the base color unchanged.
pub const BASE_LEVEL: u16 = 500;

/// Index of [`BASE_LEVEL`] within [`SHADE_LEVELS`].
pub const BASE_INDEX: usize = 5;

/// One lightness-adjusted derivative of a base color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Variant {
    /// Shade level (50-950).
    pub level: u16,
    /// The color at this level.
    pub color: HslColor,
}

/// All variants of a single role, ordered lightest (50) to darkest (950).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleScale {
    /// The role this scale was derived for.
    pub role: ColorRole,
    /// Variants in [`SHADE_LEVELS`] order.
    pub variants: Vec<Variant>,
}

impl RoleScale {
    /// Get a variant by shade level.
    #[must_use]
    pub fn variant(&self, level: u16) -> Option<&Variant> {
        self.variants.iter().find(|v| v.level == level)
    }

    /// The identity stop (level 500).
    #[must_use]
    pub fn base(&self) -> Option<&Variant> {
        self.variants.get(BASE_INDEX)
    }

    /// Variant name as used in CSS and Tailwind, e.g. "primary-700".
    #[must_use]
    pub fn variant_name(&self, level: u16) -> String {
        format!("{}-{}", self.role, level)
    }
}

/// The full set of shade scales derived from a [`BaseColors`](super::BaseColors).
///
/// A palette has no identity of its own; it is always recomputed from the
/// current base colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    /// One scale per role, in [`ColorRole::ALL`] order.
    pub scales: Vec<RoleScale>,
}

impl Palette {
    /// Get the scale of a role.
    #[must_use]
    pub fn scale(&self, role: ColorRole) -> Option<&RoleScale> {
        self.scales.iter().find(|s| s.role == role)
    }

    /// Get a single variant, e.g. `(Primary, 700)`.
    #[must_use]
    pub fn variant(&self, role: ColorRole, level: u16) -> Option<&Variant> {
        self.scale(role).and_then(|s| s.variant(level))
    }

    /// Iterates `(name, color)` pairs such as `("accent-300", color)`.
    pub fn named_variants(&self) -> impl Iterator<Item = (String, HslColor)> + '_ {
        self.scales.iter().flat_map(|scale| {
            scale
                .variants
                .iter()
                .map(move |v| (scale.variant_name(v.level), v.color))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> RoleScale {
        RoleScale {
            role: ColorRole::Primary,
            variants: SHADE_LEVELS
                .iter()
                .map(|&level| Variant {
                    level,
                    color: HslColor::new(210.0, 50.0, 100.0 - f32::from(level) / 10.0),
                })
                .collect(),
        }
    }

    #[test]
    fn test_base_index_matches_level() {
        assert_eq!(SHADE_LEVELS[BASE_INDEX], BASE_LEVEL);
        assert_eq!(scale().base().map(|v| v.level), Some(BASE_LEVEL));
    }

    #[test]
    fn test_variant_lookup() {
        let scale = scale();
        assert_eq!(scale.variant(700).map(|v| v.color.l), Some(30.0));
        assert!(scale.variant(550).is_none());
        assert_eq!(scale.variant_name(700), "primary-700");
    }

    #[test]
    fn test_named_variants() {
        let palette = Palette {
            scales: vec![scale()],
        };
        let names: Vec<_> = palette.named_variants().map(|(name, _)| name).collect();
        assert_eq!(names.len(), SHADE_LEVELS.len());
        assert_eq!(names[0], "primary-50");
        assert_eq!(names[10], "primary-950");
        assert!(palette.variant(ColorRole::Accent, 500).is_none());
    }
}
