//! Initial base colors for a fresh session.

use serde::Serialize;
use tracing::debug;

use super::Preset;
use crate::dice::RandomSource;
use crate::models::{BaseColors, HslColor};

/// How the initial base colors were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InitialSelection {
    /// Index into the preset list.
    Preset(usize),
    /// Primary hue in degrees; every role is derived from it.
    RandomHue(f32),
}

impl InitialSelection {
    /// Flips the coin once: heads picks a preset, tails a random hue.
    ///
    /// With no presets available the result is always [`InitialSelection::RandomHue`].
    pub fn choose<D: RandomSource + ?Sized>(dice: &mut D, preset_count: usize) -> Self {
        if preset_count > 0 && dice.decide() {
            Self::Preset(dice.pick_index(preset_count))
        } else {
            Self::RandomHue(dice.pick_hue())
        }
    }

    /// Resolves the selection into base colors.
    ///
    /// An out-of-bounds preset index falls back to the first preset, or to
    /// hue 0 when `presets` is empty.
    #[must_use]
    pub fn resolve(self, presets: &[Preset]) -> BaseColors {
        match self {
            Self::Preset(index) => presets
                .get(index)
                .or_else(|| presets.first())
                .map_or_else(|| base_colors_from_hue(0.0), |preset| preset.colors),
            Self::RandomHue(hue) => base_colors_from_hue(hue),
        }
    }
}

/// Builds a harmonious set of base colors around one hue.
///
/// Secondary is an analogous hue (+30°), accent the complement (+180°), and
/// background a near-white tint of the primary hue.
#[must_use]
pub fn base_colors_from_hue(hue: f32) -> BaseColors {
    let hue = hue.rem_euclid(360.0);
    let rotate = |delta: f32| (hue + delta).rem_euclid(360.0);
    BaseColors {
        primary: HslColor::new(hue, 70.0, 50.0),
        secondary: HslColor::new(rotate(30.0), 60.0, 55.0),
        accent: HslColor::new(rotate(180.0), 75.0, 55.0),
        background: HslColor::new(hue, 20.0, 97.0),
    }
}

/// Produces the starting base colors: one coin flip, then either a preset or
/// a random hue.
pub fn generate_initial_base_colors<D: RandomSource + ?Sized>(
    dice: &mut D,
    presets: &[Preset],
) -> (InitialSelection, BaseColors) {
    let selection = InitialSelection::choose(dice, presets.len());
    let colors = selection.resolve(presets);
    debug!(?selection, "Generated initial base colors");
    (selection, colors)
}
