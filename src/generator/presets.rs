//! Built-in base color presets.

use serde::{Deserialize, Serialize};

use crate::models::{BaseColors, HslColor};

/// A named set of base colors offered as a starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name, e.g. "Ocean".
    pub name: String,
    /// The base colors of this preset.
    pub colors: BaseColors,
}

impl Preset {
    fn builtin(
        name: &str,
        primary: HslColor,
        secondary: HslColor,
        accent: HslColor,
        background: HslColor,
    ) -> Self {
        Self {
            name: name.to_string(),
            colors: BaseColors {
                primary,
                secondary,
                accent,
                background,
            },
        }
    }
}

/// The presets shipped with the generator.
#[must_use]
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::builtin(
            "Ocean",
            HslColor::new(210.0, 80.0, 45.0),
            HslColor::new(190.0, 70.0, 40.0),
            HslColor::new(30.0, 90.0, 55.0),
            HslColor::new(205.0, 40.0, 97.0),
        ),
        Preset::builtin(
            "Forest",
            HslColor::new(145.0, 55.0, 35.0),
            HslColor::new(95.0, 40.0, 45.0),
            HslColor::new(45.0, 85.0, 55.0),
            HslColor::new(100.0, 20.0, 96.0),
        ),
        Preset::builtin(
            "Sunset",
            HslColor::new(12.0, 85.0, 55.0),
            HslColor::new(340.0, 70.0, 55.0),
            HslColor::new(45.0, 95.0, 55.0),
            HslColor::new(30.0, 60.0, 97.0),
        ),
        Preset::builtin(
            "Grape",
            HslColor::new(270.0, 60.0, 50.0),
            HslColor::new(290.0, 45.0, 45.0),
            HslColor::new(160.0, 60.0, 45.0),
            HslColor::new(270.0, 30.0, 98.0),
        ),
        Preset::builtin(
            "Slate",
            HslColor::new(215.0, 20.0, 35.0),
            HslColor::new(215.0, 15.0, 55.0),
            HslColor::new(350.0, 80.0, 55.0),
            HslColor::new(210.0, 20.0, 98.0),
        ),
        Preset::builtin(
            "Midnight",
            HslColor::new(230.0, 65.0, 60.0),
            HslColor::new(250.0, 50.0, 65.0),
            HslColor::new(175.0, 70.0, 50.0),
            HslColor::new(230.0, 35.0, 10.0),
        ),
    ]
}
