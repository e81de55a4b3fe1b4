//! The base colors a palette is derived from.

use serde::{Deserialize, Serialize};

use super::{ColorError, ColorRole, HslColor};

/// One canonical color per [`ColorRole`].
///
/// Every role is a struct field, so a `BaseColors` value can never be missing
/// one. Values are replaced wholesale ([`BaseColors::with_role`]) rather than
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseColors {
    /// Main brand color.
    pub primary: HslColor,
    /// Supporting color.
    pub secondary: HslColor,
    /// Highlight color.
    pub accent: HslColor,
    /// Surface background.
    pub background: HslColor,
}

impl BaseColors {
    /// Returns the color assigned to `role`.
    #[must_use]
    pub const fn get(&self, role: ColorRole) -> HslColor {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
            ColorRole::Background => self.background,
        }
    }

    /// Returns a new value with `role` set to `color` and every other role unchanged.
    #[must_use]
    pub const fn with_role(self, role: ColorRole, color: HslColor) -> Self {
        match role {
            ColorRole::Primary => Self {
                primary: color,
                ..self
            },
            ColorRole::Secondary => Self {
                secondary: color,
                ..self
            },
            ColorRole::Accent => Self {
                accent: color,
                ..self
            },
            ColorRole::Background => Self {
                background: color,
                ..self
            },
        }
    }

    /// Iterates `(role, color)` pairs in [`ColorRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, HslColor)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Validates every role, reporting the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidRole`] wrapping the range error.
    pub fn validate(&self) -> Result<(), ColorError> {
        for (role, color) in self.iter() {
            color.validate().map_err(|source| ColorError::InvalidRole {
                role,
                source: Box::new(source),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BaseColors {
        BaseColors {
            primary: HslColor::new(210.0, 50.0, 50.0),
            secondary: HslColor::new(240.0, 40.0, 55.0),
            accent: HslColor::new(30.0, 75.0, 55.0),
            background: HslColor::new(210.0, 20.0, 97.0),
        }
    }

    #[test]
    fn test_with_role_replaces_only_that_role() {
        let base = sample();
        let red = HslColor::new(0.0, 100.0, 50.0);
        let updated = base.with_role(ColorRole::Accent, red);

        assert_eq!(updated.accent, red);
        assert_eq!(updated.primary, base.primary);
        assert_eq!(updated.secondary, base.secondary);
        assert_eq!(updated.background, base.background);
        // Original untouched
        assert_eq!(base.accent, HslColor::new(30.0, 75.0, 55.0));
    }

    #[test]
    fn test_iter_covers_every_role() {
        let roles: Vec<_> = sample().iter().map(|(role, _)| role).collect();
        assert_eq!(roles, ColorRole::ALL.to_vec());
    }

    #[test]
    fn test_validate_reports_role() {
        let bad = sample().with_role(ColorRole::Background, HslColor::new(10.0, 10.0, 120.0));
        match bad.validate() {
            Err(ColorError::InvalidRole { role, source }) => {
                assert_eq!(role, ColorRole::Background);
                assert!(matches!(
                    *source,
                    ColorError::InvalidColorRange {
                        channel: "lightness",
                        ..
                    }
                ));
            }
            other => panic!("expected InvalidRole, got {other:?}"),
        }
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_deserialize_requires_every_role() {
        let json = r#"{
            "primary": {"h": 210, "s": 50, "l": 50},
            "secondary": {"h": 240, "s": 40, "l": 55},
            "accent": {"h": 30, "s": 75, "l": 55, "a": 0.5}
        }"#;
        assert!(serde_json::from_str::<BaseColors>(json).is_err());

        let json = r#"{
            "primary": {"h": 210, "s": 50, "l": 50},
            "secondary": {"h": 240, "s": 40, "l": 55},
            "accent": {"h": 30, "s": 75, "l": 55, "a": 0.5},
            "background": {"h": 210, "s": 20, "l": 97}
        }"#;
        let colors: BaseColors = serde_json::from_str(json).unwrap();
        assert_eq!(colors.accent.a, Some(0.5));
        assert_eq!(colors.primary, HslColor::new(210.0, 50.0, 50.0));
    }
}
