//! Semantic color roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A semantic role in the generated theme.
///
/// Every [`BaseColors`](super::BaseColors) value carries exactly one color per
/// role, and every palette carries one shade scale per role, in [`ColorRole::ALL`]
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    /// Main brand color (buttons, links, focus rings).
    Primary,
    /// Supporting color for secondary actions.
    Secondary,
    /// Highlight color, usually a contrasting hue.
    Accent,
    /// Page and surface background.
    Background,
}

impl ColorRole {
    /// All roles in display order.
    pub const ALL: [Self; 4] = [Self::Primary, Self::Secondary, Self::Accent, Self::Background];

    /// Lowercase name used in CSS variables and Tailwind keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown color role '{s}'. Expected one of: primary, secondary, accent, background"
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!("primary".parse::<ColorRole>().unwrap(), ColorRole::Primary);
        assert_eq!(" Accent ".parse::<ColorRole>().unwrap(), ColorRole::Accent);
        assert!("tertiary".parse::<ColorRole>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        for role in ColorRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
    }
}
