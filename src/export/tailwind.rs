//! Tailwind config generator.
//!
//! Emits a `tailwind.config.js` fragment that extends the theme colors with
//! one object per role. Keys are the shade levels plus `DEFAULT`, which maps
//! to the 500 stop so `bg-primary` works alongside `bg-primary-700`.

use std::fmt::Write as _;

use super::comment_safe;
use crate::models::Palette;

/// Generates the Tailwind theme fragment for `palette`.
///
/// # Examples
///
/// ```
/// use colorgen::export::generate_tailwind_config;
/// use colorgen::generator::{base_colors_from_hue, derive_palette};
///
/// let palette = derive_palette(&base_colors_from_hue(210.0));
/// let config = generate_tailwind_config(&palette, "Ocean");
/// assert!(config.contains("module.exports"));
/// assert!(config.contains("primary: {"));
/// ```
pub fn generate_tailwind_config(palette: &Palette, name: &str) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "// {}", comment_safe(name));
    output.push_str("/** @type {import('tailwindcss').Config} */\n");
    output.push_str("module.exports = {\n");
    output.push_str("  theme: {\n");
    output.push_str("    extend: {\n");
    output.push_str("      colors: {\n");

    for scale in &palette.scales {
        let _ = writeln!(output, "        {}: {{", scale.role);
        for variant in &scale.variants {
            let _ = writeln!(
                output,
                "          {}: '{}',",
                variant.level,
                variant.color.to_hex()
            );
        }
        if let Some(base) = scale.base() {
            let _ = writeln!(output, "          DEFAULT: '{}',", base.color.to_hex());
        }
        output.push_str("        },\n");
    }

    output.push_str("      },\n");
    output.push_str("    },\n");
    output.push_str("  },\n");
    output.push_str("};\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::derive_palette;
    use crate::models::{BaseColors, HslColor};

    fn base() -> BaseColors {
        BaseColors {
            primary: HslColor::new(210.0, 50.0, 50.0),
            secondary: HslColor::new(0.0, 0.0, 50.0),
            accent: HslColor::new(30.0, 100.0, 50.0).with_alpha(0.5),
            background: HslColor::new(0.0, 0.0, 100.0),
        }
    }

    #[test]
    fn test_structure() {
        let config = generate_tailwind_config(&derive_palette(&base()), "Awesome Color");

        assert!(config.starts_with("// Awesome Color\n"));
        assert!(config.contains("      colors: {\n        primary: {\n          50: '"));
        assert!(config.trim_end().ends_with("};"));
        for role in ["primary", "secondary", "accent", "background"] {
            assert!(config.contains(&format!("        {role}: {{\n")), "missing {role}");
        }
        assert_eq!(config.matches("DEFAULT:").count(), 4);
    }

    #[test]
    fn test_default_matches_500() {
        let config = generate_tailwind_config(&derive_palette(&base()), "x");
        assert!(config.contains("          500: '#4080BF',\n"));
        assert!(config.contains("          DEFAULT: '#4080BF',\n"));
    }

    #[test]
    fn test_alpha_in_hex() {
        let config = generate_tailwind_config(&derive_palette(&base()), "x");
        // hsl(30 100% 50%) = #FF8000, alpha 0.5 = 0x80
        assert!(config.contains("          500: '#FF800080',\n"));
    }

    #[test]
    fn test_white_base_light_stops_stay_white() {
        let config = generate_tailwind_config(&derive_palette(&base()), "x");
        let background = config.split("background: {").nth(1).unwrap();
        assert!(background.contains("          50: '#FFFFFF',\n"));
    }
}
