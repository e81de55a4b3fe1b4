//! CSS custom property generator.

use std::fmt::Write as _;

use super::comment_safe;
use crate::models::Palette;

/// Generates a `:root` block with one custom property per variant.
///
/// Variables are named `--<role>-<level>`; each role also gets a bare
/// `--<role>` alias for its 500 stop. Values use `hsl()` notation so the
/// lightness steps stay readable.
pub fn generate_css_variables(palette: &Palette, name: &str) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "/* {} */", comment_safe(name));
    output.push_str(":root {\n");

    for (index, scale) in palette.scales.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        for variant in &scale.variants {
            let _ = writeln!(
                output,
                "  --{}: {};",
                scale.variant_name(variant.level),
                variant.color.to_css()
            );
        }
        if let Some(base) = scale.base() {
            let _ = writeln!(output, "  --{}: {};", scale.role, base.color.to_css());
        }
    }

    output.push_str("}\n");
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
            secondary: HslColor::new(240.0, 40.0, 60.0),
            accent: HslColor::new(30.0, 75.0, 50.0).with_alpha(0.8),
            background: HslColor::new(210.0, 20.0, 100.0),
        }
    }

    #[test]
    fn test_header_and_block() {
        let css = generate_css_variables(&derive_palette(&base()), "Awesome Color");
        assert!(css.starts_with("/* Awesome Color */\n:root {\n"));
        assert!(css.ends_with("}\n"));
        // 4 roles * (11 variants + alias)
        assert_eq!(css.matches("  --").count(), 48);
    }

    #[test]
    fn test_variant_values() {
        let css = generate_css_variables(&derive_palette(&base()), "x");
        assert!(css.contains("  --primary-500: hsl(210 50% 50%);\n"));
        assert!(css.contains("  --primary-700: hsl(210 50% 30%);\n"));
        assert!(css.contains("  --primary-50: hsl(210 50% 95%);\n"));
        assert!(css.contains("  --primary: hsl(210 50% 50%);\n"));
        assert!(css.contains("  --secondary-600: hsl(240 40% 48%);\n"));
    }

    #[test]
    fn test_alpha_kept() {
        let css = generate_css_variables(&derive_palette(&base()), "x");
        assert!(css.contains("  --accent-500: hsl(30 75% 50% / 0.8);\n"));
        assert!(css.contains("  --accent-900: hsl(30 75% 10% / 0.8);\n"));
    }

    #[test]
    fn test_name_cannot_close_comment() {
        let css = generate_css_variables(&derive_palette(&base()), "evil */ body {}");
        assert!(css.starts_with("/* evil * / body {} */\n"));
    }
}
