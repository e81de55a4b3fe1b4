//! Palette command: derive and print every shade.

use clap::Args;

use crate::cli::common::{load_config, CliError, CliResult};
use crate::cli::input::ColorInputArgs;
use crate::generator::derive_palette;
use crate::models::Palette;

/// Derive the full palette (50-950 for every role) from base colors
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    #[command(flatten)]
    pub input: ColorInputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let base = self.input.resolve(&config)?;
        let palette = derive_palette(&base);

        if self.json {
            let json = serde_json::to_string_pretty(&palette)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            print!("{}", format_palette_table(&palette));
        }

        Ok(())
    }
}

/// One line per variant: name, hex, CSS value. Roles separated by blank lines.
fn format_palette_table(palette: &Palette) -> String {
    let mut output = String::new();
    for (index, scale) in palette.scales.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        for variant in &scale.variants {
            output.push_str(&format!(
                "{:<16} {:<9}  {}\n",
                scale.variant_name(variant.level),
                variant.color.to_hex(),
                variant.color.to_css()
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaseColors, HslColor};

    #[test]
    fn test_table_format() {
        let base = BaseColors {
            primary: HslColor::new(210.0, 50.0, 50.0),
            secondary: HslColor::new(240.0, 40.0, 55.0),
            accent: HslColor::new(30.0, 75.0, 55.0),
            background: HslColor::new(210.0, 20.0, 97.0),
        };
        let table = format_palette_table(&derive_palette(&base));

        assert!(table.contains("primary-500      #4080BF    hsl(210 50% 50%)\n"));
        assert_eq!(table.lines().filter(|l| !l.is_empty()).count(), 44);
        assert_eq!(table.matches("\n\n").count(), 3);
    }
}
