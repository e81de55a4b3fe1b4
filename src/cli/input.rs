//! Base color input shared by commands that derive a palette.

use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::dice::RngDice;
use crate::generator::generate_initial_base_colors;
use crate::models::{BaseColors, ColorRole, HslColor};

/// Where the base colors come from.
///
/// A `--colors` file wins over generation; role flags are then applied on top
/// of whichever base was chosen.
#[derive(Debug, Clone, Default, Args)]
pub struct ColorInputArgs {
    /// JSON file with base colors ({"primary": {"h": .., "s": .., "l": ..}, ...})
    #[arg(long, value_name = "FILE")]
    pub colors: Option<PathBuf>,

    /// Seed for the generated starting colors (random if omitted)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Primary color override (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub primary: Option<String>,

    /// Secondary color override (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub secondary: Option<String>,

    /// Accent color override (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub accent: Option<String>,

    /// Background color override (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub background: Option<String>,
}

impl ColorInputArgs {
    /// Resolves the final, validated base colors.
    pub fn resolve(&self, config: &Config) -> CliResult<BaseColors> {
        let mut colors = match &self.colors {
            Some(path) => load_colors_file(path)?,
            None => {
                let mut dice = RngDice::from_seed_option(self.seed);
                let (selection, colors) =
                    generate_initial_base_colors(&mut dice, &config.presets());
                debug!(?selection, seed = ?self.seed, "Starting from generated colors");
                colors
            }
        };

        for (role, hex) in self.overrides() {
            let color = HslColor::from_hex(hex)
                .map_err(|e| CliError::validation(format!("Invalid --{role} color: {e}")))?;
            colors = colors.with_role(role, color);
        }

        colors.validate().map_err(|e| {
            CliError::validation(format!("Invalid base colors: {e}: {}", source_message(&e)))
        })?;

        Ok(colors)
    }

    fn overrides(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        [
            (ColorRole::Primary, self.primary.as_deref()),
            (ColorRole::Secondary, self.secondary.as_deref()),
            (ColorRole::Accent, self.accent.as_deref()),
            (ColorRole::Background, self.background.as_deref()),
        ]
        .into_iter()
        .filter_map(|(role, hex)| hex.map(|hex| (role, hex)))
    }
}

fn load_colors_file(path: &Path) -> CliResult<BaseColors> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::validation(format!("Invalid colors file {}: {e}", path.display())))
}

fn source_message(err: &(dyn std::error::Error + 'static)) -> String {
    err.source().map_or_else(String::new, ToString::to_string)
}
