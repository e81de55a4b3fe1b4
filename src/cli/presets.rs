//! Presets command: list the presets available for initial selection.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_config, CliError, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::generator::Preset;

/// List built-in and custom presets
#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct PresetsOutput<'a> {
    presets: &'a [Preset],
}

impl PresetsArgs {
    /// Execute the presets command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let presets = config.presets();

        if self.json {
            let json = serde_json::to_string_pretty(&PresetsOutput { presets: &presets })
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        if presets.is_empty() {
            println!("No presets available; initial colors always use a random hue.");
            println!("Re-enable the built-ins with: {APP_BINARY_NAME} config set --builtin-presets true");
            return Ok(());
        }

        for (index, preset) in presets.iter().enumerate() {
            let swatches: Vec<String> = preset.colors.iter().map(|(_, c)| c.to_hex()).collect();
            println!("{index:>2}. {:<12} {}", preset.name, swatches.join(" "));
        }

        Ok(())
    }
}
