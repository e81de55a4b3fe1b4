//! Generate command: pick the starting base colors.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_config, CliError, CliResult};
use crate::dice::RngDice;
use crate::generator::{generate_initial_base_colors, InitialSelection, Preset};
use crate::models::BaseColors;

/// Generate initial base colors (preset or random hue, decided by a coin flip)
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Seed for reproducible output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output of `generate`
#[derive(Serialize, Debug)]
struct GenerateOutput<'a> {
    selection: InitialSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    preset: Option<&'a str>,
    colors: BaseColors,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let presets = config.presets();

        let mut dice = RngDice::from_seed_option(self.seed);
        let (selection, colors) = generate_initial_base_colors(&mut dice, &presets);
        let preset = preset_name(selection, &presets);

        if self.json {
            let output = GenerateOutput {
                selection,
                preset,
                colors,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            match (selection, preset) {
                (InitialSelection::Preset(_), Some(name)) => println!("Preset: {name}"),
                (InitialSelection::RandomHue(hue), _) => println!("Random hue: {hue:.1}°"),
                (InitialSelection::Preset(index), None) => println!("Preset #{index}"),
            }
            println!();
            for (role, color) in colors.iter() {
                println!("  {:<11} {}  {}", role.as_str(), color.to_hex(), color.to_css());
            }
        }

        Ok(())
    }
}

fn preset_name(selection: InitialSelection, presets: &[Preset]) -> Option<&str> {
    match selection {
        InitialSelection::Preset(index) => presets.get(index).map(|p| p.name.as_str()),
        InitialSelection::RandomHue(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::builtin_presets;

    #[test]
    fn test_preset_name() {
        let presets = builtin_presets();
        assert_eq!(
            preset_name(InitialSelection::Preset(0), &presets),
            Some(presets[0].name.as_str())
        );
        assert_eq!(preset_name(InitialSelection::Preset(99), &presets), None);
        assert_eq!(preset_name(InitialSelection::RandomHue(1.0), &presets), None);
    }
}
