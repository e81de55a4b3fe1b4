//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::export::ExportFormat;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default export format
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// Default color scheme name
    #[arg(long, value_name = "NAME")]
    color_name: Option<String>,

    /// Web server port
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Include the built-in presets in initial selection
    #[arg(long, value_name = "BOOL")]
    builtin_presets: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    generator: GeneratorOutput,
    export: ExportOutput,
    server: ServerOutput,
}

#[derive(Serialize, Debug)]
struct GeneratorOutput {
    include_builtin_presets: bool,
    custom_presets: Vec<String>,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    default_format: String,
    color_name: String,
}

#[derive(Serialize, Debug)]
struct ServerOutput {
    host: String,
    port: u16,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.format.is_none()
            && self.color_name.is_none()
            && self.port.is_none()
            && self.builtin_presets.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --format, --color-name, --port, or --builtin-presets",
            ));
        }

        let mut config = load_config()?;

        if let Some(format) = self.format {
            config.export.default_format = format;
        }

        if let Some(name) = &self.color_name {
            if name.trim().is_empty() {
                return Err(CliError::validation("Color name must not be empty"));
            }
            config.export.color_name.clone_from(name);
        }

        if let Some(port) = self.port {
            if port == 0 {
                return Err(CliError::validation("Port must be between 1 and 65535"));
            }
            config.server.port = port;
        }

        if let Some(include) = self.builtin_presets {
            config.generator.include_builtin_presets = include;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        generator: GeneratorOutput {
            include_builtin_presets: config.generator.include_builtin_presets,
            custom_presets: config
                .generator
                .custom_presets
                .iter()
                .map(|p| p.name.clone())
                .collect(),
        },
        export: ExportOutput {
            default_format: config.export.default_format.to_string(),
            color_name: config.export.color_name.clone(),
        },
        server: ServerOutput {
            host: config.server.host.clone(),
            port: config.server.port,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("ColorGenerator Configuration");
    println!("============================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("Config file: {}", path.display());
        println!();
    }

    println!("Generator:");
    println!(
        "  Built-in presets: {}",
        if config.generator.include_builtin_presets {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("  Custom presets: {}", config.generator.custom_presets.len());
    println!();

    println!("Export:");
    println!("  Default format: {}", config.export.default_format);
    println!("  Color name: {}", config.export.color_name);
    println!();

    println!("Server:");
    println!("  Address: {}:{}", config.server.host, config.server.port);
}
