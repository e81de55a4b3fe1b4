//! Export command for Tailwind config, CSS variables, or JSON.

use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::common::{load_config, CliError, CliResult};
use crate::cli::input::ColorInputArgs;
use crate::export::{self, ExportFormat};
use crate::generator::derive_palette;

/// Export the derived palette as Tailwind config, CSS, or JSON
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: ColorInputArgs,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Name of the color scheme (used in headers and file names)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output file, or a directory ending in '/' (stdout if omitted or '-')
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let format = self.format.unwrap_or(config.export.default_format);
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| config.export.color_name.clone());

        let base = self.input.resolve(&config)?;
        let palette = derive_palette(&base);
        let content = export::render(&palette, format, &name)
            .map_err(|e| CliError::io(format!("Failed to render export: {e}")))?;

        match self.get_output_path(&name, format) {
            None => print!("{content}"),
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| {
                        CliError::io(format!(
                            "Failed to create directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                fs::write(&path, content)
                    .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
                info!(format = %format, path = %path.display(), "Exported palette");
                println!("✓ Exported {} palette to: {}", format, path.display());
            }
        }

        Ok(())
    }

    /// Resolves `--output`: `None` means stdout.
    fn get_output_path(&self, name: &str, format: ExportFormat) -> Option<PathBuf> {
        let path = self.output.as_ref()?;
        if path.as_os_str() == "-" {
            return None;
        }
        if is_directory_target(path) {
            return Some(path.join(export::file_name(name, format)));
        }
        Some(path.clone())
    }
}

fn is_directory_target(path: &Path) -> bool {
    path.is_dir() || path.as_os_str().to_string_lossy().ends_with(['/', '\\'])
}
