//! CLI command handlers for ColorGenerator.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method returning
//! [`CliResult`]; `main` maps errors to exit codes.

pub mod common;
pub mod config;
pub mod export;
pub mod generate;
pub mod input;
pub mod palette;
pub mod presets;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use generate::GenerateArgs;
pub use input::ColorInputArgs;
pub use palette::PaletteArgs;
pub use presets::PresetsArgs;
