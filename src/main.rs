//! ColorGenerator - derive themed color palettes from a few base colors.
//!
//! Generates starting colors (a preset or a random hue, decided by a coin
//! flip), derives 50-950 shade scales for every role, and exports them as a
//! Tailwind config, CSS custom properties, or JSON.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorgen::cli::{ConfigArgs, ExitCode, ExportArgs, GenerateArgs, PaletteArgs, PresetsArgs};

/// ColorGenerator - themed color palettes for Tailwind and CSS
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate initial base colors
    Generate(GenerateArgs),
    /// Derive and print the full palette
    Palette(PaletteArgs),
    /// Export the palette as Tailwind config, CSS, or JSON
    Export(ExportArgs),
    /// List available presets
    Presets(PresetsArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Palette(args) => args.execute(),
        Command::Export(args) => args.execute(),
        Command::Presets(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }

    std::process::exit(ExitCode::Success.code());
}
