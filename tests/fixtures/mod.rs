//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use colorgen::models::{BaseColors, HslColor};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the colorgen binary
pub fn colorgen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_colorgen")
}

/// Runs colorgen with an isolated config directory.
pub fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    Command::new(colorgen_bin())
        .env("COLORGEN_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Base colors with round numbers, so exported values are easy to assert on.
pub fn test_base_colors() -> BaseColors {
    BaseColors {
        primary: HslColor::new(210.0, 50.0, 50.0),
        secondary: HslColor::new(240.0, 40.0, 60.0),
        accent: HslColor::new(30.0, 100.0, 50.0),
        background: HslColor::new(210.0, 20.0, 96.0),
    }
}

/// Writes `colors` as JSON into a fresh temp dir.
pub fn create_temp_colors_file(colors: &BaseColors) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("colors.json");
    let json = serde_json::to_string_pretty(colors).expect("Failed to serialize colors");
    fs::write(&path, json).expect("Failed to write colors file");
    (path, temp_dir)
}

/// Writes a config.toml into a fresh temp dir and returns the dir.
pub fn temp_config_dir(config_toml: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("config.toml"), config_toml).expect("Failed to write config");
    temp_dir
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
