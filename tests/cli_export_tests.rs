//! End-to-end tests for `colorgen export`.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_export_tailwind_to_stdout() {
    let config_dir = TempDir::new().unwrap();
    let (colors_path, _colors_temp) = create_temp_colors_file(&test_base_colors());

    let output = run_isolated(
        &[
            "export",
            "--format",
            "tailwind",
            "--colors",
            colors_path.to_str().unwrap(),
        ],
        config_dir.path(),
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        stderr(&output)
    );

    let out = stdout(&output);
    assert!(out.starts_with("// Awesome Color\n"));
    assert!(out.contains("module.exports = {"));
    assert!(out.contains("          500: '#4080BF',"));
    assert!(out.contains("          DEFAULT: '#4080BF',"));
}

#[test]
fn test_export_css_to_directory() {
    let config_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let (colors_path, _colors_temp) = create_temp_colors_file(&test_base_colors());

    let output = run_isolated(
        &[
            "export",
            "--format",
            "css",
            "--name",
            "My Brand!",
            "--colors",
            colors_path.to_str().unwrap(),
            "--output",
            out_dir.path().to_str().unwrap(),
        ],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let path = out_dir.path().join("color-picker-my-brand.css");
    assert!(path.exists(), "Export file should exist at: {}", path.display());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("/* My Brand! */\n:root {\n"));
    assert!(content.contains("  --primary-500: hsl(210 50% 50%);"));
    assert!(content.contains("  --accent: hsl(30 100% 50%);"));
    assert!(stdout(&output).contains("Exported css palette"));
}

#[test]
fn test_export_uses_configured_defaults() {
    let config_dir = temp_config_dir("[export]\ndefault_format = \"css\"\ncolor_name = \"Ocean Breeze\"\n");
    let (colors_path, _colors_temp) = create_temp_colors_file(&test_base_colors());

    let output = run_isolated(
        &["export", "--colors", colors_path.to_str().unwrap()],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("/* Ocean Breeze */\n:root {"));
}

#[test]
fn test_export_json_file() {
    let config_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("nested").join("palette.json");

    let output = run_isolated(
        &[
            "export",
            "--format",
            "json",
            "--seed",
            "11",
            "--output",
            out_path.to_str().unwrap(),
        ],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(json["name"], "Awesome Color");
    assert_eq!(json["palette"]["scales"].as_array().unwrap().len(), 4);
}

#[test]
fn test_export_unknown_format() {
    let config_dir = TempDir::new().unwrap();
    let output = run_isolated(&["export", "--format", "scss"], config_dir.path());
    // clap rejects unknown enum values with its own usage error code
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("scss"));
}
