//! Export functionality for derived palettes.
//!
//! Turns a [`Palette`] into text a project can paste in: a Tailwind theme
//! fragment, CSS custom properties, or plain JSON. Exporters only read the
//! palette; they never derive colors themselves.

pub mod css;
pub mod tailwind;

pub use css::generate_css_variables;
pub use tailwind::generate_tailwind_config;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Palette;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `tailwind.config.js` theme fragment.
    #[default]
    Tailwind,
    /// CSS custom properties on `:root`.
    Css,
    /// The palette as JSON.
    Json,
}

impl ExportFormat {
    /// File extension used when writing this format to disk.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Tailwind => "js",
            Self::Css => "css",
            Self::Json => "json",
        }
    }

    /// Lowercase name, as accepted on the command line and in the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Css => "css",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tailwind" => Ok(Self::Tailwind),
            "css" => Ok(Self::Css),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown export format '{other}'. Expected tailwind, css, or json"),
        }
    }
}

/// JSON export document.
#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    name: &'a str,
    palette: &'a Palette,
}

/// Renders `palette` in `format`, labelled with the user's color name.
pub fn render(palette: &Palette, format: ExportFormat, name: &str) -> Result<String> {
    match format {
        ExportFormat::Tailwind => Ok(generate_tailwind_config(palette, name)),
        ExportFormat::Css => Ok(generate_css_variables(palette, name)),
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&JsonExport { name, palette })
                .context("Failed to serialize palette to JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// File stem for exports of a named color scheme.
///
/// Whitespace (the ECMAScript `\s` set, see [`is_name_whitespace`]) becomes
/// `-`, the result is lowercased, and anything outside `[a-z0-9-]` is
/// dropped: "Awesome Color!" becomes "color-picker-awesome-color".
#[must_use]
pub fn file_stem(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| if is_name_whitespace(c) { '-' } else { c })
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();
    format!("color-picker-{slug}")
}

/// Whitespace as browsers match it with `\s`, so download names agree with
/// the web front end.
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
#[must_use]
pub const fn is_name_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Full file name for an export, e.g. "color-picker-awesome-color.css".
#[must_use]
pub fn file_name(name: &str, format: ExportFormat) -> String {
    format!("{}.{}", file_stem(name), format.extension())
}

/// Collapses user-supplied names onto one line for use inside comments.
pub(crate) fn comment_safe(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "* /")
}
