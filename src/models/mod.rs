//! Data models for colors, base color sets, and derived palettes.
//!
//! Models are plain values: they carry no randomness and no I/O, so the
//! generator, exporters, CLI and web API can all share them.

pub mod base_colors;
pub mod hsl;
pub mod palette;
pub mod rgb;
pub mod role;

// Re-export all model types
pub use base_colors::BaseColors;
pub use hsl::{ColorError, HslColor};
pub use palette::{Palette, RoleScale, Variant, BASE_INDEX, BASE_LEVEL, SHADE_LEVELS};
pub use rgb::RgbColor;
pub use role::ColorRole;
