//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "ColorGenerator";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "colorgen";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ColorGenerator";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "COLORGEN_CONFIG_DIR";

/// Name given to a palette until the user picks one.
pub const DEFAULT_COLOR_NAME: &str = "Awesome Color";
