//! ColorGenerator Library
//!
//! This library provides the palette pipeline behind the `colorgen` CLI and
//! web API: color models, initial color generation, palette derivation, and
//! Tailwind/CSS/JSON export.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod dice;
pub mod export;
pub mod generator;
pub mod models;
#[cfg(feature = "web")]
pub mod web;
