//! Roundrect Settings Crate
//!
//! Loads and saves the default curve and mesh requests, output preferences
//! and geometry constants used by the command-line front end.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, OutputSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
