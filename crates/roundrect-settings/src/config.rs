//! Configuration for the roundrect generator
//!
//! Holds the default parameters a front end starts from. Supports JSON and
//! TOML files; the format is chosen by file extension.
//!
//! Configuration is organized into sections:
//! - Curve defaults (corners, rounding, handle type, fill)
//! - Mesh defaults (corners, rounding, resolutions, polygon and UV options)
//! - Output preferences (format, directory, object name)
//! - Geometry constants (tolerances and Bezier kappa)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use roundrect_core::{GeometryConstants, Point2};
use roundrect_geometry::{CurveRequest, Extrusion, MeshRequest, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Curve resolution above which hosts slow down noticeably
pub const CURVE_RESOLUTION_SOFT_MAX: i32 = 64;

/// Per-corner mesh resolution above which meshes get needlessly dense
pub const MESH_RESOLUTION_SOFT_MAX: i32 = 32;

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => ext.parse(),
            None => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Document format when the output path has no usable extension
    pub format: OutputFormat,
    /// Directory for generated files
    pub directory: PathBuf,
    /// Object name written into OBJ output
    pub object_name: String,
    /// SVG margin as a fraction of the short side
    pub svg_margin: f64,
}

impl OutputSettings {
    /// Place a relative output path under the configured directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.directory.join(path)
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            directory: PathBuf::from("."),
            object_name: "Rectangle".to_string(),
            svg_margin: 0.05,
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Curve defaults
    pub curve: CurveRequest,
    /// Mesh defaults
    pub mesh: MeshRequest,
    /// Output preferences
    pub output: OutputSettings,
    /// Geometry constants
    pub constants: GeometryConstants,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/roundrect/config.toml`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("roundrect");
        path.push("config.toml");
        path
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded {format} config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Serialize to a document in `format`
    pub fn render(&self, format: ConfigFormat) -> SettingsResult<String> {
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        })
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = self.render(ConfigFormat::from_path(path)?)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {e}", parent.display())))?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// Values the generator would silently clamp are rejected here, so a
    /// typo in a config file is reported instead of producing odd geometry.
    pub fn validate(&self) -> ConfigResult<()> {
        // Curve defaults
        check_point("curve.corner_a", self.curve.corner_a)?;
        check_point("curve.corner_b", self.curve.corner_b)?;
        check_rounding("curve.rounding", &self.curve.rounding)?;
        if self.curve.resolution < 0 {
            return Err(ConfigError::out_of_range(
                "curve.resolution",
                self.curve.resolution,
            ));
        }
        if self.curve.resolution > CURVE_RESOLUTION_SOFT_MAX {
            warn!(
                "curve.resolution {} exceeds the usual maximum of {}",
                self.curve.resolution, CURVE_RESOLUTION_SOFT_MAX
            );
        }
        check_extrusion("curve.extrusion", &self.curve.extrusion)?;

        // Mesh defaults
        check_point("mesh.corner_a", self.mesh.corner_a)?;
        check_point("mesh.corner_b", self.mesh.corner_b)?;
        check_rounding("mesh.rounding", &self.mesh.rounding)?;
        for (i, &res) in self.mesh.resolutions.iter().enumerate() {
            if res < 0 {
                return Err(ConfigError::out_of_range(
                    &format!("mesh.resolutions[{i}]"),
                    res,
                ));
            }
            if res > MESH_RESOLUTION_SOFT_MAX {
                warn!(
                    "mesh.resolutions[{i}] = {res} exceeds the usual maximum of {}",
                    MESH_RESOLUTION_SOFT_MAX
                );
            }
        }
        check_extrusion("mesh.extrusion", &self.mesh.extrusion)?;

        // Output
        if self.output.object_name.trim().is_empty() {
            return Err(ConfigError::EmptyValue("output.object_name".to_string()));
        }
        if !(self.output.svg_margin.is_finite() && self.output.svg_margin >= 0.0) {
            return Err(ConfigError::out_of_range(
                "output.svg_margin",
                self.output.svg_margin,
            ));
        }

        // Constants
        let c = &self.constants;
        if !(c.epsilon > 0.0 && c.epsilon < 0.5) {
            return Err(ConfigError::out_of_range("constants.epsilon", c.epsilon));
        }
        if !(c.kappa > 0.0 && c.kappa < 1.0) {
            return Err(ConfigError::out_of_range("constants.kappa", c.kappa));
        }
        let (hw, hh) = c.default_half_extents;
        if !(hw > c.epsilon && hh > c.epsilon) {
            return Err(ConfigError::out_of_range(
                "constants.default_half_extents",
                format!("({hw}, {hh})"),
            ));
        }
        if !(c.sharp_mesh_inset > 0.0 && c.sharp_mesh_inset < 1.0) {
            return Err(ConfigError::out_of_range(
                "constants.sharp_mesh_inset",
                c.sharp_mesh_inset,
            ));
        }

        Ok(())
    }
}

fn check_point(key: &str, p: Point2) -> ConfigResult<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, format!("({}, {})", p.x, p.y)))
    }
}

fn check_rounding(key: &str, rounding: &[f64; 4]) -> ConfigResult<()> {
    for (i, &factor) in rounding.iter().enumerate() {
        if !(0.0..1.0).contains(&factor) {
            return Err(ConfigError::out_of_range(&format!("{key}[{i}]"), factor));
        }
    }
    Ok(())
}

fn check_extrusion(key: &str, extrusion: &Extrusion) -> ConfigResult<()> {
    if !(extrusion.thickness.is_finite() && extrusion.thickness >= 0.0) {
        return Err(ConfigError::out_of_range(
            &format!("{key}.thickness"),
            extrusion.thickness,
        ));
    }
    if !(-1.0..=1.0).contains(&extrusion.offset) {
        return Err(ConfigError::out_of_range(
            &format!("{key}.offset"),
            extrusion.offset,
        ));
    }
    Ok(())
}
