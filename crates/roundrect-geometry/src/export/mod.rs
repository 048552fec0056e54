//! Geometry sinks.
//!
//! A sink realizes generated geometry in some host representation. The
//! reference sinks here write documents: Wavefront OBJ, SVG and JSON. Each
//! renders the whole document into memory first and writes it in one call,
//! so a failed render never leaves a partial file behind.

mod json;
mod obj;
mod svg;

pub use json::JsonSink;
pub use obj::ObjSink;
pub use svg::SvgSink;

use crate::generator::{CurveGeometry, Geometry, MeshGeometry};
use roundrect_core::ExportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Realizes generated geometry
pub trait GeometrySink {
    /// Short identifier used in error messages
    fn name(&self) -> &'static str;

    fn realize_curve(&mut self, curve: &CurveGeometry) -> Result<(), ExportError>;

    fn realize_mesh(&mut self, mesh: &MeshGeometry) -> Result<(), ExportError>;

    /// Dispatch on the geometry kind
    fn realize(&mut self, geometry: &Geometry) -> Result<(), ExportError> {
        match geometry {
            Geometry::Curve(curve) => self.realize_curve(curve),
            Geometry::Mesh(mesh) => self.realize_mesh(mesh),
        }
    }
}

/// Document format written by the reference sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Obj,
    Svg,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Obj
    }
}

impl OutputFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ExportError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Obj => "obj",
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }

    /// Create the matching sink over `writer`
    pub fn sink<'a, W: Write + 'a>(self, writer: W) -> Box<dyn GeometrySink + 'a> {
        match self {
            Self::Obj => Box::new(ObjSink::new(writer)),
            Self::Svg => Box::new(SvgSink::new(writer)),
            Self::Json => Box::new(JsonSink::new(writer)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "obj" | "wavefront" => Ok(Self::Obj),
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Shortest round-trippable decimal for a coordinate
pub(crate) fn fmt_coord(v: f64) -> String {
    // Avoid "-0" in documents
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}")
    }
}
