//! Output-shape options.
//!
//! Every option parses from its Blender-style integer id (`TryFrom<i32>`) and
//! from a case-insensitive name (`FromStr`). Unknown values are configuration
//! errors; nothing falls back to a default.

use roundrect_core::GeometryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Face layout for the mesh variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolygonMode {
    /// One face over the whole boundary
    Ngon,
    /// Five body quads plus corner fans
    Quad,
    /// Ten body triangles plus corner fans
    Triangle,
}

impl Default for PolygonMode {
    fn default() -> Self {
        Self::Quad
    }
}

impl fmt::Display for PolygonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ngon => write!(f, "ngon"),
            Self::Quad => write!(f, "quad"),
            Self::Triangle => write!(f, "triangle"),
        }
    }
}

impl FromStr for PolygonMode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ngon" | "n-gon" => Ok(Self::Ngon),
            "quad" | "quadrilateral" => Ok(Self::Quad),
            "tri" | "triangle" => Ok(Self::Triangle),
            _ => Err(GeometryError::InvalidPolygonMode {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for PolygonMode {
    type Error = GeometryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Ngon),
            2 => Ok(Self::Quad),
            3 => Ok(Self::Triangle),
            _ => Err(GeometryError::InvalidPolygonMode {
                value: value.to_string(),
            }),
        }
    }
}

/// Aspect correction applied to texture coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UvProfile {
    /// Map the bounding box onto the unit square, distorting non-square shapes
    Stretch,
    /// Fit the whole shape inside the unit square without distortion
    Contain,
    /// Fill the unit square without distortion, overflowing on the long axis
    Cover,
}

impl Default for UvProfile {
    fn default() -> Self {
        Self::Stretch
    }
}

impl UvProfile {
    /// Scale factors `(u, v)` applied around the UV center for a shape of
    /// the given dimensions.
    pub fn scale_factors(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Self::Stretch => (1.0, 1.0),
            Self::Contain => {
                if width >= height {
                    (1.0, height / width)
                } else {
                    (width / height, 1.0)
                }
            }
            Self::Cover => {
                if width >= height {
                    (width / height, 1.0)
                } else {
                    (1.0, height / width)
                }
            }
        }
    }
}

impl fmt::Display for UvProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stretch => write!(f, "stretch"),
            Self::Contain => write!(f, "contain"),
            Self::Cover => write!(f, "cover"),
        }
    }
}

impl FromStr for UvProfile {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stretch" => Ok(Self::Stretch),
            "contain" => Ok(Self::Contain),
            "cover" => Ok(Self::Cover),
            _ => Err(GeometryError::InvalidUvProfile {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for UvProfile {
    type Error = GeometryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Stretch),
            2 => Ok(Self::Contain),
            3 => Ok(Self::Cover),
            _ => Err(GeometryError::InvalidUvProfile {
                value: value.to_string(),
            }),
        }
    }
}

/// Bezier handle type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleType {
    /// Independently placed handle
    Free,
    /// Handle pointing straight at the neighbouring knot
    Vector,
}

impl Default for HandleType {
    fn default() -> Self {
        Self::Free
    }
}

impl fmt::Display for HandleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "FREE"),
            Self::Vector => write!(f, "VECTOR"),
        }
    }
}

impl FromStr for HandleType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "vector" | "straight" => Ok(Self::Vector),
            _ => Err(GeometryError::InvalidHandleType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for HandleType {
    type Error = GeometryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Free),
            2 => Ok(Self::Vector),
            _ => Err(GeometryError::InvalidHandleType {
                value: value.to_string(),
            }),
        }
    }
}

/// Which sides of a 2D curve the host fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    None,
    Back,
    Front,
    Both,
}

impl Default for FillMode {
    fn default() -> Self {
        Self::Both
    }
}

impl FillMode {
    pub fn is_filled(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Back => write!(f, "BACK"),
            Self::Front => write!(f, "FRONT"),
            Self::Both => write!(f, "BOTH"),
        }
    }
}

impl FromStr for FillMode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "back" => Ok(Self::Back),
            "front" => Ok(Self::Front),
            "both" => Ok(Self::Both),
            _ => Err(GeometryError::InvalidFillMode {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for FillMode {
    type Error = GeometryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::None),
            2 => Ok(Self::Back),
            3 => Ok(Self::Front),
            4 => Ok(Self::Both),
            _ => Err(GeometryError::InvalidFillMode {
                value: value.to_string(),
            }),
        }
    }
}

/// How a corner with zero rounding is realized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerPolicy {
    /// A zero factor yields a sharp corner: one merged knot for curves, a
    /// placeholder vertex at the rectangle corner for meshes.
    SharpFallback,
    /// Factors are clamped to a strictly positive minimum, so every corner
    /// keeps its arc and its two bracketing knots or vertices.
    ForceRound,
}

impl fmt::Display for CornerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SharpFallback => write!(f, "sharp_fallback"),
            Self::ForceRound => write!(f, "force_round"),
        }
    }
}

impl FromStr for CornerPolicy {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sharp_fallback" | "sharp" => Ok(Self::SharpFallback),
            "force_round" | "round" => Ok(Self::ForceRound),
            _ => Err(GeometryError::InvalidCornerPolicy {
                value: s.to_string(),
            }),
        }
    }
}
