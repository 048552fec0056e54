//! Generation requests.
//!
//! Requests carry raw user input. Nothing here is validated on construction;
//! the generator clamps every numeric field when it runs.

use crate::options::{CornerPolicy, FillMode, HandleType, PolygonMode, UvProfile};
use roundrect_core::constants::{DEFAULT_HALF_HEIGHT, DEFAULT_HALF_WIDTH};
use roundrect_core::Point2;
use serde::{Deserialize, Serialize};

/// Default rounding factor for every corner
pub const DEFAULT_ROUNDING: f64 = 0.25;

/// Default curve resolution handed to the host
pub const DEFAULT_CURVE_RESOLUTION: i32 = 12;

/// Default number of arc samples per mesh corner
pub const DEFAULT_MESH_RESOLUTION: i32 = 8;

fn default_corner_a() -> Point2 {
    Point2::new(-DEFAULT_HALF_WIDTH, DEFAULT_HALF_HEIGHT)
}

fn default_corner_b() -> Point2 {
    Point2::new(DEFAULT_HALF_WIDTH, -DEFAULT_HALF_HEIGHT)
}

/// Solidify parameters forwarded to the sink
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Extrusion {
    /// Extrusion depth; zero disables it
    pub thickness: f64,
    /// Placement of the extrusion relative to the surface, in `[-1, 1]`
    pub offset: f64,
}

impl Extrusion {
    /// Whether the sink should solidify; false for zero, negative or NaN
    pub fn is_active(&self) -> bool {
        self.thickness > 0.0
    }
}

/// Parameters for a Bezier outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveRequest {
    pub corner_a: Point2,
    pub corner_b: Point2,
    /// Rounding factors: top-left, top-right, bottom-right, bottom-left
    pub rounding: [f64; 4],
    /// Samples per segment when the host flattens the curve
    pub resolution: i32,
    /// Handle type on the straight edges
    pub straight_edge: HandleType,
    pub fill_mode: FillMode,
    pub corner_policy: CornerPolicy,
    pub extrusion: Extrusion,
}

impl Default for CurveRequest {
    fn default() -> Self {
        Self {
            corner_a: default_corner_a(),
            corner_b: default_corner_b(),
            rounding: [DEFAULT_ROUNDING; 4],
            resolution: DEFAULT_CURVE_RESOLUTION,
            straight_edge: HandleType::default(),
            fill_mode: FillMode::default(),
            corner_policy: CornerPolicy::SharpFallback,
            extrusion: Extrusion::default(),
        }
    }
}

/// Parameters for a tessellated mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshRequest {
    pub corner_a: Point2,
    pub corner_b: Point2,
    /// Rounding factors: top-left, top-right, bottom-right, bottom-left
    pub rounding: [f64; 4],
    /// Interior arc samples, same corner order as `rounding`
    pub resolutions: [i32; 4],
    pub polygon_mode: PolygonMode,
    pub uv_profile: UvProfile,
    pub corner_policy: CornerPolicy,
    pub extrusion: Extrusion,
}

impl Default for MeshRequest {
    fn default() -> Self {
        Self {
            corner_a: default_corner_a(),
            corner_b: default_corner_b(),
            rounding: [DEFAULT_ROUNDING; 4],
            resolutions: [DEFAULT_MESH_RESOLUTION; 4],
            polygon_mode: PolygonMode::default(),
            uv_profile: UvProfile::default(),
            corner_policy: CornerPolicy::ForceRound,
            extrusion: Extrusion::default(),
        }
    }
}
