//! Generation entry points.

use crate::arc::tessellate_boundary;
use crate::curve::{build_curve_profile, CurveProfile};
use crate::inset::{CornerGeometry, CornerInsets, Variant};
use crate::mesh::MeshData;
use crate::options::{FillMode, PolygonMode, UvProfile};
use crate::rect::Rectangle;
use crate::request::{CurveRequest, Extrusion, MeshRequest};
use crate::topology::assemble_topology;
use roundrect_core::GeometryConstants;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Suggested auto-smooth angle for meshes with rounded corners (30 degrees)
pub const AUTO_SMOOTH_ANGLE: f64 = 0.523599;

/// A finished Bezier outline and the settings a host applies to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGeometry {
    pub rect: Rectangle,
    /// Request order: top-left, top-right, bottom-right, bottom-left
    pub corners: [CornerGeometry; 4],
    pub profile: CurveProfile,
    /// Samples per segment when flattening
    pub resolution: u32,
    pub fill_mode: FillMode,
    pub extrusion: Extrusion,
}

/// A finished planar mesh and its shading hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshGeometry {
    pub rect: Rectangle,
    /// Request order: top-left, top-right, bottom-right, bottom-left
    pub corners: [CornerGeometry; 4],
    pub mesh: MeshData,
    pub polygon_mode: PolygonMode,
    pub uv_profile: UvProfile,
    /// Set when any corner has arc samples
    pub smooth_shading: bool,
    pub auto_smooth_angle: f64,
    pub extrusion: Extrusion,
}

/// Either kind of generated geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Curve(CurveGeometry),
    Mesh(MeshGeometry),
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Curve(_) => "curve",
            Geometry::Mesh(_) => "mesh",
        }
    }

    pub fn rect(&self) -> &Rectangle {
        match self {
            Geometry::Curve(c) => &c.rect,
            Geometry::Mesh(m) => &m.rect,
        }
    }
}

impl From<CurveGeometry> for Geometry {
    fn from(curve: CurveGeometry) -> Self {
        Geometry::Curve(curve)
    }
}

impl From<MeshGeometry> for Geometry {
    fn from(mesh: MeshGeometry) -> Self {
        Geometry::Mesh(mesh)
    }
}

/// Generate a closed Bezier outline
pub fn generate_curve(request: &CurveRequest, constants: &GeometryConstants) -> CurveGeometry {
    let rect = Rectangle::from_corners(request.corner_a, request.corner_b, constants);
    let insets = CornerInsets::compute(
        &rect,
        request.rounding,
        [0; 4],
        request.corner_policy,
        Variant::Curve,
        constants,
    );
    let profile = build_curve_profile(&insets, request.straight_edge, constants);

    debug!(
        knots = profile.knot_count(),
        round = insets.round_count(),
        policy = %request.corner_policy,
        "Generated curve"
    );

    CurveGeometry {
        rect,
        corners: insets.corners,
        profile,
        resolution: request.resolution.max(0) as u32,
        fill_mode: request.fill_mode,
        extrusion: request.extrusion,
    }
}

/// Generate a tessellated planar mesh
pub fn generate_mesh(request: &MeshRequest, constants: &GeometryConstants) -> MeshGeometry {
    let rect = Rectangle::from_corners(request.corner_a, request.corner_b, constants);
    let insets = CornerInsets::compute(
        &rect,
        request.rounding,
        request.resolutions,
        request.corner_policy,
        Variant::Mesh,
        constants,
    );
    let boundary = tessellate_boundary(&insets, request.uv_profile);
    let mesh = assemble_topology(boundary, &insets, request.polygon_mode);

    let smooth_shading = insets
        .corners
        .iter()
        .any(|c| c.is_round && c.resolution > 0);

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        mode = %request.polygon_mode,
        smooth = smooth_shading,
        "Generated mesh"
    );

    MeshGeometry {
        rect,
        corners: insets.corners,
        mesh,
        polygon_mode: request.polygon_mode,
        uv_profile: request.uv_profile,
        smooth_shading,
        auto_smooth_angle: AUTO_SMOOTH_ANGLE,
        extrusion: request.extrusion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CornerPolicy;

    #[test]
    fn test_default_curve() {
        let curve = generate_curve(&CurveRequest::default(), &GeometryConstants::default());
        assert_eq!(curve.profile.knot_count(), 8);
        assert_eq!(curve.resolution, 12);
        assert_eq!(curve.fill_mode, FillMode::Both);
    }

    #[test]
    fn test_negative_curve_resolution_floors() {
        let request = CurveRequest {
            resolution: -5,
            ..CurveRequest::default()
        };
        let curve = generate_curve(&request, &GeometryConstants::default());
        assert_eq!(curve.resolution, 0);
    }

    #[test]
    fn test_default_mesh() {
        let geometry = generate_mesh(&MeshRequest::default(), &GeometryConstants::default());
        assert_eq!(geometry.mesh.vertex_count(), 8 + 32 + 4);
        assert_eq!(geometry.mesh.face_count(), 5 + 36);
        assert!(geometry.smooth_shading);
        assert_eq!(geometry.auto_smooth_angle, AUTO_SMOOTH_ANGLE);
    }

    #[test]
    fn test_flat_mesh_is_not_smoothed() {
        let request = MeshRequest {
            resolutions: [0; 4],
            ..MeshRequest::default()
        };
        let geometry = generate_mesh(&request, &GeometryConstants::default());
        assert!(!geometry.smooth_shading);

        // Sharp placeholders are not arc samples
        let request = MeshRequest {
            rounding: [0.0; 4],
            corner_policy: CornerPolicy::SharpFallback,
            ..MeshRequest::default()
        };
        let geometry = generate_mesh(&request, &GeometryConstants::default());
        assert!(!geometry.smooth_shading);
    }

    #[test]
    fn test_geometry_kind() {
        let mesh: Geometry =
            generate_mesh(&MeshRequest::default(), &GeometryConstants::default()).into();
        assert_eq!(mesh.kind(), "mesh");
        assert!(mesh.rect().is_valid(1e-6));
    }

    #[test]
    fn test_extrusion_is_forwarded_unmodified() {
        let extrusion = Extrusion {
            thickness: -2.0,
            offset: 3.0,
        };
        let mesh = generate_mesh(
            &MeshRequest {
                extrusion,
                ..MeshRequest::default()
            },
            &GeometryConstants::default(),
        );
        assert_eq!(mesh.extrusion, extrusion);

        let curve = generate_curve(
            &CurveRequest {
                extrusion,
                ..CurveRequest::default()
            },
            &GeometryConstants::default(),
        );
        assert_eq!(curve.extrusion, extrusion);
    }
}
