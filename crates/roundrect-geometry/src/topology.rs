//! Face topology for the three polygon modes.
//!
//! N-gon meshes are a single face over the boundary. Quad and triangle meshes
//! share one layout: a hub vertex at each corner's inset intersection, five
//! body quads between the hubs and the straight edges, and a triangle fan from
//! each hub over its corner's boundary vertices. Triangle mode only differs in
//! how the body quads are emitted.
//!
//! ```text
//!   e_tl ─────────── x_tr
//!   │ fan │  top  │ fan │
//!   x_tl─h_tl───h_tr─e_tr
//!   │left │center │right│
//!   e_bl─h_bl───h_br─x_br
//!   │ fan │bottom │ fan │
//!   x_bl ─────────── e_br
//! ```

use crate::arc::Boundary;
use crate::corner::Corner;
use crate::inset::CornerInsets;
use crate::mesh::{FaceListBuilder, MeshData, VertexId};
use crate::options::PolygonMode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How hub-layout body quads are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySplit {
    KeepQuads,
    /// Each quad `(a, b, c, d)` becomes `(a, b, d)` and `(b, c, d)`
    Triangulate,
}

/// Turns a tessellated boundary into faces
pub trait TopologyStrategy: Send + Sync {
    /// Faces emitted before any corner fan
    fn body_face_count(&self) -> usize;

    /// Whether interior hub vertices are added
    fn uses_hubs(&self) -> bool;

    fn assemble(&self, boundary: Boundary, insets: &CornerInsets) -> MeshData;

    /// Closed-form face count for the given insets
    fn face_count(&self, insets: &CornerInsets) -> usize {
        if self.uses_hubs() {
            self.body_face_count() + insets.total_resolution() + 4
        } else {
            self.body_face_count()
        }
    }

    /// Closed-form vertex count for the given insets
    fn vertex_count(&self, insets: &CornerInsets) -> usize {
        let hubs = if self.uses_hubs() { 4 } else { 0 };
        8 + insets.total_resolution() + hubs
    }
}

/// One face over the whole boundary
#[derive(Debug, Clone, Copy, Default)]
pub struct NgonTopology;

impl TopologyStrategy for NgonTopology {
    fn body_face_count(&self) -> usize {
        1
    }

    fn uses_hubs(&self) -> bool {
        false
    }

    fn assemble(&self, boundary: Boundary, _insets: &CornerInsets) -> MeshData {
        let mut faces = FaceListBuilder::with_capacity(1);
        faces.push_ring(boundary.ring());
        faces.finish(boundary.arena)
    }
}

/// Hub layout with five body quads and per-corner fans
#[derive(Debug, Clone, Copy)]
pub struct HubTopology {
    pub split: BodySplit,
}

impl HubTopology {
    fn push_body(&self, faces: &mut FaceListBuilder, [a, b, c, d]: [VertexId; 4]) {
        match self.split {
            BodySplit::KeepQuads => faces.push_quad(a, b, c, d),
            BodySplit::Triangulate => {
                faces.push_triangle(a, b, d);
                faces.push_triangle(b, c, d);
            }
        }
    }
}

impl TopologyStrategy for HubTopology {
    fn body_face_count(&self) -> usize {
        match self.split {
            BodySplit::KeepQuads => 5,
            BodySplit::Triangulate => 10,
        }
    }

    fn uses_hubs(&self) -> bool {
        true
    }

    fn assemble(&self, mut boundary: Boundary, insets: &CornerInsets) -> MeshData {
        // Hubs follow the boundary, in perimeter order
        let hubs = Corner::PERIMETER.map(|c| boundary.push_interior(insets.hub_point(c)));
        let [h_tl, h_bl, h_br, h_tr] = hubs;
        let [(e_tl, x_tl), (e_bl, x_bl), (e_br, x_br), (e_tr, x_tr)] =
            boundary.corners.each_ref().map(|s| (s.entry(), s.exit()));

        let mut faces = FaceListBuilder::with_capacity(self.face_count(insets));
        self.push_body(&mut faces, [h_tl, h_bl, h_br, h_tr]);
        self.push_body(&mut faces, [x_tl, e_bl, h_bl, h_tl]);
        self.push_body(&mut faces, [h_bl, x_bl, e_br, h_br]);
        self.push_body(&mut faces, [h_tr, h_br, x_br, e_tr]);
        self.push_body(&mut faces, [e_tl, h_tl, h_tr, x_tr]);

        for (span, hub) in boundary.corners.iter().zip(hubs) {
            for pair in span.ids.windows(2) {
                faces.push_triangle(hub, pair[0], pair[1]);
            }
        }

        faces.finish(boundary.arena)
    }
}

static NGON: NgonTopology = NgonTopology;
static QUADS: HubTopology = HubTopology {
    split: BodySplit::KeepQuads,
};
static TRIANGLES: HubTopology = HubTopology {
    split: BodySplit::Triangulate,
};

impl PolygonMode {
    pub fn strategy(self) -> &'static dyn TopologyStrategy {
        match self {
            PolygonMode::Ngon => &NGON,
            PolygonMode::Quad => &QUADS,
            PolygonMode::Triangle => &TRIANGLES,
        }
    }
}

/// Build the faces for `mode` over a tessellated boundary
pub fn assemble_topology(
    boundary: Boundary,
    insets: &CornerInsets,
    mode: PolygonMode,
) -> MeshData {
    let mesh = mode.strategy().assemble(boundary, insets);
    debug!(
        mode = %mode,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Assembled topology"
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::tessellate_boundary;
    use crate::inset::Variant;
    use crate::options::{CornerPolicy, UvProfile};
    use crate::rect::Rectangle;
    use roundrect_core::GeometryConstants;

    fn build(mode: PolygonMode, resolutions: [i32; 4]) -> (MeshData, CornerInsets) {
        let insets = CornerInsets::compute(
            &Rectangle::new(-2.0, 2.0, 1.0, -1.0),
            [0.3, 0.6, 0.9, 0.1],
            resolutions,
            CornerPolicy::ForceRound,
            Variant::Mesh,
            &GeometryConstants::default(),
        );
        let boundary = tessellate_boundary(&insets, UvProfile::Stretch);
        (assemble_topology(boundary, &insets, mode), insets)
    }

    #[test]
    fn test_ngon_is_one_face() {
        let (mesh, insets) = build(PolygonMode::Ngon, [2, 0, 1, 3]);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertex_count(), 14);
        assert_eq!(mesh.vertex_count(), NGON.vertex_count(&insets));
        assert_eq!(mesh.vertex_indices[0].to_vec(), (0..14).collect::<Vec<_>>());
    }

    #[test]
    fn test_quad_counts() {
        let (mesh, insets) = build(PolygonMode::Quad, [2, 0, 1, 3]);
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.face_count(), 5 + 3 + 1 + 2 + 4);
        assert_eq!(mesh.face_count(), QUADS.face_count(&insets));
        assert!(mesh.vertex_indices.iter().take(5).all(|r| r.len() == 4));
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_triangle_counts() {
        let (mesh, _) = build(PolygonMode::Triangle, [4; 4]);
        assert_eq!(mesh.face_count(), 10 + 20);
        assert!(mesh.vertex_indices.iter().all(|r| r.len() == 3));
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_every_face_winds_counter_clockwise() {
        for mode in [PolygonMode::Ngon, PolygonMode::Quad, PolygonMode::Triangle] {
            let (mesh, _) = build(mode, [3, 1, 0, 2]);
            for i in 0..mesh.face_count() {
                let area = mesh.face_signed_area(i).unwrap_or(-1.0);
                assert!(area > 0.0, "{mode} face {i} has area {area}");
            }
        }
    }

    #[test]
    fn test_hubs_follow_boundary() {
        let (mesh, insets) = build(PolygonMode::Quad, [1; 4]);
        let boundary_len = 8 + 4;
        for (k, corner) in Corner::PERIMETER.iter().enumerate() {
            let p = mesh.positions[boundary_len + k];
            assert_eq!(p.xy(), insets.hub_point(*corner));
        }
    }
}
