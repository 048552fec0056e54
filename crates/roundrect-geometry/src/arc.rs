//! Boundary tessellation for the mesh variant.

use crate::corner::Corner;
use crate::inset::CornerInsets;
use crate::mesh::{VertexArena, VertexId};
use crate::options::UvProfile;
use crate::rect::Rectangle;
use roundrect_core::Point2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// Maps positions inside the bounding box to texture coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvMapper {
    pub rect: Rectangle,
    /// Scale `(u, v)` applied around the UV center `(0.5, 0.5)`
    pub scale: (f64, f64),
}

impl UvMapper {
    pub fn new(rect: Rectangle, profile: UvProfile) -> Self {
        Self {
            rect,
            scale: profile.scale_factors(rect.width(), rect.height()),
        }
    }

    pub fn map(&self, p: Point2) -> Point2 {
        let n = self.rect.normalize_point(p);
        let (su, sv) = self.scale;
        Point2::new((n.x - 0.5) * su + 0.5, (n.y - 0.5) * sv + 0.5)
    }
}

/// Boundary vertices contributed by one corner, from the incoming junction
/// through the arc samples to the outgoing junction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerSpan {
    pub corner: Corner,
    pub ids: Vec<VertexId>,
}

impl CornerSpan {
    /// Where the incoming straight edge ends
    pub fn entry(&self) -> VertexId {
        self.ids[0]
    }

    /// Where the outgoing straight edge starts
    pub fn exit(&self) -> VertexId {
        self.ids[self.ids.len() - 1]
    }
}

/// The tessellated outline, ready for a topology strategy to add faces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub arena: VertexArena,
    /// In perimeter order
    pub corners: [CornerSpan; 4],
    pub mapper: UvMapper,
}

impl Boundary {
    pub fn span(&self, corner: Corner) -> &CornerSpan {
        &self.corners[corner.perimeter_index()]
    }

    /// Boundary vertex ids in counter-clockwise order
    pub fn ring(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.corners.iter().flat_map(|s| s.ids.iter().copied())
    }

    /// Append an interior vertex, mapping its UV the same way as the outline
    pub fn push_interior(&mut self, p: Point2) -> VertexId {
        let uv = self.mapper.map(p);
        self.arena.push(p, uv)
    }
}

/// Sample every corner into boundary vertices.
///
/// Round corners get `resolution` points strictly inside their quarter arc.
/// Sharp corners get a single placeholder at the rectangle corner so that the
/// fan layout stays uniform.
pub fn tessellate_boundary(insets: &CornerInsets, uv_profile: UvProfile) -> Boundary {
    let mapper = UvMapper::new(insets.rect, uv_profile);
    let capacity = 8 + insets.total_resolution() + 4;
    let mut arena = VertexArena::with_capacity(capacity);
    let push = |arena: &mut VertexArena, p: Point2| arena.push(p, mapper.map(p));

    let corners = Corner::PERIMETER.map(|corner| {
        let geometry = insets.corner(corner);
        let mut ids = Vec::with_capacity(geometry.resolution + 2);
        ids.push(push(&mut arena, insets.entry_point(corner)));

        if geometry.is_round {
            let center = insets.hub_point(corner);
            let step = FRAC_PI_2 / (geometry.resolution as f64 + 1.0);
            let start = corner.arc_start_angle();
            for k in 1..=geometry.resolution {
                let angle = start + step * k as f64;
                let p = center + Point2::new(angle.cos(), angle.sin()) * geometry.radius;
                ids.push(push(&mut arena, p));
            }
        } else {
            for _ in 0..geometry.resolution {
                ids.push(push(&mut arena, insets.rect.corner(corner)));
            }
        }

        ids.push(push(&mut arena, insets.exit_point(corner)));
        CornerSpan { corner, ids }
    });

    debug!(
        vertices = arena.len(),
        profile = %uv_profile,
        "Tessellated boundary"
    );

    Boundary {
        arena,
        corners,
        mapper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inset::Variant;
    use crate::options::CornerPolicy;
    use roundrect_core::GeometryConstants;

    fn insets(factors: [f64; 4], resolutions: [i32; 4], policy: CornerPolicy) -> CornerInsets {
        CornerInsets::compute(
            &Rectangle::new(-2.0, 2.0, 1.0, -1.0),
            factors,
            resolutions,
            policy,
            Variant::Mesh,
            &GeometryConstants::default(),
        )
    }

    #[test]
    fn test_vertex_count_per_corner() {
        let boundary = tessellate_boundary(
            &insets([0.5; 4], [0, 1, 2, 3], CornerPolicy::ForceRound),
            UvProfile::Stretch,
        );
        assert_eq!(boundary.arena.len(), 8 + 6);
        assert_eq!(boundary.span(Corner::BottomLeft).ids.len(), 5);
        assert_eq!(boundary.ring().count(), 14);
    }

    #[test]
    fn test_samples_lie_on_arc() {
        let insets = insets([0.8; 4], [5; 4], CornerPolicy::ForceRound);
        let boundary = tessellate_boundary(&insets, UvProfile::Stretch);
        for span in &boundary.corners {
            let geometry = insets.corner(span.corner);
            let center = insets.hub_point(span.corner);
            for &id in &span.ids {
                let p = boundary.arena.position(id).map(|p| p.xy()).unwrap();
                let d = p.distance_to(&center);
                assert!((d - geometry.radius).abs() <= 1e-9 * geometry.radius);
            }
        }
    }

    #[test]
    fn test_sharp_corner_placeholder() {
        let insets = insets([0.0, 0.5, 0.5, 0.5], [4; 4], CornerPolicy::SharpFallback);
        let boundary = tessellate_boundary(&insets, UvProfile::Stretch);
        let span = boundary.span(Corner::TopLeft);
        assert_eq!(span.ids.len(), 3);
        let placeholder = boundary.arena.position(span.ids[1]).unwrap();
        assert_eq!(placeholder.xy(), Point2::new(-2.0, 1.0));
        assert_eq!(
            boundary.arena.position(span.entry()).unwrap().xy(),
            Point2::new(-1.5, 1.0)
        );
    }

    #[test]
    fn test_uv_center_is_fixed() {
        for profile in [UvProfile::Stretch, UvProfile::Contain, UvProfile::Cover] {
            let mapper = UvMapper::new(Rectangle::new(-2.0, 2.0, 1.0, -1.0), profile);
            assert_eq!(mapper.map(Point2::new(0.0, 0.0)), Point2::new(0.5, 0.5));
        }
    }

    #[test]
    fn test_contain_keeps_aspect() {
        let mapper = UvMapper::new(Rectangle::new(-2.0, 2.0, 1.0, -1.0), UvProfile::Contain);
        assert_eq!(mapper.map(Point2::new(-2.0, -1.0)), Point2::new(0.0, 0.25));
        assert_eq!(mapper.map(Point2::new(2.0, 1.0)), Point2::new(1.0, 0.75));
    }
}
