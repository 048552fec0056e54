//! Corner inset calculation.
//!
//! Converts the four rounding factors into per-corner insets and radii. Half
//! the short side of the rectangle is a hard ceiling, so opposing corners can
//! never overlap even when every factor approaches one.
//!
//! The corner policy is resolved here, once, and everything downstream only
//! looks at the resulting [`CornerGeometry`].

use crate::corner::Corner;
use crate::options::CornerPolicy;
use crate::rect::Rectangle;
use roundrect_core::{GeometryConstants, Point2};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which generator the insets are computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Curve,
    Mesh,
}

/// Resolved geometry of one corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerGeometry {
    /// Distance from the corner to where the straight edges stop
    pub inset: f64,
    /// Arc radius; zero for sharp corners
    pub radius: f64,
    pub is_round: bool,
    /// Interior samples between the two junction points
    pub resolution: usize,
}

impl CornerGeometry {
    fn round(inset: f64, resolution: usize) -> Self {
        Self {
            inset,
            radius: inset,
            is_round: true,
            resolution,
        }
    }

    fn sharp(inset: f64, resolution: usize) -> Self {
        Self {
            inset,
            radius: 0.0,
            is_round: false,
            resolution,
        }
    }
}

/// The stretch of one rectangle edge left straight by its two corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpan {
    /// Low end (left for horizontal edges, bottom for vertical ones)
    pub start: f64,
    /// High end (right for horizontal edges, top for vertical ones)
    pub end: f64,
}

impl EdgeSpan {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// The eight axis-aligned inset coordinates, two per edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsetCoordinates {
    /// x range of the top edge
    pub top: EdgeSpan,
    /// x range of the bottom edge
    pub bottom: EdgeSpan,
    /// y range of the left edge
    pub left: EdgeSpan,
    /// y range of the right edge
    pub right: EdgeSpan,
}

/// Insets for all four corners of a normalized rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerInsets {
    pub rect: Rectangle,
    /// Indexed by [`Corner::index`]
    pub corners: [CornerGeometry; 4],
    pub edges: InsetCoordinates,
}

impl CornerInsets {
    /// Resolve the corners of `rect`.
    ///
    /// `factors` and `resolutions` are in request order (top-left,
    /// top-right, bottom-right, bottom-left). Curves ignore `resolutions`.
    pub fn compute(
        rect: &Rectangle,
        factors: [f64; 4],
        resolutions: [i32; 4],
        policy: CornerPolicy,
        variant: Variant,
        constants: &GeometryConstants,
    ) -> Self {
        let short_half = rect.short_side_half();
        let corners = Corner::ALL.map(|corner| {
            let i = corner.index();
            let geometry = resolve_corner(
                factors[i],
                resolutions[i],
                short_half,
                policy,
                variant,
                constants,
            );
            trace!(
                %corner,
                inset = geometry.inset,
                round = geometry.is_round,
                resolution = geometry.resolution,
                "Resolved corner"
            );
            geometry
        });

        let inset = |c: Corner| corners[c.index()].inset;
        let edges = InsetCoordinates {
            top: EdgeSpan {
                start: rect.left + inset(Corner::TopLeft),
                end: rect.right - inset(Corner::TopRight),
            },
            bottom: EdgeSpan {
                start: rect.left + inset(Corner::BottomLeft),
                end: rect.right - inset(Corner::BottomRight),
            },
            left: EdgeSpan {
                start: rect.bottom + inset(Corner::BottomLeft),
                end: rect.top - inset(Corner::TopLeft),
            },
            right: EdgeSpan {
                start: rect.bottom + inset(Corner::BottomRight),
                end: rect.top - inset(Corner::TopRight),
            },
        };

        Self {
            rect: *rect,
            corners,
            edges,
        }
    }

    pub fn corner(&self, corner: Corner) -> &CornerGeometry {
        &self.corners[corner.index()]
    }

    /// Number of corners with an arc
    pub fn round_count(&self) -> usize {
        self.corners.iter().filter(|c| c.is_round).count()
    }

    /// Sum of interior samples over all corners
    pub fn total_resolution(&self) -> usize {
        self.corners.iter().map(|c| c.resolution).sum()
    }

    /// Where the incoming straight edge stops
    pub fn entry_point(&self, corner: Corner) -> Point2 {
        self.rect.corner(corner) + corner.incoming() * self.corner(corner).inset
    }

    /// Where the outgoing straight edge starts
    pub fn exit_point(&self, corner: Corner) -> Point2 {
        self.rect.corner(corner) + corner.outgoing() * self.corner(corner).inset
    }

    /// Intersection of the two inset lines. For round corners this is the
    /// arc center; quad and triangle meshes place the hub vertex here.
    pub fn hub_point(&self, corner: Corner) -> Point2 {
        let inset = self.corner(corner).inset;
        self.rect.corner(corner) + (corner.incoming() + corner.outgoing()) * inset
    }
}

fn resolve_corner(
    factor: f64,
    resolution: i32,
    short_half: f64,
    policy: CornerPolicy,
    variant: Variant,
    constants: &GeometryConstants,
) -> CornerGeometry {
    let factor = if factor.is_nan() { 0.0 } else { factor };
    let max = constants.max_factor();
    let eps = constants.epsilon;

    match (variant, policy) {
        (Variant::Curve, CornerPolicy::SharpFallback) => {
            let inset = short_half * factor.clamp(0.0, max);
            if inset > 0.0 {
                CornerGeometry::round(inset, 0)
            } else {
                CornerGeometry::sharp(0.0, 0)
            }
        }
        (Variant::Curve, CornerPolicy::ForceRound) => {
            CornerGeometry::round(short_half * factor.clamp(eps, max), 0)
        }
        (Variant::Mesh, CornerPolicy::SharpFallback) => {
            if factor <= 0.0 || resolution < 0 {
                CornerGeometry::sharp(short_half * constants.sharp_mesh_inset, 1)
            } else {
                CornerGeometry::round(short_half * factor.clamp(eps, max), resolution as usize)
            }
        }
        (Variant::Mesh, CornerPolicy::ForceRound) => CornerGeometry::round(
            short_half * factor.clamp(eps, max),
            resolution.max(0) as usize,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rectangle {
        Rectangle::new(-1.0, 1.0, 1.0, -1.0)
    }

    #[test]
    fn test_curve_sharp_fallback_zero_is_sharp() {
        let insets = CornerInsets::compute(
            &square(),
            [0.0, 0.5, 0.5, 0.5],
            [0; 4],
            CornerPolicy::SharpFallback,
            Variant::Curve,
            &GeometryConstants::default(),
        );
        let tl = insets.corner(Corner::TopLeft);
        assert!(!tl.is_round);
        assert_eq!(tl.inset, 0.0);
        assert_eq!(insets.round_count(), 3);
        assert_eq!(insets.entry_point(Corner::TopLeft), Point2::new(-1.0, 1.0));
    }

    #[test]
    fn test_force_round_keeps_every_corner() {
        let insets = CornerInsets::compute(
            &square(),
            [0.0, -3.0, 0.0, 0.0],
            [2, 2, 2, 2],
            CornerPolicy::ForceRound,
            Variant::Mesh,
            &GeometryConstants::default(),
        );
        assert_eq!(insets.round_count(), 4);
        for c in insets.corners {
            assert!(c.inset > 0.0);
            assert_eq!(c.inset, c.radius);
        }
    }

    #[test]
    fn test_factor_clamped_below_one() {
        let insets = CornerInsets::compute(
            &square(),
            [5.0, 1.0, f64::INFINITY, 0.999],
            [0; 4],
            CornerPolicy::SharpFallback,
            Variant::Curve,
            &GeometryConstants::default(),
        );
        for c in insets.corners {
            assert!(c.inset < 1.0);
        }
        assert_eq!(insets.corner(Corner::TopLeft).inset, 1.0 - 1e-6);
    }

    #[test]
    fn test_nan_factor_treated_as_zero() {
        let insets = CornerInsets::compute(
            &square(),
            [f64::NAN, 0.5, 0.5, 0.5],
            [0; 4],
            CornerPolicy::SharpFallback,
            Variant::Curve,
            &GeometryConstants::default(),
        );
        assert!(!insets.corner(Corner::TopLeft).is_round);
    }

    #[test]
    fn test_mesh_sharp_corner_uses_quarter_short_side() {
        let rect = Rectangle::new(0.0, 4.0, 2.0, 0.0);
        let insets = CornerInsets::compute(
            &rect,
            [0.0, 0.5, 0.5, 0.5],
            [6, 6, -1, 6],
            CornerPolicy::SharpFallback,
            Variant::Mesh,
            &GeometryConstants::default(),
        );
        let tl = insets.corner(Corner::TopLeft);
        assert!(!tl.is_round);
        assert_eq!(tl.inset, 0.5);
        assert_eq!(tl.radius, 0.0);
        assert_eq!(tl.resolution, 1);

        // Negative resolution forces the same fallback
        let br = insets.corner(Corner::BottomRight);
        assert!(!br.is_round);
        assert_eq!(br.resolution, 1);

        assert_eq!(insets.corner(Corner::TopRight).resolution, 6);
    }

    #[test]
    fn test_force_round_floors_negative_resolution() {
        let insets = CornerInsets::compute(
            &square(),
            [0.5; 4],
            [-4, 0, 3, 1],
            CornerPolicy::ForceRound,
            Variant::Mesh,
            &GeometryConstants::default(),
        );
        assert_eq!(insets.corner(Corner::TopLeft).resolution, 0);
        assert_eq!(insets.total_resolution(), 4);
    }

    #[test]
    fn test_edge_spans_use_adjacent_corners() {
        let rect = Rectangle::new(0.0, 10.0, 4.0, 0.0);
        let insets = CornerInsets::compute(
            &rect,
            [0.5, 0.25, 0.75, 1.0 / 16.0],
            [0; 4],
            CornerPolicy::SharpFallback,
            Variant::Curve,
            &GeometryConstants::default(),
        );
        // short side half = 2
        assert_eq!(insets.edges.top, EdgeSpan { start: 1.0, end: 9.5 });
        assert_eq!(insets.edges.bottom, EdgeSpan { start: 0.125, end: 8.5 });
        assert_eq!(insets.edges.left, EdgeSpan { start: 0.125, end: 3.0 });
        assert_eq!(insets.edges.right, EdgeSpan { start: 1.5, end: 3.5 });
        assert_eq!(insets.hub_point(Corner::BottomRight), Point2::new(8.5, 1.5));
    }
}
