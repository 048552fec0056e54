//! Bezier outline for the curve variant.
//!
//! A round corner contributes two knots, one where each straight edge meets
//! the arc. The arc-side handles have length `radius * kappa` along the edge
//! tangent, which makes the cubic between them a close fit to a quarter
//! circle. The edge-side handles sit a third of the way toward the next knot
//! on that edge, so straight edges stay straight.
//!
//! A sharp corner contributes a single knot at the rectangle corner with both
//! handles on the edges.

use crate::corner::Corner;
use crate::inset::CornerInsets;
use crate::options::HandleType;
use roundrect_core::{GeometryConstants, Point2, Point3};
use serde::{Deserialize, Serialize};
use tracing::trace;

const ONE_THIRD: f64 = 1.0 / 3.0;

/// One Bezier control point with its two handles.
///
/// The fore handle points along the direction of travel (toward the next
/// knot), the rear handle back toward the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKnot {
    pub position: Point3,
    pub fore_handle: Point3,
    pub fore_handle_type: HandleType,
    pub rear_handle: Point3,
    pub rear_handle_type: HandleType,
}

/// A closed cubic Bezier spline, wound counter-clockwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveProfile {
    pub knots: Vec<CurveKnot>,
    pub closed: bool,
}

/// A single cubic span between two consecutive knots
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl CubicSegment {
    /// Point at parameter `t` in `[0, 1]`
    pub fn eval(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point2::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x + d * self.p3.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y + d * self.p3.y,
        )
    }
}

impl CurveProfile {
    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }

    /// Spans between consecutive knots, including the closing span
    pub fn segments(&self) -> impl Iterator<Item = CubicSegment> + '_ {
        let n = self.knots.len();
        let spans = if self.closed { n } else { n.saturating_sub(1) };
        (0..spans).map(move |i| {
            let from = &self.knots[i];
            let to = &self.knots[(i + 1) % n];
            CubicSegment {
                p0: from.position.xy(),
                p1: from.fore_handle.xy(),
                p2: to.rear_handle.xy(),
                p3: to.position.xy(),
            }
        })
    }

    /// Sample every segment `resolution` times.
    ///
    /// The result starts at the first knot and does not repeat it at the end.
    pub fn flatten(&self, resolution: u32) -> Vec<Point2> {
        let steps = resolution.max(1);
        let mut points = Vec::with_capacity(self.knots.len() * steps as usize);
        for segment in self.segments() {
            for j in 0..steps {
                points.push(segment.eval(j as f64 / steps as f64));
            }
        }
        if !self.closed {
            if let Some(last) = self.knots.last() {
                points.push(last.position.xy());
            }
        }
        points
    }
}

/// Build the closed outline for the resolved corners.
///
/// Knots run top-left, bottom-left, bottom-right, top-right. Edge-side
/// handles use `straight_edge`; arc-side handles are always free.
pub fn build_curve_profile(
    insets: &CornerInsets,
    straight_edge: HandleType,
    constants: &GeometryConstants,
) -> CurveProfile {
    let mut knots = Vec::with_capacity(4 + insets.round_count());

    for corner in Corner::PERIMETER {
        let geometry = insets.corner(corner);
        let prev_exit = insets.exit_point(corner.previous());
        let next_entry = insets.entry_point(corner.next());

        if geometry.is_round {
            let handle = geometry.radius * constants.kappa;
            let entry = insets.entry_point(corner);
            let exit = insets.exit_point(corner);

            knots.push(CurveKnot {
                position: entry.to_3d(),
                fore_handle: (entry - corner.incoming() * handle).to_3d(),
                fore_handle_type: HandleType::Free,
                rear_handle: entry.lerp(prev_exit, ONE_THIRD).to_3d(),
                rear_handle_type: straight_edge,
            });
            knots.push(CurveKnot {
                position: exit.to_3d(),
                fore_handle: exit.lerp(next_entry, ONE_THIRD).to_3d(),
                fore_handle_type: straight_edge,
                rear_handle: (exit - corner.outgoing() * handle).to_3d(),
                rear_handle_type: HandleType::Free,
            });
        } else {
            let p = insets.rect.corner(corner);
            knots.push(CurveKnot {
                position: p.to_3d(),
                fore_handle: p.lerp(next_entry, ONE_THIRD).to_3d(),
                fore_handle_type: straight_edge,
                rear_handle: p.lerp(prev_exit, ONE_THIRD).to_3d(),
                rear_handle_type: straight_edge,
            });
        }
        trace!(%corner, knots = knots.len(), "Placed corner knots");
    }

    CurveProfile {
        knots,
        closed: true,
    }
}
