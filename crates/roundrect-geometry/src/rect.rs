//! Bounding box normalization.

use crate::corner::Corner;
use roundrect_core::{GeometryConstants, Point2};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Largest accepted coordinate magnitude; keeps every difference finite
const COORDINATE_LIMIT: f64 = f64::MAX / 4.0;

/// Axis-aligned bounding box of the generated shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Rectangle {
    /// Create a rectangle from already ordered sides, without repair
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Build a valid rectangle from two arbitrary corner points.
    ///
    /// The points may come in any order. Collapsed dimensions are repaired
    /// rather than rejected:
    /// - both collapsed: the default 16:9 box centered on the input
    /// - width collapsed: a square built from the height
    /// - height collapsed: a square built from the width
    pub fn from_corners(a: Point2, b: Point2, constants: &GeometryConstants) -> Self {
        let a = clamp_coordinates(finite_or_origin(a));
        let b = clamp_coordinates(finite_or_origin(b));

        let mut left = a.x.min(b.x);
        let mut right = a.x.max(b.x);
        let mut bottom = a.y.min(b.y);
        let mut top = a.y.max(b.y);

        let eps = constants.epsilon;
        let width_invalid = right - left < eps;
        let height_invalid = top - bottom < eps;

        if width_invalid && height_invalid {
            let cx = (left + right) * 0.5;
            let cy = (top + bottom) * 0.5;
            let (hw, hh) = constants.default_half_extents;
            debug!("Degenerate bounding box at ({cx}, {cy}), using default extents");
            left = cx - hw;
            right = cx + hw;
            bottom = cy - hh;
            top = cy + hh;
        } else if width_invalid {
            let cx = (left + right) * 0.5;
            let half_height = (top - bottom) * 0.5;
            debug!("Zero-width bounding box, squaring from height");
            left = cx - half_height;
            right = cx + half_height;
        } else if height_invalid {
            let cy = (top + bottom) * 0.5;
            let half_width = (right - left) * 0.5;
            debug!("Zero-height bounding box, squaring from width");
            bottom = cy - half_width;
            top = cy + half_width;
        }

        let rect = Self {
            left,
            right,
            top,
            bottom,
        };
        if rect.is_valid(eps) {
            return rect;
        }

        // Extents lost to precision far from the origin
        let center = rect.center();
        warn!(
            "Bounding box at ({}, {}) cannot be represented, using default box at origin",
            center.x, center.y
        );
        let (hw, hh) = constants.default_half_extents;
        Self::new(-hw, hw, hh, -hh)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Half the shorter side; no corner inset may exceed it
    pub fn short_side_half(&self) -> f64 {
        0.5 * self.width().min(self.height())
    }

    /// The literal rectangle corner
    pub fn corner(&self, corner: Corner) -> Point2 {
        match corner {
            Corner::TopLeft => Point2::new(self.left, self.top),
            Corner::TopRight => Point2::new(self.right, self.top),
            Corner::BottomRight => Point2::new(self.right, self.bottom),
            Corner::BottomLeft => Point2::new(self.left, self.bottom),
        }
    }

    /// Position normalized to `[0, 1]` within the box
    pub fn normalize_point(&self, p: Point2) -> Point2 {
        Point2::new(
            (p.x - self.left) / self.width(),
            (p.y - self.bottom) / self.height(),
        )
    }

    /// Ordered with both dimensions at least `epsilon`
    pub fn is_valid(&self, epsilon: f64) -> bool {
        self.left < self.right
            && self.bottom < self.top
            && self.width() >= epsilon
            && self.height() >= epsilon
    }
}

fn clamp_coordinates(p: Point2) -> Point2 {
    Point2::new(
        p.x.clamp(-COORDINATE_LIMIT, COORDINATE_LIMIT),
        p.y.clamp(-COORDINATE_LIMIT, COORDINATE_LIMIT),
    )
}

fn finite_or_origin(p: Point2) -> Point2 {
    if p.is_finite() {
        return p;
    }
    warn!("Non-finite corner coordinate ({}, {}) replaced with 0", p.x, p.y);
    Point2::new(
        if p.x.is_finite() { p.x } else { 0.0 },
        if p.y.is_finite() { p.y } else { 0.0 },
    )
}
