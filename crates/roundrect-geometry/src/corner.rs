//! Corner identities and their fixed local frames.
//!
//! The boundary is always walked counter-clockwise starting at the top-left
//! corner: top-left, bottom-left, bottom-right, top-right. Each corner knows
//! the two unit directions along its edges, which lets the curve builder and
//! the arc tessellator treat all four corners with one code path.

use roundrect_core::Point2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Request order: the order of per-corner arrays in requests
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Perimeter order: counter-clockwise walk used for knots and vertices
    pub const PERIMETER: [Corner; 4] = [
        Corner::TopLeft,
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopRight,
    ];

    /// Index into request-ordered arrays (`rounding`, `resolutions`)
    pub fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }

    /// Position in [`Corner::PERIMETER`]
    pub fn perimeter_index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::BottomLeft => 1,
            Corner::BottomRight => 2,
            Corner::TopRight => 3,
        }
    }

    /// Next corner along the counter-clockwise walk
    pub fn next(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomLeft,
            Corner::BottomLeft => Corner::BottomRight,
            Corner::BottomRight => Corner::TopRight,
            Corner::TopRight => Corner::TopLeft,
        }
    }

    /// Previous corner along the counter-clockwise walk
    pub fn previous(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::TopRight,
            Corner::BottomLeft => Corner::TopLeft,
            Corner::BottomRight => Corner::BottomLeft,
            Corner::TopRight => Corner::BottomRight,
        }
    }

    /// Unit direction from the corner along the edge shared with the
    /// previous corner.
    pub fn incoming(self) -> Point2 {
        match self {
            Corner::TopLeft => Point2::new(1.0, 0.0),
            Corner::BottomLeft => Point2::new(0.0, 1.0),
            Corner::BottomRight => Point2::new(-1.0, 0.0),
            Corner::TopRight => Point2::new(0.0, -1.0),
        }
    }

    /// Unit direction from the corner along the edge shared with the next
    /// corner.
    pub fn outgoing(self) -> Point2 {
        match self {
            Corner::TopLeft => Point2::new(0.0, -1.0),
            Corner::BottomLeft => Point2::new(1.0, 0.0),
            Corner::BottomRight => Point2::new(0.0, 1.0),
            Corner::TopRight => Point2::new(-1.0, 0.0),
        }
    }

    /// Polar angle, about the arc center, of the point where the arc leaves
    /// the incoming edge. The arc sweeps a further quarter turn
    /// counter-clockwise.
    pub fn arc_start_angle(self) -> f64 {
        match self {
            Corner::TopLeft => FRAC_PI_2,
            Corner::BottomLeft => PI,
            Corner::BottomRight => PI + FRAC_PI_2,
            Corner::TopRight => 0.0,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corner::TopLeft => write!(f, "top-left"),
            Corner::TopRight => write!(f, "top-right"),
            Corner::BottomRight => write!(f, "bottom-right"),
            Corner::BottomLeft => write!(f, "bottom-left"),
        }
    }
}
