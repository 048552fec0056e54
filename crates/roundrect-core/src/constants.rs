//! Numeric constants for the geometry engine.
//!
//! The engine never reads module-level globals: every generation call takes a
//! [`GeometryConstants`] by reference, so tests can tighten or loosen the
//! tolerances without touching shared state.

use serde::{Deserialize, Serialize};

/// Magic number for approximating a circular quarter arc with one cubic
/// Bezier segment.
pub const KAPPA: f64 = 0.552_284_749_830_793_6;

/// Smallest accepted rectangle dimension and rounding factor margin.
pub const EPSILON: f64 = 0.000_001;

/// Half width of the fallback rectangle used when both dimensions collapse.
pub const DEFAULT_HALF_WIDTH: f64 = 1.777_777_8;

/// Half height of the fallback rectangle used when both dimensions collapse.
pub const DEFAULT_HALF_HEIGHT: f64 = 1.0;

/// Constants threaded through every generation call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConstants {
    /// Degeneracy threshold for dimensions and rounding factors
    pub epsilon: f64,
    /// Bezier handle length per unit radius
    pub kappa: f64,
    /// Half extents `(x, y)` of the fallback rectangle (16:9)
    pub default_half_extents: (f64, f64),
    /// Fraction of the half short side used as topological inset for sharp
    /// mesh corners
    pub sharp_mesh_inset: f64,
}

impl Default for GeometryConstants {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            kappa: KAPPA,
            default_half_extents: (DEFAULT_HALF_WIDTH, DEFAULT_HALF_HEIGHT),
            sharp_mesh_inset: 0.5,
        }
    }
}

impl GeometryConstants {
    /// Create the standard constant set
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound for a rounding factor, `1 - epsilon`
    pub fn max_factor(&self) -> f64 {
        1.0 - self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let c = GeometryConstants::default();
        assert_eq!(c.epsilon, 1e-6);
        assert!((c.kappa - 4.0 * (std::f64::consts::SQRT_2 - 1.0) / 3.0).abs() < 1e-15);
        assert_eq!(c.default_half_extents, (1.7777778, 1.0));
        assert_eq!(c.max_factor(), 1.0 - 1e-6);
    }
}
