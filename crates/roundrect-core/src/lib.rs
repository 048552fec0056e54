//! # Roundrect Core
//!
//! Core types, constants, and error handling shared by the roundrect crates.
//! Provides the point types used by every generated array, the explicit
//! numeric constants the engine is parameterised with, and the error
//! hierarchy surfaced to callers.

pub mod constants;
pub mod error;
pub mod point;

pub use constants::GeometryConstants;
pub use error::{Error, ExportError, GeometryError, Result};
pub use point::{Point2, Point3};
