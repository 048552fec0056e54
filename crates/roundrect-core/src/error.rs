//! Error handling for roundrect
//!
//! Numeric input never produces an error: out-of-range values are clamped or
//! substituted by the engine. The error types here cover the remaining
//! failure classes:
//! - Geometry configuration errors (invalid enum values supplied as raw input)
//! - Export errors raised by geometry sinks
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error raised before generation starts
///
/// Produced when an option supplied as a raw integer or string does not name
/// a known variant. Callers should refuse to generate rather than guess.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Unknown polygon mode
    #[error("Invalid polygon mode: {value}")]
    InvalidPolygonMode {
        /// The rejected value.
        value: String,
    },

    /// Unknown UV profile
    #[error("Invalid UV profile: {value}")]
    InvalidUvProfile {
        /// The rejected value.
        value: String,
    },

    /// Unknown Bezier handle type
    #[error("Invalid handle type: {value}")]
    InvalidHandleType {
        /// The rejected value.
        value: String,
    },

    /// Unknown curve fill mode
    #[error("Invalid fill mode: {value}")]
    InvalidFillMode {
        /// The rejected value.
        value: String,
    },

    /// Unknown corner policy
    #[error("Invalid corner policy: {value}")]
    InvalidCornerPolicy {
        /// The rejected value.
        value: String,
    },

    /// Generated mesh failed an internal consistency check
    #[error("Inconsistent mesh: {reason}")]
    InconsistentMesh {
        /// What the check found.
        reason: String,
    },
}

/// Errors raised while a sink writes geometry out
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output format is not known
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// I/O error while writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Main error type for roundrect
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry configuration error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
