//! # Roundrect
//!
//! Parametric rounded rectangle generator. Given two opposite corner points,
//! per-corner rounding factors and resolutions it produces either:
//! - a closed cubic Bezier outline with four, five, six, seven or eight knots
//! - a planar mesh with UVs in n-gon, quad or triangle topology
//!
//! ## Architecture
//!
//! The workspace is split into three library crates and a binary:
//!
//! 1. **roundrect-core** - Points, numeric constants, error types
//! 2. **roundrect-geometry** - Normalization, insets, curve and mesh
//!    generation, reference sinks (OBJ, SVG, JSON)
//! 3. **roundrect-settings** - Persistent defaults in TOML or JSON
//! 4. **roundrect** - Command line front end that ties them together

pub use roundrect_core::{Error, ExportError, GeometryConstants, GeometryError, Point2, Point3};

pub use roundrect_geometry::{
    generate_curve, generate_mesh, CornerPolicy, CurveGeometry, CurveRequest, Extrusion,
    FillMode, Geometry, GeometrySink, HandleType, JsonSink, MeshGeometry, MeshRequest, ObjSink,
    OutputFormat, PolygonMode, Rectangle, SvgSink, UvProfile,
};

pub use roundrect_settings::{Config, ConfigFormat, OutputSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so generated documents can go to stdout
/// - RUST_LOG environment variable support, falling back to `default_level`
/// - Optional JSON lines for machine consumption
pub fn init_logging(default_level: tracing::Level, format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string().to_lowercase()));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Text => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);
            registry.with(fmt_layer).try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_current_span(false);
            registry.with(fmt_layer).try_init()?;
        }
    }

    Ok(())
}

/// Default log level for a `-v` count
pub fn level_for_verbosity(verbose: u8, quiet: bool) -> tracing::Level {
    if quiet {
        return tracing::Level::ERROR;
    }
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}
