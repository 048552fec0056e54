//! # Roundrect Geometry
//!
//! Parametric rounded rectangle generator. Produces either a closed cubic
//! Bezier outline or a tessellated planar mesh with UVs and face topology,
//! ready to be realized by a [`GeometrySink`].
//!
//! ## Pipeline
//!
//! ```text
//! Rectangle (normalize corner points)
//!   └── CornerInsets (clamp rounding factors, edge insets)
//!         ├── Curve: build_curve_profile -> CurveProfile
//!         └── Mesh:  tessellate_boundary -> Boundary
//!                      └── assemble_topology -> MeshData
//! ```
//!
//! Every stage is a pure function of its input. Numeric input is clamped or
//! substituted, never rejected; the only errors are configuration errors
//! raised while parsing option values, and I/O errors inside sinks.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roundrect_geometry::{generate_mesh, MeshRequest, PolygonMode};
//! use roundrect_core::GeometryConstants;
//!
//! let request = MeshRequest {
//!     polygon_mode: PolygonMode::Triangle,
//!     ..MeshRequest::default()
//! };
//! let geometry = generate_mesh(&request, &GeometryConstants::default());
//! assert!(geometry.mesh.validate().is_ok());
//! ```

pub mod arc;
pub mod corner;
pub mod curve;
pub mod export;
pub mod generator;
pub mod inset;
pub mod mesh;
pub mod options;
pub mod rect;
pub mod request;
pub mod topology;

pub use arc::{tessellate_boundary, Boundary, CornerSpan, UvMapper};
pub use corner::Corner;
pub use curve::{build_curve_profile, CubicSegment, CurveKnot, CurveProfile};
pub use export::{GeometrySink, JsonSink, ObjSink, OutputFormat, SvgSink};
pub use generator::{generate_curve, generate_mesh, CurveGeometry, Geometry, MeshGeometry};
pub use inset::{CornerGeometry, CornerInsets, EdgeSpan, InsetCoordinates, Variant};
pub use mesh::{FaceListBuilder, FaceRing, MeshData, VertexArena, VertexId};
pub use options::{CornerPolicy, FillMode, HandleType, PolygonMode, UvProfile};
pub use rect::Rectangle;
pub use request::{CurveRequest, Extrusion, MeshRequest};
pub use topology::{assemble_topology, BodySplit, HubTopology, NgonTopology, TopologyStrategy};
