use super::GeometrySink;
use crate::generator::{CurveGeometry, Geometry, MeshGeometry};
use roundrect_core::ExportError;
use serde::Serialize;
use std::io::Write;

/// Dumps generated geometry as JSON, tagged with its kind
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn dump<T: Serialize>(&mut self, value: &T) -> Result<(), ExportError> {
        let mut doc = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        doc.push('\n');
        self.writer.write_all(doc.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> GeometrySink for JsonSink<W> {
    fn name(&self) -> &'static str {
        "json"
    }

    fn realize_curve(&mut self, curve: &CurveGeometry) -> Result<(), ExportError> {
        self.dump(&Geometry::Curve(curve.clone()))
    }

    fn realize_mesh(&mut self, mesh: &MeshGeometry) -> Result<(), ExportError> {
        self.dump(&Geometry::Mesh(mesh.clone()))
    }

    fn realize(&mut self, geometry: &Geometry) -> Result<(), ExportError> {
        self.dump(geometry)
    }
}
