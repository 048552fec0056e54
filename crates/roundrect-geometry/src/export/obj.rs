use super::{fmt_coord, GeometrySink};
use crate::generator::{CurveGeometry, MeshGeometry};
use roundrect_core::ExportError;
use std::io::Write;

/// Writes Wavefront OBJ.
///
/// Meshes become `v`/`vt`/`vn` records and `f v/vt/vn` faces. Curves are
/// flattened at their resolution and written as one closed `l` polyline.
pub struct ObjSink<W: Write> {
    writer: W,
    object_name: String,
}

impl<W: Write> ObjSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            object_name: "Rectangle".to_string(),
        }
    }

    pub fn with_object_name(mut self, name: impl Into<String>) -> Self {
        self.object_name = name.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, doc: String) -> Result<(), ExportError> {
        self.writer.write_all(doc.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> GeometrySink for ObjSink<W> {
    fn name(&self) -> &'static str {
        "obj"
    }

    fn realize_curve(&mut self, curve: &CurveGeometry) -> Result<(), ExportError> {
        let points = curve.profile.flatten(curve.resolution);

        let mut doc = String::new();
        doc.push_str("# roundrect curve\n");
        doc.push_str(&format!("o {}\n", self.object_name));
        for p in &points {
            doc.push_str(&format!("v {} {} 0\n", fmt_coord(p.x), fmt_coord(p.y)));
        }
        if !points.is_empty() {
            doc.push('l');
            for i in 1..=points.len() {
                doc.push_str(&format!(" {i}"));
            }
            if curve.profile.closed {
                doc.push_str(" 1");
            }
            doc.push('\n');
        }
        self.write(doc)
    }

    fn realize_mesh(&mut self, geometry: &MeshGeometry) -> Result<(), ExportError> {
        let mesh = &geometry.mesh;

        let mut doc = String::new();
        doc.push_str("# roundrect mesh\n");
        if geometry.extrusion.is_active() {
            doc.push_str(&format!(
                "# solidify thickness {} offset {}\n",
                geometry.extrusion.thickness, geometry.extrusion.offset
            ));
        }
        doc.push_str(&format!("o {}\n", self.object_name));
        for p in &mesh.positions {
            doc.push_str(&format!(
                "v {} {} {}\n",
                fmt_coord(p.x),
                fmt_coord(p.y),
                fmt_coord(p.z)
            ));
        }
        for uv in &mesh.uvs {
            doc.push_str(&format!("vt {} {}\n", fmt_coord(uv.x), fmt_coord(uv.y)));
        }
        for n in &mesh.normals {
            doc.push_str(&format!(
                "vn {} {} {}\n",
                fmt_coord(n.x),
                fmt_coord(n.y),
                fmt_coord(n.z)
            ));
        }
        doc.push_str(if geometry.smooth_shading {
            "s 1\n"
        } else {
            "s off\n"
        });

        let rings = mesh
            .vertex_indices
            .iter()
            .zip(&mesh.uv_indices)
            .zip(&mesh.normal_indices);
        for ((verts, uvs), normals) in rings {
            doc.push('f');
            for ((v, t), n) in verts.iter().zip(uvs.iter()).zip(normals.iter()) {
                doc.push_str(&format!(" {}/{}/{}", v + 1, t + 1, n + 1));
            }
            doc.push('\n');
        }
        self.write(doc)
    }
}
