use super::{fmt_coord, GeometrySink};
use crate::generator::{CurveGeometry, MeshGeometry};
use crate::rect::Rectangle;
use roundrect_core::{ExportError, Point2};
use std::io::Write;

const FILL: &str = "#d0d0d0";
const STROKE: &str = "#202020";

/// Writes SVG documents.
///
/// Geometry keeps its y-up coordinates inside a flipping group, so the
/// document viewBox is the bounding box mirrored about the x axis.
pub struct SvgSink<W: Write> {
    writer: W,
    /// Margin around the bounding box, as a fraction of the short side
    margin: f64,
}

impl<W: Write> SvgSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            margin: 0.05,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn header(&self, rect: &Rectangle) -> String {
        let pad = self.margin * rect.width().min(rect.height());
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
            fmt_coord(rect.left - pad),
            fmt_coord(-rect.top - pad),
            fmt_coord(rect.width() + 2.0 * pad),
            fmt_coord(rect.height() + 2.0 * pad)
        )
    }

    fn stroke_width(rect: &Rectangle) -> String {
        fmt_coord(rect.width().min(rect.height()) * 0.005)
    }

    fn write(&mut self, doc: String) -> Result<(), ExportError> {
        self.writer.write_all(doc.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

fn xy(p: Point2) -> String {
    format!("{} {}", fmt_coord(p.x), fmt_coord(p.y))
}

impl<W: Write> GeometrySink for SvgSink<W> {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn realize_curve(&mut self, curve: &CurveGeometry) -> Result<(), ExportError> {
        let mut d = String::new();
        if let Some(first) = curve.profile.knots.first() {
            d.push_str(&format!("M {}", xy(first.position.xy())));
        }
        for segment in curve.profile.segments() {
            d.push_str(&format!(
                " C {} {} {}",
                xy(segment.p1),
                xy(segment.p2),
                xy(segment.p3)
            ));
        }
        if curve.profile.closed {
            d.push_str(" Z");
        }

        let fill = if curve.fill_mode.is_filled() { FILL } else { "none" };
        let mut doc = self.header(&curve.rect);
        doc.push_str("  <g transform=\"scale(1,-1)\">\n");
        doc.push_str(&format!(
            "    <path d=\"{d}\" fill=\"{fill}\" stroke=\"{STROKE}\" stroke-width=\"{}\"/>\n",
            Self::stroke_width(&curve.rect)
        ));
        doc.push_str("  </g>\n</svg>\n");
        self.write(doc)
    }

    fn realize_mesh(&mut self, geometry: &MeshGeometry) -> Result<(), ExportError> {
        let mesh = &geometry.mesh;
        let stroke_width = Self::stroke_width(&geometry.rect);

        let mut doc = self.header(&geometry.rect);
        doc.push_str("  <g transform=\"scale(1,-1)\">\n");
        for ring in &mesh.vertex_indices {
            let mut d = String::new();
            let points = ring.iter().filter_map(|&i| mesh.positions.get(i));
            for (k, p) in points.enumerate() {
                let cmd = if k == 0 { "M" } else { " L" };
                d.push_str(&format!("{cmd} {}", xy(p.xy())));
            }
            d.push_str(" Z");
            doc.push_str(&format!(
                "    <path d=\"{d}\" fill=\"{FILL}\" stroke=\"{STROKE}\" stroke-width=\"{stroke_width}\"/>\n"
            ));
        }
        doc.push_str("  </g>\n</svg>\n");
        self.write(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_curve, generate_mesh};
    use crate::options::{FillMode, PolygonMode};
    use crate::request::{CurveRequest, MeshRequest};
    use roundrect_core::GeometryConstants;

    fn render_curve(request: &CurveRequest) -> String {
        let geometry = generate_curve(request, &GeometryConstants::default());
        let mut sink = SvgSink::new(Vec::new()).with_margin(0.0);
        sink.realize_curve(&geometry).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_curve_path() {
        let request = CurveRequest {
            corner_a: Point2::new(-1.0, 1.0),
            corner_b: Point2::new(1.0, -1.0),
            rounding: [0.5; 4],
            ..CurveRequest::default()
        };
        let svg = render_curve(&request);
        assert!(svg.contains("viewBox=\"-1 -1 2 2\""));
        assert!(svg.contains("d=\"M -0.5 1 C "));
        assert_eq!(svg.matches(" C ").count(), 8);
        assert!(svg.contains(" Z\""));
        assert!(svg.contains("fill=\"#d0d0d0\""));
    }

    #[test]
    fn test_unfilled_curve() {
        let request = CurveRequest {
            fill_mode: FillMode::None,
            ..CurveRequest::default()
        };
        assert!(render_curve(&request).contains("fill=\"none\""));
    }

    #[test]
    fn test_mesh_path_per_face() {
        let request = MeshRequest {
            resolutions: [2; 4],
            polygon_mode: PolygonMode::Triangle,
            ..MeshRequest::default()
        };
        let geometry = generate_mesh(&request, &GeometryConstants::default());
        let mut sink = SvgSink::new(Vec::new());
        sink.realize_mesh(&geometry).unwrap();
        let svg = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(svg.matches("<path ").count(), geometry.mesh.face_count());
    }
}
