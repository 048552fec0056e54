//! Mesh buffers.
//!
//! Vertices are appended to a [`VertexArena`] which hands out stable
//! [`VertexId`]s, so topology code never computes offsets into the vertex
//! list by hand. Faces are collected by a [`FaceListBuilder`] that keeps the
//! vertex, UV and normal rings in lockstep.

use roundrect_core::{GeometryError, Point2, Point3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index ring of one face; quads and triangles stay inline
pub type FaceRing = SmallVec<[usize; 4]>;

/// Stable handle to a vertex in a [`VertexArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Append-only vertex storage with parallel UVs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexArena {
    positions: Vec<Point3>,
    uvs: Vec<Point2>,
}

impl VertexArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            uvs: Vec::with_capacity(capacity),
        }
    }

    /// Append a vertex on the `z = 0` plane
    pub fn push(&mut self, position: Point2, uv: Point2) -> VertexId {
        let id = VertexId(self.positions.len());
        self.positions.push(position.to_3d());
        self.uvs.push(uv);
        id
    }

    pub fn position(&self, id: VertexId) -> Option<Point3> {
        self.positions.get(id.0).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    pub fn uvs(&self) -> &[Point2] {
        &self.uvs
    }

    fn into_parts(self) -> (Vec<Point3>, Vec<Point2>) {
        (self.positions, self.uvs)
    }
}

/// Collects faces as parallel vertex/UV/normal index rings.
///
/// Every vertex owns the UV with the same index, and the whole surface shares
/// normal `0`, so the UV ring is a copy of the vertex ring and the normal ring
/// is all zeros.
#[derive(Debug, Clone, Default)]
pub struct FaceListBuilder {
    vertex_indices: Vec<FaceRing>,
    uv_indices: Vec<FaceRing>,
    normal_indices: Vec<FaceRing>,
}

impl FaceListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(faces: usize) -> Self {
        Self {
            vertex_indices: Vec::with_capacity(faces),
            uv_indices: Vec::with_capacity(faces),
            normal_indices: Vec::with_capacity(faces),
        }
    }

    /// Append a face with any number of vertices
    pub fn push_ring<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = VertexId>,
    {
        let ring: FaceRing = ids.into_iter().map(VertexId::index).collect();
        let normals: FaceRing = ring.iter().map(|_| 0).collect();
        self.uv_indices.push(ring.clone());
        self.normal_indices.push(normals);
        self.vertex_indices.push(ring);
    }

    pub fn push_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) {
        self.push_ring([a, b, c]);
    }

    pub fn push_quad(&mut self, a: VertexId, b: VertexId, c: VertexId, d: VertexId) {
        self.push_ring([a, b, c, d]);
    }

    /// Combine the faces with the arena that owns their vertices
    pub fn finish(self, arena: VertexArena) -> MeshData {
        let (positions, uvs) = arena.into_parts();
        MeshData {
            positions,
            uvs,
            normals: vec![Point3::new(0.0, 0.0, 1.0)],
            vertex_indices: self.vertex_indices,
            uv_indices: self.uv_indices,
            normal_indices: self.normal_indices,
        }
    }
}

/// Finished planar mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub positions: Vec<Point3>,
    pub uvs: Vec<Point2>,
    /// The single shared surface normal `(0, 0, 1)`
    pub normals: Vec<Point3>,
    pub vertex_indices: Vec<FaceRing>,
    pub uv_indices: Vec<FaceRing>,
    pub normal_indices: Vec<FaceRing>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.vertex_indices.len()
    }

    /// Total number of face corners over all faces
    pub fn loop_count(&self) -> usize {
        self.vertex_indices.iter().map(|ring| ring.len()).sum()
    }

    /// Shoelace area of face `index` in the xy plane; positive when the face
    /// winds counter-clockwise. `None` for an out-of-range face.
    pub fn face_signed_area(&self, index: usize) -> Option<f64> {
        let ring = self.vertex_indices.get(index)?;
        // Relative to the first vertex, so small faces far from the origin
        // keep their precision
        let origin = self.positions.get(*ring.first()?)?.xy();
        let mut twice_area = 0.0;
        for (i, &a) in ring.iter().enumerate() {
            let b = ring[(i + 1) % ring.len()];
            let p = self.positions.get(a)?.xy() - origin;
            let q = self.positions.get(b)?.xy() - origin;
            twice_area += p.x * q.y - q.x * p.y;
        }
        Some(twice_area * 0.5)
    }

    /// Check index bounds and ring shapes
    pub fn validate(&self) -> Result<(), GeometryError> {
        let inconsistent = |reason: String| GeometryError::InconsistentMesh { reason };

        if self.uvs.len() != self.positions.len() {
            return Err(inconsistent(format!(
                "{} UVs for {} vertices",
                self.uvs.len(),
                self.positions.len()
            )));
        }
        if self.uv_indices.len() != self.vertex_indices.len()
            || self.normal_indices.len() != self.vertex_indices.len()
        {
            return Err(inconsistent("index lists differ in face count".to_string()));
        }

        for (face, ring) in self.vertex_indices.iter().enumerate() {
            if ring.len() < 3 {
                return Err(inconsistent(format!(
                    "face {face} has only {} vertices",
                    ring.len()
                )));
            }
            if self.uv_indices[face].len() != ring.len()
                || self.normal_indices[face].len() != ring.len()
            {
                return Err(inconsistent(format!("face {face} has mismatched rings")));
            }
            if let Some(&bad) = ring.iter().find(|&&i| i >= self.positions.len()) {
                return Err(inconsistent(format!(
                    "face {face} references vertex {bad}"
                )));
            }
            if let Some(&bad) = self.uv_indices[face]
                .iter()
                .find(|&&i| i >= self.uvs.len())
            {
                return Err(inconsistent(format!("face {face} references UV {bad}")));
            }
            if let Some(&bad) = self.normal_indices[face]
                .iter()
                .find(|&&i| i >= self.normals.len())
            {
                return Err(inconsistent(format!(
                    "face {face} references normal {bad}"
                )));
            }
        }
        Ok(())
    }
}
