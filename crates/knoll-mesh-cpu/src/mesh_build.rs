use knoll_geom::{Aabb, Rgb, Vec3};

/// One triangle corner as handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Rgb,
    pub normal: Vec3,
}

/// Unindexed triangle list: every three consecutive vertices form a triangle.
#[derive(Default, Clone, Debug)]
pub struct TerrainMesh {
    vertices: Vec<Vertex>,
}

impl TerrainMesh {
    pub fn with_capacity(n_vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(n_vertices),
        }
    }

    /// Appends a triangle whose corners all share `normal`.
    #[inline]
    pub(crate) fn push_triangle(&mut self, corners: [(Vec3, Rgb); 3], normal: Vec3) {
        for (position, color) in corners {
            self.vertices.push(Vertex {
                position,
                color,
                normal,
            });
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = &[Vertex]> {
        self.vertices.chunks_exact(3)
    }

    /// Bounding box of all positions, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        let (first, rest) = self.vertices.split_first()?;
        let mut bb = Aabb::from_point(first.position);
        for v in rest {
            bb.include(v.position);
        }
        Some(bb)
    }

    /// Hands the vertex list over to the consumer.
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    /// Flattens into separate attribute arrays ready for a GPU upload.
    pub fn into_buffers(self) -> MeshBuffers {
        let mut out = MeshBuffers::default();
        out.reserve_vertices(self.vertices.len());
        for v in &self.vertices {
            out.pos.extend_from_slice(&v.position.to_array());
            out.norm.extend_from_slice(&v.normal.to_array());
            out.col.extend_from_slice(&v.color.to_rgba8());
        }
        out
    }
}

/// Flat vertex attribute arrays: xyz positions, xyz normals, RGBA8 colors.
#[derive(Default, Clone)]
pub struct MeshBuffers {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub col: Vec<u8>,
}

impl MeshBuffers {
    #[inline]
    pub fn reserve_vertices(&mut self, n: usize) {
        self.pos.reserve(n * 3);
        self.norm.reserve(n * 3);
        self.col.reserve(n * 4);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    /// World-space positions, three floats per vertex.
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }

    /// Shading normals, three floats per vertex, as produced by the mesher.
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }

    /// Saturated RGBA8 colors, four bytes per vertex.
    pub fn colors(&self) -> &[u8] {
        &self.col
    }
}
