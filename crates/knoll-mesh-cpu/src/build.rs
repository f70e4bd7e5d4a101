use knoll_geom::{Blend, Rgb, Vec3};
use knoll_world::{HeightField, NormalMode, SurfaceParams};

use crate::mesh_build::TerrainMesh;

/// Maps grid coordinates and elevations into world space and colors.
struct SurfaceMapper {
    size: f32,
    horiz_scale: f32,
    vert_scale: f32,
    low: Rgb,
    high: Rgb,
}

impl SurfaceMapper {
    fn new(size: usize, params: &SurfaceParams) -> Self {
        Self {
            size: size as f32,
            horiz_scale: params.horiz_scale,
            vert_scale: params.vert_scale,
            low: Rgb::from_u8(params.low_color),
            high: Rgb::from_u8(params.high_color),
        }
    }

    #[inline]
    fn position(&self, gx: usize, gy: usize, h: f32) -> Vec3 {
        Vec3::new(
            (gx as f32 / self.size - 0.5) * self.horiz_scale,
            h * self.vert_scale,
            (gy as f32 / self.size - 0.5) * self.horiz_scale,
        )
    }

    /// Elevation is the blend factor as-is; out-of-range heights extrapolate.
    #[inline]
    fn color(&self, h: f32) -> Rgb {
        Rgb::blend(h, self.low, self.high)
    }
}

/// Shading vectors for triangles A and B of a cell.
///
/// Each is `(1, d, 1)` with `d` the height difference across the opposite
/// diagonal. Not normalized and not perpendicular to the surface.
#[inline]
pub fn diagonal_normals(h00: f32, h01: f32, h10: f32, h11: f32) -> (Vec3, Vec3) {
    let diag1 = h10 - h01;
    let diag2 = h00 - h11;
    (Vec3::new(1.0, diag2, 1.0), Vec3::new(1.0, diag1, 1.0))
}

/// Unit normal of the triangle `(a, b, c)` facing +Y for a terrain surface.
#[inline]
fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    let n = (c - a).cross(b - a).normalized();
    if n.y < 0.0 { n * -1.0 } else { n }
}

/// Triangulates the heightfield into an unindexed triangle list.
///
/// Every cell `(x, y)` with `x, y < size - 1` yields six vertices: triangle
/// A = (00, 10, 01) then triangle B = (10, 01, 11), split along the 10-01
/// diagonal. Cells are visited with `x` in the outer loop.
pub fn build_terrain_mesh(hf: &HeightField, params: &SurfaceParams) -> TerrainMesh {
    let size = hf.size();
    let cells = size.saturating_sub(1);
    let mut mesh = TerrainMesh::with_capacity(6 * cells * cells);
    let map = SurfaceMapper::new(size, params);

    for x in 0..cells {
        for y in 0..cells {
            let h00 = hf.height(x, y);
            let h01 = hf.height(x, y + 1);
            let h10 = hf.height(x + 1, y);
            let h11 = hf.height(x + 1, y + 1);

            let p00 = map.position(x, y, h00);
            let p01 = map.position(x, y + 1, h01);
            let p10 = map.position(x + 1, y, h10);
            let p11 = map.position(x + 1, y + 1, h11);

            let c00 = (p00, map.color(h00));
            let c01 = (p01, map.color(h01));
            let c10 = (p10, map.color(h10));
            let c11 = (p11, map.color(h11));

            let (na, nb) = match params.normals {
                NormalMode::Diagonal => diagonal_normals(h00, h01, h10, h11),
                NormalMode::Geometric => (
                    face_normal(p00, p10, p01),
                    face_normal(p11, p10, p01),
                ),
            };

            mesh.push_triangle([c00, c10, c01], na);
            mesh.push_triangle([c10, c01, c11], nb);
        }
    }

    log::debug!(
        "terrain mesh: {} cells, {} vertices ({:?} normals)",
        cells * cells,
        mesh.len(),
        params.normals
    );
    mesh
}
