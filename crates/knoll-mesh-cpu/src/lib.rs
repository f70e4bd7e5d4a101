//! CPU terrain meshing: heightfield to unindexed triangle list.
#![forbid(unsafe_code)]

mod build;
mod mesh_build;

pub use build::{build_terrain_mesh, diagonal_normals};
pub use mesh_build::{MeshBuffers, TerrainMesh, Vertex};
