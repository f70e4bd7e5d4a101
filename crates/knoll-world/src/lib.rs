//! Terrain sampling: lattice value noise, octave heightfields, and worldgen parameters.
#![forbid(unsafe_code)]

pub mod heightfield;
pub mod lattice;
pub mod worldgen;

pub use heightfield::{HeightField, Octave};
pub use lattice::LatticeNoise;
pub use worldgen::{NormalMode, SurfaceParams, WorldGenParams, load_params_from_path, parse_params};
