use knoll_geom::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::lattice::LatticeNoise;
use crate::worldgen::WorldGenParams;

/// A noise layer together with the divisor applied to world coordinates
/// and its contribution to the sum.
#[derive(Clone, Debug)]
pub struct Octave {
    pub noise: LatticeNoise,
    pub scale: f32,
    pub weight: f32,
}

/// Dense `size x size` elevation buffer built from summed octaves.
///
/// Elevations are not clamped; values outside [0,1] are normal.
#[derive(Clone, Debug)]
pub struct HeightField {
    size: usize,
    octaves: Vec<Octave>,
    heights: Vec<f32>,
}

impl HeightField {
    /// Seeds a ChaCha8 stream from `params.seed` and generates.
    pub fn from_seed(params: &WorldGenParams) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        Self::generate(params, &mut rng)
    }

    /// Builds every octave lattice from `rng` (in octave order) and fills the
    /// whole buffer in one pass.
    pub fn generate<R: Rng>(params: &WorldGenParams, rng: &mut R) -> Self {
        let octaves = params
            .octaves
            .iter()
            .map(|o| Octave {
                noise: LatticeNoise::new(o.resolution, &mut *rng),
                scale: o.scale,
                weight: o.weight,
            })
            .collect();
        Self::from_octaves(params.world_size, octaves)
    }

    pub fn from_octaves(size: usize, octaves: Vec<Octave>) -> Self {
        let mut hf = Self {
            size,
            octaves,
            heights: Vec::new(),
        };
        let mut heights = vec![0.0; size * size];
        for x in 0..size {
            for y in 0..size {
                heights[x + size * y] = hf.compose(x as f32, y as f32);
            }
        }
        hf.heights = heights;
        log::debug!(
            "heightfield {}x{} built from {} octave(s)",
            size,
            size,
            hf.octaves.len()
        );
        hf
    }

    /// Wraps precomputed elevations (row `y` starts at `y * size`).
    ///
    /// Panics if `heights.len() != size * size`.
    pub fn from_heights(size: usize, heights: Vec<f32>) -> Self {
        assert_eq!(heights.len(), size * size, "height buffer must be size^2");
        Self {
            size,
            octaves: Vec::new(),
            heights,
        }
    }

    /// Weighted octave sum at an arbitrary point in world units.
    pub fn compose(&self, x: f32, y: f32) -> f32 {
        let p = Vec2::new(x, y);
        let mut value = 0.0;
        for o in &self.octaves {
            value += o.noise.sample(p / o.scale) * o.weight;
        }
        value
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Stored elevation at `(x, y)`. Both must be below `size()`.
    #[inline]
    pub fn height(&self, x: usize, y: usize) -> f32 {
        debug_assert!(x < self.size && y < self.size);
        self.heights[x + self.size * y]
    }

    #[inline]
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn octaves(&self) -> &[Octave] {
        &self.octaves
    }

    /// Lowest and highest stored elevation, `None` for a size-0 field.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let (&first, rest) = self.heights.split_first()?;
        Some(
            rest.iter()
                .fold((first, first), |(lo, hi), &h| (lo.min(h), hi.max(h))),
        )
    }
}
