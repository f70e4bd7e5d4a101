use knoll_geom::{Blend, Vec2};
use rand::Rng;

/// Tileable value noise: a square lattice of random scalars in [0,1),
/// sampled with smoothstep interpolation.
///
/// The field repeats exactly every `resolution` units on both axes.
#[derive(Clone, Debug)]
pub struct LatticeNoise {
    resolution: usize,
    values: Vec<f32>,
}

impl LatticeNoise {
    /// Fills a `resolution x resolution` lattice from `rng`.
    ///
    /// Panics if `resolution` is zero.
    pub fn new<R: Rng>(resolution: usize, rng: &mut R) -> Self {
        assert!(resolution > 0, "lattice resolution must be non-zero");
        let mut values = vec![0.0; resolution * resolution];
        for x in 0..resolution {
            for y in 0..resolution {
                values[x + resolution * y] = rng.gen_range(0.0..1.0);
            }
        }
        Self { resolution, values }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Raw lattice value at integer coordinates, wrapped into range.
    #[inline]
    pub fn value(&self, ix: i64, iy: i64) -> f32 {
        let r = self.resolution as i64;
        let x = ix.rem_euclid(r) as usize;
        let y = iy.rem_euclid(r) as usize;
        self.values[x + self.resolution * y]
    }

    /// Smoothly interpolated value at `p`. Any finite coordinate is accepted;
    /// negative coordinates wrap with floor semantics.
    pub fn sample(&self, p: Vec2) -> f32 {
        let cell = p.floor();
        let frac = p - cell;
        // Wrap while still a float: `cell` is integral so the remainder is
        // exact, and huge coordinates never saturate the integer cast.
        let r = self.resolution as f32;
        let ix = cell.x.rem_euclid(r) as i64;
        let iy = cell.y.rem_euclid(r) as i64;

        let n00 = self.value(ix, iy);
        let n01 = self.value(ix, iy + 1);
        let n10 = self.value(ix + 1, iy);
        let n11 = self.value(ix + 1, iy + 1);

        let i0 = f32::blend(frac.y, n00, n01);
        let i1 = f32::blend(frac.y, n10, n11);
        f32::blend(frac.x, i0, i1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fill_order_is_x_major() {
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let n = LatticeNoise::new(3, &mut a);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        let first: f32 = b.gen_range(0.0..1.0);
        let second: f32 = b.gen_range(0.0..1.0);
        assert_eq!(n.value(0, 0), first);
        assert_eq!(n.value(0, 1), second);
    }

    #[test]
    fn wraps_negative_indices() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let n = LatticeNoise::new(4, &mut rng);
        assert_eq!(n.value(-1, 0), n.value(3, 0));
        assert_eq!(n.value(2, -5), n.value(2, 3));
        assert_eq!(n.value(9, 4), n.value(1, 0));
    }

    #[test]
    fn negative_fraction_uses_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let n = LatticeNoise::new(8, &mut rng);
        // -0.25 lies in cell -1 (wrapped to 7) at fraction 0.75.
        let direct = n.sample(Vec2::new(-0.25, 0.0));
        let shifted = n.sample(Vec2::new(7.75, 0.0));
        assert_eq!(direct, shifted);
    }

    #[test]
    fn huge_coordinates_wrap_without_overflow() {
        let mut rng = ChaCha8Rng::seed_from_u64(16);
        let n = LatticeNoise::new(16, &mut rng);
        // Both are multiples of 16 as f32, so they land on lattice point (0, 0).
        assert_eq!(n.sample(Vec2::new(1e19, 0.0)), n.value(0, 0));
        assert_eq!(n.sample(Vec2::new(0.0, 1e19)), n.value(0, 0));
        assert_eq!(n.sample(Vec2::new(f32::MAX, f32::MAX)), n.value(0, 0));
        assert_eq!(n.sample(Vec2::new(-f32::MAX, 0.0)), n.value(0, 0));
    }

    #[test]
    #[should_panic]
    fn zero_resolution_panics() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let _ = LatticeNoise::new(0, &mut rng);
    }
}
