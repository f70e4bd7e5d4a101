use knoll_geom::Vec2;
use knoll_world::LatticeNoise;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn lattice(seed: u64, resolution: usize) -> LatticeNoise {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    LatticeNoise::new(resolution, &mut rng)
}

// Multiples of 1/256 within +-256 stay exactly representable after shifting
// by a lattice period, so wraparound can be checked bit-for-bit.
fn dyadic_coord() -> impl Strategy<Value = f32> {
    (-65_536i32..65_536).prop_map(|n| n as f32 / 256.0)
}

fn dyadic_point() -> impl Strategy<Value = Vec2> {
    (dyadic_coord(), dyadic_coord()).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    // sample(p) == sample(p + (R,0)) == sample(p + (0,R)), exactly
    #[test]
    fn sample_is_periodic(seed in any::<u64>(), res in 1usize..=128, p in dyadic_point()) {
        let n = lattice(seed, res);
        let r = res as f32;
        let base = n.sample(p);
        prop_assert_eq!(base, n.sample(p + Vec2::new(r, 0.0)));
        prop_assert_eq!(base, n.sample(p + Vec2::new(0.0, r)));
    }

    // Shifting into negative coordinates wraps the same way
    #[test]
    fn sample_wraps_across_negative_domain(seed in any::<u64>(), res in 1usize..=32, p in dyadic_point()) {
        let n = lattice(seed, res);
        let r = res as f32;
        prop_assert_eq!(n.sample(p), n.sample(p - Vec2::new(r, r)));
        prop_assert_eq!(n.sample(p), n.sample(p - Vec2::new(2.0 * r, 0.0)));
    }

    // Integer coordinates hit lattice values directly
    #[test]
    fn integer_points_return_lattice_values(
        seed in any::<u64>(),
        res in 1usize..=32,
        ix in -200i64..200,
        iy in -200i64..200,
    ) {
        let n = lattice(seed, res);
        prop_assert_eq!(n.sample(Vec2::new(ix as f32, iy as f32)), n.value(ix, iy));
    }

    // Lattice values are in [0,1) and interpolation never leaves the lattice range
    #[test]
    fn samples_stay_within_lattice_range(seed in any::<u64>(), res in 1usize..=16, p in dyadic_point()) {
        let n = lattice(seed, res);
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for x in 0..res as i64 {
            for y in 0..res as i64 {
                let v = n.value(x, y);
                prop_assert!((0.0..1.0).contains(&v));
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        let s = n.sample(p);
        prop_assert!(s >= lo - 1e-6 && s <= hi + 1e-6);
    }

    // Same seed, same lattice
    #[test]
    fn lattice_is_reproducible(seed in any::<u64>(), res in 1usize..=16, p in dyadic_point()) {
        prop_assert_eq!(lattice(seed, res).sample(p), lattice(seed, res).sample(p));
    }
}

#[test]
fn resolution_one_is_constant() {
    let n = lattice(99, 1);
    let v = n.value(0, 0);
    for p in [Vec2::new(0.3, 0.9), Vec2::new(-5.5, 12.25), Vec2::new(1e3, -1e3)] {
        assert_eq!(n.sample(p), v);
    }
}

#[test]
fn interior_point_blends_corners() {
    let n = lattice(3, 4);
    let (n00, n01, n10, n11) = (n.value(1, 2), n.value(1, 3), n.value(2, 2), n.value(2, 3));
    // At the cell center the kernel weight is exactly 0.5 on both axes.
    let i0 = n00 + (n01 - n00) * 0.5;
    let i1 = n10 + (n11 - n10) * 0.5;
    let expect = i0 + (i1 - i0) * 0.5;
    assert_eq!(n.sample(Vec2::new(1.5, 2.5)), expect);
}
