#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::config::{DEFAULT_PALETTE, DEFAULT_PARTICLE_COUNT};

fn palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| (*c).to_owned()).collect()
}

#[test]
fn creates_exactly_the_configured_count() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(generate(&mut rng, DEFAULT_PARTICLE_COUNT, &palette()).len(), 30);
    assert_eq!(generate(&mut rng, 0, &palette()).len(), 0);
}

#[test]
fn parameters_stay_in_range() {
    let palette = palette();
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        for p in generate(&mut rng, 30, &palette) {
            assert!((0.0..100.0).contains(&p.left_pct), "left {}", p.left_pct);
            assert!((6.0..14.0).contains(&p.duration_s), "duration {}", p.duration_s);
            assert!((0.0..10.0).contains(&p.delay_s), "delay {}", p.delay_s);
            assert!((1.0..4.0).contains(&p.size_px), "size {}", p.size_px);
            assert!(palette.contains(&p.color));
        }
    }
}

#[test]
fn particles_are_not_all_alike() {
    let mut rng = SmallRng::seed_from_u64(42);
    let particles = generate(&mut rng, 30, &palette());
    let first = &particles[0];
    assert!(particles.iter().any(|p| p.left_pct != first.left_pct));
    assert!(particles.iter().any(|p| p.size_px != first.size_px));
}

#[test]
fn same_seed_same_particles() {
    let a = generate(&mut SmallRng::seed_from_u64(9), 5, &palette());
    let b = generate(&mut SmallRng::seed_from_u64(9), 5, &palette());
    assert_eq!(a, b);
}

#[test]
fn empty_palette_yields_nothing() {
    let mut rng = SmallRng::seed_from_u64(3);
    assert!(generate(&mut rng, 30, &[]).is_empty());
}

#[test]
fn style_sets_square_size_and_units() {
    let p = Particle { left_pct: 12.5, duration_s: 7.25, delay_s: 0.5, size_px: 2.5, color: "#06b6d4".to_owned() };
    let style = p.style();
    assert_eq!(
        style,
        [
            ("left", "12.5%".to_owned()),
            ("animation-duration", "7.25s".to_owned()),
            ("animation-delay", "0.5s".to_owned()),
            ("width", "2.5px".to_owned()),
            ("height", "2.5px".to_owned()),
            ("background", "#06b6d4".to_owned()),
        ]
    );
}
