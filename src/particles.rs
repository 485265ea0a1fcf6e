//! Decorative background particles, created once at startup.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::Rng;
#[cfg(feature = "hydrate")]
use rand::SeedableRng;
#[cfg(feature = "hydrate")]
use rand::rngs::SmallRng;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;
use crate::consts::{PARTICLE_DELAY_S, PARTICLE_DURATION_S, PARTICLE_LEFT_PCT, PARTICLE_SIZE_PX};
#[cfg(feature = "hydrate")]
use crate::consts::{PARTICLE_CLASS, PARTICLES_ID};
#[cfg(feature = "hydrate")]
use crate::dom;
#[cfg(feature = "hydrate")]
use crate::error::MountError;

/// Randomized look of one particle. Never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub size_px: f64,
    pub color: String,
}

impl Particle {
    /// Draw every parameter independently and uniformly.
    pub fn random<R: Rng>(rng: &mut R, palette: &[String]) -> Option<Self> {
        if palette.is_empty() {
            return None;
        }
        let left_pct = rng.random_range(PARTICLE_LEFT_PCT.0..PARTICLE_LEFT_PCT.1);
        let duration_s = rng.random_range(PARTICLE_DURATION_S.0..PARTICLE_DURATION_S.1);
        let delay_s = rng.random_range(PARTICLE_DELAY_S.0..PARTICLE_DELAY_S.1);
        let size_px = rng.random_range(PARTICLE_SIZE_PX.0..PARTICLE_SIZE_PX.1);
        let color = palette[rng.random_range(0..palette.len())].clone();
        Some(Self { left_pct, duration_s, delay_s, size_px, color })
    }

    /// Inline style declarations, in the order they are applied.
    #[must_use]
    pub fn style(&self) -> [(&'static str, String); 6] {
        let size = format!("{}px", self.size_px);
        [
            ("left", format!("{}%", self.left_pct)),
            ("animation-duration", format!("{}s", self.duration_s)),
            ("animation-delay", format!("{}s", self.delay_s)),
            ("width", size.clone()),
            ("height", size),
            ("background", self.color.clone()),
        ]
    }
}

/// `count` particles. An empty palette yields none.
pub fn generate<R: Rng>(rng: &mut R, count: usize, palette: &[String]) -> Vec<Particle> {
    (0..count).map_while(|_| Particle::random(rng, palette)).collect()
}

/// Fill `#particles`.
#[cfg(feature = "hydrate")]
pub fn mount(config: &SiteConfig) -> Result<(), MountError> {
    let doc = dom::document()?;
    let container = dom::by_id(&doc, PARTICLES_ID)?;
    let seed = js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits();
    let mut rng = SmallRng::seed_from_u64(seed);

    for particle in generate(&mut rng, config.particle_count, &config.particle_palette) {
        let el = doc.create_element("div")?;
        el.class_list().add_1(PARTICLE_CLASS)?;
        for (property, value) in particle.style() {
            dom::set_style(&el, property, &value)?;
        }
        container.append_child(&el)?;
    }
    log::debug!("created {} particles", config.particle_count);
    Ok(())
}
