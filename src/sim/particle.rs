//! Collision sparks
//!
//! Each collision spawns one group of particles. Particles fall with a
//! per-particle acceleration and die once they leave the screen; a group
//! is dropped as soon as its last particle is gone.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::geom::Rect;
use crate::consts::{PARTICLE_SIZE, PARTICLES_PER_BURST};
use crate::platform::{ImageHandle, Renderer};

/// Initial downward speed of every particle
const PARTICLE_START_YSPEED: i32 = 4;

#[derive(Debug, Clone)]
pub struct Particle {
    pub rect: Rect,
    pub vel: IVec2,
    /// Added to `vel.y` every tick
    pub accel: i32,
}

impl Particle {
    fn spawn(origin: IVec2, rng: &mut Pcg32) -> Self {
        let dir = if rng.random_bool(0.5) { 1 } else { -1 };
        Self {
            rect: Rect {
                pos: origin,
                size: IVec2::splat(PARTICLE_SIZE),
            },
            vel: IVec2::new(dir * rng.random_range(1..=6), PARTICLE_START_YSPEED),
            accel: rng.random_range(1..=4),
        }
    }

    fn update(&mut self) {
        self.rect.pos += self.vel;
        self.vel.y += self.accel;
    }

    fn on_screen(&self, bounds: &Rect) -> bool {
        self.rect.top() <= bounds.bottom()
            && self.rect.right() >= bounds.left()
            && self.rect.left() <= bounds.right()
    }
}

/// Particles from a single burst
#[derive(Debug, Clone, Default)]
pub struct ParticleGroup {
    particles: Vec<Particle>,
}

impl ParticleGroup {
    pub fn burst(origin: IVec2, rng: &mut Pcg32) -> Self {
        Self {
            particles: (0..PARTICLES_PER_BURST)
                .map(|_| Particle::spawn(origin, rng))
                .collect(),
        }
    }

    pub fn update(&mut self, bounds: &Rect) {
        for p in &mut self.particles {
            p.update();
        }
        self.particles.retain(|p| p.on_screen(bounds));
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

/// All live particle groups
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    groups: Vec<ParticleGroup>,
}

impl ParticleField {
    pub fn spawn(&mut self, origin: IVec2, rng: &mut Pcg32) {
        self.groups.push(ParticleGroup::burst(origin, rng));
    }

    /// Step every group and prune the drained ones
    pub fn update(&mut self, bounds: &Rect) {
        for group in &mut self.groups {
            group.update(bounds);
        }
        self.groups.retain(|g| !g.is_empty());
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn particle_count(&self) -> usize {
        self.groups.iter().map(ParticleGroup::len).sum()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn draw(&self, r: &mut dyn Renderer, sprite: Option<ImageHandle>) {
        for p in self.groups.iter().flat_map(ParticleGroup::iter) {
            match sprite {
                Some(img) => r.draw_image(img, p.rect.pos),
                None => r.fill_rect(p.rect, (255, 220, 120)),
            }
        }
    }
}
