//! The playfield shared by real sessions and the menu's demo
//!
//! A board owns the ball, the target wall and the particle sparks, plus the
//! seeded RNG that colours targets and scatters particles.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Axis, paddle_contact};
use super::entity::{Ball, BallMode, Paddle};
use super::geom::Rect;
use super::particle::ParticleField;
use super::state::GameEvent;
use super::targets::TargetField;
use crate::platform::{ImageHandle, Renderer};

/// Images used to draw a board; missing ones fall back to flat rectangles
#[derive(Debug, Clone, Copy, Default)]
pub struct Sprites {
    pub ball: Option<ImageHandle>,
    pub particle: Option<ImageHandle>,
    pub target: Option<ImageHandle>,
}

#[derive(Debug, Clone)]
pub struct Board {
    pub bounds: Rect,
    pub ball: Ball,
    pub targets: TargetField,
    pub particles: ParticleField,
    /// Spawn sparks on collisions
    pub bursts: bool,
    rng: Pcg32,
}

impl Board {
    pub fn new(bounds: Rect, ball_speed: i32, mode: BallMode, seed: u64) -> Self {
        let mut board = Self {
            bounds,
            ball: Ball::new(bounds, ball_speed, mode),
            targets: TargetField::default(),
            particles: ParticleField::default(),
            bursts: true,
            rng: Pcg32::seed_from_u64(seed),
        };
        board.targets.recharge(bounds, &mut board.rng);
        board
    }

    /// Fresh target wall and the ball back in the middle
    pub fn reset(&mut self) {
        self.targets.recharge(self.bounds, &mut self.rng);
        self.ball.reset_to_center(self.bounds);
    }

    /// Advance one tick: ball and walls, paddle, sparks, then targets.
    ///
    /// The wall is recharged once it is empty and the ball has dropped to
    /// the lower half of the screen.
    pub fn step(&mut self, paddle: Option<&Paddle>, events: &mut Vec<GameEvent>) {
        let bounds = self.bounds;

        if let Some(side) = self.ball.update(bounds) {
            let pos = self.ball.rect.pos;
            events.push(GameEvent::WallHit { side, pos });
            self.burst(pos);
        }

        if let Some(paddle) = paddle {
            if paddle_contact(self.ball.rect, self.ball.vel, paddle.rect) {
                self.ball.bounce(Axis::Vertical);
                events.push(GameEvent::PaddleHit);
            }
        }

        self.particles.update(&bounds);

        if self.targets.is_empty() && self.ball.rect.pos.y >= bounds.center().y {
            self.targets.recharge(bounds, &mut self.rng);
            events.push(GameEvent::Recharged);
        }

        let first = events.len();
        self.targets.update(&mut self.ball, bounds, events);
        let hits: Vec<_> = events[first..]
            .iter()
            .filter_map(|e| match e {
                GameEvent::TargetHit { pos } => Some(*pos),
                _ => None,
            })
            .collect();
        for pos in hits {
            self.burst(pos);
        }
    }

    fn burst(&mut self, pos: glam::IVec2) {
        if self.bursts {
            self.particles.spawn(pos, &mut self.rng);
        }
    }

    pub fn draw(&self, r: &mut dyn Renderer, sprites: &Sprites) {
        self.targets.draw(r, sprites.target);
        self.ball.draw(r, sprites.ball);
        self.particles.draw(r, sprites.particle);
    }
}
