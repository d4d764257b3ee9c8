//! The target wall
//!
//! Targets sit in a fixed grid at the top of the screen. A hit target is
//! flagged as falling, drops one pixel per tick and is removed once it has
//! left the screen.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::impact_axis;
use super::entity::{Ball, Target};
use super::geom::Rect;
use super::state::GameEvent;
use crate::consts::{TARGET_ROWS, TARGET_SIZE};
use crate::platform::{ImageHandle, Renderer};

/// Columns needed to cover the screen width (the last one overhangs)
#[inline]
pub fn grid_columns(screen_width: i32) -> i32 {
    screen_width / TARGET_SIZE + 1
}

#[derive(Debug, Clone, Default)]
pub struct TargetField {
    targets: Vec<Target>,
}

impl TargetField {
    /// Replace the field with a fresh grid of randomly coloured targets
    pub fn recharge(&mut self, bounds: Rect, rng: &mut Pcg32) {
        self.targets.clear();
        let columns = grid_columns(bounds.size.x);
        for row in 0..TARGET_ROWS {
            for col in 0..columns {
                let pos = bounds.pos + IVec2::new(col * TARGET_SIZE, row * TARGET_SIZE);
                let colour = (rng.random(), rng.random(), rng.random());
                self.targets.push(Target::new(pos, colour));
            }
        }
        log::debug!("Recharged {} targets", self.targets.len());
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    /// Number of targets still standing
    pub fn standing(&self) -> usize {
        self.targets.iter().filter(|t| !t.falling).count()
    }

    /// Drop falling targets, remove the ones gone off screen and resolve hits.
    ///
    /// Every standing target the ball overlaps is hit: it bounces the ball
    /// according to the struck face and starts falling. A falling target
    /// can never be hit again.
    pub fn update(&mut self, ball: &mut Ball, bounds: Rect, events: &mut Vec<GameEvent>) {
        self.targets.retain_mut(|target| {
            if target.rect.top() > bounds.bottom() {
                events.push(GameEvent::TargetVanished);
                return false;
            }
            if target.falling {
                target.rect.pos.y += 1;
                return true;
            }
            if ball.rect.intersects(&target.rect) {
                if let Some(axis) = impact_axis(ball.rect, ball.vel, target.rect) {
                    ball.bounce(axis);
                }
                target.falling = true;
                events.push(GameEvent::TargetHit {
                    pos: target.rect.pos,
                });
            }
            true
        });
    }

    pub fn draw(&self, r: &mut dyn Renderer, overlay: Option<ImageHandle>) {
        for target in &self.targets {
            target.draw(r, overlay);
        }
    }

    #[cfg(test)]
    pub(crate) fn targets_mut(&mut self) -> &mut Vec<Target> {
        &mut self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::BallMode;
    use rand::SeedableRng;

    const SCREEN: Rect = Rect::new(0, 0, 600, 400);

    fn field() -> TargetField {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = TargetField::default();
        field.recharge(SCREEN, &mut rng);
        field
    }

    #[test]
    fn test_recharge_fills_grid() {
        assert_eq!(grid_columns(600), 19);
        let field = field();
        assert_eq!(field.len(), 95);
        assert_eq!(field.standing(), 95);
    }

    #[test]
    fn test_recharge_targets_never_overlap() {
        let field = field();
        let all: Vec<_> = field.iter().collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.rect.intersects(&b.rect));
            }
        }
    }

    #[test]
    fn test_hit_scores_once_and_falls() {
        let mut field = field();
        let mut ball = Ball::new(SCREEN, 2, BallMode::Game);
        // Rising into the bottom face of the target at column 2, row 4
        ball.rect.pos = IVec2::new(70, 155);
        ball.vel = IVec2::new(2, -2);

        let mut events = Vec::new();
        field.update(&mut ball, SCREEN, &mut events);
        let hits = events
            .iter()
            .filter(|e| matches!(e, GameEvent::TargetHit { .. }))
            .count();
        assert_eq!(hits, 1);
        assert_eq!(ball.vel, IVec2::new(2, 2));
        assert_eq!(field.standing(), 94);

        // Ball still overlapping the falling target: no second hit
        events.clear();
        ball.vel = IVec2::new(2, -2);
        field.update(&mut ball, SCREEN, &mut events);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::TargetHit { .. })));
        assert_eq!(field.standing(), 94);
    }

    #[test]
    fn test_falling_target_removed_below_screen() {
        let mut field = TargetField::default();
        let mut t = Target::new(IVec2::new(0, 398), (1, 2, 3));
        t.falling = true;
        field.targets_mut().push(t);

        let mut ball = Ball::new(SCREEN, 2, BallMode::Game);
        let mut events = Vec::new();
        for _ in 0..4 {
            field.update(&mut ball, SCREEN, &mut events);
        }
        assert!(field.is_empty());
        assert!(events.contains(&GameEvent::TargetVanished));
    }
}
