//! Ball, paddle and target entities
//!
//! Positions and velocities are whole pixels per tick. Each entity keeps
//! its bounding box as its only positional state, so the box can never
//! drift from the position.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Axis, WallSide, reflect, wall_contact};
use super::geom::Rect;
use crate::consts::*;
use crate::platform::{ImageHandle, Renderer, Rgb};

/// Whether the ball belongs to a real session or a decorative demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallMode {
    /// Bottom edge is the miss line
    Game,
    /// Bottom edge bounces like the other walls
    Demo,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
    pub mode: BallMode,
}

impl Ball {
    pub fn new(bounds: Rect, speed: i32, mode: BallMode) -> Self {
        let mut ball = Self {
            rect: Rect::from_size(IVec2::splat(BALL_SIZE)),
            vel: IVec2::splat(speed),
            mode,
        };
        ball.reset_to_center(bounds);
        ball
    }

    /// Move the ball back to the middle of the screen (heading is kept)
    pub fn reset_to_center(&mut self, bounds: Rect) {
        self.rect.set_center(bounds.center());
    }

    /// Advance one tick and bounce off any wall it ran into
    pub fn update(&mut self, bounds: Rect) -> Option<WallSide> {
        self.rect.pos += self.vel;
        let side = wall_contact(self.rect, self.vel, bounds, self.mode == BallMode::Demo)?;
        self.bounce(side.axis());
        Some(side)
    }

    pub fn bounce(&mut self, axis: Axis) {
        self.vel = reflect(self.vel, axis);
    }

    pub fn draw(&self, r: &mut dyn Renderer, sprite: Option<ImageHandle>) {
        match sprite {
            Some(img) => r.draw_image(img, self.rect.pos),
            None => r.fill_rect(self.rect, (255, 255, 255)),
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub speed: i32,
    moving_left: bool,
    moving_right: bool,
}

impl Paddle {
    pub fn new(bounds: Rect, speed: i32) -> Self {
        let mut paddle = Self {
            rect: Rect::from_size(IVec2::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
            speed,
            moving_left: false,
            moving_right: false,
        };
        paddle.reset(bounds);
        paddle
    }

    /// Return to the starting spot below the screen centre
    pub fn reset(&mut self, bounds: Rect) {
        self.rect
            .set_center(bounds.center() + IVec2::new(0, PADDLE_OFFSET_Y));
    }

    pub fn set_moving_left(&mut self, moving: bool) {
        self.moving_left = moving;
    }

    pub fn set_moving_right(&mut self, moving: bool) {
        self.moving_right = moving;
    }

    pub fn is_moving(&self) -> bool {
        self.moving_left != self.moving_right
    }

    /// Apply movement intent; the paddle never leaves the screen horizontally
    pub fn update(&mut self, bounds: Rect) {
        if self.moving_right {
            self.rect.pos.x += self.speed;
        }
        if self.moving_left {
            self.rect.pos.x -= self.speed;
        }
        let max_x = (bounds.right() - self.rect.size.x).max(bounds.left());
        self.rect.pos.x = self.rect.pos.x.clamp(bounds.left(), max_x);
    }

    pub fn draw(&self, r: &mut dyn Renderer) {
        r.fill_rect(self.rect, (0, 0, 0));
        let inner = Rect {
            pos: self.rect.pos + IVec2::splat(2),
            size: self.rect.size - IVec2::splat(4),
        };
        r.fill_rect(inner, (255, 255, 255));
    }
}

/// A destructible target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub rect: Rect,
    pub colour: Rgb,
    /// Set once hit; the target then drops off the screen
    pub falling: bool,
}

impl Target {
    pub fn new(pos: IVec2, colour: Rgb) -> Self {
        Self {
            rect: Rect {
                pos,
                size: IVec2::splat(TARGET_SIZE),
            },
            colour,
            falling: false,
        }
    }

    pub fn draw(&self, r: &mut dyn Renderer, overlay: Option<ImageHandle>) {
        r.fill_rect(self.rect, self.colour);
        if let Some(img) = overlay {
            r.draw_image(img, self.rect.pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCREEN: Rect = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);

    #[test]
    fn test_ball_starts_centred() {
        let ball = Ball::new(SCREEN, 2, BallMode::Game);
        assert_eq!(ball.rect.center(), SCREEN.center());
        assert_eq!(ball.vel, IVec2::new(2, 2));
    }

    #[test]
    fn test_paddle_starts_below_centre() {
        let paddle = Paddle::new(SCREEN, 3);
        assert_eq!(paddle.rect.center(), IVec2::new(300, 300));
    }

    #[test]
    fn test_paddle_stops_at_right_edge() {
        let mut paddle = Paddle::new(SCREEN, 3);
        paddle.set_moving_right(true);
        for _ in 0..500 {
            paddle.update(SCREEN);
        }
        assert_eq!(paddle.rect.right(), SCREEN_WIDTH);
    }

    #[test]
    fn test_paddle_opposing_keys_cancel() {
        let mut paddle = Paddle::new(SCREEN, 3);
        let start = paddle.rect.pos;
        paddle.set_moving_left(true);
        paddle.set_moving_right(true);
        paddle.update(SCREEN);
        assert_eq!(paddle.rect.pos, start);
        assert!(!paddle.is_moving());
    }

    #[test]
    fn test_ball_bounces_once_per_contact() {
        let mut ball = Ball::new(SCREEN, 2, BallMode::Game);
        ball.rect.pos = IVec2::new(1, 100);
        ball.vel = IVec2::new(-2, 2);
        assert_eq!(ball.update(SCREEN), Some(WallSide::Left));
        assert_eq!(ball.vel.x, 2);
        // Still overlapping the edge next tick, but moving away
        ball.rect.pos.x = -5;
        assert_eq!(ball.update(SCREEN), None);
        assert_eq!(ball.vel.x, 2);
    }

    #[test]
    fn test_demo_ball_bounces_off_bottom() {
        let mut ball = Ball::new(SCREEN, 2, BallMode::Demo);
        ball.rect.pos = IVec2::new(300, SCREEN_HEIGHT - BALL_SIZE - 1);
        assert_eq!(ball.update(SCREEN), Some(WallSide::Bottom));
        assert_eq!(ball.vel.y, -2);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_screen(
            start_x in -200i32..800,
            speed in 1i32..12,
            moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..200),
        ) {
            let mut paddle = Paddle::new(SCREEN, speed);
            paddle.rect.pos.x = start_x;
            for (left, right) in moves {
                paddle.set_moving_left(left);
                paddle.set_moving_right(right);
                paddle.update(SCREEN);
                prop_assert!(paddle.rect.left() >= SCREEN.left());
                prop_assert!(paddle.rect.right() <= SCREEN.right());
            }
        }

        #[test]
        fn prop_side_wall_flips_exactly_once(
            y in 20i32..360,
            speed in 1i32..8,
            from_left in any::<bool>(),
        ) {
            let mut ball = Ball::new(SCREEN, speed, BallMode::Game);
            let (x, vx) = if from_left {
                (speed - 1, -speed)
            } else {
                (SCREEN_WIDTH - BALL_SIZE - speed + 1, speed)
            };
            ball.rect.pos = IVec2::new(x, y);
            ball.vel = IVec2::new(vx, 0);
            let side = ball.update(SCREEN);
            prop_assert!(matches!(side, Some(WallSide::Left) | Some(WallSide::Right)));
            prop_assert_eq!(ball.vel.x, -vx);
            // Further ticks never flip it back while it leaves the wall
            for _ in 0..3 {
                ball.update(SCREEN);
                prop_assert_eq!(ball.vel.x, -vx);
            }
        }
    }
}
