//! Collision rules
//!
//! Pure functions over rectangles and velocities. Nothing here mutates
//! entities; callers apply the returned bounce.

use glam::IVec2;

use super::geom::Rect;
use crate::consts::IMPACT_THRESHOLD;

/// Velocity component a bounce inverts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Invert `xspeed`
    Horizontal,
    /// Invert `yspeed`
    Vertical,
}

/// Screen edge the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl WallSide {
    pub fn axis(self) -> Axis {
        match self {
            WallSide::Left | WallSide::Right => Axis::Horizontal,
            WallSide::Top | WallSide::Bottom => Axis::Vertical,
        }
    }
}

/// Invert one velocity component
#[inline]
pub fn reflect(vel: IVec2, axis: Axis) -> IVec2 {
    match axis {
        Axis::Horizontal => IVec2::new(-vel.x, vel.y),
        Axis::Vertical => IVec2::new(vel.x, -vel.y),
    }
}

/// Which wall (if any) the ball bounces off this tick.
///
/// Side walls take priority over the top. A wall only counts while the ball
/// is still moving into it, so a ball overlapping an edge flips once and not
/// on every tick it stays in contact. The bottom edge only bounces when
/// `bottom_bounces` is set (demo mode); in play it is the miss line.
pub fn wall_contact(ball: Rect, vel: IVec2, bounds: Rect, bottom_bounces: bool) -> Option<WallSide> {
    if ball.left() <= bounds.left() && vel.x < 0 {
        Some(WallSide::Left)
    } else if ball.right() >= bounds.right() && vel.x > 0 {
        Some(WallSide::Right)
    } else if ball.top() <= bounds.top() && vel.y < 0 {
        Some(WallSide::Top)
    } else if bottom_bounces && ball.bottom() >= bounds.bottom() && vel.y > 0 {
        Some(WallSide::Bottom)
    } else {
        None
    }
}

/// Ball meets paddle only while falling onto it
#[inline]
pub fn paddle_contact(ball: Rect, vel: IVec2, paddle: Rect) -> bool {
    ball.intersects(&paddle) && vel.y > 0
}

/// Classify which face of a target the ball struck.
///
/// Edge distances are compared against a fixed threshold, checked in the
/// order top, bottom, left, right. The vertical faces also require the
/// ball to be travelling towards them. Corner hits can land on the wrong
/// face; `None` means the hit counts but the ball keeps its heading.
pub fn impact_axis(ball: Rect, vel: IVec2, target: Rect) -> Option<Axis> {
    if (ball.top() - target.bottom()).abs() < IMPACT_THRESHOLD && vel.y < 0 {
        Some(Axis::Vertical)
    } else if (ball.bottom() - target.top()).abs() < IMPACT_THRESHOLD && vel.y > 0 {
        Some(Axis::Vertical)
    } else if (ball.left() - target.right()).abs() < IMPACT_THRESHOLD {
        Some(Axis::Horizontal)
    } else if (ball.right() - target.left()).abs() < IMPACT_THRESHOLD {
        Some(Axis::Horizontal)
    } else {
        None
    }
}

/// The ball is lost once its top edge is below the screen
#[inline]
pub fn ball_missed(ball: Rect, bounds: Rect) -> bool {
    ball.top() > bounds.bottom()
}
