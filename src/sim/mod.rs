//! Gameplay simulation
//!
//! All gameplay rules live here and stay free of rendering concerns:
//! - Whole-pixel positions, one step per frame
//! - Seeded RNG only
//! - Drawing goes through the `Renderer` trait

pub mod board;
pub mod collision;
pub mod entity;
pub mod geom;
pub mod particle;
pub mod state;
pub mod targets;
pub mod tick;

pub use board::{Board, Sprites};
pub use collision::{Axis, WallSide, ball_missed, impact_axis, paddle_contact, wall_contact};
pub use entity::{Ball, BallMode, Paddle, Target};
pub use geom::Rect;
pub use particle::{ParticleField, ParticleGroup};
pub use state::{GameEvent, GamePhase, GameState, SessionConfig};
pub use targets::{TargetField, grid_columns};
pub use tick::tick;
