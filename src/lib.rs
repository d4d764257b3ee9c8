//! Brick Pong - a paddle, a ball and a wall of targets
//!
//! Core modules:
//! - `sim`: Gameplay simulation (entities, collisions, particles, phases)
//! - `scene`: Scene trait, scene manager and fade transitions
//! - `scenes`: The concrete screens (intro, menu, settings, gameplay, debug)
//! - `platform`: Renderer/input/clock/audio/asset collaborator traits
//! - `game`: The fixed-rate application shell

pub mod assets;
pub mod audio;
pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod scene;
pub mod scenes;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{PongError, Result};
pub use game::{Backend, Game};
pub use highscores::HighScores;
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const SCREEN_WIDTH: i32 = 600;
    pub const SCREEN_HEIGHT: i32 = 400;
    pub const WINDOW_CAPTION: &str = "Pong";

    /// Fixed frame rate of the shell loop
    pub const FRAME_RATE: u32 = 60;

    /// Lives granted to a fresh session
    pub const STARTING_ATTEMPTS: u8 = 3;
    /// Countdown before play resumes (ms), shown as three equal phases
    pub const COUNTDOWN_MS: u64 = 3000;
    pub const COUNTDOWN_PHASES: u64 = 3;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 16;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 20;
    /// Paddle rests this far below the screen centre
    pub const PADDLE_OFFSET_Y: i32 = 100;

    /// Target grid
    pub const TARGET_SIZE: i32 = 32;
    pub const TARGET_ROWS: i32 = 5;
    pub const TARGET_POINTS: u64 = 100;
    /// Edge proximity used to decide which target face the ball struck (px)
    pub const IMPACT_THRESHOLD: i32 = 10;

    /// Particles per collision burst
    pub const PARTICLES_PER_BURST: usize = 10;
    pub const PARTICLE_SIZE: i32 = 4;
}
