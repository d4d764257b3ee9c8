//! Game state and core session types
//!
//! A `GameState` is one play session: the board, the paddle, the phase
//! machine and the counters. Starting over means building a new one.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::collision::WallSide;
use super::entity::{BallMode, Paddle};
use super::geom::Rect;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// "3, 2, 1" before the ball moves
    Countdown,
    /// Active gameplay
    Running,
    /// Frozen until the pause toggle is pressed again
    Paused,
    /// Out of attempts
    GameOver,
}

/// Things that happened during a tick, for sound cues and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallHit { side: WallSide, pos: IVec2 },
    PaddleHit,
    TargetHit { pos: IVec2 },
    TargetVanished,
    Recharged,
    CountdownStarted,
    CountdownFinished,
    LifeLost { remaining: u8 },
    GameOver { score: u64 },
}

/// Per-session tuning, derived from the player's settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub ball_speed: i32,
    pub paddle_speed: i32,
    /// Spawn collision sparks
    pub particles: bool,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ball_speed: 2,
            paddle_speed: 3,
            particles: true,
            seed: 0,
        }
    }
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Lives left; the session ends when this reaches zero
    pub attempts_remaining: u8,
    pub score: u64,
    /// When the running countdown was armed (ms); `None` until its first tick
    pub countdown_started_at: Option<u64>,
    /// Time spent in the current countdown (ms)
    pub countdown_elapsed: u64,
    /// Ticks spent in `Running`
    pub time_ticks: u64,
    pub board: Board,
    pub paddle: Paddle,
    config: SessionConfig,
}

impl GameState {
    pub fn new(bounds: Rect, config: SessionConfig) -> Self {
        let mut board = Board::new(bounds, config.ball_speed, BallMode::Game, config.seed);
        board.bursts = config.particles;
        Self {
            phase: GamePhase::Countdown,
            attempts_remaining: STARTING_ATTEMPTS,
            score: 0,
            countdown_started_at: None,
            countdown_elapsed: 0,
            time_ticks: 0,
            paddle: Paddle::new(bounds, config.paddle_speed),
            board,
            config,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.board.bounds
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Flip between running and paused. Ignored in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            _ => return false,
        };
        log::debug!("Pause toggled -> {:?}", self.phase);
        true
    }

    /// Digit to show during the countdown ("3", "2", "1")
    pub fn countdown_digit(&self) -> Option<u64> {
        if self.phase != GamePhase::Countdown {
            return None;
        }
        let phase_ms = COUNTDOWN_MS / COUNTDOWN_PHASES;
        let passed = (self.countdown_elapsed / phase_ms).min(COUNTDOWN_PHASES - 1);
        Some(COUNTDOWN_PHASES - passed)
    }

    /// Fresh wall, ball and paddle back home, countdown re-armed.
    /// Lives and score are kept.
    pub fn restart(&mut self) {
        let bounds = self.bounds();
        self.board.reset();
        self.board.particles.clear();
        self.paddle.reset(bounds);
        self.countdown_started_at = None;
        self.countdown_elapsed = 0;
        self.phase = GamePhase::Countdown;
    }

    /// Start over with full attempts and a zero score
    pub fn retry(&mut self) {
        *self = Self::new(self.bounds(), self.config.clone());
    }

    /// The ball went past the bottom edge
    pub fn lose_life(&mut self, events: &mut Vec<GameEvent>) {
        self.restart();
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        if self.attempts_remaining == 0 {
            self.phase = GamePhase::GameOver;
            log::info!("Game over with score {}", self.score);
            events.push(GameEvent::GameOver { score: self.score });
        } else {
            log::debug!("Life lost, {} left", self.attempts_remaining);
            events.push(GameEvent::LifeLost {
                remaining: self.attempts_remaining,
            });
        }
    }

    /// Leaving for the menu from the pause screen clears score and pause
    pub fn abandon(&mut self) {
        self.score = 0;
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Running;
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
