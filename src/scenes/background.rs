//! Animated scene backdrops

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::{Renderer, Rgb};
use crate::sim::{BallMode, Board, GameEvent, Rect, Sprites};

/// Fill colour whose channels each sweep 0..=255 and back, one step per tick
#[derive(Debug, Clone)]
pub struct ColourCycle {
    /// (value, direction) per channel
    channels: [(i32, i32); 3],
}

impl ColourCycle {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            channels: std::array::from_fn(|_| (rng.random_range(0..=255), 1)),
        }
    }

    pub fn colour(&self) -> Rgb {
        let [r, g, b] = self.channels.map(|(v, _)| v.clamp(0, 255) as u8);
        (r, g, b)
    }

    pub fn update(&mut self) {
        for (value, dir) in &mut self.channels {
            if *value >= 255 {
                *dir = -1;
            } else if *value <= 0 {
                *dir = 1;
            }
            *value += *dir;
        }
    }

    pub fn draw(&self, r: &mut dyn Renderer) {
        r.fill(self.colour());
    }
}

/// A board nobody plays: the ball bounces off every wall and the targets
/// recharge forever. Its events are discarded, so it makes no sound.
#[derive(Debug, Clone)]
pub struct DemoBoard {
    board: Board,
    events: Vec<GameEvent>,
}

impl DemoBoard {
    pub fn new(bounds: Rect, seed: u64) -> Self {
        Self {
            board: Board::new(bounds, 2, BallMode::Demo, seed),
            events: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn set_bursts(&mut self, bursts: bool) {
        self.board.bursts = bursts;
    }

    pub fn update(&mut self) {
        self.board.step(None, &mut self.events);
        self.events.clear();
    }

    pub fn draw(&self, r: &mut dyn Renderer, sprites: &Sprites) {
        self.board.draw(r, sprites);
    }
}
