//! Fade to a colour and back
//!
//! The overlay ramps up until it is fully opaque, the scene is swapped
//! underneath it, then it ramps back down.

use crate::platform::{Renderer, Rgb};

/// Outcome of one fade step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStep {
    Fading,
    /// Fully opaque; swap the scene now
    Covered,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTransition {
    pub colour: Rgb,
    alpha: i32,
    factor: i32,
    phase_count: u8,
}

impl FadeTransition {
    /// A fade to `colour` moving `step` alpha units per frame
    pub fn new(colour: Rgb, step: i32) -> Self {
        Self {
            colour,
            alpha: 0,
            factor: step.unsigned_abs().clamp(1, 255) as i32,
            phase_count: 0,
        }
    }

    pub fn black(step: i32) -> Self {
        Self::new((0, 0, 0), step)
    }

    pub fn white(step: i32) -> Self {
        Self::new((255, 255, 255), step)
    }

    pub fn phase_count(&self) -> u8 {
        self.phase_count
    }

    /// Overlay opacity for drawing
    pub fn alpha(&self) -> u8 {
        self.alpha.clamp(0, 255) as u8
    }

    pub fn is_finished(&self) -> bool {
        self.phase_count >= 2
    }

    pub fn step(&mut self) -> FadeStep {
        if self.is_finished() {
            return FadeStep::Finished;
        }
        self.alpha += self.factor;
        let overshot = (self.factor > 0 && self.alpha > 255) || (self.factor < 0 && self.alpha < 0);
        if !overshot {
            return FadeStep::Fading;
        }
        self.factor = -self.factor;
        self.phase_count += 1;
        if self.phase_count == 1 {
            FadeStep::Covered
        } else {
            FadeStep::Finished
        }
    }

    pub fn draw(&self, r: &mut dyn Renderer) {
        r.overlay(self.colour, self.alpha());
    }
}
