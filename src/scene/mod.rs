//! Scenes and the manager that switches between them
//!
//! A scene is one screen of the game. Scenes never hold a reference back
//! to the manager: they push `SceneCommand`s into the `SceneContext` they
//! are handed each frame and the manager applies them afterwards.

mod manager;
mod transition;

pub use manager::{SceneManager, TransitionRequest};
pub use transition::{FadeStep, FadeTransition};

use crate::audio::SoundEffect;
use crate::highscores::HighScores;
use crate::platform::{InputEvent, Renderer};
use crate::settings::Settings;

/// Registered scene names
pub mod names {
    pub const INTRO: &str = "game_intro";
    pub const MAIN_MENU: &str = "main_menu";
    pub const SETTINGS: &str = "on_settings";
    pub const GAMEPLAY: &str = "on_game";
    pub const DEBUG: &str = "debug";
}

/// Requests a scene makes of the shell
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Switch scenes, through a fade when one is given
    Transition {
        to: String,
        fade: Option<FadeTransition>,
    },
    /// Leave the main loop
    Quit,
}

/// Everything a scene may read or touch during one frame
pub struct SceneContext<'a> {
    /// Clock time at the start of the frame (ms)
    pub now_ms: u64,
    pub settings: &'a mut Settings,
    pub high_scores: &'a mut HighScores,
    commands: Vec<SceneCommand>,
    sounds: Vec<SoundEffect>,
}

impl<'a> SceneContext<'a> {
    pub fn new(now_ms: u64, settings: &'a mut Settings, high_scores: &'a mut HighScores) -> Self {
        Self {
            now_ms,
            settings,
            high_scores,
            commands: Vec::new(),
            sounds: Vec::new(),
        }
    }

    pub fn transition_to(&mut self, to: &str, fade: Option<FadeTransition>) {
        self.commands.push(SceneCommand::Transition {
            to: to.to_string(),
            fade,
        });
    }

    pub fn quit(&mut self) {
        self.commands.push(SceneCommand::Quit);
    }

    pub fn play(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }

    pub fn commands(&self) -> &[SceneCommand] {
        &self.commands
    }

    pub(crate) fn take_commands(&mut self) -> Vec<SceneCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Sounds requested this frame, in order
    pub fn take_sounds(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.sounds)
    }
}

/// One screen of the game. Every hook defaults to doing nothing.
pub trait Scene {
    /// Called when the scene becomes active, before its first update
    fn on_enter(&mut self, _ctx: &mut SceneContext) {}

    fn update(&mut self, _ctx: &mut SceneContext) {}

    fn handle_input(&mut self, _event: &InputEvent, _ctx: &mut SceneContext) {}

    fn draw(&self, _r: &mut dyn Renderer) {}
}
