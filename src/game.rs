//! The application shell
//!
//! Owns the scene manager, the loaded sounds and the player's settings,
//! and drives them at a fixed frame rate: input, update, sounds, draw,
//! present, wait.

use glam::IVec2;
use log::info;

use crate::assets::{Assets, ICON};
use crate::audio::AudioManager;
use crate::consts::*;
use crate::error::Result;
use crate::highscores::HighScores;
use crate::platform::{AssetLoader, AudioOut, Clock, InputEvent, InputSource, Renderer};
use crate::scene::{SceneContext, SceneManager, names};
use crate::scenes::{DebugScene, GameplayScene, IntroScene, MainMenuScene, SettingsScene};
use crate::settings::Settings;
use crate::sim::Rect;

/// The collaborators a running game talks to
pub struct Backend<R, I, C, A> {
    pub renderer: R,
    pub input: I,
    pub clock: C,
    pub audio: A,
}

pub struct Game {
    scenes: SceneManager,
    audio: AudioManager,
    settings: Settings,
    high_scores: HighScores,
    icon: crate::platform::ImageHandle,
    frame: u64,
}

impl Game {
    /// Load every asset and register the scenes, starting on the intro
    pub fn new(settings: Settings, loader: &mut dyn AssetLoader, seed: u64) -> Result<Self> {
        let assets = Assets::load(loader)?;
        let audio = AudioManager::load(loader)?;
        let bounds = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);

        let mut scenes = SceneManager::new();
        scenes.register(names::INTRO, IntroScene::new(&assets, bounds)?);
        scenes.register(names::MAIN_MENU, MainMenuScene::new(&assets, bounds, seed)?);
        scenes.register(names::SETTINGS, SettingsScene::new(&assets, bounds)?);
        scenes.register(names::GAMEPLAY, GameplayScene::new(&assets, bounds, seed)?);
        scenes.register(names::DEBUG, DebugScene::new(bounds));
        scenes.set_initial(names::INTRO)?;

        info!("Game ready (seed {})", seed);
        Ok(Self {
            scenes,
            audio,
            settings,
            high_scores: HighScores::new(),
            icon: assets.image(ICON)?,
            frame: 0,
        })
    }

    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Frames run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn configure_window(&self, r: &mut dyn Renderer) {
        r.configure_window(
            WINDOW_CAPTION,
            IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            Some(self.icon),
        );
    }

    /// Run one frame. Returns `false` once the game should stop.
    pub fn step<R, I, C, A>(&mut self, backend: &mut Backend<R, I, C, A>) -> Result<bool>
    where
        R: Renderer,
        I: InputSource,
        C: Clock,
        A: AudioOut,
    {
        let events = backend.input.poll();
        let mut ctx = SceneContext::new(
            backend.clock.now_ms(),
            &mut self.settings,
            &mut self.high_scores,
        );

        for event in &events {
            if *event == InputEvent::Quit {
                info!("Window closed");
                return Ok(false);
            }
            self.scenes.dispatch_input(event, &mut ctx)?;
        }
        self.scenes.advance(&mut ctx)?;
        let sounds = ctx.take_sounds();

        self.audio
            .play_all(&sounds, &self.settings, &mut backend.audio);
        self.scenes.render_frame(&mut backend.renderer);
        backend.renderer.present();
        backend.clock.tick(FRAME_RATE);
        self.frame += 1;

        Ok(!self.scenes.quit_requested())
    }

    /// Run until a quit, or until `max_frames` frames have passed
    pub fn run<R, I, C, A>(
        &mut self,
        backend: &mut Backend<R, I, C, A>,
        max_frames: Option<u64>,
    ) -> Result<u64>
    where
        R: Renderer,
        I: InputSource,
        C: Clock,
        A: AudioOut,
    {
        self.configure_window(&mut backend.renderer);
        while max_frames.is_none_or(|max| self.frame < max) {
            if !self.step(backend)? {
                break;
            }
        }
        info!(
            "Stopped after {} frames on {:?}",
            self.frame,
            self.scenes.active_key()
        );
        Ok(self.frame)
    }
}
