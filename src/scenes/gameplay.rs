//! The game itself: one `GameState` plus its HUD
//!
//! Entering the scene always starts a brand new session with the current
//! settings. Pause and game-over overlays carry their own buttons.

use glam::IVec2;
use log::info;

use crate::assets::Assets;
use crate::audio::SoundEffect;
use crate::error::Result;
use crate::platform::{InputEvent, Key, Renderer};
use crate::scene::{FadeTransition, Scene, SceneContext, names};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Rect, Sprites, tick};
use crate::ui::{Button, Label};

use super::background::ColourCycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayAction {
    Retry,
    MainMenu,
    /// Leave from the pause screen
    Back,
}

pub struct GameplayScene {
    bounds: Rect,
    state: GameState,
    seed: u64,
    sessions: u64,
    events: Vec<GameEvent>,
    background: ColourCycle,
    sprites: Sprites,
    best: Option<u64>,

    score_label: Label,
    lives_label: Label,
    countdown_label: Label,
    paused_label: Label,
    game_over_label: Label,
    best_label: Label,
    back_button: Button<PlayAction>,
    retry_button: Button<PlayAction>,
    main_menu_button: Button<PlayAction>,
}

impl GameplayScene {
    pub fn new(assets: &Assets, bounds: Rect, seed: u64) -> Result<Self> {
        let center = bounds.center();

        let mut paused_label = Label::from_text("PAUSED", 36, (100, 0, 0));
        paused_label.rect.set_center(center);
        let mut back_button = Button::new(assets.button_faces("on_game/back")?, PlayAction::Back);
        back_button.rect.pos = IVec2::new(
            center.x - back_button.rect.size.x / 2,
            paused_label.rect.bottom() + 20,
        );

        let mut game_over_label = Label::from_text("GAME OVER", 20, (255, 255, 255));
        game_over_label
            .rect
            .set_center(center - IVec2::new(0, 20));
        let mut main_menu_button = Button::new(
            assets.button_faces("on_game/main_menu")?,
            PlayAction::MainMenu,
        );
        main_menu_button
            .rect
            .set_center(center + IVec2::new(-50, 30));
        let mut retry_button = Button::new(assets.button_faces("on_game/retry")?, PlayAction::Retry);
        retry_button.rect.set_center(center + IVec2::new(50, 30));

        let mut scene = Self {
            bounds,
            state: GameState::new(bounds, Settings::default().session_config(seed)),
            seed,
            sessions: 0,
            events: Vec::new(),
            background: ColourCycle::new(seed),
            sprites: assets.sprites()?,
            best: None,
            score_label: Label::from_text("Score: 0", 16, (255, 255, 255)),
            lives_label: Label::from_text("", 16, (255, 255, 255)),
            countdown_label: Label::from_text("3", 36, (0, 0, 255)),
            paused_label,
            game_over_label,
            best_label: Label::from_text("", 16, (255, 255, 255)),
            back_button,
            retry_button,
            main_menu_button,
        };
        scene.refresh_hud();
        Ok(scene)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Fresh session from the current settings, each with its own seed
    fn start_session(&mut self, settings: &Settings) {
        self.sessions += 1;
        let seed = self.seed.wrapping_add(self.sessions);
        self.state = GameState::new(self.bounds, settings.session_config(seed));
        info!(
            "Session {} started on {} (seed {})",
            self.sessions,
            settings.difficulty.as_str(),
            seed
        );
        self.refresh_hud();
    }

    fn refresh_hud(&mut self) {
        let b = self.bounds;

        self.score_label
            .set_text(&format!("Score: {}", self.state.score));
        let h = self.score_label.rect.size.y;
        self.score_label.rect.pos = IVec2::new(b.left() + 4, b.bottom() - h - 4);

        self.lives_label
            .set_text(&format!("Lives: {}", self.state.attempts_remaining));
        self.lives_label
            .rect
            .set_bottomright(IVec2::new(b.right() - 4, b.bottom() - 4));

        if let Some(digit) = self.state.countdown_digit() {
            self.countdown_label.set_text(&digit.to_string());
            self.countdown_label.rect.set_center(b.center());
        }

        let best = match self.best {
            Some(score) => format!("Best: {score}"),
            None => "Best: -".to_string(),
        };
        self.best_label.set_text(&best);
        self.best_label
            .rect
            .set_center(b.center() + IVec2::new(0, 70));
    }

    fn act(&mut self, action: PlayAction, ctx: &mut SceneContext) {
        match action {
            PlayAction::Retry => {
                info!("Retry");
                self.state.retry();
            }
            PlayAction::MainMenu => {
                ctx.transition_to(names::MAIN_MENU, Some(FadeTransition::white(4)));
            }
            PlayAction::Back => {
                self.state.abandon();
                ctx.transition_to(names::MAIN_MENU, Some(FadeTransition::white(4)));
            }
        }
        self.refresh_hud();
    }

    fn steer(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(Key::A | Key::Left) => self.state.paddle.set_moving_left(true),
            InputEvent::KeyUp(Key::A | Key::Left) => self.state.paddle.set_moving_left(false),
            InputEvent::KeyDown(Key::D | Key::Right) => self.state.paddle.set_moving_right(true),
            InputEvent::KeyUp(Key::D | Key::Right) => self.state.paddle.set_moving_right(false),
            InputEvent::KeyDown(Key::P | Key::Escape) => {
                self.state.toggle_pause();
            }
            _ => {}
        }
    }
}

impl Scene for GameplayScene {
    fn on_enter(&mut self, ctx: &mut SceneContext) {
        self.best = ctx.high_scores.best();
        self.start_session(&*ctx.settings);
    }

    fn update(&mut self, ctx: &mut SceneContext) {
        self.events.clear();
        tick(&mut self.state, ctx.now_ms, &mut self.events);
        if self.state.phase == GamePhase::Running {
            self.background.update();
        }

        for event in &self.events {
            if let Some(effect) = SoundEffect::for_event(event) {
                ctx.play(effect);
            }
            if let GameEvent::GameOver { score } = *event {
                let difficulty = ctx.settings.difficulty;
                if let Some(rank) = ctx.high_scores.record(score, difficulty) {
                    info!("New high score {} (rank {})", score, rank);
                }
                self.best = ctx.high_scores.best();
            }
        }
        self.refresh_hud();
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext) {
        self.steer(event);

        let fired = match self.state.phase {
            GamePhase::GameOver => {
                let retry = self.retry_button.handle_input(event);
                let menu = self.main_menu_button.handle_input(event);
                retry.or(menu)
            }
            GamePhase::Paused => self.back_button.handle_input(event),
            _ => None,
        };
        if let Some(action) = fired {
            self.act(action, ctx);
        }
    }

    fn draw(&self, r: &mut dyn Renderer) {
        if self.state.is_over() {
            r.fill((0, 20, 0));
            self.game_over_label.draw(r);
            self.main_menu_button.draw(r);
            self.retry_button.draw(r);
            self.best_label.draw(r);
            return;
        }

        self.background.draw(r);
        self.state.board.draw(r, &self.sprites);
        self.state.paddle.draw(r);
        self.score_label.draw(r);
        self.lives_label.draw(r);
        match self.state.phase {
            GamePhase::Paused => {
                self.paused_label.draw(r);
                self.back_button.draw(r);
            }
            GamePhase::Countdown => self.countdown_label.draw(r),
            _ => {}
        }
    }
}
