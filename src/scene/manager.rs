//! Scene registry and switching
//!
//! Scenes are registered once by name and keep their state between
//! activations. At most one fade is in flight; while it runs the active
//! scene is drawn but neither updated nor given input.

use std::collections::HashMap;

use log::{debug, info, warn};

use super::transition::{FadeStep, FadeTransition};
use super::{Scene, SceneCommand, SceneContext};
use crate::error::{PongError, Result};
use crate::platform::{InputEvent, Renderer};

/// What became of a transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRequest {
    /// Switched on the spot, no effect
    Switched,
    /// Fade armed; the switch happens when the screen is covered
    Armed,
    /// Already on that scene
    Ignored,
    /// Another transition was in flight
    Dropped,
}

struct InFlight {
    effect: FadeTransition,
    target: String,
}

#[derive(Default)]
pub struct SceneManager {
    scenes: HashMap<String, Box<dyn Scene>>,
    active: Option<String>,
    transition: Option<InFlight>,
    /// The active scene has not had `on_enter` yet
    needs_enter: bool,
    quit_requested: bool,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    pub fn register<T>(&mut self, name: &str, scene: T)
    where
        T: Scene + 'static,
    {
        if self.scenes.insert(name.to_string(), Box::new(scene)).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", name);
        }
    }

    /// Make `name` the active scene without any transition
    pub fn set_initial(&mut self, name: &str) -> Result<()> {
        self.ensure_known(name)?;
        info!("Initial scene: {}", name);
        self.active = Some(name.to_string());
        self.needs_enter = true;
        Ok(())
    }

    //--- Switching --------------------------------------------------------

    pub fn request_transition(
        &mut self,
        name: &str,
        effect: Option<FadeTransition>,
    ) -> Result<TransitionRequest> {
        self.ensure_known(name)?;
        if self.active.as_deref() == Some(name) {
            return Ok(TransitionRequest::Ignored);
        }
        let Some(effect) = effect else {
            self.switch_to(name);
            return Ok(TransitionRequest::Switched);
        };
        if let Some(flight) = &self.transition {
            warn!(
                "Dropping transition to {:?}, already fading to {:?}",
                name, flight.target
            );
            return Ok(TransitionRequest::Dropped);
        }
        debug!("Fading to {:?}", name);
        self.transition = Some(InFlight {
            effect,
            target: name.to_string(),
        });
        Ok(TransitionRequest::Armed)
    }

    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition_target(&self) -> Option<&str> {
        self.transition.as_ref().map(|f| f.target.as_str())
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    //--- Frame ------------------------------------------------------------

    /// Draw the active scene, then the fade over it
    pub fn render_frame(&self, r: &mut dyn Renderer) {
        if let Some(scene) = self.active.as_deref().and_then(|k| self.scenes.get(k)) {
            scene.draw(r);
        }
        if let Some(flight) = &self.transition {
            flight.effect.draw(r);
        }
    }

    /// Update the active scene, or step the fade while one runs
    pub fn advance(&mut self, ctx: &mut SceneContext) -> Result<()> {
        if let Some(step) = self.transition.as_mut().map(|f| f.effect.step()) {
            match step {
                FadeStep::Fading => {}
                FadeStep::Covered => {
                    if let Some(target) = self.transition.as_ref().map(|f| f.target.clone()) {
                        self.switch_to(&target);
                        self.enter_if_needed(ctx);
                    }
                }
                FadeStep::Finished => {
                    debug!("Transition finished");
                    self.transition = None;
                }
            }
            return self.apply_commands(ctx);
        }

        self.enter_if_needed(ctx);
        if let Some(scene) = self.active_scene_mut() {
            scene.update(ctx);
        }
        self.apply_commands(ctx)
    }

    /// Forward one input event to the active scene; dropped mid-transition
    pub fn dispatch_input(&mut self, event: &InputEvent, ctx: &mut SceneContext) -> Result<()> {
        if self.in_transition() {
            return Ok(());
        }
        self.enter_if_needed(ctx);
        if let Some(scene) = self.active_scene_mut() {
            scene.handle_input(event, ctx);
        }
        self.apply_commands(ctx)
    }

    //--- Internals --------------------------------------------------------

    fn ensure_known(&self, name: &str) -> Result<()> {
        if self.scenes.contains_key(name) {
            Ok(())
        } else {
            Err(PongError::UnknownScene(name.to_string()))
        }
    }

    fn switch_to(&mut self, name: &str) {
        info!(
            "Scene {} -> {}",
            self.active.as_deref().unwrap_or("<none>"),
            name
        );
        self.active = Some(name.to_string());
        self.needs_enter = true;
    }

    fn active_scene_mut(&mut self) -> Option<&mut (dyn Scene + 'static)> {
        let key = self.active.as_deref()?;
        self.scenes.get_mut(key).map(|s| s.as_mut())
    }

    fn enter_if_needed(&mut self, ctx: &mut SceneContext) {
        if !self.needs_enter {
            return;
        }
        self.needs_enter = false;
        if let Some(scene) = self.active_scene_mut() {
            scene.on_enter(ctx);
        }
    }

    fn apply_commands(&mut self, ctx: &mut SceneContext) -> Result<()> {
        for command in ctx.take_commands() {
            match command {
                SceneCommand::Transition { to, fade } => {
                    self.request_transition(&to, fade)?;
                }
                SceneCommand::Quit => {
                    info!("Quit requested");
                    self.quit_requested = true;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::highscores::HighScores;
    use crate::platform::headless::FrameRecorder;
    use crate::platform::Key;
    use crate::settings::Settings;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records every hook call; Return requests a switch to "b", Escape quits
    struct Probe {
        name: &'static str,
        log: Log,
    }

    impl Scene for Probe {
        fn on_enter(&mut self, _ctx: &mut SceneContext) {
            self.log.borrow_mut().push(format!("{}:enter", self.name));
        }

        fn update(&mut self, _ctx: &mut SceneContext) {
            self.log.borrow_mut().push(format!("{}:update", self.name));
        }

        fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext) {
            self.log.borrow_mut().push(format!("{}:input", self.name));
            match event {
                InputEvent::KeyDown(Key::Return) => ctx.transition_to("b", None),
                InputEvent::KeyDown(Key::Escape) => ctx.quit(),
                _ => {}
            }
        }

        fn draw(&self, r: &mut dyn Renderer) {
            r.fill((1, 1, 1));
        }
    }

    fn manager(log: &Log) -> SceneManager {
        let mut m = SceneManager::new();
        for name in ["a", "b", "c"] {
            m.register(name, Probe {
                name,
                log: log.clone(),
            });
        }
        m.set_initial("a").unwrap();
        m
    }

    #[test]
    fn test_unknown_scene_is_an_error() {
        let mut m = manager(&Log::default());
        assert!(matches!(m.set_initial("nope"), Err(PongError::UnknownScene(_))));
        assert!(matches!(
            m.request_transition("nope", None),
            Err(PongError::UnknownScene(_))
        ));
    }

    #[test]
    fn test_request_for_active_scene_is_ignored() {
        let mut m = manager(&Log::default());
        let result = m.request_transition("a", Some(FadeTransition::black(4)));
        assert_eq!(result.unwrap(), TransitionRequest::Ignored);
        assert!(!m.in_transition());
    }

    #[test]
    fn test_switch_without_effect_is_immediate() {
        let log = Log::default();
        let mut m = manager(&log);
        assert_eq!(m.request_transition("b", None).unwrap(), TransitionRequest::Switched);
        assert_eq!(m.active_key(), Some("b"));
        assert!(!m.in_transition());
    }

    #[test]
    fn test_only_one_transition_in_flight() {
        let mut m = manager(&Log::default());
        let first = m.request_transition("b", Some(FadeTransition::black(4)));
        let second = m.request_transition("c", Some(FadeTransition::white(2)));
        assert_eq!(first.unwrap(), TransitionRequest::Armed);
        assert_eq!(second.unwrap(), TransitionRequest::Dropped);
        assert!(m.in_transition());
        assert_eq!(m.transition_target(), Some("b"));
    }

    #[test]
    fn test_switch_without_effect_during_fade() {
        let mut m = manager(&Log::default());
        m.request_transition("b", Some(FadeTransition::black(4))).unwrap();
        let result = m.request_transition("c", None);
        assert_eq!(result.unwrap(), TransitionRequest::Switched);
        assert_eq!(m.active_key(), Some("c"));
        // the fade keeps running toward its own target
        assert_eq!(m.transition_target(), Some("b"));
    }

    #[test]
    fn test_fade_suppresses_update_and_input() {
        let log = Log::default();
        let mut m = manager(&log);
        let mut settings = Settings::default();
        let mut scores = HighScores::new();
        let mut ctx = SceneContext::new(0, &mut settings, &mut scores);

        m.advance(&mut ctx).unwrap();
        assert_eq!(*log.borrow(), ["a:enter", "a:update"]);
        log.borrow_mut().clear();

        m.request_transition("b", Some(FadeTransition::black(4))).unwrap();
        let mut frames = 0;
        while m.in_transition() {
            m.dispatch_input(&InputEvent::KeyDown(Key::Space), &mut ctx)
                .unwrap();
            m.advance(&mut ctx).unwrap();
            frames += 1;
            if frames == 63 {
                assert_eq!(m.active_key(), Some("a"));
            }
            if frames == 64 {
                assert_eq!(m.active_key(), Some("b"));
            }
        }
        assert_eq!(frames, 129);
        assert_eq!(*log.borrow(), ["b:enter"]);

        m.advance(&mut ctx).unwrap();
        assert_eq!(log.borrow().last().map(String::as_str), Some("b:update"));
    }

    #[test]
    fn test_overlay_drawn_over_scene() {
        let mut m = manager(&Log::default());
        let mut settings = Settings::default();
        let mut scores = HighScores::new();
        let mut ctx = SceneContext::new(0, &mut settings, &mut scores);
        m.request_transition("b", Some(FadeTransition::white(2))).unwrap();
        m.advance(&mut ctx).unwrap();

        let mut r = FrameRecorder::new();
        m.render_frame(&mut r);
        r.present();
        assert_eq!(r.last_overlay(), Some(((255, 255, 255), 2)));
        assert_eq!(r.last_frame().len(), 2);
    }

    #[test]
    fn test_scene_commands_are_applied() {
        let log = Log::default();
        let mut m = manager(&log);
        let mut settings = Settings::default();
        let mut scores = HighScores::new();
        let mut ctx = SceneContext::new(0, &mut settings, &mut scores);

        m.dispatch_input(&InputEvent::KeyDown(Key::Return), &mut ctx)
            .unwrap();
        assert_eq!(m.active_key(), Some("b"));
        assert!(ctx.commands().is_empty());

        m.dispatch_input(&InputEvent::KeyDown(Key::Escape), &mut ctx)
            .unwrap();
        assert!(m.quit_requested());
        assert_eq!(*log.borrow(), ["a:enter", "a:input", "b:enter", "b:input"]);
    }
}
