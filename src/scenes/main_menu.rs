//! Title screen over a self-playing board

use glam::IVec2;

use crate::assets::{Assets, GAME_TITLE, MENU_BUTTON_SIZE};
use crate::error::Result;
use crate::platform::{InputEvent, Key, Renderer};
use crate::scene::{FadeTransition, Scene, SceneContext, names};
use crate::sim::{Rect, Sprites};
use crate::ui::{Button, Label};

use super::background::DemoBoard;

const PADDING: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Settings,
    Quit,
}

/// Play, Settings and Quit, stacked down from the left edge's midpoint
pub fn button_rects(bounds: Rect) -> [Rect; 3] {
    let size = IVec2::from(MENU_BUTTON_SIZE);
    std::array::from_fn(|i| {
        let mut rect = Rect::from_size(size);
        rect.set_midleft(IVec2::new(bounds.left(), bounds.center().y));
        rect.translated(IVec2::new(PADDING, i as i32 * (size.y + PADDING)))
    })
}

pub struct MainMenuScene {
    background: DemoBoard,
    sprites: Sprites,
    title: Label,
    buttons: Vec<Button<MenuAction>>,
}

impl MainMenuScene {
    pub fn new(assets: &Assets, bounds: Rect, seed: u64) -> Result<Self> {
        let mut title = Label::from_image(assets.image(GAME_TITLE)?).floating(120, bounds.top());
        title.rect.pos = IVec2::new(
            bounds.center().x - title.rect.size.x / 2,
            bounds.top() + PADDING,
        );

        let actions = [
            ("main_menu/play", MenuAction::Play),
            ("main_menu/settings", MenuAction::Settings),
            ("main_menu/quit", MenuAction::Quit),
        ];
        let mut buttons = Vec::with_capacity(actions.len());
        for ((stem, action), rect) in actions.into_iter().zip(button_rects(bounds)) {
            buttons.push(Button::new(assets.button_faces(stem)?, action).at(rect.pos));
        }

        Ok(Self {
            background: DemoBoard::new(bounds, seed),
            sprites: assets.sprites()?,
            title,
            buttons,
        })
    }

    fn act(action: MenuAction, ctx: &mut SceneContext) {
        log::debug!("Menu action {:?}", action);
        match action {
            MenuAction::Play => {
                ctx.transition_to(names::GAMEPLAY, Some(FadeTransition::white(2)))
            }
            MenuAction::Settings => {
                ctx.transition_to(names::SETTINGS, Some(FadeTransition::white(2)))
            }
            MenuAction::Quit => ctx.quit(),
        }
    }
}

impl Scene for MainMenuScene {
    fn on_enter(&mut self, ctx: &mut SceneContext) {
        self.background.set_bursts(ctx.settings.effective_particles());
    }

    fn update(&mut self, _ctx: &mut SceneContext) {
        self.background.update();
        self.title.update();
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext) {
        if *event == InputEvent::KeyDown(Key::F1) {
            ctx.transition_to(names::DEBUG, None);
            return;
        }
        let fired: Vec<MenuAction> = self
            .buttons
            .iter_mut()
            .filter_map(|b| b.handle_input(event))
            .collect();
        for action in fired {
            Self::act(action, ctx);
        }
    }

    fn draw(&self, r: &mut dyn Renderer) {
        r.fill((0, 0, 80));
        self.background.draw(r, &self.sprites);
        self.title.draw(r);
        for button in &self.buttons {
            button.draw(r);
        }
    }
}
