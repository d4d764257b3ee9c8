//! Difficulty and sound options

use glam::IVec2;

use crate::assets::Assets;
use crate::error::Result;
use crate::platform::{InputEvent, Key, Renderer};
use crate::scene::{FadeTransition, Scene, SceneContext, names};
use crate::settings::{Difficulty, Settings};
use crate::sim::Rect;
use crate::ui::{Button, Label};

const HELP: [&str; 4] = [
    "A / D or the arrow keys move the paddle.",
    "P or Esc pauses the game.",
    "Every target is worth 100 points.",
    "Harder games have a faster ball.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsAction {
    Difficulty(Difficulty),
    ToggleSound,
    Back,
}

pub struct SettingsScene {
    buttons: Vec<Button<SettingsAction>>,
    heading: Label,
    status: Label,
    info_title: Label,
    info: Vec<Label>,
}

impl SettingsScene {
    pub fn new(assets: &Assets, bounds: Rect) -> Result<Self> {
        let mut buttons = Vec::new();
        let row_y = bounds.top() + 20;
        for (stem, difficulty, dx) in [
            ("on_settings/easy", Difficulty::Easy, -85),
            ("on_settings/normal", Difficulty::Normal, 0),
            ("on_settings/hard", Difficulty::Hard, 85),
        ] {
            let faces = assets.button_faces(stem)?;
            let x = bounds.center().x - faces.off.size.x / 2 + dx;
            buttons.push(
                Button::new(faces, SettingsAction::Difficulty(difficulty)).at(IVec2::new(x, row_y)),
            );
        }

        let faces = assets.button_faces("on_settings/sound")?;
        let sound_pos = IVec2::new(
            bounds.center().x - faces.off.size.x / 2,
            row_y + faces.off.size.y + 15,
        );
        buttons.push(Button::new(faces, SettingsAction::ToggleSound).at(sound_pos));

        let mut back = Button::new(
            assets.button_faces("on_settings/back")?,
            SettingsAction::Back,
        );
        back.rect
            .set_bottomright(IVec2::new(bounds.right() - 15, bounds.bottom() - 15));
        buttons.push(back);

        let mut heading = Label::from_text("DIFFICULTY", 24, (170, 0, 0));
        heading.rect.pos = IVec2::new(bounds.left() + 10, row_y + 4);

        let mut status = Label::from_text("", 18, (0, 0, 0));
        status.rect.pos = IVec2::new(bounds.left() + 10, sound_pos.y + 45);

        let mut info_title = Label::from_text("INFO:", 28, (0, 0, 0));
        info_title
            .rect
            .set_midleft(IVec2::new(bounds.left() + 10, bounds.center().y));

        let info = HELP
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let mut label = Label::from_text(*line, 20, (0, 0, 0));
                label.rect.pos = IVec2::new(
                    bounds.left() + 30,
                    info_title.rect.bottom() + 8 + i as i32 * 24,
                );
                label
            })
            .collect();

        Ok(Self {
            buttons,
            heading,
            status,
            info_title,
            info,
        })
    }

    fn refresh(&mut self, settings: &Settings) {
        let sound = if settings.sound { "on" } else { "off" };
        self.status.set_text(&format!(
            "Difficulty: {}   Sound: {}",
            settings.difficulty.as_str(),
            sound
        ));
    }

    fn act(&mut self, action: SettingsAction, ctx: &mut SceneContext) {
        match action {
            SettingsAction::Difficulty(difficulty) => {
                log::info!("Difficulty set to {}", difficulty.as_str());
                ctx.settings.difficulty = difficulty;
            }
            SettingsAction::ToggleSound => {
                ctx.settings.sound = !ctx.settings.sound;
                log::info!("Sound {}", if ctx.settings.sound { "on" } else { "off" });
            }
            SettingsAction::Back => {
                ctx.transition_to(names::MAIN_MENU, Some(FadeTransition::white(4)));
            }
        }
        self.refresh(&*ctx.settings);
    }
}

impl Scene for SettingsScene {
    fn on_enter(&mut self, ctx: &mut SceneContext) {
        self.refresh(&*ctx.settings);
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext) {
        if *event == InputEvent::KeyDown(Key::Escape) {
            self.act(SettingsAction::Back, ctx);
            return;
        }
        let fired: Vec<SettingsAction> = self
            .buttons
            .iter_mut()
            .filter_map(|b| b.handle_input(event))
            .collect();
        for action in fired {
            self.act(action, ctx);
        }
    }

    fn draw(&self, r: &mut dyn Renderer) {
        r.fill((255, 255, 255));
        self.heading.draw(r);
        self.status.draw(r);
        self.info_title.draw(r);
        for label in &self.info {
            label.draw(r);
        }
        for button in &self.buttons {
            button.draw(r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScores;
    use crate::platform::MouseButton;
    use crate::platform::headless::BuiltinAssets;

    const SCREEN: Rect = Rect::new(0, 0, 600, 400);

    fn click(scene: &mut SettingsScene, pos: IVec2, ctx: &mut SceneContext) {
        let button = MouseButton::Left;
        scene.handle_input(&InputEvent::MouseDown { pos, button }, ctx);
        scene.handle_input(&InputEvent::MouseUp { pos, button }, ctx);
    }

    #[test]
    fn test_buttons_edit_live_settings() {
        let assets = Assets::load(&mut BuiltinAssets::new()).unwrap();
        let mut scene = SettingsScene::new(&assets, SCREEN).unwrap();
        let mut settings = Settings::default();
        let mut scores = HighScores::new();
        let mut ctx = SceneContext::new(0, &mut settings, &mut scores);
        scene.on_enter(&mut ctx);

        let hard = scene.buttons[2].rect.center();
        let sound = scene.buttons[3].rect.center();
        click(&mut scene, hard, &mut ctx);
        click(&mut scene, sound, &mut ctx);
        assert!(ctx.commands().is_empty());
        assert_eq!(ctx.settings.difficulty, Difficulty::Hard);
        assert!(!ctx.settings.sound);

        let back = scene.buttons[4].rect.center();
        click(&mut scene, back, &mut ctx);
        assert_eq!(ctx.commands().len(), 1);
    }

    #[test]
    fn test_buttons_fit_on_screen() {
        let assets = Assets::load(&mut BuiltinAssets::new()).unwrap();
        let scene = SettingsScene::new(&assets, SCREEN).unwrap();
        for (i, a) in scene.buttons.iter().enumerate() {
            assert!(a.rect.left() >= 0 && a.rect.right() <= 600);
            for b in &scene.buttons[i + 1..] {
                assert!(!a.rect.intersects(&b.rect));
            }
        }
    }
}
