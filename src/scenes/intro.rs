//! Splash screen with the studio logo

use glam::IVec2;

use crate::assets::{Assets, LOGO_ICON, LOGO_TITLE};
use crate::error::Result;
use crate::platform::Renderer;
use crate::scene::{FadeTransition, Scene, SceneContext, names};
use crate::sim::Rect;
use crate::ui::Label;

/// How long the logo stays up (ms)
pub const INTRO_MS: u64 = 3000;

pub struct IntroScene {
    logo_icon: Label,
    logo_title: Label,
    entered_at: u64,
    done: bool,
}

impl IntroScene {
    pub fn new(assets: &Assets, bounds: Rect) -> Result<Self> {
        let mut logo_icon = Label::from_image(assets.image(LOGO_ICON)?);
        let mut logo_title = Label::from_image(assets.image(LOGO_TITLE)?);
        logo_icon.rect.set_center(bounds.center());
        logo_title
            .rect
            .set_center(bounds.center() + IVec2::new(0, 74));
        Ok(Self {
            logo_icon,
            logo_title,
            entered_at: 0,
            done: false,
        })
    }
}

impl Scene for IntroScene {
    fn on_enter(&mut self, ctx: &mut SceneContext) {
        self.entered_at = ctx.now_ms;
        self.done = false;
    }

    fn update(&mut self, ctx: &mut SceneContext) {
        if !self.done && ctx.now_ms.saturating_sub(self.entered_at) >= INTRO_MS {
            self.done = true;
            ctx.transition_to(names::MAIN_MENU, Some(FadeTransition::black(4)));
        }
    }

    fn draw(&self, r: &mut dyn Renderer) {
        r.fill((255, 255, 255));
        self.logo_icon.draw(r);
        self.logo_title.draw(r);
    }
}
