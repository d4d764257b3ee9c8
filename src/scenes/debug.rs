//! Scratch scene for trying things out. F1 on the main menu opens it.

use crate::platform::{InputEvent, Key, Renderer};
use crate::scene::{Scene, SceneContext, names};
use crate::sim::Rect;

pub struct DebugScene {
    bounds: Rect,
    marker: Rect,
}

impl DebugScene {
    pub fn new(bounds: Rect) -> Self {
        let mut marker = Rect::new(0, 0, 10, 10);
        marker.set_center(bounds.center());
        Self { bounds, marker }
    }
}

impl Scene for DebugScene {
    fn handle_input(&mut self, event: &InputEvent, ctx: &mut SceneContext) {
        if *event == InputEvent::KeyDown(Key::Escape) {
            ctx.transition_to(names::MAIN_MENU, None);
        }
    }

    fn draw(&self, r: &mut dyn Renderer) {
        r.fill_rect(self.bounds, (200, 200, 200));
        r.fill_rect(self.marker, (0, 0, 180));
    }
}
