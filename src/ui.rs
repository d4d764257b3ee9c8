//! Menu widgets: sprite buttons and labels
//!
//! Buttons carry a plain action value instead of a callback. The owning
//! scene matches on what `handle_input` returns.

use glam::IVec2;

use crate::platform::{ImageHandle, InputEvent, MouseButton, Renderer, Rgb};
use crate::sim::Rect;

/// Vertical speed of the floating animation (px per tick)
pub const FLOAT_SPEED: i32 = 3;

/// The three looks of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFaces {
    /// Mouse over the button
    pub on: ImageHandle,
    pub off: ImageHandle,
    /// Left button held over the button
    pub clicked: ImageHandle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Off,
    Hover,
    Pressed,
}

#[derive(Debug, Clone)]
pub struct Button<A> {
    pub rect: Rect,
    faces: ButtonFaces,
    action: A,
    hovered: bool,
    held: bool,
}

impl<A: Copy> Button<A> {
    /// A button at the origin, sized to its "off" face
    pub fn new(faces: ButtonFaces, action: A) -> Self {
        Self {
            rect: Rect::from_size(faces.off.size),
            faces,
            action,
            hovered: false,
            held: false,
        }
    }

    pub fn at(mut self, pos: IVec2) -> Self {
        self.rect.pos = pos;
        self
    }

    pub fn state(&self) -> ButtonState {
        match (self.hovered, self.held) {
            (false, _) => ButtonState::Off,
            (true, false) => ButtonState::Hover,
            (true, true) => ButtonState::Pressed,
        }
    }

    /// Track the pointer. Returns the action when the left button is
    /// released over the button.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<A> {
        match *event {
            InputEvent::MouseMotion(pos) => {
                self.hovered = self.rect.contains_point(pos);
                None
            }
            InputEvent::MouseDown {
                pos,
                button: MouseButton::Left,
            } => {
                self.hovered = self.rect.contains_point(pos);
                self.held = true;
                None
            }
            InputEvent::MouseUp {
                pos,
                button: MouseButton::Left,
            } => {
                self.held = false;
                self.hovered = self.rect.contains_point(pos);
                self.hovered.then_some(self.action)
            }
            _ => None,
        }
    }

    pub fn draw(&self, r: &mut dyn Renderer) {
        let face = match self.state() {
            ButtonState::Off => self.faces.off,
            ButtonState::Hover => self.faces.on,
            ButtonState::Pressed => self.faces.clicked,
        };
        r.draw_image(face, self.rect.pos);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LabelContent {
    Text { text: String, size: u32, colour: Rgb },
    Image(ImageHandle),
}

/// Rough extent of a line of text; glyphs are about half as wide as tall
pub fn text_extent(text: &str, size: u32) -> IVec2 {
    let size = size as i32;
    IVec2::new(text.chars().count() as i32 * size / 2, size)
}

/// Static text or image, optionally bobbing up and down
#[derive(Debug, Clone)]
pub struct Label {
    pub rect: Rect,
    pub content: LabelContent,
    yspeed: i32,
    /// (bottom, top) limits of the float animation
    float: Option<(i32, i32)>,
}

impl Label {
    pub fn from_text(text: impl Into<String>, size: u32, colour: Rgb) -> Self {
        let text = text.into();
        Self {
            rect: Rect::from_size(text_extent(&text, size)),
            content: LabelContent::Text { text, size, colour },
            yspeed: FLOAT_SPEED,
            float: None,
        }
    }

    pub fn from_image(image: ImageHandle) -> Self {
        Self {
            rect: Rect::from_size(image.size),
            content: LabelContent::Image(image),
            yspeed: FLOAT_SPEED,
            float: None,
        }
    }

    /// Float between `y_bottom` and `y_top`, reversing at either limit
    pub fn floating(mut self, y_bottom: i32, y_top: i32) -> Self {
        self.float = Some((y_bottom, y_top));
        self
    }

    /// Replace the text, keeping the label's top-left corner
    pub fn set_text(&mut self, new_text: &str) {
        if let LabelContent::Text { text, size, .. } = &mut self.content {
            if *text != new_text {
                *text = new_text.to_string();
                self.rect.size = text_extent(text.as_str(), *size);
            }
        }
    }

    pub fn update(&mut self) {
        if let Some((y_bottom, y_top)) = self.float {
            if self.rect.bottom() >= y_bottom || self.rect.top() <= y_top {
                self.yspeed = -self.yspeed;
            }
            self.rect.pos.y += self.yspeed;
        }
    }

    pub fn draw(&self, r: &mut dyn Renderer) {
        match &self.content {
            LabelContent::Text { text, size, colour } => {
                r.draw_text(text, self.rect.pos, *size, *colour)
            }
            LabelContent::Image(image) => r.draw_image(*image, self.rect.pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{DrawOp, FrameRecorder};

    fn faces() -> ButtonFaces {
        let image = |id| ImageHandle {
            id,
            size: IVec2::new(100, 30),
        };
        ButtonFaces {
            on: image(1),
            off: image(2),
            clicked: image(3),
        }
    }

    fn up(x: i32, y: i32) -> InputEvent {
        InputEvent::MouseUp {
            pos: IVec2::new(x, y),
            button: MouseButton::Left,
        }
    }

    #[test]
    fn test_button_fires_on_release_inside() {
        let mut button = Button::new(faces(), 7u8).at(IVec2::new(10, 10));
        assert_eq!(button.handle_input(&up(50, 20)), Some(7));
        assert_eq!(button.handle_input(&up(200, 20)), None);
    }

    #[test]
    fn test_right_button_is_ignored() {
        let mut button = Button::new(faces(), ());
        let event = InputEvent::MouseUp {
            pos: IVec2::new(5, 5),
            button: MouseButton::Right,
        };
        assert_eq!(button.handle_input(&event), None);
    }

    #[test]
    fn test_button_faces_follow_pointer() {
        let mut button = Button::new(faces(), ());
        assert_eq!(button.state(), ButtonState::Off);
        button.handle_input(&InputEvent::MouseMotion(IVec2::new(5, 5)));
        assert_eq!(button.state(), ButtonState::Hover);
        button.handle_input(&InputEvent::MouseDown {
            pos: IVec2::new(5, 5),
            button: MouseButton::Left,
        });
        assert_eq!(button.state(), ButtonState::Pressed);

        let mut r = FrameRecorder::new();
        button.draw(&mut r);
        r.present();
        assert_eq!(r.last_frame(), [DrawOp::Image(faces().clicked, IVec2::ZERO)]);
    }

    #[test]
    fn test_floating_label_stays_between_limits() {
        let image = ImageHandle {
            id: 1,
            size: IVec2::new(40, 20),
        };
        let mut label = Label::from_image(image).floating(60, 0);
        label.rect.pos.y = 10;
        for _ in 0..100 {
            label.update();
            assert!(label.rect.top() >= -FLOAT_SPEED);
            assert!(label.rect.bottom() <= 60 + FLOAT_SPEED);
        }
    }

    #[test]
    fn test_static_label_does_not_move() {
        let mut label = Label::from_text("Score: 0", 16, (255, 255, 255));
        label.update();
        assert_eq!(label.rect.pos, IVec2::ZERO);
        assert_eq!(label.rect.size, IVec2::new(64, 16));
        label.set_text("Score: 100");
        assert_eq!(label.rect.size.x, 80);
    }
}
