//! Platform abstraction layer
//!
//! The game never talks to a window, sound card or file system directly.
//! It consumes these collaborators:
//! - `Renderer`: fills, blits, text and the fade overlay
//! - `InputSource`: discrete input events, polled once per frame
//! - `AssetLoader`: images and sounds as opaque handles
//! - `Clock`: milliseconds and frame pacing
//! - `AudioOut`: fire-and-forget sound playback
//!
//! `headless` provides in-memory implementations for the binary and tests.

pub mod headless;

use glam::IVec2;

use crate::error::Result;
use crate::sim::Rect;

pub type Rgb = (u8, u8, u8);

/// A loaded image; the size is known up front for layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub id: u32,
    pub size: IVec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle {
    pub id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    A,
    D,
    P,
    Escape,
    Return,
    Space,
    F1,
    Other(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close requested
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseMotion(IVec2),
    MouseDown { pos: IVec2, button: MouseButton },
    MouseUp { pos: IVec2, button: MouseButton },
}

pub trait Renderer {
    /// Window caption, size and icon. Backends without a window ignore it.
    fn configure_window(&mut self, _caption: &str, _size: IVec2, _icon: Option<ImageHandle>) {}
    fn fill(&mut self, colour: Rgb);
    fn fill_rect(&mut self, rect: Rect, colour: Rgb);
    fn draw_image(&mut self, image: ImageHandle, pos: IVec2);
    fn draw_text(&mut self, text: &str, pos: IVec2, size: u32, colour: Rgb);
    /// Full-screen colour wash at the given opacity
    fn overlay(&mut self, colour: Rgb, alpha: u8);
    fn present(&mut self);
}

pub trait InputSource {
    /// Events gathered since the last poll, oldest first
    fn poll(&mut self) -> Vec<InputEvent>;
}

pub trait AssetLoader {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle>;
    fn load_sound(&mut self, path: &str) -> Result<SoundHandle>;
}

pub trait Clock {
    /// Milliseconds since the clock started
    fn now_ms(&self) -> u64;
    /// Wait for the next frame boundary at `rate` frames per second
    fn tick(&mut self, rate: u32);
}

pub trait AudioOut {
    fn play(&mut self, sound: SoundHandle, volume: f32);
}
