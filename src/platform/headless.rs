//! Windowless collaborators
//!
//! Used by the native binary's attract run and by the tests. Nothing here
//! touches real hardware: frames are recorded, input is scripted and time
//! advances one frame per tick unless a wall clock is asked for.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use glam::IVec2;

use super::*;
use crate::assets::manifest_size;
use crate::error::PongError;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill(Rgb),
    Rect(Rect, Rgb),
    Image(ImageHandle, IVec2),
    Text(String, IVec2),
    Overlay(Rgb, u8),
}

/// Renderer that keeps the draw calls of the last presented frame
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pending: Vec<DrawOp>,
    last: Vec<DrawOp>,
    frames: u64,
    pub caption: Option<String>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> &[DrawOp] {
        &self.last
    }

    /// Text drawn in the last frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.last.iter().filter_map(|op| match op {
            DrawOp::Text(t, _) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn last_overlay(&self) -> Option<(Rgb, u8)> {
        self.last.iter().find_map(|op| match op {
            DrawOp::Overlay(c, a) => Some((*c, *a)),
            _ => None,
        })
    }
}

impl Renderer for FrameRecorder {
    fn configure_window(&mut self, caption: &str, _size: IVec2, _icon: Option<ImageHandle>) {
        self.caption = Some(caption.to_string());
    }

    fn fill(&mut self, colour: Rgb) {
        self.pending.push(DrawOp::Fill(colour));
    }

    fn fill_rect(&mut self, rect: Rect, colour: Rgb) {
        self.pending.push(DrawOp::Rect(rect, colour));
    }

    fn draw_image(&mut self, image: ImageHandle, pos: IVec2) {
        self.pending.push(DrawOp::Image(image, pos));
    }

    fn draw_text(&mut self, text: &str, pos: IVec2, _size: u32, _colour: Rgb) {
        self.pending.push(DrawOp::Text(text.to_string(), pos));
    }

    fn overlay(&mut self, colour: Rgb, alpha: u8) {
        self.pending.push(DrawOp::Overlay(colour, alpha));
    }

    fn present(&mut self) {
        self.last = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}

/// Input replayed from a per-frame schedule
#[derive(Debug, Default)]
pub struct ScriptedInput {
    schedule: BTreeMap<u64, Vec<InputEvent>>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` for delivery on `frame`
    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        self.schedule.entry(frame).or_default().push(event);
        self
    }

    /// Hover, press and release the left button at `pos`
    pub fn click(self, frame: u64, pos: IVec2) -> Self {
        let button = MouseButton::Left;
        self.at(frame, InputEvent::MouseMotion(pos))
            .at(frame, InputEvent::MouseDown { pos, button })
            .at(frame + 1, InputEvent::MouseUp { pos, button })
    }

    /// Hold `key` for `frames` frames
    pub fn hold(self, frame: u64, key: Key, frames: u64) -> Self {
        self.at(frame, InputEvent::KeyDown(key))
            .at(frame + frames, InputEvent::KeyUp(key))
    }

    pub fn tap(self, frame: u64, key: Key) -> Self {
        self.hold(frame, key, 1)
    }

    pub fn is_finished(&self) -> bool {
        self.schedule.keys().all(|&f| f < self.frame)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let events = self.schedule.remove(&self.frame).unwrap_or_default();
        self.frame += 1;
        events
    }
}

/// Time that advances exactly one frame per tick
#[derive(Debug, Default)]
pub struct FixedStepClock {
    frames: u64,
    rate: u32,
}

impl FixedStepClock {
    pub fn new(rate: u32) -> Self {
        Self { frames: 0, rate }
    }
}

impl Clock for FixedStepClock {
    fn now_ms(&self) -> u64 {
        if self.rate == 0 {
            return 0;
        }
        self.frames * 1000 / u64::from(self.rate)
    }

    fn tick(&mut self, rate: u32) {
        self.rate = rate;
        self.frames += 1;
    }
}

/// Wall-clock pacing with sleep until the next frame boundary
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
    next_frame: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            next_frame: now,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn tick(&mut self, rate: u32) {
        let frame = Duration::from_secs(1) / rate.max(1);
        self.next_frame += frame;
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
        } else {
            // Fell behind; don't try to catch up
            self.next_frame = now;
        }
    }
}

/// Asset loader backed by the built-in manifest, no files needed
#[derive(Debug, Default)]
pub struct BuiltinAssets {
    next_id: u32,
}

impl BuiltinAssets {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

impl AssetLoader for BuiltinAssets {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle> {
        let size = manifest_size(path).ok_or_else(|| PongError::AssetLoad {
            path: path.to_string(),
            reason: "not in the asset manifest".to_string(),
        })?;
        Ok(ImageHandle {
            id: self.next_id(),
            size,
        })
    }

    fn load_sound(&mut self, _path: &str) -> Result<SoundHandle> {
        Ok(SoundHandle { id: self.next_id() })
    }
}

/// Asset loader that insists every file exists under `root`
#[derive(Debug)]
pub struct DirAssets {
    root: PathBuf,
    inner: BuiltinAssets,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            inner: BuiltinAssets::new(),
        }
    }

    fn check(&self, path: &str) -> Result<()> {
        let full = self.root.join(path);
        if full.is_file() {
            Ok(())
        } else {
            Err(PongError::AssetLoad {
                path: full.display().to_string(),
                reason: "file not found".to_string(),
            })
        }
    }
}

impl AssetLoader for DirAssets {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle> {
        self.check(path)?;
        self.inner.load_image(path)
    }

    fn load_sound(&mut self, path: &str) -> Result<SoundHandle> {
        self.check(path)?;
        self.inner.load_sound(path)
    }
}

/// Audio sink that only remembers what it was asked to play
#[derive(Debug, Default)]
pub struct AudioLog {
    pub played: Vec<(SoundHandle, f32)>,
}

impl AudioOut for AudioLog {
    fn play(&mut self, sound: SoundHandle, volume: f32) {
        log::trace!("play sound {} at {:.2}", sound.id, volume);
        self.played.push((sound, volume));
    }
}
