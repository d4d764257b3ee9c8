//! Sound effects
//!
//! Scenes only name the effect they want; the shell resolves it to a loaded
//! sound and plays it at the volume the settings allow.

use std::collections::HashMap;

use crate::error::Result;
use crate::platform::{AssetLoader, AudioOut, SoundHandle};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits a wall or the paddle
    BallHit,
    /// Ball knocks a target loose
    TargetHit,
    /// A falling target leaves the screen
    Vanish,
    /// Last attempt lost
    GameOver,
    /// Countdown armed
    CountdownBeep,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::BallHit,
        SoundEffect::TargetHit,
        SoundEffect::Vanish,
        SoundEffect::GameOver,
        SoundEffect::CountdownBeep,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            SoundEffect::BallHit => "on_game/soundfx/ball_hit.ogg",
            SoundEffect::TargetHit => "on_game/soundfx/target_hit.wav",
            SoundEffect::Vanish => "on_game/soundfx/vanishing.wav",
            SoundEffect::GameOver => "on_game/soundfx/game_over.wav",
            SoundEffect::CountdownBeep => "on_game/soundfx/countdown_beep.wav",
        }
    }

    /// Mix level of the effect before settings are applied
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundEffect::TargetHit | SoundEffect::Vanish => 1.0,
            _ => 0.2,
        }
    }

    /// Cue for a gameplay event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallHit { .. } | GameEvent::PaddleHit => Some(SoundEffect::BallHit),
            GameEvent::TargetHit { .. } => Some(SoundEffect::TargetHit),
            GameEvent::TargetVanished => Some(SoundEffect::Vanish),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::CountdownStarted => Some(SoundEffect::CountdownBeep),
            _ => None,
        }
    }
}

/// Loaded sounds for the game
pub struct AudioManager {
    sounds: HashMap<SoundEffect, SoundHandle>,
}

impl AudioManager {
    pub fn load(loader: &mut dyn AssetLoader) -> Result<Self> {
        let mut sounds = HashMap::new();
        for effect in SoundEffect::ALL {
            sounds.insert(effect, loader.load_sound(effect.path())?);
        }
        Ok(Self { sounds })
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect, settings: &Settings, out: &mut dyn AudioOut) {
        let vol = settings.effective_volume() * effect.base_volume();
        if vol <= 0.0 {
            return;
        }
        match self.sounds.get(&effect) {
            Some(sound) => out.play(*sound, vol),
            None => log::warn!("No sound loaded for {:?}", effect),
        }
    }

    pub fn play_all(&self, effects: &[SoundEffect], settings: &Settings, out: &mut dyn AudioOut) {
        for effect in effects {
            self.play(*effect, settings, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{AudioLog, BuiltinAssets};

    #[test]
    fn test_muted_settings_play_nothing() {
        let audio = AudioManager::load(&mut BuiltinAssets::new()).unwrap();
        let settings = Settings {
            sound: false,
            ..Default::default()
        };
        let mut out = AudioLog::default();
        audio.play(SoundEffect::BallHit, &settings, &mut out);
        assert!(out.played.is_empty());
    }

    #[test]
    fn test_volume_is_scaled() {
        let audio = AudioManager::load(&mut BuiltinAssets::new()).unwrap();
        let settings = Settings {
            master_volume: 0.5,
            ..Default::default()
        };
        let mut out = AudioLog::default();
        audio.play_all(
            &[SoundEffect::BallHit, SoundEffect::TargetHit],
            &settings,
            &mut out,
        );
        let volumes: Vec<f32> = out.played.iter().map(|(_, v)| *v).collect();
        assert_eq!(volumes, [0.1, 0.5]);
    }

    #[test]
    fn test_event_cues() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PaddleHit),
            Some(SoundEffect::BallHit)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::Recharged), None);
    }
}
