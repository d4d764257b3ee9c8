//! Game settings and preferences
//!
//! Edited live from the settings screen. A JSON file can seed them at
//! startup; nothing is written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PongError, Result};
use crate::sim::SessionConfig;

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Ball speed in pixels per tick on each axis
    pub fn ball_speed(&self) -> i32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Paddle speed in pixels per tick
    pub fn paddle_speed(&self) -> i32 {
        match self {
            Difficulty::Easy | Difficulty::Normal => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,

    // === Audio ===
    /// Sound effects on/off
    pub sound: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Accessibility ===
    /// Reduced motion (no collision sparks)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            sound: true,
            master_volume: 1.0,
            sfx_volume: 1.0,
            reduced_motion: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PongError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Collision sparks (respects reduced_motion)
    pub fn effective_particles(&self) -> bool {
        !self.reduced_motion
    }

    /// Volume applied to sound effects, zero when sound is off
    pub fn effective_volume(&self) -> f32 {
        if self.sound {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Tuning for a new play session
    pub fn session_config(&self, seed: u64) -> SessionConfig {
        SessionConfig {
            ball_speed: self.difficulty.ball_speed(),
            paddle_speed: self.difficulty.paddle_speed(),
            particles: self.effective_particles(),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "difficulty": "Hard" }"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert!(settings.sound);
    }

    #[test]
    fn test_json_keeps_every_field() {
        let settings = Settings {
            difficulty: Difficulty::Easy,
            sound: false,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"Easy\""));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ difficulty: "),
            Err(PongError::Settings(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from(Path::new("/no/such/settings.json")).unwrap_err();
        assert!(matches!(err, PongError::Io { .. }));
    }

    #[test]
    fn test_muted_volume_is_zero() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_volume(), 1.0);
        settings.sound = false;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_session_config_follows_difficulty() {
        let settings = Settings {
            difficulty: Difficulty::Easy,
            reduced_motion: true,
            ..Default::default()
        };
        let config = settings.session_config(9);
        assert_eq!(config.ball_speed, 1);
        assert!(!config.particles);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_difficulty_names() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), None);
    }
}
