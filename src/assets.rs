//! Image registry
//!
//! Every image the game uses is listed in `IMAGE_MANIFEST` and loaded once
//! at startup. A missing image is fatal.

use std::collections::HashMap;

use glam::IVec2;

use crate::error::{PongError, Result};
use crate::platform::{AssetLoader, ImageHandle};
use crate::sim::Sprites;

pub const ICON: &str = "icon.png";
pub const LOGO_ICON: &str = "game_intro/moura_cat.png";
pub const LOGO_TITLE: &str = "game_intro/logo_title.png";
pub const GAME_TITLE: &str = "main_menu/game_title.png";
pub const BALL: &str = "on_game/ball.png";
pub const PARTICLE: &str = "on_game/particle.png";
pub const TARGET: &str = "on_game/target.png";

/// Size of the main menu buttons
pub const MENU_BUTTON_SIZE: (i32, i32) = (120, 35);

/// Path and pixel size of every image
pub const IMAGE_MANIFEST: &[(&str, (i32, i32))] = &[
    (ICON, (32, 32)),
    (LOGO_ICON, (128, 128)),
    (LOGO_TITLE, (220, 40)),
    (GAME_TITLE, (320, 80)),
    (BALL, (16, 16)),
    (PARTICLE, (4, 4)),
    (TARGET, (32, 32)),
    ("main_menu/play_button_on.png", MENU_BUTTON_SIZE),
    ("main_menu/play_button_off.png", MENU_BUTTON_SIZE),
    ("main_menu/play_button_clicked.png", MENU_BUTTON_SIZE),
    ("main_menu/settings_button_on.png", MENU_BUTTON_SIZE),
    ("main_menu/settings_button_off.png", MENU_BUTTON_SIZE),
    ("main_menu/settings_button_clicked.png", MENU_BUTTON_SIZE),
    ("main_menu/quit_button_on.png", MENU_BUTTON_SIZE),
    ("main_menu/quit_button_off.png", MENU_BUTTON_SIZE),
    ("main_menu/quit_button_clicked.png", MENU_BUTTON_SIZE),
    ("on_settings/easy_button_on.png", (80, 30)),
    ("on_settings/easy_button_off.png", (80, 30)),
    ("on_settings/easy_button_clicked.png", (80, 30)),
    ("on_settings/normal_button_on.png", (80, 30)),
    ("on_settings/normal_button_off.png", (80, 30)),
    ("on_settings/normal_button_clicked.png", (80, 30)),
    ("on_settings/hard_button_on.png", (80, 30)),
    ("on_settings/hard_button_off.png", (80, 30)),
    ("on_settings/hard_button_clicked.png", (80, 30)),
    ("on_settings/sound_button_on.png", (80, 30)),
    ("on_settings/sound_button_off.png", (80, 30)),
    ("on_settings/sound_button_clicked.png", (80, 30)),
    ("on_settings/back_button_on.png", (80, 30)),
    ("on_settings/back_button_off.png", (80, 30)),
    ("on_settings/back_button_clicked.png", (80, 30)),
    ("on_game/retry_button_on.png", (90, 30)),
    ("on_game/retry_button_off.png", (90, 30)),
    ("on_game/retry_button_clicked.png", (90, 30)),
    ("on_game/main_menu_button_on.png", (90, 30)),
    ("on_game/main_menu_button_off.png", (90, 30)),
    ("on_game/main_menu_button_clicked.png", (90, 30)),
    ("on_game/back_button_on.png", (90, 30)),
    ("on_game/back_button_off.png", (90, 30)),
    ("on_game/back_button_clicked.png", (90, 30)),
];

pub fn manifest_size(path: &str) -> Option<IVec2> {
    IMAGE_MANIFEST
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, (w, h))| IVec2::new(*w, *h))
}

/// Loaded image handles, keyed by manifest path
#[derive(Debug, Clone, Default)]
pub struct Assets {
    images: HashMap<&'static str, ImageHandle>,
}

impl Assets {
    pub fn load(loader: &mut dyn AssetLoader) -> Result<Self> {
        let mut images = HashMap::with_capacity(IMAGE_MANIFEST.len());
        for (path, _) in IMAGE_MANIFEST {
            images.insert(*path, loader.load_image(path)?);
        }
        log::info!("Loaded {} images", images.len());
        Ok(Self { images })
    }

    pub fn image(&self, path: &str) -> Result<ImageHandle> {
        self.images
            .get(path)
            .copied()
            .ok_or_else(|| PongError::AssetLoad {
                path: path.to_string(),
                reason: "image was never loaded".to_string(),
            })
    }

    /// The on/off/clicked faces of a button named like `main_menu/play`
    pub fn button_faces(&self, stem: &str) -> Result<crate::ui::ButtonFaces> {
        Ok(crate::ui::ButtonFaces {
            on: self.image(&format!("{stem}_button_on.png"))?,
            off: self.image(&format!("{stem}_button_off.png"))?,
            clicked: self.image(&format!("{stem}_button_clicked.png"))?,
        })
    }

    pub fn sprites(&self) -> Result<Sprites> {
        Ok(Sprites {
            ball: Some(self.image(BALL)?),
            particle: Some(self.image(PARTICLE)?),
            target: Some(self.image(TARGET)?),
        })
    }
}
