//! The game's screens

mod background;
mod debug;
mod gameplay;
mod intro;
pub mod main_menu;
mod settings_menu;

pub use background::{ColourCycle, DemoBoard};
pub use debug::DebugScene;
pub use gameplay::GameplayScene;
pub use intro::{INTRO_MS, IntroScene};
pub use main_menu::{MainMenuScene, MenuAction};
pub use settings_menu::SettingsScene;
