//! Brick Pong entry point
//!
//! There is no window backend in-tree, so the binary plays a scripted
//! attract run against the headless collaborators: it sits through the
//! intro, clicks Play, moves the paddle, pauses, and quits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::IVec2;

use brick_pong::consts::*;
use brick_pong::platform::headless::{
    AudioLog, BuiltinAssets, DirAssets, FixedStepClock, FrameRecorder, ScriptedInput, SystemClock,
};
use brick_pong::platform::{AssetLoader, Clock, InputEvent, Key};
use brick_pong::scenes::main_menu::button_rects;
use brick_pong::sim::Rect;
use brick_pong::{Backend, Difficulty, Game, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pong with a wall of targets", long_about = None)]
struct Args {
    /// Stop after this many frames even if the script has not quit yet
    #[arg(long)]
    frames: Option<u64>,
    /// Seed for target colours, sparks and backgrounds
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Pace frames with the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Settings JSON to start with
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Difficulty to play at (easy, normal, hard); overrides the settings file
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
    /// Directory the image and sound files must exist under
    #[arg(long)]
    assets: Option<PathBuf>,
}

/// Frame schedule of the attract run at 60 fps. The intro and its fade
/// are over by frame 310; the white fade into the game and the countdown
/// are over by frame 770.
fn attract_script(bounds: Rect) -> ScriptedInput {
    let [play, _, _] = button_rects(bounds);
    ScriptedInput::new()
        .click(330, play.center())
        .hold(800, Key::D, 40)
        .hold(860, Key::A, 60)
        .tap(960, Key::P)
        .tap(1020, Key::P)
        .hold(1030, Key::Right, 30)
        .at(1200, InputEvent::Quit)
}

fn parse_difficulty(s: &str) -> std::result::Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty {:?}", s))
}

fn run<C: Clock>(game: &mut Game, clock: C, max_frames: Option<u64>) -> Result<u64> {
    let bounds = Rect::from_size(IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut backend = Backend {
        renderer: FrameRecorder::new(),
        input: attract_script(bounds),
        clock,
        audio: AudioLog::default(),
    };
    let frames = game.run(&mut backend, max_frames)?;
    log::info!(
        "{} sounds played, last frame had {} draw calls",
        backend.audio.played.len(),
        backend.renderer.last_frame().len()
    );
    Ok(frames)
}

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("load settings {:?}", path))?,
        None => Settings::default(),
    };
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty;
    }
    log::debug!("Settings: {}", settings.to_json()?);

    let mut loader: Box<dyn AssetLoader> = match &args.assets {
        Some(dir) => Box::new(DirAssets::new(dir)),
        None => Box::new(BuiltinAssets::new()),
    };
    let mut game =
        Game::new(settings, loader.as_mut(), args.seed).context("start game")?;

    log::info!("Brick Pong starting (seed {})", args.seed);
    let frames = if args.realtime {
        run(&mut game, SystemClock::new(), args.frames)?
    } else {
        run(&mut game, FixedStepClock::new(FRAME_RATE), args.frames)?
    };

    log::info!(
        "Finished after {} frames on scene {:?}, best score {:?}",
        frames,
        game.scenes().active_key(),
        game.high_scores().best()
    );
    Ok(())
}
