//! Rice Rocks headless entry point
//!
//! Plays a short scripted session through the frame driver, routing audio
//! cues and draw calls to logging backends. Run with `RUST_LOG=debug` (or
//! `trace` for draw calls) to follow along. An optional first argument
//! names a JSON settings file.

use std::path::PathBuf;
use std::process::ExitCode;

use rice_rocks::audio::{AudioManager, LogAudio};
use rice_rocks::platform::{FrameDriver, Key, KeyMap};
use rice_rocks::renderer::{TraceCanvas, draw_frame};
use rice_rocks::sim::{InputEvent, Session};
use rice_rocks::{ConfigError, Settings};

/// Frames to simulate (about ten seconds at 60 Hz)
const DEMO_FRAMES: u32 = 600;
const FRAME_DT: f32 = 1.0 / 60.0;
const DEMO_SEED: u64 = 0x5EED_2013;

/// Scripted key transitions, keyed by frame number
const SCRIPT: &[(u32, Key, bool)] = &[
    (30, Key::Up, true),
    (90, Key::Up, false),
    (100, Key::Left, true),
    (130, Key::Left, false),
    (140, Key::Space, true),
    (141, Key::Space, false),
    (200, Key::Right, true),
    (260, Key::Right, false),
    (270, Key::Space, true),
    (271, Key::Space, false),
    (330, Key::Up, true),
    (400, Key::Up, false),
];

fn load_settings() -> Result<Settings, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Ok(Settings::default()),
    }
}

fn run() -> Result<(), ConfigError> {
    let settings = load_settings()?;
    let mut audio = AudioManager::new(LogAudio, &settings);
    let mut session = Session::new(settings, DEMO_SEED)?;
    log::info!("Session created with seed {:#x}", DEMO_SEED);

    let keys = KeyMap::default();
    let mut driver = FrameDriver::default();
    let mut canvas = TraceCanvas;

    let center = session.bounds().center();
    driver.push_input(InputEvent::Click(center));

    for frame in 0..DEMO_FRAMES {
        for &(_, key, down) in SCRIPT.iter().filter(|(f, _, _)| *f == frame) {
            let event = if down {
                keys.key_down(key)
            } else {
                keys.key_up(key)
            };
            if let Some(event) = event {
                driver.push_input(event);
            }
        }

        let report = driver.advance(&mut session, FRAME_DT);
        audio.handle_all(&report.events);
        draw_frame(&session, &mut canvas);
    }

    let snapshot = session.snapshot();
    match serde_json::to_string(&snapshot) {
        Ok(json) => log::info!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Rice Rocks (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
