//! Theme Balls headless demo
//!
//! Runs the background-ball simulation at 60 fps for a number of frames and
//! prints the final snapshot as JSON.
//!
//! Usage: `theme-balls [preset] [frames] [seed]`

use std::process::ExitCode;

use theme_balls::{FrameClock, Preset, Simulation};

const VIEWPORT_WIDTH: f32 = 800.0;
const VIEWPORT_HEIGHT: f32 = 1280.0;
const FRAME_SECONDS: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u32 = 600;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let preset = match args.first() {
        Some(name) => match Preset::from_str(name) {
            Some(p) => p,
            None => {
                log::error!("Unknown preset '{}' (expected daily, score or score_ai)", name);
                return ExitCode::FAILURE;
            }
        },
        None => Preset::default(),
    };
    let frames = match args.get(1).map(|s| s.parse::<u32>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("Invalid frame count: {}", e);
            return ExitCode::FAILURE;
        }
        None => DEFAULT_FRAMES,
    };
    let mut config = preset.config();
    match args.get(2).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => config.seed = Some(seed),
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            return ExitCode::FAILURE;
        }
        None => {}
    }

    let mut sim = match Simulation::with_config(&config) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Running preset '{}' for {} frames (seed {})",
        preset.as_str(),
        frames,
        sim.seed()
    );

    let mut clock = FrameClock::default();
    for _ in 0..frames {
        clock.advance(&mut sim, FRAME_SECONDS, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    }
    log::info!(
        "Done after {} steps, kinetic energy {:.3}",
        sim.steps(),
        sim.total_kinetic_energy()
    );

    match serde_json::to_string_pretty(&sim.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}
